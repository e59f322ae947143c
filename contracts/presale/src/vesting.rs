use soroban_sdk::{Env, U256};
use crate::types::{PresaleConfig, PresaleError};

// ============================================================================
// VESTING LINEAR
// ============================================================================

/// Fração liberada do pool: `elapsed / duration`, sempre em [0, 1].
/// Mantida como racional exato; o arredondamento acontece uma única vez,
/// no cálculo do entitlement.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VestedFraction {
    pub elapsed: u64,
    pub duration: u64,
}

impl VestedFraction {
    pub fn is_zero(&self) -> bool {
        self.elapsed == 0
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Função pura do tempo. `vesting_duration > 0` é garantido no initialize.
/// A janela pode terminar depois do início do vesting; nesse caso o elapsed
/// continua contado a partir de `vesting_start`.
pub fn vested_fraction(config: &PresaleConfig, now: u64) -> VestedFraction {
    let duration = config.vesting_duration;

    // Antes do início, ou com a janela de depósito ainda aberta, nada é
    // liberado: o total depositado ainda pode crescer
    if now < config.vesting_start || now < config.deposit_window_end {
        return VestedFraction { elapsed: 0, duration };
    }

    // Sem somar start + duration: evita overflow com timestamps altos
    let elapsed = (now - config.vesting_start).min(duration);

    VestedFraction { elapsed, duration }
}

/// floor(pool * deposited * elapsed / (total_deposited * duration))
///
/// Intermediários em 256 bits: `pool * deposited` já estoura i128 com
/// valores de 18 casas decimais.
pub fn entitlement(
    env: &Env,
    pool: i128,
    deposited: i128,
    total_deposited: i128,
    fraction: VestedFraction,
) -> Result<i128, PresaleError> {
    if pool <= 0 || deposited <= 0 || total_deposited <= 0 || fraction.is_zero() {
        return Ok(0);
    }
    if deposited > total_deposited {
        return Err(PresaleError::MathOverflow);
    }

    let elapsed = fraction.elapsed.min(fraction.duration);

    let numerator = U256::from_u128(env, pool as u128)
        .mul(&U256::from_u128(env, deposited as u128))
        .mul(&U256::from_u128(env, elapsed as u128));

    let denominator = U256::from_u128(env, total_deposited as u128)
        .mul(&U256::from_u128(env, fraction.duration as u128));

    let vested = numerator
        .div(&denominator)
        .to_u128()
        .ok_or(PresaleError::MathOverflow)?;

    i128::try_from(vested).map_err(|_| PresaleError::MathOverflow)
}

/// Quanto ainda pode ser sacado; nunca negativo.
pub fn claimable_delta(entitled: i128, claimed: i128) -> i128 {
    entitled.saturating_sub(claimed).max(0)
}
