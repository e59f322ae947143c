use soroban_sdk::{Address, Env};
use crate::storage;
use crate::types::{Ownership, PresaleConfig, PresaleError};

// ============================================================================
// VALIDAÇÕES (CHECKS do padrão CEI)
// ============================================================================

/// Valida se o caller é o owner ativo. Após renounce, sempre falha.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), PresaleError> {
    match storage::get_ownership(env)? {
        Ownership::Active(owner) if &owner == caller => Ok(()),
        _ => Err(PresaleError::Unauthorized),
    }
}

/// Não existe endereço zero no Soroban: o próprio contrato faz esse papel,
/// já que nunca consegue assinar uma chamada de owner.
pub fn require_valid_owner(env: &Env, new_owner: &Address) -> Result<(), PresaleError> {
    if new_owner == &env.current_contract_address() {
        return Err(PresaleError::InvalidOwner);
    }
    Ok(())
}

/// Valida se a janela de depósito ainda está aberta
pub fn require_round_open(env: &Env, config: &PresaleConfig) -> Result<(), PresaleError> {
    if env.ledger().timestamp() >= config.deposit_window_end {
        return Err(PresaleError::RoundClosed);
    }
    Ok(())
}

/// Valida se o amount é válido (> 0)
pub fn require_positive_amount(amount: i128) -> Result<(), PresaleError> {
    if amount <= 0 {
        return Err(PresaleError::InvalidAmount);
    }
    Ok(())
}

/// Valida parâmetros da rodada
pub fn require_valid_config(config: &PresaleConfig) -> Result<(), PresaleError> {
    if config.vesting_duration == 0 {
        return Err(PresaleError::InvalidConfig);
    }
    Ok(())
}

/// Executa `f` com o guard de reentrância travado.
/// Em caso de erro o host desfaz o estado da invocação, guard incluso.
pub fn with_reentrancy_guard<T>(
    env: &Env,
    f: impl FnOnce() -> Result<T, PresaleError>,
) -> Result<T, PresaleError> {
    if storage::is_reentrancy_locked(env) {
        return Err(PresaleError::Reentrant);
    }
    storage::set_reentrancy_guard(env, true);

    let result = f();

    storage::set_reentrancy_guard(env, false);
    result
}
