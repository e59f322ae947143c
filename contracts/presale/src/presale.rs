use soroban_sdk::{contract, contractimpl, log, token, Address, Env};
use crate::admin;
use crate::events;
use crate::storage;
use crate::types::{AllocationRecord, Ownership, PresaleConfig, PresaleError};
use crate::validation;
use crate::vesting;

//
// CONTRATO PRINCIPAL - PRESALE
//

#[contract]
pub struct Presale;

#[contractimpl]
impl Presale {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa a rodada.
    ///
    /// # Parâmetros
    /// - `owner`: Endereço do owner inicial
    /// - `config`: janela de depósito, vesting, token de pagamento e treasury
    ///
    /// # Erros
    /// - `AlreadyInitialized`: Se o contrato já foi inicializado
    /// - `InvalidConfig`: Se `vesting_duration == 0`
    pub fn initialize(
        env: Env,
        owner: Address,
        config: PresaleConfig,
    ) -> Result<(), PresaleError> {
        // CHECKS
        if storage::is_initialized(&env) {
            return Err(PresaleError::AlreadyInitialized);
        }
        validation::require_valid_config(&config)?;

        // EFFECTS
        storage::set_ownership(&env, &Ownership::Active(owner.clone()));
        storage::set_config(&env, &config);
        storage::set_total_deposited(&env, 0);
        storage::set_total_claimed(&env, 0);
        storage::set_reentrancy_guard(&env, false);
        storage::bump_critical_storage(&env);

        events::emit_initialized(&env, &owner, config.deposit_window_end);

        Ok(())
    }

    //
    // DEPÓSITOS - CEI PATTERN
    //

    /// Deposita `amount` do token de pagamento em nome de `beneficiary`.
    /// O `funder` paga e assina; a alocação vai para o beneficiário.
    ///
    /// # Padrão CEI:
    /// 1. CHECKS: auth, janela aberta, amount > 0
    /// 2. EFFECTS: alocação e total depositado
    /// 3. INTERACTIONS: transferência funder -> treasury
    ///
    /// Se a transferência falhar o erro desfaz toda a invocação.
    pub fn deposit_for(
        env: Env,
        funder: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<(), PresaleError> {
        validation::with_reentrancy_guard(&env, || {
            // === CHECKS ===
            funder.require_auth();
            storage::bump_critical_storage(&env);

            let config = storage::get_config(&env)?;
            validation::require_round_open(&env, &config)?;
            validation::require_positive_amount(amount)?;

            // === EFFECTS ===
            let mut record = storage::get_allocation(&env, &beneficiary);
            record.deposited = record
                .deposited
                .checked_add(amount)
                .ok_or(PresaleError::MathOverflow)?;

            let total = storage::get_total_deposited(&env)
                .checked_add(amount)
                .ok_or(PresaleError::MathOverflow)?;

            storage::set_allocation(&env, &beneficiary, &record);
            storage::set_total_deposited(&env, total);

            // === INTERACTIONS ===
            Self::pay(&env, &config.payment_token, &funder, &config.treasury, amount)?;
            events::emit_deposit(&env, &funder, &beneficiary, amount);

            Ok(())
        })
    }

    //
    // CLAIMS
    //

    /// Retorna `(claimable_now, claimed_so_far)` do investidor.
    /// Sem token emitido configurado retorna `(0, 0)`.
    pub fn calculate_claimable(env: Env, investor: Address) -> Result<(i128, i128), PresaleError> {
        storage::bump_critical_storage(&env);
        storage::bump_allocation(&env, &investor);

        let config = storage::get_config(&env)?;
        let record = storage::get_allocation(&env, &investor);

        let issued = match storage::get_issued_token(&env) {
            Some(issued) => issued,
            None => return Ok((0, record.claimed)),
        };

        let fraction = vesting::vested_fraction(&config, env.ledger().timestamp());
        let pool = match storage::get_pool_snapshot(&env) {
            Some(pool) => pool,
            None => Self::live_pool(&env, &issued)?,
        };

        let claimable = Self::claimable(&env, pool, &record, fraction)?;
        Ok((claimable, record.claimed))
    }

    /// Transfere ao investidor tudo que já foi liberado e ainda não sacado.
    /// Qualquer um pode chamar; os tokens sempre vão para `investor`.
    /// Nada a liberar não é erro: retorna 0.
    pub fn claim_for(env: Env, investor: Address) -> Result<i128, PresaleError> {
        validation::with_reentrancy_guard(&env, || {
            // === CHECKS ===
            storage::bump_critical_storage(&env);

            let config = storage::get_config(&env)?;
            let issued = match storage::get_issued_token(&env) {
                Some(issued) => issued,
                None => {
                    log!(&env, "claim_for: token emitido ainda nao configurado", investor);
                    return Ok(0);
                }
            };

            let fraction = vesting::vested_fraction(&config, env.ledger().timestamp());
            let pool = Self::pinned_pool(&env, &issued, fraction)?;

            let mut record = storage::get_allocation(&env, &investor);
            let claimable = Self::claimable(&env, pool, &record, fraction)?;

            if claimable == 0 {
                log!(&env, "claim_for: nada a liberar", investor);
                return Ok(0);
            }

            // === EFFECTS ===
            // claimed é atualizado antes da transferência
            record.claimed = record
                .claimed
                .checked_add(claimable)
                .ok_or(PresaleError::MathOverflow)?;

            let total_claimed = storage::get_total_claimed(&env)
                .checked_add(claimable)
                .ok_or(PresaleError::MathOverflow)?;

            storage::set_allocation(&env, &investor, &record);
            storage::set_total_claimed(&env, total_claimed);

            // === INTERACTIONS ===
            Self::pay(&env, &issued, &env.current_contract_address(), &investor, claimable)?;
            events::emit_claim(&env, &investor, claimable);

            Ok(claimable)
        })
    }

    //
    // FUNÇÕES ADMINISTRATIVAS
    //

    /// Fixa o token emitido (apenas owner, uma única vez).
    pub fn set_issued_token(env: Env, caller: Address, token: Address) -> Result<(), PresaleError> {
        validation::with_reentrancy_guard(&env, || {
            admin::set_issued_token(&env, &caller, &token)
        })
    }

    /// Transfere o ownership (apenas owner).
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), PresaleError> {
        validation::with_reentrancy_guard(&env, || {
            admin::transfer_ownership(&env, &caller, &new_owner)
        })
    }

    /// Renuncia o ownership (apenas owner). Irreversível.
    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), PresaleError> {
        validation::with_reentrancy_guard(&env, || {
            admin::renounce_ownership(&env, &caller)
        })
    }

    //
    // FUNÇÕES DE LEITURA
    //

    /// Owner atual; `None` depois do renounce (ou antes do initialize).
    pub fn owner(env: Env) -> Option<Address> {
        storage::bump_critical_storage(&env);
        storage::get_ownership(&env).ok().and_then(|o| o.owner())
    }

    pub fn ownership(env: Env) -> Result<Ownership, PresaleError> {
        storage::bump_critical_storage(&env);
        storage::get_ownership(&env)
    }

    pub fn config(env: Env) -> Result<PresaleConfig, PresaleError> {
        storage::bump_critical_storage(&env);
        storage::get_config(&env)
    }

    pub fn issued_token(env: Env) -> Option<Address> {
        storage::bump_critical_storage(&env);
        storage::get_issued_token(&env)
    }

    /// Total depositado pelo (ou em nome do) investidor.
    pub fn allocation(env: Env, investor: Address) -> i128 {
        storage::bump_allocation(&env, &investor);
        storage::get_allocation(&env, &investor).deposited
    }

    pub fn claimed(env: Env, investor: Address) -> i128 {
        storage::bump_allocation(&env, &investor);
        storage::get_allocation(&env, &investor).claimed
    }

    pub fn total_deposited(env: Env) -> i128 {
        storage::bump_critical_storage(&env);
        storage::get_total_deposited(&env)
    }

    pub fn total_claimed(env: Env) -> i128 {
        storage::bump_critical_storage(&env);
        storage::get_total_claimed(&env)
    }

    pub fn pool_snapshot(env: Env) -> Option<i128> {
        storage::bump_critical_storage(&env);
        storage::get_pool_snapshot(&env)
    }

    /// `(elapsed, duration)` do vesting no timestamp atual.
    pub fn vesting_progress(env: Env) -> Result<(u64, u64), PresaleError> {
        storage::bump_critical_storage(&env);
        let config = storage::get_config(&env)?;
        let fraction = vesting::vested_fraction(&config, env.ledger().timestamp());
        Ok((fraction.elapsed, fraction.duration))
    }
}

//
// HELPERS INTERNOS (fora do contractimpl, não exportados)
//

impl Presale {
    fn claimable(
        env: &Env,
        pool: i128,
        record: &AllocationRecord,
        fraction: vesting::VestedFraction,
    ) -> Result<i128, PresaleError> {
        let total_deposited = storage::get_total_deposited(env);
        let entitled = vesting::entitlement(env, pool, record.deposited, total_deposited, fraction)?;
        Ok(vesting::claimable_delta(entitled, record.claimed))
    }

    /// Saldo do contrato + tudo já sacado.
    fn live_pool(env: &Env, issued: &Address) -> Result<i128, PresaleError> {
        let client = token::Client::new(env, issued);
        let balance = match client.try_balance(&env.current_contract_address()) {
            Ok(Ok(balance)) => balance,
            _ => return Err(PresaleError::TransferFailed),
        };

        balance
            .checked_add(storage::get_total_claimed(env))
            .ok_or(PresaleError::MathOverflow)
    }

    /// Pool fixado uma única vez: no primeiro claim a partir do início do
    /// vesting com pool não vazio. Depósitos posteriores de token emitido
    /// não alteram o que já foi calculado.
    fn pinned_pool(
        env: &Env,
        issued: &Address,
        fraction: vesting::VestedFraction,
    ) -> Result<i128, PresaleError> {
        if let Some(pool) = storage::get_pool_snapshot(env) {
            return Ok(pool);
        }

        let pool = Self::live_pool(env, issued)?;
        if !fraction.is_zero() && pool > 0 {
            storage::set_pool_snapshot(env, pool);
            log!(env, "pool fixado", pool);
            events::emit_pool_pinned(env, pool);
        }
        Ok(pool)
    }

    fn pay(
        env: &Env,
        token_address: &Address,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), PresaleError> {
        let client = token::Client::new(env, token_address);
        match client.try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(PresaleError::TransferFailed),
        }
    }
}

//
// TESTES UNITÁRIOS
//
