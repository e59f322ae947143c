use crate::events;
use crate::storage;
use crate::types::{Ownership, PresaleError};
use crate::validation;
use soroban_sdk::{Address, Env};

// ============================================================================
// ADMIN OPS - OWNERSHIP E CONFIGURAÇÃO DO POOL
// ============================================================================

/// Transfere o ownership para `new_owner`.
/// Ordem dos checks: primeiro autorização, depois validade do novo owner.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), PresaleError> {
    // CHECKS
    caller.require_auth();
    storage::bump_critical_storage(env);
    validation::require_owner(env, caller)?;
    validation::require_valid_owner(env, new_owner)?;

    // EFFECTS
    storage::set_ownership(env, &Ownership::Active(new_owner.clone()));

    events::emit_ownership_transferred(env, caller, new_owner);
    Ok(())
}

/// Renuncia o ownership. Estado terminal: nenhuma operação de owner
/// volta a funcionar depois disso.
pub fn renounce_ownership(env: &Env, caller: &Address) -> Result<(), PresaleError> {
    caller.require_auth();
    storage::bump_critical_storage(env);
    validation::require_owner(env, caller)?;

    storage::set_ownership(env, &Ownership::Renounced);

    events::emit_ownership_renounced(env, caller);
    Ok(())
}

/// Fixa o token emitido (uma única vez).
pub fn set_issued_token(env: &Env, caller: &Address, token: &Address) -> Result<(), PresaleError> {
    caller.require_auth();
    storage::bump_critical_storage(env);
    validation::require_owner(env, caller)?;

    if storage::get_issued_token(env).is_some() {
        return Err(PresaleError::AlreadySet);
    }

    storage::set_issued_token(env, token);

    events::emit_issued_token_set(env, token);
    Ok(())
}
