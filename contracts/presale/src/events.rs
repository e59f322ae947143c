use soroban_sdk::{Address, Env, symbol_short};

//
// EVENTOS DA PRESALE
//

// Rodada inicializada
pub fn emit_initialized(env: &Env, owner: &Address, deposit_window_end: u64) {
    env.events().publish(
        (symbol_short!("init"), owner),
        deposit_window_end,
    );
}

// Depósito (funder pode ser diferente do beneficiário)
pub fn emit_deposit(env: &Env, funder: &Address, beneficiary: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("deposit"), funder, beneficiary),
        amount,
    );
}

// Claim de tokens vestidos
pub fn emit_claim(env: &Env, investor: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("claim"), investor),
        amount,
    );
}

// Token emitido configurado
pub fn emit_issued_token_set(env: &Env, token: &Address) {
    env.events().publish(
        (symbol_short!("iss_set"),),
        token.clone(),
    );
}

// Pool fixado no primeiro claim
pub fn emit_pool_pinned(env: &Env, pool: i128) {
    env.events().publish(
        (symbol_short!("pool_pin"),),
        pool,
    );
}

// Ownership transferido
pub fn emit_ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("own_xfer"), previous),
        new_owner.clone(),
    );
}

// Ownership renunciado (terminal)
pub fn emit_ownership_renounced(env: &Env, previous: &Address) {
    env.events().publish(
        (symbol_short!("own_renc"), previous),
        true,
    );
}

//
// TESTES
//
