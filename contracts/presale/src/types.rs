use soroban_sdk::{contracterror, contracttype, Address};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PresaleError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    RoundClosed = 4,
    InvalidAmount = 5,
    InvalidOwner = 6,
    AlreadySet = 7,
    TransferFailed = 8,
    InvalidConfig = 9,
    MathOverflow = 10,

    // Chamada reentrante em função protegida pelo guard
    Reentrant = 11,
}

// ============================================================================
// CONFIGURAÇÃO DA RODADA (imutável após initialize)
// ============================================================================

/// Tempos em segundos unix (`env.ledger().timestamp()`).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresaleConfig {
    pub deposit_window_end: u64,
    pub vesting_start: u64,
    pub vesting_duration: u64,
    pub payment_token: Address,
    pub treasury: Address,
}

// ============================================================================
// ALOCAÇÃO POR INVESTIDOR
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AllocationRecord {
    pub deposited: i128,
    pub claimed: i128,
}

// ============================================================================
// OWNERSHIP
// ============================================================================

/// Renounced é terminal: nenhuma transição sai dele.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Ownership {
    Active(Address),
    Renounced,
}

impl Ownership {
    pub fn owner(&self) -> Option<Address> {
        match self {
            Ownership::Active(owner) => Some(owner.clone()),
            Ownership::Renounced => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    #[test]
    fn test_error_ordering() {
        assert!(PresaleError::AlreadyInitialized < PresaleError::NotInitialized);
        assert!(PresaleError::RoundClosed < PresaleError::InvalidAmount);
        assert!(PresaleError::MathOverflow < PresaleError::Reentrant);
    }

    #[test]
    fn test_error_values() {
        assert_eq!(PresaleError::AlreadyInitialized as u32, 1);
        assert_eq!(PresaleError::Unauthorized as u32, 3);
        assert_eq!(PresaleError::TransferFailed as u32, 8);
        assert_eq!(PresaleError::Reentrant as u32, 11);
    }

    #[test]
    fn test_ownership_owner() {
        let env = Env::default();
        let addr = Address::generate(&env);

        assert_eq!(Ownership::Active(addr.clone()).owner(), Some(addr));
        assert_eq!(Ownership::Renounced.owner(), None);
    }

    #[test]
    fn test_allocation_record_default() {
        let record = AllocationRecord::default();
        assert_eq!(record.deposited, 0);
        assert_eq!(record.claimed, 0);
    }
}
