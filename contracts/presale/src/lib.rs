#![no_std]

pub mod admin;
pub mod events;
pub mod presale;
pub mod storage;
pub mod types;
pub mod validation;
pub mod vesting;

// ============================================================================
// CONTRATO PRINCIPAL
// ============================================================================

pub use presale::{Presale, PresaleClient};
pub use types::*;
