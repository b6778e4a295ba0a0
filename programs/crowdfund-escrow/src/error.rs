use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Global config is already initialized")]
    AlreadyInitialized,

    #[msg("A campaign with this creator and name already exists")]
    AddressAlreadyInUse,

    #[msg("Unauthorized - signer does not hold the required authority")]
    Unauthorized,

    #[msg("Token mint does not match the campaign mint")]
    MintMismatch,

    #[msg("Insufficient token balance")]
    InsufficientFunds,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Campaign funding threshold has not been reached")]
    ThresholdNotReached,

    #[msg("Invalid input - empty or oversized text, or non-positive amount")]
    InvalidInput,

    #[msg("New admin must differ from the current admin")]
    AdminUnchanged,
}
