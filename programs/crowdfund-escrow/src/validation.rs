//! Checks shared by every instruction. Each one either passes or aborts the
//! whole instruction, so no partial write is ever committed.

use anchor_lang::prelude::*;

use crate::error::EscrowError;

/// Rejects empty text and text longer than `max_len` bytes.
pub fn validate_text(value: &str, max_len: usize) -> Result<()> {
    require!(!value.is_empty(), EscrowError::InvalidInput);
    require!(value.len() <= max_len, EscrowError::InvalidInput);
    Ok(())
}

pub fn validate_amount(amount: u64) -> Result<()> {
    require!(amount > 0, EscrowError::InvalidInput);
    Ok(())
}

/// Addition on a running total. Never wraps.
pub fn checked_total(total: u64, amount: u64) -> Result<u64> {
    total
        .checked_add(amount)
        .ok_or_else(|| error!(EscrowError::ArithmeticOverflow))
}

pub fn threshold_reached(amount_donated: u64, target_amount: u64) -> bool {
    amount_donated >= target_amount
}

/// The signer must be exactly the identity recorded on the account.
pub fn require_authority(signer: &Pubkey, expected: &Pubkey) -> Result<()> {
    require_keys_eq!(*signer, *expected, EscrowError::Unauthorized);
    Ok(())
}

/// Identities stored on records must be real keys, never the zeroed default.
pub fn require_identity(key: &Pubkey) -> Result<()> {
    require_keys_neq!(*key, Pubkey::default(), EscrowError::InvalidInput);
    Ok(())
}
