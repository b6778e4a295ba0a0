//! Token movement between donor, escrow and creator balances.
//!
//! Every transfer is checked up front (mint binding, sufficient balance) and
//! then handed to the SPL token program as a single `transfer` CPI, which
//! either moves the full amount or fails the instruction.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::EscrowError;
use crate::state::Campaign;

pub fn ensure_mint(account_mint: &Pubkey, campaign_mint: &Pubkey) -> Result<()> {
    require_keys_eq!(*account_mint, *campaign_mint, EscrowError::MintMismatch);
    Ok(())
}

pub fn ensure_balance(available: u64, amount: u64) -> Result<()> {
    require!(available >= amount, EscrowError::InsufficientFunds);
    Ok(())
}

/// Moves `amount` from a donor-owned token account into the campaign escrow.
/// The donor signs the transfer.
pub fn deposit<'info>(
    token_program: &Program<'info, Token>,
    source: &Account<'info, TokenAccount>,
    escrow: &Account<'info, TokenAccount>,
    authority: &Signer<'info>,
    campaign: &Campaign,
    amount: u64,
) -> Result<()> {
    ensure_mint(&source.mint, &campaign.mint)?;
    ensure_mint(&escrow.mint, &campaign.mint)?;
    ensure_balance(source.amount, amount)?;

    let cpi_accounts = Transfer {
        from: source.to_account_info(),
        to: escrow.to_account_info(),
        authority: authority.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)
}

/// Moves `amount` out of the escrow. Only the campaign PDA can authorize
/// this, so the transfer is signed with the campaign's derivation seeds.
pub fn release<'info>(
    token_program: &Program<'info, Token>,
    escrow: &Account<'info, TokenAccount>,
    destination: &Account<'info, TokenAccount>,
    campaign: &Account<'info, Campaign>,
    amount: u64,
) -> Result<()> {
    ensure_mint(&escrow.mint, &campaign.mint)?;
    ensure_mint(&destination.mint, &campaign.mint)?;
    ensure_balance(escrow.amount, amount)?;

    let bump = [campaign.bump];
    let seeds = &[
        Campaign::SEED_PREFIX,
        campaign.creator.as_ref(),
        Campaign::name_seed(&campaign.name),
        &bump,
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: escrow.to_account_info(),
        to: destination.to_account_info(),
        authority: campaign.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer(cpi_ctx, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_mint() {
        let mint = Pubkey::new_unique();
        assert!(ensure_mint(&mint, &mint).is_ok());
        assert_eq!(
            ensure_mint(&Pubkey::new_unique(), &mint).unwrap_err(),
            EscrowError::MintMismatch.into()
        );
    }

    #[test]
    fn test_ensure_balance() {
        assert!(ensure_balance(100, 100).is_ok());
        assert!(ensure_balance(100, 1).is_ok());
        assert_eq!(
            ensure_balance(99, 100).unwrap_err(),
            EscrowError::InsufficientFunds.into()
        );
    }
}
