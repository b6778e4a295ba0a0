use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::custody;
use crate::error::EscrowError;
use crate::events::FundsWithdrawn;
use crate::state::Campaign;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    /// SECURITY: `has_one = creator` is what stops anyone else from draining
    /// the escrow into their own token account.
    #[account(
        mut,
        seeds = [Campaign::SEED_PREFIX, campaign.creator.as_ref(), Campaign::name_seed(&campaign.name)],
        bump = campaign.bump,
        has_one = creator @ EscrowError::Unauthorized,
    )]
    pub campaign: Account<'info, Campaign>,

    #[account(
        mut,
        seeds = [Campaign::ESCROW_SEED_PREFIX, campaign.key().as_ref()],
        bump,
        constraint = escrow.mint == campaign.mint @ EscrowError::MintMismatch,
        constraint = escrow.owner == campaign.key() @ EscrowError::Unauthorized,
    )]
    pub escrow: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = creator_token_account.mint == campaign.mint @ EscrowError::MintMismatch,
        constraint = creator_token_account.owner == creator.key() @ EscrowError::Unauthorized,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let campaign = &ctx.accounts.campaign;
    campaign.authorize_withdrawal(&ctx.accounts.creator.key())?;

    // The whole escrow is paid out, including anything sent to it directly
    let amount = ctx.accounts.escrow.amount;
    require!(amount > 0, EscrowError::InsufficientFunds);

    custody::release(
        &ctx.accounts.token_program,
        &ctx.accounts.escrow,
        &ctx.accounts.creator_token_account,
        campaign,
        amount,
    )?;

    let campaign_key = campaign.key();
    let campaign = &mut ctx.accounts.campaign;
    let amount_donated = campaign.amount_donated;
    campaign.reset_round();

    msg!(
        "Withdrew {} from campaign {} to creator {}",
        amount,
        campaign.name,
        campaign.creator
    );
    emit!(FundsWithdrawn {
        campaign: campaign_key,
        creator: campaign.creator,
        amount,
        amount_donated,
    });

    Ok(())
}
