use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::custody;
use crate::error::EscrowError;
use crate::events::{DonationReceived, ThresholdReached};
use crate::state::{Campaign, DonorRecord};

#[derive(Accounts)]
pub struct Donate<'info> {
    /// Any wallet may donate; it only has to sign for its own tokens
    #[account(mut)]
    pub donor: Signer<'info>,

    #[account(
        mut,
        seeds = [Campaign::SEED_PREFIX, campaign.creator.as_ref(), Campaign::name_seed(&campaign.name)],
        bump = campaign.bump,
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
        constraint = donor_token_account.mint == campaign.mint @ EscrowError::MintMismatch,
        constraint = donor_token_account.owner == donor.key() @ EscrowError::Unauthorized,
    )]
    pub donor_token_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = donor,
        space = 8 + DonorRecord::INIT_SPACE,
        seeds = [DonorRecord::SEED_PREFIX, donor.key().as_ref(), campaign.key().as_ref()],
        bump,
    )]
    pub donor_record: Account<'info, DonorRecord>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Donate>, amount: u64) -> Result<()> {
    require!(amount > 0, EscrowError::InvalidInput);

    custody::deposit(
        &ctx.accounts.token_program,
        &ctx.accounts.donor_token_account,
        &ctx.accounts.escrow,
        &ctx.accounts.donor,
        &ctx.accounts.campaign,
        amount,
    )?;

    let campaign_key = ctx.accounts.campaign.key();
    let donor_key = ctx.accounts.donor.key();

    let campaign = &mut ctx.accounts.campaign;
    let crossed = campaign.record_donation(amount)?;

    ctx.accounts
        .donor_record
        .record(donor_key, campaign_key, amount, ctx.bumps.donor_record)?;

    if crossed {
        msg!(
            "Campaign {} reached its target of {}",
            campaign.name,
            campaign.target_amount
        );
        emit!(ThresholdReached {
            campaign: campaign_key,
            target_amount: campaign.target_amount,
            amount_donated: campaign.amount_donated,
        });
    }

    emit!(DonationReceived {
        campaign: campaign_key,
        donor: donor_key,
        amount,
        amount_donated: campaign.amount_donated,
        threshold_reached: campaign.threshold_reached,
    });

    Ok(())
}
