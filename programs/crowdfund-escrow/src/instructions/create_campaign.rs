use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::EscrowError;
use crate::events::CampaignCreated;
use crate::state::Campaign;

#[derive(Accounts)]
#[instruction(name: String)]
pub struct CreateCampaign<'info> {
    /// Pays for both accounts and becomes the only identity able to withdraw.
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + Campaign::INIT_SPACE,
        seeds = [Campaign::SEED_PREFIX, creator.key().as_ref(), Campaign::name_seed(&name)],
        bump,
        constraint = Campaign::validate_name(&name).is_ok() @ EscrowError::InvalidInput,
        constraint = !campaign.is_initialized() @ EscrowError::AddressAlreadyInUse,
    )]
    pub campaign: Account<'info, Campaign>,

    pub mint: Account<'info, Mint>,

    /// Escrow holding donations. Its authority is the campaign PDA, so only
    /// `withdraw` can move tokens out.
    #[account(
        init,
        payer = creator,
        seeds = [Campaign::ESCROW_SEED_PREFIX, campaign.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = campaign,
        token::token_program = token_program,
    )]
    pub escrow: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(
    ctx: Context<CreateCampaign>,
    name: String,
    description: String,
    target_amount: u64,
) -> Result<()> {
    let campaign_key = ctx.accounts.campaign.key();
    let campaign = &mut ctx.accounts.campaign;
    campaign.initialize(
        ctx.accounts.creator.key(),
        name,
        description,
        target_amount,
        ctx.accounts.mint.key(),
        ctx.bumps.campaign,
    )?;

    emit!(CampaignCreated {
        campaign: campaign_key,
        creator: campaign.creator,
        name: campaign.name.clone(),
        mint: campaign.mint,
        target_amount,
        escrow: ctx.accounts.escrow.key(),
    });

    Ok(())
}
