use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::events::GlobalConfigInitialized;
use crate::state::GlobalConfig;

#[derive(Accounts)]
pub struct InitializeGlobalConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Single-instance record. An already populated account is reported as
    /// `AlreadyInitialized` rather than a raw system-program failure.
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + GlobalConfig::INIT_SPACE,
        seeds = [GlobalConfig::SEED_PREFIX],
        bump,
        constraint = !global_config.is_initialized() @ EscrowError::AlreadyInitialized,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeGlobalConfig>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let global_config = &mut ctx.accounts.global_config;
    global_config.initialize(admin, ctx.bumps.global_config)?;

    emit!(GlobalConfigInitialized { admin });

    Ok(())
}
