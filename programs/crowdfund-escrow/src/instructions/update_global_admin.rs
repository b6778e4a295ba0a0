use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::events::GlobalAdminUpdated;
use crate::state::GlobalConfig;

#[derive(Accounts)]
pub struct UpdateGlobalAdmin<'info> {
    /// Must be the admin currently stored in the config
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [GlobalConfig::SEED_PREFIX],
        bump = global_config.bump,
        has_one = admin @ EscrowError::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,
}

pub fn handler(ctx: Context<UpdateGlobalAdmin>, new_admin: Pubkey) -> Result<()> {
    let signer = ctx.accounts.admin.key();
    let global_config = &mut ctx.accounts.global_config;
    let previous_admin = global_config.admin;

    global_config.rotate_admin(&signer, new_admin)?;

    emit!(GlobalAdminUpdated {
        previous_admin,
        new_admin,
    });

    Ok(())
}
