pub mod custody;
pub mod error;
pub mod events;
pub mod instructions;
pub mod query;
pub mod state;
pub mod validation;

use anchor_lang::prelude::*;
use instructions::*;

declare_id!("CwYXfMJdGTRoA5XbUg5oYfUiEqnBCRfMT2gGBbWt12LB");

/// Crowdfunding escrow
///
/// Donors move SPL tokens into an escrow owned by a campaign PDA. Once the
/// campaign's target is met, its creator (and nobody else) can withdraw the
/// full escrow balance, which resets the campaign for another round.
///
/// # Security Considerations
///
/// Every campaign and escrow account is re-derived from its seeds on use, and
/// token accounts are checked against the campaign's mint and the expected
/// owner, so a substituted account fails validation before any transfer.
#[program]
pub mod crowdfund_escrow {
    use super::*;

    /// Create the singleton config; the signer becomes admin
    pub fn initialize_global_config(ctx: Context<InitializeGlobalConfig>) -> Result<()> {
        initialize_global_config::handler(ctx)
    }

    /// Hand the admin role to `new_admin`. Current admin only.
    pub fn update_global_admin(ctx: Context<UpdateGlobalAdmin>, new_admin: Pubkey) -> Result<()> {
        update_global_admin::handler(ctx, new_admin)
    }

    /// Open a campaign and its escrow; the signer becomes its creator
    pub fn create_campaign(
        ctx: Context<CreateCampaign>,
        name: String,
        description: String,
        target_amount: u64,
    ) -> Result<()> {
        create_campaign::handler(ctx, name, description, target_amount)
    }

    /// Permissionless: any wallet holding the campaign mint may donate
    pub fn donate(ctx: Context<Donate>, amount: u64) -> Result<()> {
        donate::handler(ctx, amount)
    }

    /// Drain the escrow to the creator once the target is met
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        withdraw::handler(ctx)
    }
}
