use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::validation::{
    checked_total, require_authority, require_identity, threshold_reached, validate_amount,
    validate_text,
};

/// Deployment-wide admin record. Lives at a single derived address, so a
/// second initialization always lands on the already populated account.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Current admin authority
    pub admin: Pubkey,
    /// PDA bump seed
    pub bump: u8,
}

/// A crowdfunding campaign, one per `(creator, name)` pair.
///
/// The record cycles between `Active` and `Funded` forever: a successful
/// withdrawal resets the counters instead of closing the account, which
/// re-arms the campaign for another funding round.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Campaign {
    pub creator: Pubkey,
    #[max_len(32)]
    pub name: String,
    #[max_len(200)]
    pub description: String,
    /// Token type accepted by this campaign and paid out on withdrawal
    pub mint: Pubkey,
    pub target_amount: u64,
    /// Running total for the current round
    pub amount_donated: u64,
    pub threshold_reached: bool,
    /// PDA bump seed
    pub bump: u8,
}

/// Lifetime contribution of one donor to one campaign. Informational; never
/// consulted by withdraw.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct DonorRecord {
    pub donor: Pubkey,
    pub campaign: Pubkey,
    pub amount_donated: u64,
    pub donation_count: u64,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignStatus {
    /// Accepting donations, withdrawal locked
    Active,
    /// Target met, creator may withdraw
    Funded,
}

impl GlobalConfig {
    pub const SEED_PREFIX: &'static [u8] = b"global_config";

    pub fn address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED_PREFIX], &crate::ID)
    }

    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    pub fn initialize(&mut self, admin: Pubkey, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), EscrowError::AlreadyInitialized);
        require_identity(&admin)?;

        self.admin = admin;
        self.bump = bump;
        Ok(())
    }

    /// Installs `new_admin`. Only the current admin may do this.
    pub fn rotate_admin(&mut self, signer: &Pubkey, new_admin: Pubkey) -> Result<()> {
        require_authority(signer, &self.admin)?;
        require_identity(&new_admin)?;
        require_keys_neq!(self.admin, new_admin, EscrowError::AdminUnchanged);

        self.admin = new_admin;
        Ok(())
    }
}

impl Campaign {
    pub const SEED_PREFIX: &'static [u8] = b"campaign";
    pub const ESCROW_SEED_PREFIX: &'static [u8] = b"campaign_token_account";

    /// The name is a derivation seed, and a single seed is capped at 32 bytes.
    pub const MAX_NAME_LEN: usize = 32;
    pub const MAX_DESCRIPTION_LEN: usize = 200;

    /// Seed bytes for `name`, clipped to the seed limit so an oversized name
    /// reaches `initialize` and fails there instead of aborting derivation.
    pub fn name_seed(name: &str) -> &[u8] {
        &name.as_bytes()[..name.len().min(Self::MAX_NAME_LEN)]
    }

    pub fn address(creator: &Pubkey, name: &str) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, creator.as_ref(), Self::name_seed(name)],
            &crate::ID,
        )
    }

    pub fn escrow_address(campaign: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::ESCROW_SEED_PREFIX, campaign.as_ref()], &crate::ID)
    }

    pub fn validate_name(name: &str) -> Result<()> {
        validate_text(name, Self::MAX_NAME_LEN)
    }

    pub fn validate_description(description: &str) -> Result<()> {
        validate_text(description, Self::MAX_DESCRIPTION_LEN)
    }

    pub fn is_initialized(&self) -> bool {
        self.creator != Pubkey::default()
    }

    pub fn status(&self) -> CampaignStatus {
        if self.threshold_reached {
            CampaignStatus::Funded
        } else {
            CampaignStatus::Active
        }
    }

    pub fn initialize(
        &mut self,
        creator: Pubkey,
        name: String,
        description: String,
        target_amount: u64,
        mint: Pubkey,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), EscrowError::AddressAlreadyInUse);
        require_identity(&creator)?;
        Self::validate_name(&name)?;
        Self::validate_description(&description)?;
        validate_amount(target_amount)?;

        self.creator = creator;
        self.name = name;
        self.description = description;
        self.mint = mint;
        self.target_amount = target_amount;
        self.amount_donated = 0;
        self.threshold_reached = false;
        self.bump = bump;
        Ok(())
    }

    /// Adds `amount` to the round total and re-evaluates the threshold.
    /// Returns true when this donation is the one that crossed it.
    pub fn record_donation(&mut self, amount: u64) -> Result<bool> {
        validate_amount(amount)?;
        let amount_donated = checked_total(self.amount_donated, amount)?;

        let was_reached = self.threshold_reached;
        self.amount_donated = amount_donated;
        self.threshold_reached = threshold_reached(amount_donated, self.target_amount);

        Ok(!was_reached && self.threshold_reached)
    }

    pub fn authorize_withdrawal(&self, signer: &Pubkey) -> Result<()> {
        require_authority(signer, &self.creator)?;
        require!(self.threshold_reached, EscrowError::ThresholdNotReached);
        Ok(())
    }

    /// Clears the round after the escrow has been drained.
    pub fn reset_round(&mut self) {
        self.amount_donated = 0;
        self.threshold_reached = false;
    }
}

impl DonorRecord {
    pub const SEED_PREFIX: &'static [u8] = b"donor";

    pub fn address(donor: &Pubkey, campaign: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, donor.as_ref(), campaign.as_ref()],
            &crate::ID,
        )
    }

    pub fn record(&mut self, donor: Pubkey, campaign: Pubkey, amount: u64, bump: u8) -> Result<()> {
        if self.donor == Pubkey::default() {
            self.donor = donor;
            self.campaign = campaign;
            self.bump = bump;
        }
        require_keys_eq!(self.donor, donor, EscrowError::Unauthorized);
        require_keys_eq!(self.campaign, campaign, EscrowError::Unauthorized);

        self.amount_donated = checked_total(self.amount_donated, amount)?;
        self.donation_count = checked_total(self.donation_count, 1)?;
        Ok(())
    }
}
