use anchor_lang::prelude::*;

#[event]
pub struct GlobalConfigInitialized {
    pub admin: Pubkey,
}

#[event]
pub struct GlobalAdminUpdated {
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct CampaignCreated {
    pub campaign: Pubkey,
    pub creator: Pubkey,
    pub name: String,
    pub mint: Pubkey,
    pub target_amount: u64,
    pub escrow: Pubkey,
}

#[event]
pub struct DonationReceived {
    pub campaign: Pubkey,
    pub donor: Pubkey,
    pub amount: u64,
    pub amount_donated: u64,
    pub threshold_reached: bool,
}

#[event]
pub struct ThresholdReached {
    pub campaign: Pubkey,
    pub target_amount: u64,
    pub amount_donated: u64,
}

#[event]
pub struct FundsWithdrawn {
    pub campaign: Pubkey,
    pub creator: Pubkey,
    /// Escrow balance moved to the creator
    pub amount: u64,
    /// Round total recorded on the campaign before the reset
    pub amount_donated: u64,
}
