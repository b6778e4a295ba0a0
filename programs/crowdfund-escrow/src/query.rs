//! Read-only access to campaign accounts for indexers and front ends.
//!
//! These helpers work on raw `(address, data)` pairs as returned by
//! `getProgramAccounts`, so they have no RPC dependency of their own.

use anchor_lang::prelude::*;

use crate::state::{Campaign, CampaignStatus};

/// Byte offset of `Campaign::creator`: it is the first field after the
/// 8-byte account discriminator. Use with a `memcmp` filter.
pub const CREATOR_OFFSET: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignView {
    pub address: Pubkey,
    pub status: CampaignStatus,
    pub campaign: Campaign,
}

impl CampaignView {
    pub fn new(address: Pubkey, campaign: Campaign) -> Self {
        Self {
            address,
            status: campaign.status(),
            campaign,
        }
    }
}

/// `memcmp` filter (offset, bytes) selecting one creator's campaigns.
pub fn creator_filter(creator: &Pubkey) -> (usize, [u8; 32]) {
    (CREATOR_OFFSET, creator.to_bytes())
}

/// Strict decode: fails on a missing or foreign discriminator.
pub fn decode_campaign(data: &[u8]) -> Result<Campaign> {
    Campaign::try_deserialize(&mut &data[..])
}

/// Every campaign among `accounts`; other account kinds are skipped.
pub fn list_campaigns<'a, I>(accounts: I) -> Vec<CampaignView>
where
    I: IntoIterator<Item = (Pubkey, &'a [u8])>,
{
    accounts
        .into_iter()
        .filter_map(|(address, data)| {
            decode_campaign(data)
                .ok()
                .map(|campaign| CampaignView::new(address, campaign))
        })
        .collect()
}

pub fn fetch_campaign<'a, I>(accounts: I, address: &Pubkey) -> Option<CampaignView>
where
    I: IntoIterator<Item = (Pubkey, &'a [u8])>,
{
    accounts
        .into_iter()
        .find(|(key, _)| key == address)
        .and_then(|(key, data)| {
            decode_campaign(data)
                .ok()
                .map(|campaign| CampaignView::new(key, campaign))
        })
}

pub fn campaigns_by_creator<'a, I>(accounts: I, creator: &Pubkey) -> Vec<CampaignView>
where
    I: IntoIterator<Item = (Pubkey, &'a [u8])>,
{
    list_campaigns(accounts)
        .into_iter()
        .filter(|view| view.campaign.creator == *creator)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GlobalConfig;

    fn campaign_account(creator: Pubkey, name: &str, donated: u64) -> (Pubkey, Vec<u8>) {
        let mut campaign = Campaign::default();
        campaign
            .initialize(
                creator,
                name.to_string(),
                format!("{name} description"),
                100,
                Pubkey::new_unique(),
                7,
            )
            .unwrap();
        if donated > 0 {
            campaign.record_donation(donated).unwrap();
        }

        let mut data = Vec::new();
        campaign.try_serialize(&mut data).unwrap();
        (Campaign::address(&creator, name).0, data)
    }

    fn config_account(admin: Pubkey) -> (Pubkey, Vec<u8>) {
        let config = GlobalConfig { admin, bump: 1 };
        let mut data = Vec::new();
        config.try_serialize(&mut data).unwrap();
        (GlobalConfig::address().0, data)
    }

    #[test]
    fn test_creator_sits_after_discriminator() {
        let creator = Pubkey::new_unique();
        let (_, data) = campaign_account(creator, "offset", 0);
        let (offset, bytes) = creator_filter(&creator);
        assert_eq!(&data[offset..offset + 32], &bytes[..]);
    }

    #[test]
    fn test_decode_rejects_other_accounts() {
        let (_, data) = config_account(Pubkey::new_unique());
        assert!(decode_campaign(&data).is_err());
        assert!(decode_campaign(&[]).is_err());
    }

    #[test]
    fn test_list_fetch_and_filter() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let accounts = vec![
            campaign_account(alice, "school", 0),
            config_account(alice),
            campaign_account(bob, "clinic", 150),
            campaign_account(alice, "library", 20),
        ];
        let pairs = || accounts.iter().map(|(key, data)| (*key, data.as_slice()));

        let all = list_campaigns(pairs());
        assert_eq!(all.len(), 3);

        let clinic_address = Campaign::address(&bob, "clinic").0;
        let clinic = fetch_campaign(pairs(), &clinic_address).unwrap();
        assert_eq!(clinic.campaign.name, "clinic");
        assert_eq!(clinic.campaign.description, "clinic description");
        assert_eq!(clinic.campaign.creator, bob);
        assert_eq!(clinic.campaign.target_amount, 100);
        assert_eq!(clinic.campaign.amount_donated, 150);
        assert!(clinic.campaign.threshold_reached);
        assert_eq!(clinic.campaign.bump, 7);
        assert_eq!(clinic.status, CampaignStatus::Funded);

        assert!(fetch_campaign(pairs(), &GlobalConfig::address().0).is_none());
        assert!(fetch_campaign(pairs(), &Pubkey::new_unique()).is_none());

        let mut names: Vec<String> = campaigns_by_creator(pairs(), &alice)
            .into_iter()
            .map(|view| view.campaign.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["library".to_string(), "school".to_string()]);
        assert!(campaigns_by_creator(pairs(), &Pubkey::new_unique()).is_empty());
    }
}
