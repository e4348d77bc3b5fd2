use soroban_sdk::{contracttype, Address, String, Symbol, Vec};

use crate::storage_types::{BatchId, Campaign, CampaignId};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AdminTransferredEvent {
    pub previous_admin: Address,
    pub new_admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UploaderChangeEvent {
    pub uploader: Address,
    pub enabled: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CostPerVoteUpdateEvent {
    pub cost_per_vote: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PayingTokenUpdateEvent {
    pub token: Address,
}

/// Full campaign state, emitted on creation and on every metadata update.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct VoteCampaignChangeEvent {
    pub campaign_id: CampaignId,
    pub name: String,
    pub metadata: String,
    pub options: Vec<String>,
    pub vote_counts: Vec<u64>,
    pub is_active: bool,
}

impl From<&Campaign> for VoteCampaignChangeEvent {
    fn from(campaign: &Campaign) -> Self {
        VoteCampaignChangeEvent {
            campaign_id: campaign.id,
            name: campaign.name.clone(),
            metadata: campaign.metadata.clone(),
            options: campaign.options.clone(),
            vote_counts: campaign.vote_counts.clone(),
            is_active: campaign.is_active,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignOwnershipTransferredEvent {
    pub campaign_id: CampaignId,
    pub new_owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UploadBatchEvent {
    pub campaign_id: CampaignId,
    pub batch_id: BatchId,
    pub vote_counts: Vec<u64>,
}

pub fn emit_admin_transferred(env: &soroban_sdk::Env, event: AdminTransferredEvent) {
    env.events()
        .publish((Symbol::new(env, "admin_transferred"),), event);
}

pub fn emit_uploader_change(env: &soroban_sdk::Env, event: UploaderChangeEvent) {
    env.events()
        .publish((Symbol::new(env, "uploader_change"),), event);
}

pub fn emit_cost_per_vote_update(env: &soroban_sdk::Env, event: CostPerVoteUpdateEvent) {
    env.events()
        .publish((Symbol::new(env, "cost_per_vote_update"),), event);
}

pub fn emit_paying_token_update(env: &soroban_sdk::Env, event: PayingTokenUpdateEvent) {
    env.events()
        .publish((Symbol::new(env, "paying_token_update"),), event);
}

pub fn emit_vote_campaign_change(env: &soroban_sdk::Env, event: VoteCampaignChangeEvent) {
    env.events()
        .publish((Symbol::new(env, "vote_campaign_change"),), event);
}

pub fn emit_campaign_ownership_transferred(
    env: &soroban_sdk::Env,
    event: CampaignOwnershipTransferredEvent,
) {
    env.events()
        .publish((Symbol::new(env, "campaign_ownership_transferred"),), event);
}

pub fn emit_upload_batch(env: &soroban_sdk::Env, event: UploadBatchEvent) {
    env.events()
        .publish((Symbol::new(env, "upload_batch"),), event);
}
