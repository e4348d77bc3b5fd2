use soroban_sdk::{panic_with_error, Address, BytesN, Env};

use crate::storage_types::{
    Batch, BatchId, Campaign, CampaignId, DataKey, Error, INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
};

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// Fee configuration

pub fn read_paying_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::PayingToken)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn write_paying_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PayingToken, token);
    extend_instance(env);
}

pub fn read_cost_per_vote(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::CostPerVote)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn write_cost_per_vote(env: &Env, cost: i128) {
    env.storage().instance().set(&DataKey::CostPerVote, &cost);
    extend_instance(env);
}

// Campaigns

pub fn read_next_campaign_id(env: &Env) -> CampaignId {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(0)
}

/// Hands out the next id and advances the counter. Ids are never reused.
pub fn take_next_campaign_id(env: &Env) -> CampaignId {
    let id = read_next_campaign_id(env);
    let next = id
        .checked_add(1)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignIdOverflow));
    env.storage().instance().set(&DataKey::NextCampaignId, &next);
    extend_instance(env);
    id
}

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Campaign {
    let key = DataKey::Campaign(campaign_id);
    let campaign: Campaign = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    extend_persistent(env, &key);
    campaign
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

// Batches

pub fn load_batch(env: &Env, campaign_id: CampaignId, batch_id: BatchId) -> Batch {
    let key = DataKey::Batch(campaign_id, batch_id);
    let batch: Batch = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::BatchNotFound));
    extend_persistent(env, &key);
    batch
}

pub fn save_batch(env: &Env, campaign_id: CampaignId, batch: &Batch) {
    let key = DataKey::Batch(campaign_id, batch.batch_id);
    env.storage().persistent().set(&key, batch);
    extend_persistent(env, &key);
}

pub fn is_root_used(env: &Env, campaign_id: CampaignId, root: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::RootUsed(campaign_id, root.clone()))
}

pub fn mark_root_used(env: &Env, campaign_id: CampaignId, root: &BytesN<32>, batch_id: BatchId) {
    let key = DataKey::RootUsed(campaign_id, root.clone());
    env.storage().persistent().set(&key, &batch_id);
    extend_persistent(env, &key);
}
