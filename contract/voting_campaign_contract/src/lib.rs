#![no_std]

mod access;
mod campaign;
mod events;
mod storage;
mod storage_types;


use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, BytesN, Env, String, Vec};

pub use storage_types::{Batch, BatchId, Campaign, CampaignId, Error};
use storage_types::{DataKey, DEFAULT_COST_PER_VOTE};

#[contract]
pub struct VotingCampaignContract;

#[contractimpl]
impl VotingCampaignContract {
    /// Initialize with the global admin and the token used to price votes
    pub fn initialize(env: Env, admin: Address, paying_token: Address) {
        if access::has_admin(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        access::write_admin(&env, &admin);
        storage::write_paying_token(&env, &paying_token);
        storage::write_cost_per_vote(&env, DEFAULT_COST_PER_VOTE);
        env.storage().instance().set(&DataKey::NextCampaignId, &0u32);
    }

    // ----- Access control -----

    pub fn admin(env: Env) -> Address {
        access::read_admin(&env)
    }

    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) {
        access::require_admin(&env, &caller);

        access::write_admin(&env, &new_admin);

        events::emit_admin_transferred(
            &env,
            events::AdminTransferredEvent {
                previous_admin: caller,
                new_admin,
            },
        );
    }

    /// Grant or revoke the right to upload batches for any campaign
    pub fn set_uploader(env: Env, caller: Address, uploader: Address, enabled: bool) {
        access::require_admin(&env, &caller);

        access::write_uploader(&env, &uploader, enabled);

        events::emit_uploader_change(&env, events::UploaderChangeEvent { uploader, enabled });
    }

    pub fn is_uploader(env: Env, address: Address) -> bool {
        access::is_uploader(&env, &address)
    }

    // ----- Fee configuration -----

    pub fn cost_per_vote(env: Env) -> i128 {
        storage::read_cost_per_vote(&env)
    }

    pub fn set_cost_per_vote(env: Env, caller: Address, cost_per_vote: i128) {
        access::require_admin(&env, &caller);

        if cost_per_vote <= 0 {
            panic_with_error!(&env, Error::InvalidValue);
        }

        storage::write_cost_per_vote(&env, cost_per_vote);

        events::emit_cost_per_vote_update(&env, events::CostPerVoteUpdateEvent { cost_per_vote });
    }

    pub fn paying_token(env: Env) -> Address {
        storage::read_paying_token(&env)
    }

    pub fn set_paying_token(env: Env, caller: Address, token: Address) {
        access::require_admin(&env, &caller);

        storage::write_paying_token(&env, &token);

        events::emit_paying_token_update(&env, events::PayingTokenUpdateEvent { token });
    }

    // ----- Campaigns -----

    /// Open a campaign owned by `creator`. Anyone may create one.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        name: String,
        metadata: String,
        options: Vec<String>,
    ) -> CampaignId {
        creator.require_auth();
        campaign::validate_options(&env, &options);

        let id = storage::take_next_campaign_id(&env);
        let campaign = Campaign {
            id,
            name,
            metadata,
            vote_counts: campaign::zero_counts(&env, options.len()),
            options,
            owner: creator,
            is_active: true,
            batch_count: 0,
        };

        storage::save_campaign(&env, &campaign);
        log!(&env, "campaign created", id, campaign.options.len());

        events::emit_vote_campaign_change(&env, events::VoteCampaignChangeEvent::from(&campaign));

        id
    }

    /// Replace name and metadata. Options and tallies are left alone.
    pub fn update_campaign(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
        name: String,
        metadata: String,
    ) {
        let mut campaign = storage::load_campaign(&env, campaign_id);
        campaign::require_campaign_owner(&env, &campaign, &caller);

        campaign.name = name;
        campaign.metadata = metadata;
        storage::save_campaign(&env, &campaign);

        events::emit_vote_campaign_change(&env, events::VoteCampaignChangeEvent::from(&campaign));
    }

    pub fn transfer_campaign_ownership(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
        new_owner: Address,
    ) {
        let mut campaign = storage::load_campaign(&env, campaign_id);
        campaign::require_campaign_owner(&env, &campaign, &caller);

        campaign.owner = new_owner.clone();
        storage::save_campaign(&env, &campaign);

        events::emit_campaign_ownership_transferred(
            &env,
            events::CampaignOwnershipTransferredEvent {
                campaign_id,
                new_owner,
            },
        );
    }

    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Campaign {
        storage::load_campaign(&env, campaign_id)
    }

    pub fn next_campaign_id(env: Env) -> CampaignId {
        storage::read_next_campaign_id(&env)
    }

    // ----- Batches -----

    /// Record a batch of off-chain ballots committed to by `root` and add
    /// `counts` to the campaign tally. Returns the new batch id.
    pub fn upload_batch(
        env: Env,
        uploader: Address,
        campaign_id: CampaignId,
        counts: Vec<u64>,
        root: BytesN<32>,
    ) -> BatchId {
        access::require_uploader(&env, &uploader);

        let mut campaign = storage::load_campaign(&env, campaign_id);
        if counts.len() != campaign.options.len() {
            panic_with_error!(&env, Error::OptionCountMismatch);
        }
        if storage::is_root_used(&env, campaign_id, &root) {
            panic_with_error!(&env, Error::DuplicateCommitment);
        }

        // Everything below is computed before the first write.
        let cumulative = campaign::accumulate(&env, &campaign.vote_counts, &counts);
        let batch_id = campaign.batch_count;

        let batch = Batch {
            batch_id,
            root: root.clone(),
            counts,
            cumulative: cumulative.clone(),
            uploader,
            uploaded_at: env.ledger().timestamp(),
        };

        campaign.vote_counts = cumulative.clone();
        campaign.batch_count += 1;

        storage::save_batch(&env, campaign_id, &batch);
        storage::mark_root_used(&env, campaign_id, &root, batch_id);
        storage::save_campaign(&env, &campaign);
        log!(&env, "batch accepted", campaign_id, batch_id);

        events::emit_upload_batch(
            &env,
            events::UploadBatchEvent {
                campaign_id,
                batch_id,
                vote_counts: cumulative,
            },
        );

        batch_id
    }

    pub fn get_batch_root(env: Env, campaign_id: CampaignId, batch_id: BatchId) -> BytesN<32> {
        Self::get_batch(env, campaign_id, batch_id).root
    }

    /// Full audit record of an accepted batch
    pub fn get_batch(env: Env, campaign_id: CampaignId, batch_id: BatchId) -> Batch {
        let campaign = storage::load_campaign(&env, campaign_id);
        if batch_id >= campaign.batch_count {
            panic_with_error!(&env, Error::BatchNotFound);
        }
        storage::load_batch(&env, campaign_id, batch_id)
    }
}
