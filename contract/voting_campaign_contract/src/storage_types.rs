use soroban_sdk::{contracterror, contracttype, Address, BytesN, String, Vec};

// Instance storage keys live alongside persistent ones; the accessor picks the tier.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    PayingToken,
    CostPerVote,
    NextCampaignId,
    Uploader(Address),
    Campaign(CampaignId),
    Batch(CampaignId, BatchId),
    RootUsed(CampaignId, BytesN<32>), // (CampaignID, Root) -> BatchID that consumed it
}

pub type CampaignId = u32;
pub type BatchId = u32;

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub metadata: String,
    pub options: Vec<String>,
    pub vote_counts: Vec<u64>,
    pub owner: Address,
    pub is_active: bool,
    pub batch_count: u32,
}

/// One accepted upload. Never rewritten once stored.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Batch {
    pub batch_id: BatchId,
    pub root: BytesN<32>,
    pub counts: Vec<u64>,     // Delta contributed by this batch
    pub cumulative: Vec<u64>, // Campaign tally right after acceptance
    pub uploader: Address,
    pub uploaded_at: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    NotCampaignOwner = 4,
    NotAuthorizedUploader = 5,
    CampaignNotFound = 6,
    BatchNotFound = 7,
    InvalidOptionCount = 8,
    OptionCountMismatch = 9,
    DuplicateCommitment = 10,
    InvalidValue = 11,
    TallyOverflow = 12,
    CampaignIdOverflow = 13,
}

// Constants
pub const MIN_OPTIONS: u32 = 2;
pub const MAX_OPTIONS: u32 = 4;
pub const TOKEN_DECIMALS: u32 = 18;
pub const DEFAULT_COST_PER_VOTE: i128 = 10 * 10i128.pow(TOKEN_DECIMALS); // 10 whole tokens

const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
