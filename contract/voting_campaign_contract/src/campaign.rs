use soroban_sdk::{panic_with_error, Address, Env, String, Vec};

use crate::storage_types::{Campaign, Error, MAX_OPTIONS, MIN_OPTIONS};

/// Reject option lists outside `MIN_OPTIONS..=MAX_OPTIONS`.
pub fn validate_options(env: &Env, options: &Vec<String>) {
    let len = options.len();
    if len < MIN_OPTIONS || len > MAX_OPTIONS {
        panic_with_error!(env, Error::InvalidOptionCount);
    }
}

pub fn zero_counts(env: &Env, len: u32) -> Vec<u64> {
    let mut counts = Vec::new(env);
    for _ in 0..len {
        counts.push_back(0u64);
    }
    counts
}

/// Per-campaign ownership is checked independently of the global admin.
pub fn require_campaign_owner(env: &Env, campaign: &Campaign, caller: &Address) {
    caller.require_auth();
    if *caller != campaign.owner {
        panic_with_error!(env, Error::NotCampaignOwner);
    }
}

/// Element-wise `tally + delta`. Lengths must already match.
pub fn accumulate(env: &Env, tally: &Vec<u64>, delta: &Vec<u64>) -> Vec<u64> {
    let mut updated = Vec::new(env);
    for (current, added) in tally.iter().zip(delta.iter()) {
        let sum = current
            .checked_add(added)
            .unwrap_or_else(|| panic_with_error!(env, Error::TallyOverflow));
        updated.push_back(sum);
    }
    updated
}
