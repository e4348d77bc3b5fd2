use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage::extend_persistent;
use crate::storage_types::{DataKey, Error, FAUCET_COOLDOWN, MAX_FAUCET_AMOUNT};

pub fn read_last_faucet(env: &Env, recipient: &Address) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::LastFaucet(recipient.clone()))
}

pub fn write_last_faucet(env: &Env, recipient: &Address, timestamp: u64) {
    let key = DataKey::LastFaucet(recipient.clone());
    env.storage().persistent().set(&key, &timestamp);
    extend_persistent(env, &key);
}

/// Recipients without a record are always eligible.
pub fn is_cooling_down(env: &Env, recipient: &Address, now: u64) -> bool {
    match read_last_faucet(env, recipient) {
        Some(last) => now.saturating_sub(last) < FAUCET_COOLDOWN,
        None => false,
    }
}

pub fn validate_dispense(env: &Env, recipient: &Address, amount: i128, now: u64) {
    if is_cooling_down(env, recipient, now) {
        panic_with_error!(env, Error::CooldownActive);
    }
    if amount > MAX_FAUCET_AMOUNT {
        panic_with_error!(env, Error::LimitExceeded);
    }
    if amount <= 0 {
        panic_with_error!(env, Error::InvalidAmount);
    }
}
