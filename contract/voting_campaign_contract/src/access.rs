use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage::{extend_instance, extend_persistent};
use crate::storage_types::{DataKey, Error};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn read_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance(env);
}

/// Caller must have signed and be the global administrator.
pub fn require_admin(env: &Env, caller: &Address) {
    caller.require_auth();
    if *caller != read_admin(env) {
        panic_with_error!(env, Error::Unauthorized);
    }
}

pub fn is_uploader(env: &Env, address: &Address) -> bool {
    let key = DataKey::Uploader(address.clone());
    let flag: Option<bool> = env.storage().persistent().get(&key);
    match flag {
        Some(flag) => {
            extend_persistent(env, &key);
            flag
        }
        None => false,
    }
}

pub fn write_uploader(env: &Env, address: &Address, enabled: bool) {
    let key = DataKey::Uploader(address.clone());
    env.storage().persistent().set(&key, &enabled);
    extend_persistent(env, &key);
}

/// Caller must have signed and currently hold the uploader flag.
pub fn require_uploader(env: &Env, caller: &Address) {
    caller.require_auth();
    if !is_uploader(env, caller) {
        panic_with_error!(env, Error::NotAuthorizedUploader);
    }
}
