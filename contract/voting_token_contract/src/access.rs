use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage::extend_instance;
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

pub fn read_faucet_address(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::FaucetAddress)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn write_faucet_address(env: &Env, faucet: &Address) {
    env.storage().instance().set(&DataKey::FaucetAddress, faucet);
    extend_instance(env);
}

pub fn require_admin(env: &Env, caller: &Address) {
    caller.require_auth();
    if *caller != read_admin(env) {
        panic_with_error!(env, Error::Unauthorized);
    }
}

/// Dispensing is open to the admin and to the designated faucet operator.
pub fn require_admin_or_faucet(env: &Env, caller: &Address) {
    caller.require_auth();
    if *caller != read_admin(env) && *caller != read_faucet_address(env) {
        panic_with_error!(env, Error::Unauthorized);
    }
}
