use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage::{extend_instance, extend_persistent};
use crate::storage_types::{DataKey, Error};

pub fn read_balance(env: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());
    if let Some(balance) = env.storage().persistent().get::<DataKey, i128>(&key) {
        extend_persistent(env, &key);
        balance
    } else {
        0
    }
}

fn write_balance(env: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Balance(addr.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

pub fn receive_balance(env: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(env, addr);
    let updated = balance
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, Error::InvalidAmount));
    write_balance(env, addr, updated);
}

pub fn spend_balance(env: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(env, addr);
    if balance < amount {
        panic_with_error!(env, Error::InsufficientBalance);
    }
    write_balance(env, addr, balance - amount);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn increase_total_supply(env: &Env, amount: i128) {
    let supply = read_total_supply(env)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, Error::InvalidAmount));
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    extend_instance(env);
}
