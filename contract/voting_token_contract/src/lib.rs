#![no_std]

mod access;
mod balance;
mod dispense;
mod events;
mod storage;
mod storage_types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String};

pub use storage_types::{Error, DECIMALS, FAUCET_COOLDOWN, MAX_FAUCET_AMOUNT};
use storage_types::DataKey;

#[contract]
pub struct VotingTokenContract;

#[contractimpl]
impl VotingTokenContract {
    /// Initialize the token with its admin and the faucet operator address
    pub fn initialize(env: Env, admin: Address, faucet: Address, name: String, symbol: String) {
        if access::has_admin(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        access::write_admin(&env, &admin);
        access::write_faucet_address(&env, &faucet);
        env.storage().instance().set(&DataKey::Name, &name);
        env.storage().instance().set(&DataKey::Symbol, &symbol);
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);
    }

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

    pub fn faucet_address(env: Env) -> Address {
        access::read_faucet_address(&env)
    }

    /// Swap the faucet operator. Existing cooldown records are kept.
    pub fn set_faucet_address(env: Env, caller: Address, faucet: Address) {
        access::require_admin(&env, &caller);

        access::write_faucet_address(&env, &faucet);

        events::emit_faucet_address_change(&env, events::FaucetAddressChangeEvent { faucet });
    }

    /// Mint up to `MAX_FAUCET_AMOUNT` to `recipient`, at most once per
    /// `FAUCET_COOLDOWN` seconds per recipient.
    pub fn faucet(env: Env, caller: Address, recipient: Address, amount: i128) {
        access::require_admin_or_faucet(&env, &caller);

        let now = env.ledger().timestamp();
        dispense::validate_dispense(&env, &recipient, amount, now);

        balance::receive_balance(&env, &recipient, amount);
        balance::increase_total_supply(&env, amount);
        dispense::write_last_faucet(&env, &recipient, now);
        log!(&env, "faucet dispensed", amount, now);

        events::emit_faucet_to_address(
            &env,
            events::FaucetToAddressEvent {
                recipient,
                timestamp: now,
                amount,
            },
        );
    }

    pub fn last_faucet(env: Env, recipient: Address) -> Option<u64> {
        dispense::read_last_faucet(&env, &recipient)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        balance::spend_balance(&env, &from, amount);
        balance::receive_balance(&env, &to, amount);
        storage::extend_instance(&env);

        events::emit_transfer(&env, events::TransferEvent { from, to, amount });
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        balance::read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        balance::read_total_supply(&env)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn name(env: Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::Name)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized))
    }

    pub fn symbol(env: Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::Symbol)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized))
    }
}
