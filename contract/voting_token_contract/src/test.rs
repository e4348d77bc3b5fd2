#![cfg(test)]

use super::*;
use crate::events::{AdminTransferredEvent, FaucetAddressChangeEvent, FaucetToAddressEvent, TransferEvent};
use soroban_sdk::{
    testutils::{storage::Instance as _, Address as _, Events, Ledger},
    Address, Env, IntoVal, String, Symbol, TryFromVal, Val,
};

const UNIT: i128 = 1_000_000_000_000_000_000; // 10^DECIMALS

fn create_token_contract<'a>(env: &Env, admin: &Address, faucet: &Address) -> VotingTokenContractClient<'a> {
    let client = VotingTokenContractClient::new(env, &env.register(VotingTokenContract, ()));
    client.initialize(
        admin,
        faucet,
        &String::from_str(env, "Voting Token"),
        &String::from_str(env, "VOTE"),
    );
    client
}

// Most recent contract event as (emitter, topic, payload).
fn last_event<T: TryFromVal<Env, Val>>(env: &Env) -> (Address, Symbol, T) {
    let (contract, topics, data) = env.events().all().last().unwrap();
    (contract, topics.get_unchecked(0).into_val(env), data.into_val(env))
}

#[test]
fn test_initialize() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let faucet = Address::generate(&env);
    let token = create_token_contract(&env, &admin, &faucet);

    assert_eq!(token.admin(), admin);
    assert_eq!(token.faucet_address(), faucet);
    assert_eq!(token.name(), String::from_str(&env, "Voting Token"));
    assert_eq!(token.symbol(), String::from_str(&env, "VOTE"));
    assert_eq!(token.decimals(), 18);
    assert_eq!(token.total_supply(), 0);
    assert_eq!(UNIT, 10i128.pow(DECIMALS));

    assert_eq!(
        token.try_initialize(
            &admin,
            &faucet,
            &String::from_str(&env, "Again"),
            &String::from_str(&env, "AGN")
        ),
        Err(Ok(Error::AlreadyInitialized.into()))
    );
}

#[test]
fn test_transfer_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let new_admin = Address::generate(&env);
    let token = create_token_contract(&env, &admin, &Address::generate(&env));

    token.transfer_admin(&admin, &new_admin);
    assert_eq!(token.admin(), new_admin);

    let (contract, topic, event): (_, _, AdminTransferredEvent) = last_event(&env);
    assert_eq!(contract, token.address);
    assert_eq!(topic, Symbol::new(&env, "admin_transferred"));
    assert_eq!(
        event,
        AdminTransferredEvent {
            previous_admin: admin.clone(),
            new_admin: new_admin.clone(),
        }
    );

    assert_eq!(
        token.try_transfer_admin(&admin, &admin),
        Err(Ok(Error::Unauthorized.into()))
    );
}

#[test]
fn test_set_faucet_address() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let faucet = Address::generate(&env);
    let other = Address::generate(&env);
    let token = create_token_contract(&env, &admin, &faucet);

    token.set_faucet_address(&admin, &other);
    assert_eq!(token.faucet_address(), other);

    let (contract, topic, event): (_, _, FaucetAddressChangeEvent) = last_event(&env);
    assert_eq!(contract, token.address);
    assert_eq!(topic, Symbol::new(&env, "faucet_address_change"));
    assert_eq!(event, FaucetAddressChangeEvent { faucet: other.clone() });

    token.set_faucet_address(&admin, &faucet);
    assert_eq!(token.faucet_address(), faucet);

    assert_eq!(
        token.try_set_faucet_address(&faucet, &other),
        Err(Ok(Error::Unauthorized.into()))
    );
    assert_eq!(token.faucet_address(), faucet);
}

#[test]
fn test_admin_and_faucet_can_dispense() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let faucet = Address::generate(&env);
    let recipient = Address::generate(&env);
    let recipient2 = Address::generate(&env);
    let token = create_token_contract(&env, &admin, &faucet);

    env.ledger().set_timestamp(1_700_000_000);

    token.faucet(&admin, &recipient, &(10 * UNIT));

    let (contract, topic, event): (_, _, FaucetToAddressEvent) = last_event(&env);
    assert_eq!(contract, token.address);
    assert_eq!(topic, Symbol::new(&env, "faucet"));
    assert_eq!(
        event,
        FaucetToAddressEvent {
            recipient: recipient.clone(),
            timestamp: 1_700_000_000,
            amount: 10 * UNIT,
        }
    );

    token.faucet(&faucet, &recipient2, &(10 * UNIT));

    assert_eq!(token.balance(&recipient), 10 * UNIT);
    assert_eq!(token.balance(&recipient2), 10 * UNIT);
    assert_eq!(token.total_supply(), 20 * UNIT);
    assert_eq!(token.last_faucet(&recipient), Some(1_700_000_000));
    assert_eq!(token.last_faucet(&recipient2), Some(1_700_000_000));
}

#[test]
fn test_stranger_cannot_dispense() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let faucet = Address::generate(&env);
    let recipient = Address::generate(&env);
    let token = create_token_contract(&env, &admin, &faucet);

    assert_eq!(
        token.try_faucet(&recipient, &recipient, &(10 * UNIT)),
        Err(Ok(Error::Unauthorized.into()))
    );
    assert_eq!(token.balance(&recipient), 0);
    assert_eq!(token.last_faucet(&recipient), None);
}

#[test]
fn test_faucet_limit_is_inclusive() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let faucet = Address::generate(&env);
    let recipient = Address::generate(&env);
    let recipient2 = Address::generate(&env);
    let token = create_token_contract(&env, &admin, &faucet);

    assert_eq!(
        token.try_faucet(&faucet, &recipient, &(101 * UNIT)),
        Err(Ok(Error::LimitExceeded.into()))
    );
    assert_eq!(
        token.try_faucet(&faucet, &recipient, &(MAX_FAUCET_AMOUNT + 1)),
        Err(Ok(Error::LimitExceeded.into()))
    );
    // A rejected request does not start the cooldown
    assert_eq!(token.last_faucet(&recipient), None);

    token.faucet(&faucet, &recipient, &(100 * UNIT));
    assert_eq!(token.balance(&recipient), MAX_FAUCET_AMOUNT);

    assert_eq!(
        token.try_faucet(&faucet, &recipient2, &0),
        Err(Ok(Error::InvalidAmount.into()))
    );
    assert_eq!(
        token.try_faucet(&faucet, &recipient2, &-UNIT),
        Err(Ok(Error::InvalidAmount.into()))
    );
}

#[test]
fn test_faucet_cooldown() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let faucet = Address::generate(&env);
    let recipient = Address::generate(&env);
    let other = Address::generate(&env);
    let token = create_token_contract(&env, &admin, &faucet);

    let start = 1_000u64;
    env.ledger().set_timestamp(start);
    token.faucet(&faucet, &recipient, &(10 * UNIT));

    // Cooldown is checked before the amount
    assert_eq!(
        token.try_faucet(&faucet, &recipient, &0),
        Err(Ok(Error::CooldownActive.into()))
    );
    assert_eq!(
        token.try_faucet(&faucet, &recipient, &(MAX_FAUCET_AMOUNT + 1)),
        Err(Ok(Error::CooldownActive.into()))
    );

    // The admin is held to the same per-recipient cooldown
    assert_eq!(
        token.try_faucet(&faucet, &recipient, &(10 * UNIT)),
        Err(Ok(Error::CooldownActive.into()))
    );
    assert_eq!(
        token.try_faucet(&admin, &recipient, &UNIT),
        Err(Ok(Error::CooldownActive.into()))
    );

    // Other recipients are unaffected
    token.faucet(&faucet, &other, &UNIT);

    env.ledger().set_timestamp(start + FAUCET_COOLDOWN - 1);
    assert_eq!(
        token.try_faucet(&faucet, &recipient, &(10 * UNIT)),
        Err(Ok(Error::CooldownActive.into()))
    );
    assert_eq!(token.balance(&recipient), 10 * UNIT);

    env.ledger().set_timestamp(start + FAUCET_COOLDOWN);
    token.faucet(&faucet, &recipient, &(10 * UNIT));
    assert_eq!(token.balance(&recipient), 20 * UNIT);
    assert_eq!(token.last_faucet(&recipient), Some(start + FAUCET_COOLDOWN));

    // The clock restarted at the last dispense
    env.ledger().with_mut(|li| {
        li.timestamp += FAUCET_COOLDOWN / 2;
    });
    assert_eq!(
        token.try_faucet(&faucet, &recipient, &(10 * UNIT)),
        Err(Ok(Error::CooldownActive.into()))
    );
}

#[test]
fn test_faucet_address_change_keeps_cooldowns() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let faucet = Address::generate(&env);
    let new_faucet = Address::generate(&env);
    let recipient = Address::generate(&env);
    let token = create_token_contract(&env, &admin, &faucet);

    token.faucet(&faucet, &recipient, &UNIT);
    token.set_faucet_address(&admin, &new_faucet);

    assert_eq!(
        token.try_faucet(&faucet, &recipient, &UNIT),
        Err(Ok(Error::Unauthorized.into()))
    );
    assert_eq!(
        token.try_faucet(&new_faucet, &recipient, &UNIT),
        Err(Ok(Error::CooldownActive.into()))
    );
}

#[test]
fn test_transfer() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let faucet = Address::generate(&env);
    let voter = Address::generate(&env);
    let treasury = Address::generate(&env);
    let token = create_token_contract(&env, &admin, &faucet);

    token.faucet(&faucet, &voter, &(50 * UNIT));
    token.transfer(&voter, &treasury, &(10 * UNIT));

    let (contract, topic, event): (_, _, TransferEvent) = last_event(&env);
    assert_eq!(contract, token.address);
    assert_eq!(topic, Symbol::new(&env, "transfer"));
    assert_eq!(
        event,
        TransferEvent {
            from: voter.clone(),
            to: treasury.clone(),
            amount: 10 * UNIT,
        }
    );

    assert_eq!(token.balance(&voter), 40 * UNIT);
    assert_eq!(token.balance(&treasury), 10 * UNIT);
    assert_eq!(token.total_supply(), 50 * UNIT);

    assert_eq!(
        token.try_transfer(&voter, &treasury, &(41 * UNIT)),
        Err(Ok(Error::InsufficientBalance.into()))
    );
    assert_eq!(
        token.try_transfer(&voter, &treasury, &0),
        Err(Ok(Error::InvalidAmount.into()))
    );
    assert_eq!(token.balance(&voter), 40 * UNIT);
}

#[test]
fn test_transfer_extends_instance_ttl() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let faucet = Address::generate(&env);
    let voter = Address::generate(&env);
    let treasury = Address::generate(&env);
    let token = create_token_contract(&env, &admin, &faucet);

    token.faucet(&faucet, &voter, &(50 * UNIT));

    // Two days later the instance is below the bump threshold
    env.ledger().with_mut(|li| {
        li.sequence_number += 2 * 17_280;
    });
    let ttl = env.as_contract(&token.address, || env.storage().instance().get_ttl());
    assert!(ttl < storage_types::INSTANCE_LIFETIME_THRESHOLD);

    token.transfer(&voter, &treasury, &(10 * UNIT));

    let ttl = env.as_contract(&token.address, || env.storage().instance().get_ttl());
    assert_eq!(ttl, storage_types::INSTANCE_BUMP_AMOUNT);
}
