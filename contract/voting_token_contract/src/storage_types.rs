use soroban_sdk::{contracterror, contracttype, Address};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    FaucetAddress,
    Name,
    Symbol,
    TotalSupply,
    Balance(Address),
    LastFaucet(Address), // Recipient -> ledger timestamp of the last dispense
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    CooldownActive = 4,
    LimitExceeded = 5,
    InvalidAmount = 6,
    InsufficientBalance = 7,
}

// Constants
pub const DECIMALS: u32 = 18;
pub const MAX_FAUCET_AMOUNT: i128 = 100 * 10i128.pow(DECIMALS); // 100 whole tokens, inclusive
pub const FAUCET_COOLDOWN: u64 = 24 * 60 * 60; // seconds

const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const BALANCE_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
