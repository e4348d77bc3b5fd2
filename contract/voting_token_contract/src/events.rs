use soroban_sdk::{contracttype, Address, Symbol};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AdminTransferredEvent {
    pub previous_admin: Address,
    pub new_admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FaucetAddressChangeEvent {
    pub faucet: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FaucetToAddressEvent {
    pub recipient: Address,
    pub timestamp: u64,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

pub fn emit_admin_transferred(env: &soroban_sdk::Env, event: AdminTransferredEvent) {
    env.events()
        .publish((Symbol::new(env, "admin_transferred"),), event);
}

pub fn emit_faucet_address_change(env: &soroban_sdk::Env, event: FaucetAddressChangeEvent) {
    env.events()
        .publish((Symbol::new(env, "faucet_address_change"),), event);
}

pub fn emit_faucet_to_address(env: &soroban_sdk::Env, event: FaucetToAddressEvent) {
    env.events()
        .publish((Symbol::new(env, "faucet"),), event);
}

pub fn emit_transfer(env: &soroban_sdk::Env, event: TransferEvent) {
    env.events()
        .publish((Symbol::new(env, "transfer"),), event);
}
