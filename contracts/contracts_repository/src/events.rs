#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env, Symbol};

/// Fired whenever a name is (re)bound.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractSetEvent {
    pub name: Symbol,
    pub address: Address,
    pub timestamp: u64,
}

pub fn publish_contract_set(env: &Env, name: Symbol, address: Address) {
    env.events().publish(
        (symbol_short!("CTR_SET"), name.clone()),
        ContractSetEvent {
            name,
            address,
            timestamp: env.ledger().timestamp(),
        },
    );
}
