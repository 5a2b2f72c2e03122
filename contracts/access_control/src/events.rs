#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env, Symbol};

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub role: Symbol,
    pub account: Address,
    pub sender: Address,
    pub timestamp: u64,
}

pub fn publish_role_granted(env: &Env, role: Symbol, account: Address, sender: Address) {
    env.events().publish(
        (symbol_short!("ROLE_GRNT"), role.clone()),
        RoleChangedEvent {
            role,
            account,
            sender,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_revoked(env: &Env, role: Symbol, account: Address, sender: Address) {
    env.events().publish(
        (symbol_short!("ROLE_RVK"), role.clone()),
        RoleChangedEvent {
            role,
            account,
            sender,
            timestamp: env.ledger().timestamp(),
        },
    );
}
