#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

/// Fired when receipt tokens are minted against a new stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintedEvent {
    pub minter: Address,
    pub to: Address,
    pub amount: i128,
    pub total_supply: i128,
}

/// Fired when receipt tokens are burned on unstake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BurnedEvent {
    pub minter: Address,
    pub from: Address,
    pub amount: i128,
    pub total_supply: i128,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovedEvent {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferredEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

pub fn publish_minted(env: &Env, minter: Address, to: Address, amount: i128, total_supply: i128) {
    env.events().publish(
        (symbol_short!("mint"), to.clone()),
        MintedEvent {
            minter,
            to,
            amount,
            total_supply,
        },
    );
}

pub fn publish_burned(env: &Env, minter: Address, from: Address, amount: i128, total_supply: i128) {
    env.events().publish(
        (symbol_short!("burn"), from.clone()),
        BurnedEvent {
            minter,
            from,
            amount,
            total_supply,
        },
    );
}

pub fn publish_approved(env: &Env, from: Address, spender: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("approve"), from.clone(), spender.clone()),
        ApprovedEvent {
            from,
            spender,
            amount,
        },
    );
}

pub fn publish_transferred(env: &Env, from: Address, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        TransferredEvent { from, to, amount },
    );
}
