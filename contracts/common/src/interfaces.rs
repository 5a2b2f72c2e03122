//! Cross-contract client interfaces.
//!
//! Each trait mirrors the subset of a sibling contract that the others call.
//! `#[contractclient]` generates a typed client; no wasm import is needed.

use soroban_sdk::{contractclient, symbol_short, Address, Env, Symbol};

/// Repository name under which the base staking pool is registered.
pub const STAKING: Symbol = symbol_short!("STAKING");

#[contractclient(name = "AccessControlClient")]
pub trait AccessControlInterface {
    fn has_role(env: Env, role: Symbol, account: Address) -> bool;
}

#[contractclient(name = "ContractsRepositoryClient")]
pub trait ContractsRepositoryInterface {
    fn get_contract(env: Env, name: Symbol) -> Address;
}

#[contractclient(name = "EscrowTokenClient")]
pub trait EscrowTokenInterface {
    fn mint_to(env: Env, caller: Address, to: Address, amount: i128);
    fn burn_from(env: Env, caller: Address, from: Address, amount: i128);
    fn balance(env: Env, id: Address) -> i128;
    fn total_supply(env: Env) -> i128;
}

#[contractclient(name = "StakingPoolClient")]
pub trait StakingPoolInterface {
    fn stake_as(env: Env, funder: Address, beneficiary: Address, amount: i128);
}
