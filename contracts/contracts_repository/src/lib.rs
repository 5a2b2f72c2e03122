#![no_std]

//! Name → address registry.
//!
//! Sibling contracts resolve each other here instead of hard-coding
//! addresses. Only holders of [`roles::REPOSITORY_OWNER`] in the
//! access-control registry may change a binding.

pub mod events;

use common::roles;
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

const ACL: Symbol = symbol_short!("ACL");
const ENTRY: Symbol = symbol_short!("ENTRY");

const TTL_THRESHOLD: u32 = common::TTL_THRESHOLD;
const TTL_EXTEND_TO: u32 = common::TTL_EXTEND_TO;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 301,
    Unauthorized = 302,
    ContractNotFound = 303,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct ContractsRepositoryContract;

#[contractimpl]
impl ContractsRepositoryContract {
    /// `access_control` is the role registry consulted for
    /// `REPOSITORY_OWNER`.
    pub fn __constructor(env: Env, access_control: Address) {
        env.storage().instance().set(&ACL, &access_control);
    }

    /// Binds `name` to `address`, replacing any previous binding.
    pub fn set_contract(
        env: Env,
        caller: Address,
        name: Symbol,
        address: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let acl: Address = env
            .storage()
            .instance()
            .get(&ACL)
            .ok_or(ContractError::NotInitialized)?;
        if !roles::has_role(&env, &acl, &roles::REPOSITORY_OWNER, &caller) {
            return Err(ContractError::Unauthorized);
        }

        let key = (ENTRY, name.clone());
        env.storage().persistent().set(&key, &address);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

        events::publish_contract_set(&env, name, address);

        Ok(())
    }

    /// Resolves the current binding of `name`.
    pub fn get_contract(env: Env, name: Symbol) -> Result<Address, ContractError> {
        env.storage()
            .persistent()
            .get(&(ENTRY, name))
            .ok_or(ContractError::ContractNotFound)
    }

    pub fn get_access_control(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ACL)
            .ok_or(ContractError::NotInitialized)
    }
}
