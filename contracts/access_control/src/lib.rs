#![no_std]

//! Flat role-membership registry.
//!
//! Every other contract in the suite consults `has_role` at the entry of its
//! gated operations. Holders of [`roles::ADMIN`] may grant and revoke any
//! role, including `ADMIN` itself; there is no other hierarchy.

pub mod events;

use common::roles;
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

const ROLE: Symbol = symbol_short!("ROLE");

const TTL_THRESHOLD: u32 = common::TTL_THRESHOLD;
const TTL_EXTEND_TO: u32 = common::TTL_EXTEND_TO;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    /// Caller does not hold the administrator role.
    Unauthorized = 201,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct AccessControlContract;

#[contractimpl]
impl AccessControlContract {
    /// Bootstraps the registry with `admin` holding the administrator role.
    pub fn __constructor(env: Env, admin: Address) {
        Self::write_role(&env, &roles::ADMIN, &admin);
        events::publish_role_granted(&env, roles::ADMIN, admin.clone(), admin);
    }

    /// Grants `role` to `account`. Granting an already-held role is a no-op.
    pub fn grant_role(
        env: Env,
        caller: Address,
        role: Symbol,
        account: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if !Self::has_role(env.clone(), role.clone(), account.clone()) {
            Self::write_role(&env, &role, &account);
            events::publish_role_granted(&env, role, account, caller);
        }
        Ok(())
    }

    /// Revokes `role` from `account`. Revoking a role that is not held is a
    /// no-op.
    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Symbol,
        account: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if Self::has_role(env.clone(), role.clone(), account.clone()) {
            env.storage().persistent().remove(&Self::role_key(&role, &account));
            events::publish_role_revoked(&env, role, account, caller);
        }
        Ok(())
    }

    pub fn has_role(env: Env, role: Symbol, account: Address) -> bool {
        env.storage()
            .persistent()
            .get(&Self::role_key(&role, &account))
            .unwrap_or(false)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn role_key(role: &Symbol, account: &Address) -> (Symbol, Symbol, Address) {
        (ROLE, role.clone(), account.clone())
    }

    fn write_role(env: &Env, role: &Symbol, account: &Address) {
        let key = Self::role_key(role, account);
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !Self::has_role(env.clone(), roles::ADMIN, caller.clone()) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }
}
