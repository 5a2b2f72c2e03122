#![no_std]

//! Non-tradeable escrow receipt token.
//!
//! The staking pool mints one unit per unit of principal staked and burns it
//! on unstake, so total supply always equals the pool's total stake. Holders
//! can only approve or transfer to an address holding
//! [`roles::ESCROW_MINTER`]; there is no secondary market in receipts.

pub mod events;

use common::roles;
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, String, Symbol};

// ── Storage key constants ────────────────────────────────────────────────────

const ACL: Symbol = symbol_short!("ACL");
const METADATA: Symbol = symbol_short!("META");
const TOTAL_SUPPLY: Symbol = symbol_short!("SUPPLY");

// Per-holder persistent storage uses tuple keys.
const BALANCE: Symbol = symbol_short!("BAL");
const ALLOWANCE: Symbol = symbol_short!("ALLOW");

const TTL_THRESHOLD: u32 = common::TTL_THRESHOLD;
const TTL_EXTEND_TO: u32 = common::TTL_EXTEND_TO;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 401,
    /// Caller lacks the minter role for minting.
    Unauthorized = 402,
    /// Burn by a non-minter, or approve/transfer towards a non-minter.
    OperationNotAllowed = 403,
    InsufficientAllowance = 404,
    InsufficientBalance = 405,
    InvalidInput = 406,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct EscrowTokenContract;

#[contractimpl]
impl EscrowTokenContract {
    pub fn __constructor(
        env: Env,
        access_control: Address,
        name: String,
        symbol: String,
        decimals: u32,
    ) {
        env.storage().instance().set(&ACL, &access_control);
        env.storage().instance().set(
            &METADATA,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
    }

    // ── Minter operations ────────────────────────────────────────────────────

    pub fn mint_to(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        caller.require_auth();
        if !Self::is_minter(&env, &caller)? {
            return Err(ContractError::Unauthorized);
        }
        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }

        let balance = Self::balance(env.clone(), to.clone());
        Self::write_balance(&env, &to, balance.saturating_add(amount));
        let supply = Self::total_supply(env.clone()).saturating_add(amount);
        env.storage().instance().set(&TOTAL_SUPPLY, &supply);

        events::publish_minted(&env, caller, to, amount, supply);
        Ok(())
    }

    /// Burns `amount` from `from`, spending the allowance `from` granted to
    /// `caller`. The minter role alone is not enough.
    pub fn burn_from(env: Env, caller: Address, from: Address, amount: i128) -> Result<(), ContractError> {
        caller.require_auth();
        if !Self::is_minter(&env, &caller)? {
            return Err(ContractError::OperationNotAllowed);
        }
        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }

        Self::spend_allowance(&env, &from, &caller, amount)?;
        let balance = Self::balance(env.clone(), from.clone());
        if balance < amount {
            return Err(ContractError::InsufficientBalance);
        }
        Self::write_balance(&env, &from, balance - amount);
        let supply = Self::total_supply(env.clone()) - amount;
        env.storage().instance().set(&TOTAL_SUPPLY, &supply);

        events::publish_burned(&env, caller, from, amount, supply);
        Ok(())
    }

    // ── Holder operations (minter counterparties only) ───────────────────────

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();
        if !Self::is_minter(&env, &spender)? {
            return Err(ContractError::OperationNotAllowed);
        }
        if amount < 0 {
            return Err(ContractError::InvalidInput);
        }

        let key = (ALLOWANCE, from.clone(), spender.clone());
        env.storage().persistent().set(&key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

        events::publish_approved(&env, from, spender, amount);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();
        if !Self::is_minter(&env, &to)? {
            return Err(ContractError::OperationNotAllowed);
        }
        Self::move_balance(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        spender.require_auth();
        if !Self::is_minter(&env, &spender)? {
            return Err(ContractError::OperationNotAllowed);
        }
        Self::spend_allowance(&env, &from, &spender, amount)?;
        Self::move_balance(&env, &from, &to, amount)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&(BALANCE, id))
            .unwrap_or(0)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&(ALLOWANCE, from, spender))
            .unwrap_or(0)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage().instance().get(&TOTAL_SUPPLY).unwrap_or(0)
    }

    pub fn name(env: Env) -> Result<String, ContractError> {
        Ok(Self::metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, ContractError> {
        Ok(Self::metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, ContractError> {
        Ok(Self::metadata(&env)?.decimals)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn metadata(env: &Env) -> Result<TokenMetadata, ContractError> {
        env.storage()
            .instance()
            .get(&METADATA)
            .ok_or(ContractError::NotInitialized)
    }

    fn is_minter(env: &Env, account: &Address) -> Result<bool, ContractError> {
        let acl: Address = env
            .storage()
            .instance()
            .get(&ACL)
            .ok_or(ContractError::NotInitialized)?;
        Ok(roles::has_role(env, &acl, &roles::ESCROW_MINTER, account))
    }

    fn write_balance(env: &Env, id: &Address, amount: i128) {
        let key = (BALANCE, id.clone());
        env.storage().persistent().set(&key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }

    fn spend_allowance(
        env: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        let allowance = Self::allowance(env.clone(), from.clone(), spender.clone());
        if allowance < amount {
            return Err(ContractError::InsufficientAllowance);
        }
        let key = (ALLOWANCE, from.clone(), spender.clone());
        env.storage().persistent().set(&key, &(allowance - amount));
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
        Ok(())
    }

    fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }
        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            return Err(ContractError::InsufficientBalance);
        }
        Self::write_balance(env, from, from_balance - amount);
        let to_balance = Self::balance(env.clone(), to.clone());
        Self::write_balance(env, to, to_balance.saturating_add(amount));

        events::publish_transferred(env, from.clone(), to.clone(), amount);
        Ok(())
    }
}
