#![no_std]

//! Liquidity-provider reward pool.
//!
//! Stakers lock LP receipt tokens and earn the base pool's principal token on
//! the same linear schedule as the base pool. Only a quarter of each claim is
//! paid out; the rest is staked into the base pool on the staker's behalf,
//! where it earns further rewards and is subject to the base pool's exit
//! penalty. LP tokens stay locked until the unlock horizon.

pub mod events;

use common::{
    accrual, fees,
    fees::FeeConfig,
    interfaces::{ContractsRepositoryClient, StakingPoolClient, STAKING},
    roles,
    schedule::{self, Schedule},
};
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, symbol_short, token, Address, Env,
    Symbol,
};

use events::InitializedEvent;

const CONFIG: Symbol = symbol_short!("CONFIG");

/// Share of each claim paid straight to the staker, in basis points.
pub const DIRECT_SHARE_BPS: i128 = 2_500;
const BPS_DENOMINATOR: i128 = 10_000;

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 601,
    AlreadyInitialized = 602,
    Unauthorized = 603,
    InvalidInput = 604,
    RewardBalanceTooSmall = 605,
    CannotUnstake = 606,
    TokensLocked = 607,
    OnlyWithFees = 608,
    OnlyFeesManagerAccess = 609,
    NotConfigured = 610,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LpStakingConfig {
    pub lp_token: Address,
    /// Principal token of the base pool; rewards are paid in it.
    pub reward_token: Address,
    pub access_control: Address,
    /// Resolves the base pool under `STAKING` at claim time.
    pub repository: Address,
    pub treasury: Address,
    pub fee_token: Address,
    pub fees: i128,
}

/// Outcome of a reward claim.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RewardSplit {
    pub direct: i128,
    pub restaked: i128,
}

#[contract]
pub struct LpStakingContract;

#[contractimpl]
impl LpStakingContract {
    pub fn __constructor(env: Env, config: LpStakingConfig) {
        if config.fees < 0 {
            panic_with_error!(&env, ContractError::InvalidInput);
        }
        fees::configure(
            &env,
            &FeeConfig {
                token: config.fee_token.clone(),
                amount: config.fees,
                treasury: config.treasury.clone(),
            },
        );
        env.storage().instance().set(&CONFIG, &config);
    }

    /// Fix the reward schedule. Same rules as the base pool: admin only,
    /// once, and the contract must already hold `amount` reward tokens.
    pub fn initialize(
        env: Env,
        caller: Address,
        amount: i128,
        start: u64,
        duration: u64,
        unlock_horizon: u64,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let config = Self::load_config(&env)?;
        if !roles::has_role(&env, &config.access_control, &roles::ADMIN, &caller) {
            return Err(ContractError::Unauthorized);
        }
        if schedule::is_active(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if amount <= 0 || duration == 0 {
            return Err(ContractError::InvalidInput);
        }
        let period_finish = start
            .checked_add(duration)
            .ok_or(ContractError::InvalidInput)?;
        if unlock_horizon < period_finish {
            return Err(ContractError::InvalidInput);
        }
        let custodied = token::Client::new(&env, &config.reward_token)
            .balance(&env.current_contract_address());
        if custodied < amount {
            return Err(ContractError::RewardBalanceTooSmall);
        }

        let reward_rate = amount / duration as i128;
        accrual::start_period(&env, reward_rate, start, period_finish);
        schedule::activate(
            &env,
            &Schedule {
                reward_amount: amount,
                start,
                duration,
                unlock_horizon,
            },
        );

        events::publish_initialized(
            &env,
            InitializedEvent {
                admin: caller,
                reward_amount: amount,
                reward_rate,
                start,
                period_finish,
                unlock_horizon,
            },
        );
        Ok(())
    }

    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        staker.require_auth();
        if !schedule::is_active(&env) {
            return Err(ContractError::NotInitialized);
        }
        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }
        let config = Self::load_config(&env)?;

        accrual::checkpoint(&env, Some(&staker));
        token::Client::new(&env, &config.lp_token).transfer(
            &staker,
            &env.current_contract_address(),
            &amount,
        );
        let new_total = accrual::increase_stake(&env, &staker, amount);

        events::publish_staked(&env, staker, amount, new_total);
        Ok(())
    }

    /// Return `amount` LP tokens. Only possible from the unlock horizon on.
    pub fn withdraw(
        env: Env,
        staker: Address,
        amount: i128,
        fee: i128,
    ) -> Result<(), ContractError> {
        staker.require_auth();
        Self::charge_fee(&env, &staker, fee)?;

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }
        if accrual::balance_of(&env, &staker) < amount {
            return Err(ContractError::CannotUnstake);
        }
        if env.ledger().timestamp() < schedule::unlock_horizon(&env) {
            return Err(ContractError::TokensLocked);
        }
        let config = Self::load_config(&env)?;

        accrual::checkpoint(&env, Some(&staker));
        let new_total =
            accrual::decrease_stake(&env, &staker, amount).ok_or(ContractError::CannotUnstake)?;
        token::Client::new(&env, &config.lp_token).transfer(
            &env.current_contract_address(),
            &staker,
            &amount,
        );

        events::publish_withdrawn(&env, staker, amount, new_total);
        Ok(())
    }

    /// Claim accrued rewards: [`DIRECT_SHARE_BPS`] of them are paid out, the
    /// remainder is staked into the base pool with `staker` as beneficiary.
    pub fn get_reward(
        env: Env,
        staker: Address,
        fee: i128,
    ) -> Result<RewardSplit, ContractError> {
        staker.require_auth();
        Self::charge_fee(&env, &staker, fee)?;
        let config = Self::load_config(&env)?;

        accrual::checkpoint(&env, Some(&staker));
        let reward = accrual::take_rewards(&env, &staker);
        if reward <= 0 {
            return Ok(RewardSplit::default());
        }

        let direct = accrual::mul_div(&env, reward, DIRECT_SHARE_BPS, BPS_DENOMINATOR);
        let restaked = reward - direct;
        let this = env.current_contract_address();
        let reward_token = token::Client::new(&env, &config.reward_token);

        if direct > 0 {
            reward_token.transfer(&this, &staker, &direct);
        }

        let staking_pool =
            ContractsRepositoryClient::new(&env, &config.repository).get_contract(&STAKING);
        if restaked > 0 {
            // The base pool pulls exactly this allowance within the call.
            reward_token.approve(&this, &staking_pool, &restaked, &env.ledger().sequence());
            StakingPoolClient::new(&env, &staking_pool).stake_as(&this, &staker, &restaked);
        }

        events::publish_reward_split(&env, staker, direct, restaked, staking_pool);
        Ok(RewardSplit { direct, restaked })
    }

    /// Sweep collected flat fees to the treasury. Fee managers only.
    pub fn transfer_fees(env: Env, caller: Address) -> Result<i128, ContractError> {
        caller.require_auth();
        let config = Self::load_config(&env)?;
        if !roles::has_role(&env, &config.access_control, &roles::FEES_MANAGER, &caller) {
            return Err(ContractError::OnlyFeesManagerAccess);
        }
        let amount = fees::sweep(&env);
        if amount > 0 {
            events::publish_fees_transferred(&env, caller, config.treasury, amount);
        }
        Ok(amount)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn total_supply(env: Env) -> i128 {
        accrual::load(&env).total_staked
    }

    pub fn balance_of(env: Env, staker: Address) -> i128 {
        accrual::balance_of(&env, &staker)
    }

    pub fn reward_rate(env: Env) -> i128 {
        accrual::load(&env).reward_rate
    }

    pub fn reward_per_token(env: Env) -> i128 {
        let state = accrual::load(&env);
        accrual::reward_per_token(&env, &state, env.ledger().timestamp())
    }

    pub fn last_time_reward_applicable(env: Env) -> u64 {
        let state = accrual::load(&env);
        accrual::last_time_reward_applicable(&state, env.ledger().timestamp())
    }

    pub fn period_finish(env: Env) -> u64 {
        accrual::load(&env).period_finish
    }

    pub fn earned(env: Env, staker: Address) -> i128 {
        accrual::earned(&env, &staker)
    }

    pub fn unlock_horizon(env: Env) -> u64 {
        schedule::unlock_horizon(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        schedule::is_active(&env)
    }

    pub fn fees(env: Env) -> i128 {
        fees::amount(&env)
    }

    pub fn collected_fees(env: Env) -> i128 {
        fees::collected(&env)
    }

    pub fn get_config(env: Env) -> Result<LpStakingConfig, ContractError> {
        Self::load_config(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn load_config(env: &Env) -> Result<LpStakingConfig, ContractError> {
        env.storage()
            .instance()
            .get(&CONFIG)
            .ok_or(ContractError::NotConfigured)
    }

    fn charge_fee(env: &Env, payer: &Address, fee: i128) -> Result<(), ContractError> {
        if !fees::charge(env, payer, fee) {
            return Err(ContractError::OnlyWithFees);
        }
        Ok(())
    }
}
