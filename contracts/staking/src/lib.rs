#![no_std]

pub mod events;
pub mod penalty;
pub mod vesting;

use common::{
    accrual, fees,
    fees::FeeConfig,
    interfaces::EscrowTokenClient,
    roles,
    schedule::{self, Schedule},
};
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, symbol_short, token, Address, Env,
    Symbol,
};

use events::UnstakedEvent;
use vesting::ClaimRound;

// ── Storage key constants ────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 501,
    AlreadyInitialized = 502,
    Unauthorized = 503,
    InvalidInput = 504,
    RewardBalanceTooSmall = 505,
    CannotUnstake = 506,
    RoundDoesNotExist = 507,
    BeforeReleaseTime = 508,
    TokensAlreadyClaimed = 509,
    OnlyWithFees = 510,
    OnlyFeesManagerAccess = 511,
    NotConfigured = 512,
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// Deployment wiring, fixed at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingConfig {
    /// Token users stake; rewards are paid in the same token.
    pub principal_token: Address,
    /// Receipt token minted 1:1 with stake. This contract must hold the
    /// escrow minter role.
    pub escrow_token: Address,
    pub access_control: Address,
    pub repository: Address,
    /// Receives unstake penalties and swept fees.
    pub treasury: Address,
    /// Native asset token the flat fee is paid in.
    pub fee_token: Address,
    pub fees: i128,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    pub fn __constructor(env: Env, config: StakingConfig) {
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

    // ── Initialisation ──────────────────────────────────────────────────────

    /// Fix the reward schedule. Runs once, ever.
    ///
    /// * `amount`         – total reward to distribute; the contract must
    ///                      already hold at least this much principal.
    /// * `start`          – timestamp accrual begins.
    /// * `duration`       – seconds the stream lasts; the rate is
    ///                      `amount / duration`, truncated.
    /// * `unlock_horizon` – latest release time of any claim round; unstakes
    ///                      from this point on carry no penalty.
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

        let custodied = token::Client::new(&env, &config.principal_token)
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
            caller,
            amount,
            reward_rate,
            start,
            period_finish,
            unlock_horizon,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` principal and receive the same amount of escrow.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        staker.require_auth();
        Self::deposit(&env, &staker, &staker, amount, false)
    }

    /// Deposit `amount` principal paid by `funder` on behalf of
    /// `beneficiary`, who receives the stake and the escrow.
    ///
    /// The principal is pulled through an allowance `funder` granted to this
    /// pool, so contracts can fund stakes without signing a nested transfer.
    pub fn stake_as(
        env: Env,
        funder: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        funder.require_auth();
        Self::deposit(&env, &funder, &beneficiary, amount, true)
    }

    // ── Unstaking ───────────────────────────────────────────────────────────

    /// Burn `amount` escrow and open a claim round releasing after `delay`
    /// seconds. Returns the round index.
    ///
    /// The penalty for the chosen delay goes to the treasury immediately;
    /// the rest is paid by `withdraw_tokens_to_claim` once released. The
    /// staker must have approved this contract to burn `amount` escrow.
    pub fn unstake(
        env: Env,
        staker: Address,
        amount: i128,
        delay: u64,
        fee: i128,
    ) -> Result<u32, ContractError> {
        staker.require_auth();
        Self::charge_fee(&env, &staker, fee)?;

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }
        if accrual::balance_of(&env, &staker) < amount {
            return Err(ContractError::CannotUnstake);
        }
        let config = Self::load_config(&env)?;

        // 1. Flush rewards before reducing stake.
        accrual::checkpoint(&env, Some(&staker));
        let new_total =
            accrual::decrease_stake(&env, &staker, amount).ok_or(ContractError::CannotUnstake)?;

        // 2. Burn the receipt; a missing allowance aborts the whole call.
        EscrowTokenClient::new(&env, &config.escrow_token).burn_from(
            &env.current_contract_address(),
            &staker,
            &amount,
        );

        // 3. Price the exit and pay the penalty out.
        let now = env.ledger().timestamp();
        let unlock_horizon = schedule::unlock_horizon(&env);
        let (penalty_bps, release_timestamp) = if now >= unlock_horizon {
            (0, now)
        } else {
            (
                penalty::penalty_bps(delay),
                now.saturating_add(delay).min(unlock_horizon),
            )
        };
        let (penalty_amount, net_amount) = penalty::split(amount, penalty_bps);
        if penalty_amount > 0 {
            token::Client::new(&env, &config.principal_token).transfer(
                &env.current_contract_address(),
                &config.treasury,
                &penalty_amount,
            );
        }

        // 4. Record the round.
        let round_index = vesting::append(
            &env,
            &ClaimRound {
                owner: staker.clone(),
                principal_amount: amount,
                penalty_amount,
                net_amount,
                release_timestamp,
                claimed: false,
            },
        );

        events::publish_unstaked(
            &env,
            UnstakedEvent {
                staker,
                round_index,
                amount,
                penalty_amount,
                net_amount,
                release_timestamp,
                new_total_staked: new_total,
                timestamp: now,
            },
        );

        Ok(round_index)
    }

    /// Pay out a released claim round. Returns the amount paid.
    pub fn withdraw_tokens_to_claim(
        env: Env,
        staker: Address,
        round_index: u32,
        fee: i128,
    ) -> Result<i128, ContractError> {
        staker.require_auth();
        Self::charge_fee(&env, &staker, fee)?;

        if round_index >= vesting::counter(&env, &staker) {
            return Err(ContractError::RoundDoesNotExist);
        }
        let round =
            vesting::load(&env, &staker, round_index).ok_or(ContractError::RoundDoesNotExist)?;
        if round.claimed {
            return Err(ContractError::TokensAlreadyClaimed);
        }
        if env.ledger().timestamp() < round.release_timestamp {
            return Err(ContractError::BeforeReleaseTime);
        }

        // Mark as claimed before transfer (checks-effects-interactions).
        vesting::mark_claimed(&env, &staker, round_index)
            .ok_or(ContractError::TokensAlreadyClaimed)?;

        let config = Self::load_config(&env)?;
        if round.net_amount > 0 {
            token::Client::new(&env, &config.principal_token).transfer(
                &env.current_contract_address(),
                &staker,
                &round.net_amount,
            );
        }

        events::publish_tokens_claimed(&env, staker, round_index, round.net_amount);

        Ok(round.net_amount)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Claim all accrued rewards. Returns the amount paid, which may be zero.
    pub fn get_reward(env: Env, staker: Address, fee: i128) -> Result<i128, ContractError> {
        staker.require_auth();
        Self::charge_fee(&env, &staker, fee)?;
        let config = Self::load_config(&env)?;

        accrual::checkpoint(&env, Some(&staker));
        let reward = accrual::take_rewards(&env, &staker);
        if reward <= 0 {
            return Ok(0);
        }

        token::Client::new(&env, &config.principal_token).transfer(
            &env.current_contract_address(),
            &staker,
            &reward,
        );

        events::publish_reward_paid(&env, staker, reward);

        Ok(reward)
    }

    // ── Fees ────────────────────────────────────────────────────────────────

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

    pub fn fees(env: Env) -> i128 {
        fees::amount(&env)
    }

    pub fn collected_fees(env: Env) -> i128 {
        fees::collected(&env)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Total principal currently staked.
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

    pub fn user_tokens_to_claim_counter(env: Env, staker: Address) -> u32 {
        vesting::counter(&env, &staker)
    }

    pub fn user_tokens_to_claim(
        env: Env,
        staker: Address,
        round_index: u32,
    ) -> Result<ClaimRound, ContractError> {
        vesting::load(&env, &staker, round_index).ok_or(ContractError::RoundDoesNotExist)
    }

    /// Forfeited share, in basis points, for unstaking with `delay` now.
    pub fn penalty_for(env: Env, delay: u64) -> u32 {
        if env.ledger().timestamp() >= schedule::unlock_horizon(&env) {
            return 0;
        }
        penalty::penalty_bps(delay)
    }

    pub fn unlock_horizon(env: Env) -> u64 {
        schedule::unlock_horizon(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        schedule::is_active(&env)
    }

    pub fn get_schedule(env: Env) -> Result<Schedule, ContractError> {
        schedule::load(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn get_config(env: Env) -> Result<StakingConfig, ContractError> {
        Self::load_config(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn load_config(env: &Env) -> Result<StakingConfig, ContractError> {
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

    /// Shared body of `stake` and `stake_as`.
    ///
    /// The beneficiary is checkpointed before the balance changes so the new
    /// stake does not retroactively earn rewards.
    fn deposit(
        env: &Env,
        funder: &Address,
        beneficiary: &Address,
        amount: i128,
        from_allowance: bool,
    ) -> Result<(), ContractError> {
        if !schedule::is_active(env) {
            return Err(ContractError::NotInitialized);
        }
        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }
        let config = Self::load_config(env)?;

        accrual::checkpoint(env, Some(beneficiary));

        let pool = env.current_contract_address();
        let principal = token::Client::new(env, &config.principal_token);
        if from_allowance {
            principal.transfer_from(&pool, funder, &pool, &amount);
        } else {
            principal.transfer(funder, &pool, &amount);
        }
        let new_total = accrual::increase_stake(env, beneficiary, amount);

        EscrowTokenClient::new(env, &config.escrow_token).mint_to(&pool, beneficiary, &amount);

        events::publish_staked(env, funder.clone(), beneficiary.clone(), amount, new_total);

        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_fees;
