//! Flat anti-spam fee gate.
//!
//! Economically sensitive entry points take an explicit `fee` argument that
//! must equal the configured amount exactly. The fee is paid in the native
//! asset token, held by the contract, and swept to the treasury by a fee
//! manager. Authorization for the sweep is checked by the calling contract.

use soroban_sdk::{contracttype, symbol_short, token, Address, Env, Symbol};

const FEE_CONFIG: Symbol = symbol_short!("FEE_CFG");
const FEES_COLLECTED: Symbol = symbol_short!("FEE_COLL");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfig {
    /// Native asset token the fee is paid in.
    pub token: Address,
    /// Exact amount each gated call must attach.
    pub amount: i128,
    /// Destination of swept fees.
    pub treasury: Address,
}

pub fn configure(env: &Env, config: &FeeConfig) {
    env.storage().instance().set(&FEE_CONFIG, config);
}

pub fn config(env: &Env) -> Option<FeeConfig> {
    env.storage().instance().get(&FEE_CONFIG)
}

/// Configured flat fee, `0` when unset.
pub fn amount(env: &Env) -> i128 {
    config(env).map(|c| c.amount).unwrap_or(0)
}

pub fn collected(env: &Env) -> i128 {
    env.storage().instance().get(&FEES_COLLECTED).unwrap_or(0)
}

/// Checks `attached` against the configured fee and pulls it from `payer`.
///
/// Returns `false` without moving anything when the amount does not match.
pub fn charge(env: &Env, payer: &Address, attached: i128) -> bool {
    let Some(cfg) = config(env) else {
        return false;
    };
    if attached != cfg.amount {
        return false;
    }
    if attached > 0 {
        token::Client::new(env, &cfg.token).transfer(
            payer,
            &env.current_contract_address(),
            &attached,
        );
        let total = collected(env).saturating_add(attached);
        env.storage().instance().set(&FEES_COLLECTED, &total);
    }
    true
}

/// Sends every collected fee to the treasury and returns the amount moved.
pub fn sweep(env: &Env) -> i128 {
    let amount = collected(env);
    if amount <= 0 {
        return 0;
    }
    let Some(cfg) = config(env) else {
        return 0;
    };
    env.storage().instance().set(&FEES_COLLECTED, &0i128);
    token::Client::new(env, &cfg.token).transfer(
        &env.current_contract_address(),
        &cfg.treasury,
        &amount,
    );
    amount
}
