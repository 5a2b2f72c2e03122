//! Delayed-withdrawal ledger.
//!
//! Every unstake appends one [`ClaimRound`] under `(owner, index)`, with
//! indices counting up from zero per owner. Rounds are never rewritten except
//! to flip `claimed` from `false` to `true`.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const ROUND: Symbol = symbol_short!("ROUND");
const ROUND_COUNTER: Symbol = symbol_short!("ROUND_CTR");

const TTL_THRESHOLD: u32 = common::TTL_THRESHOLD;
const TTL_EXTEND_TO: u32 = common::TTL_EXTEND_TO;

/// One pending delayed-unstake ticket.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimRound {
    pub owner: Address,
    /// Escrow burned for this round.
    pub principal_amount: i128,
    /// Sent to the treasury when the round was opened.
    pub penalty_amount: i128,
    /// Paid to the owner on release.
    pub net_amount: i128,
    pub release_timestamp: u64,
    pub claimed: bool,
}

fn round_key(owner: &Address, index: u32) -> (Symbol, Address, u32) {
    (ROUND, owner.clone(), index)
}

fn counter_key(owner: &Address) -> (Symbol, Address) {
    (ROUND_COUNTER, owner.clone())
}

/// Number of rounds `owner` has opened so far.
pub fn counter(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&counter_key(owner))
        .unwrap_or(0)
}

/// Appends `round` at the owner's next index and returns that index.
pub fn append(env: &Env, round: &ClaimRound) -> u32 {
    let index = counter(env, &round.owner);

    let key = round_key(&round.owner, index);
    env.storage().persistent().set(&key, round);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

    let ctr_key = counter_key(&round.owner);
    env.storage().persistent().set(&ctr_key, &(index + 1));
    env.storage()
        .persistent()
        .extend_ttl(&ctr_key, TTL_THRESHOLD, TTL_EXTEND_TO);

    index
}

pub fn load(env: &Env, owner: &Address, index: u32) -> Option<ClaimRound> {
    env.storage().persistent().get(&round_key(owner, index))
}

/// Flips the round's `claimed` flag. Returns the updated round, or `None`
/// if it does not exist or was already claimed.
pub fn mark_claimed(env: &Env, owner: &Address, index: u32) -> Option<ClaimRound> {
    let mut round = load(env, owner, index)?;
    if round.claimed {
        return None;
    }
    round.claimed = true;
    let key = round_key(owner, index);
    env.storage().persistent().set(&key, &round);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    Some(round)
}
