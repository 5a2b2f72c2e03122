//! Early-exit penalty curve.
//!
//! The forfeited share of principal depends only on the delay the user picks
//! at unstake time, and never increases with a longer delay:
//!
//! | delay              | forfeited                 |
//! |--------------------|---------------------------|
//! | ≤ 10 days          | 50 %                      |
//! | 10 – 60 days       | linear from 50 % to 25 %  |
//! | ≥ 60 days          | 25 %                      |

pub const DAY: u64 = 86_400;

pub const BPS_DENOMINATOR: i128 = 10_000;

pub const SHORT_DELAY: u64 = 10 * DAY;
pub const LONG_DELAY: u64 = 60 * DAY;

pub const SHORT_DELAY_PENALTY_BPS: u32 = 5_000;
pub const LONG_DELAY_PENALTY_BPS: u32 = 2_500;

/// Forfeited share of principal, in basis points, for a chosen `delay`.
///
/// Between the anchors the reduction is truncated, so the penalty rounds up.
pub fn penalty_bps(delay: u64) -> u32 {
    if delay <= SHORT_DELAY {
        return SHORT_DELAY_PENALTY_BPS;
    }
    if delay >= LONG_DELAY {
        return LONG_DELAY_PENALTY_BPS;
    }
    let span = LONG_DELAY - SHORT_DELAY;
    let range = (SHORT_DELAY_PENALTY_BPS - LONG_DELAY_PENALTY_BPS) as u64;
    let reduction = range * (delay - SHORT_DELAY) / span;
    SHORT_DELAY_PENALTY_BPS - reduction as u32
}

/// Splits `amount` into `(penalized, net)` for a penalty of `bps`.
///
/// `penalized = ceil(amount × bps / 10_000)`, computed without forming the
/// full product. Any non-zero rate forfeits at least one unit.
pub fn split(amount: i128, bps: u32) -> (i128, i128) {
    let bps = bps as i128;
    let whole = amount / BPS_DENOMINATOR;
    let rest = amount % BPS_DENOMINATOR;
    let penalized = whole * bps + (rest * bps + BPS_DENOMINATOR - 1) / BPS_DENOMINATOR;
    (penalized, amount - penalized)
}
