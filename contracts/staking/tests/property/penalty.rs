#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for the early-exit penalty curve.
//!
//! Invariants tested:
//! - The penalty never increases with a longer delay
//! - The penalty always lies between the two anchor rates
//! - `split` never creates or destroys principal

use proptest::prelude::*;
use staking::penalty::{
    penalty_bps, split, LONG_DELAY, LONG_DELAY_PENALTY_BPS, SHORT_DELAY,
    SHORT_DELAY_PENALTY_BPS,
};

proptest! {
    #[test]
    fn prop_penalty_non_increasing(a in 0u64..(2 * LONG_DELAY), b in 0u64..(2 * LONG_DELAY)) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(penalty_bps(long) <= penalty_bps(short));
    }

    #[test]
    fn prop_penalty_within_anchors(delay in any::<u64>()) {
        let bps = penalty_bps(delay);
        prop_assert!(bps >= LONG_DELAY_PENALTY_BPS);
        prop_assert!(bps <= SHORT_DELAY_PENALTY_BPS);
        if delay <= SHORT_DELAY {
            prop_assert_eq!(bps, SHORT_DELAY_PENALTY_BPS);
        }
        if delay >= LONG_DELAY {
            prop_assert_eq!(bps, LONG_DELAY_PENALTY_BPS);
        }
    }

    #[test]
    fn prop_split_conserves_amount(amount in 0i128..=i128::MAX, bps in 0u32..=10_000u32) {
        let (penalized, net) = split(amount, bps);
        prop_assert!(penalized >= 0);
        prop_assert!(net >= 0);
        prop_assert_eq!(penalized + net, amount);
    }
}
