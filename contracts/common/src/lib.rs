//! Shared building blocks for the staking contract suite.
//!
//! This crate provides:
//! - [`CommonError`]: error codes raised from shared helpers.
//! - [`roles`] and [`interfaces`]: role identifiers, registry names and
//!   cross-contract clients for the access-control registry, the contracts
//!   repository, the escrow token and the base staking pool.
//! - [`accrual`]: the reward-per-token ledger shared by every pool.
//! - [`schedule`]: the one-shot reward schedule gate.
//! - [`fees`]: the flat anti-spam fee gate.
//!
//! Contract-specific errors live in each contract crate. Every crate owns its
//! own block of codes, so a failure bubbling up from a nested call keeps its
//! identity and is never decoded as one of the caller's variants. Codes below
//! 100 are left to the Stellar asset contract.
//!
//! | range | owner                  |
//! |-------|------------------------|
//! | 1xx   | `common`               |
//! | 2xx   | `access_control`       |
//! | 3xx   | `contracts_repository` |
//! | 4xx   | `escrow_token`         |
//! | 5xx   | `staking`              |
//! | 6xx   | `lp_staking`           |

#![cfg_attr(not(feature = "std"), no_std)]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod accrual;
pub mod fees;
pub mod interfaces;
pub mod roles;
pub mod schedule;

// ── Storage TTL ──────────────────────────────────────────────────────────────

/// Remaining-ledger threshold below which persistent entries are bumped.
pub const TTL_THRESHOLD: u32 = 5184000;
/// Ledger count persistent entries are extended to.
pub const TTL_EXTEND_TO: u32 = 10368000;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Errors raised from shared helpers via `panic_with_error!`.
///
/// These abort the whole invocation, so no partial state survives.
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    /// A fixed-point product or sum does not fit in `i128`.
    MathOverflow = 100,
    /// A fixed-point helper received a negative operand or a zero divisor.
    InvalidOperand = 101,
}
