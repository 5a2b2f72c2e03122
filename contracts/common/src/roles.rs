use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::interfaces::AccessControlClient;

// ── Role identifiers ─────────────────────────────────────────────────────────

/// Administrator: may grant and revoke every role, itself included.
pub const ADMIN: Symbol = symbol_short!("ADMIN");
/// May mint and burn escrow receipt tokens and be approved to move them.
pub const ESCROW_MINTER: Symbol = symbol_short!("ESC_MINT");
/// May sweep collected flat fees to the treasury.
pub const FEES_MANAGER: Symbol = symbol_short!("FEE_MGR");
/// May overwrite bindings in the contracts repository.
pub const REPOSITORY_OWNER: Symbol = symbol_short!("REPO_OWN");

// ── Guards ───────────────────────────────────────────────────────────────────

/// Asks the access-control registry at `registry` whether `account` holds
/// `role`.
///
/// Contracts call this at the entry of every gated operation and map a
/// `false` to their own error variant.
pub fn has_role(env: &Env, registry: &Address, role: &Symbol, account: &Address) -> bool {
    AccessControlClient::new(env, registry).has_role(role, account)
}
