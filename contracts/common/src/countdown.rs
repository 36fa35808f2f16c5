//! Read-time view of the owner's cancellation window.
//!
//! The countdown is never scheduled. Whether it has run out is a comparison
//! against the ledger clock made when someone asks.

use soroban_sdk::contracttype;

use crate::vault_types::{Vault, VaultPhase};

/// 72 hours.
pub const DEFAULT_CANCEL_WINDOW_SECS: u64 = 259_200;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CountdownStatus {
    /// No countdown running.
    Idle,
    /// Seconds left before the owner's courtesy window closes.
    Running(u64),
    /// Window closed; the vault is still waiting on attestors.
    Elapsed,
    Unlocked,
}

/// Instant at which a countdown started at `initiated_at` runs out.
pub fn window_deadline(initiated_at: u64, window_secs: u64) -> u64 {
    initiated_at.saturating_add(window_secs)
}

/// Derive the countdown status of `vault` at ledger time `now`.
///
/// Approvals do not wait for the window, so `Unlocked` may be reported
/// before the window would have elapsed.
pub fn status_at(vault: &Vault, now: u64, window_secs: u64) -> CountdownStatus {
    match &vault.phase {
        VaultPhase::Active => CountdownStatus::Idle,
        VaultPhase::Unlocked(_) => CountdownStatus::Unlocked,
        VaultPhase::Initiated(c) => {
            let deadline = window_deadline(c.initiated_at, window_secs);
            if now >= deadline {
                CountdownStatus::Elapsed
            } else {
                CountdownStatus::Running(deadline - now)
            }
        }
    }
}
