//! Shared types and pure logic for the Afterlife contract suite.
//!
//! This crate provides:
//! - [`vault_types`]: the stored vault record, its tagged lifecycle phase,
//!   and the flattened [`VaultView`] read model.
//! - [`access_gate`]: the secret-release predicate consulted by secret
//!   stores on every retrieval.
//! - [`countdown`]: read-time derivation of the owner's cancellation window.
//!
//! Nothing here touches storage; contracts own their state and call into
//! these helpers.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod access_gate;
pub mod countdown;
pub mod vault_types;

pub use access_gate::*;
pub use countdown::*;
pub use vault_types::*;
