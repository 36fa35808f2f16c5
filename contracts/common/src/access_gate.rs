//! Release predicate for escrowed secrets.
//!
//! Secret stores call into this module on every retrieval attempt with a
//! freshly read [`VaultView`]. Nothing here is cached or stored: the answer
//! is a pure function of the view and the requesting identity.
//!
//! `Address` values are canonical strkeys, so plain equality already gives
//! the case-insensitive wallet comparison off-chain stores rely on.

use soroban_sdk::Address;

use crate::vault_types::VaultView;

/// `true` when `requester` is listed in the vault's heir table.
pub fn is_heir(vault: &VaultView, requester: &Address) -> bool {
    vault.heirs.iter().any(|share| share.wallet == *requester)
}

/// Allocation percentage of `requester`, if they are an heir.
pub fn heir_share(vault: &VaultView, requester: &Address) -> Option<u32> {
    vault
        .heirs
        .iter()
        .find(|share| share.wallet == *requester)
        .map(|share| share.percentage)
}

/// Whether `requester` may retrieve the vault's escrowed secret right now.
///
/// Requires the vault to be unlocked *and* the requester to be an heir.
/// Vault existence alone never grants access.
pub fn can_retrieve_secret(vault: &VaultView, requester: &Address) -> bool {
    vault.is_unlocked && is_heir(vault, requester)
}
