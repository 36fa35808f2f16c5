//! Storage layout for the vault registry.

use common::{Vault, DEFAULT_CANCEL_WINDOW_SECS};
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage key prefixes ─────────────────────────────────────────────────────

pub(crate) const VAULT: Symbol = symbol_short!("VAULT");
pub(crate) const CONFIG: Symbol = symbol_short!("CONFIG");

// TTL: ~60 days at 5s/ledger
const TTL_THRESHOLD: u32 = 1_036_800;
const TTL_EXTEND_TO: u32 = 2_073_600;

/// Registry-wide settings held in instance storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub admin: Address,
    /// Length of the owner's courtesy window after a countdown starts.
    pub cancel_window_secs: u64,
}

// ── Vault records ────────────────────────────────────────────────────────────

pub(crate) fn vault_key(owner: &Address) -> (Symbol, Address) {
    (VAULT, owner.clone())
}

pub(crate) fn has_vault(env: &Env, owner: &Address) -> bool {
    env.storage().persistent().has(&vault_key(owner))
}

pub(crate) fn load_vault(env: &Env, owner: &Address) -> Option<Vault> {
    env.storage().persistent().get(&vault_key(owner))
}

pub(crate) fn store_vault(env: &Env, vault: &Vault) {
    let key = vault_key(&vault.owner);
    env.storage().persistent().set(&key, vault);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Configuration ────────────────────────────────────────────────────────────

pub(crate) fn load_config(env: &Env) -> Option<RegistryConfig> {
    env.storage().instance().get(&CONFIG)
}

pub(crate) fn store_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&CONFIG, config);
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Configured window, or the 72-hour default when never initialised.
pub(crate) fn cancel_window(env: &Env) -> u64 {
    load_config(env)
        .map(|c| c.cancel_window_secs)
        .unwrap_or(DEFAULT_CANCEL_WINDOW_SECS)
}
