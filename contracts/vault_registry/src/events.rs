//! Structured event emitting for the vault registry.
//!
//! Every state transition publishes under `("STREAM", <kind>, owner)` so
//! off-chain listeners (alerting oracles, portals) can follow a single vault
//! or subscribe to one kind of transition across all of them.

#![allow(deprecated)] // events().publish migration tracked separately

use common::AttestorRole;
use soroban_sdk::{contracttype, symbol_short, Address, Env};

// ── Event payloads ───────────────────────────────────────────────────────────

/// Fired when an owner registers a vault.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultCreatedEvent {
    pub owner: Address,
    pub heir_count: u32,
    pub hospital: Address,
    pub government: Address,
    pub verifier: Address,
    pub timestamp: u64,
}

/// Fired when the hospital attestor opens a death-protocol countdown.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProtocolInitiatedEvent {
    pub owner: Address,
    pub initiated_by: Address,
    pub timestamp: u64,
}

/// Fired for every recorded attestor approval.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeathApprovedEvent {
    pub owner: Address,
    pub attestor: Address,
    pub role: AttestorRole,
    pub timestamp: u64,
}

/// Fired once, when the final approval unlocks a vault.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultUnlockedEvent {
    pub owner: Address,
    pub initiated_at: u64,
    pub unlocked_at: u64,
}

/// Fired when the owner cancels a running protocol.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProtocolCancelledEvent {
    pub owner: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigUpdatedEvent {
    pub admin: Address,
    pub cancel_window_secs: u64,
    pub timestamp: u64,
}

// ── Publishers ───────────────────────────────────────────────────────────────

pub fn emit_vault_created(
    env: &Env,
    owner: Address,
    heir_count: u32,
    hospital: Address,
    government: Address,
    verifier: Address,
) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("VLT_NEW"), owner.clone()),
        VaultCreatedEvent {
            owner,
            heir_count,
            hospital,
            government,
            verifier,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_protocol_initiated(env: &Env, owner: Address, initiated_by: Address) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("PROTO_INI"), owner.clone()),
        ProtocolInitiatedEvent {
            owner,
            initiated_by,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_death_approved(env: &Env, owner: Address, attestor: Address, role: AttestorRole) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("DTH_APR"), owner.clone()),
        DeathApprovedEvent {
            owner,
            attestor,
            role,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_vault_unlocked(env: &Env, owner: Address, initiated_at: u64, unlocked_at: u64) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("VLT_UNLK"), owner.clone()),
        VaultUnlockedEvent {
            owner,
            initiated_at,
            unlocked_at,
        },
    );
}

pub fn emit_protocol_cancelled(env: &Env, owner: Address) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("PROTO_CNL"), owner.clone()),
        ProtocolCancelledEvent {
            owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_config_updated(env: &Env, admin: Address, cancel_window_secs: u64) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("CFG_UPD")),
        ConfigUpdatedEvent {
            admin,
            cancel_window_secs,
            timestamp: env.ledger().timestamp(),
        },
    );
}
