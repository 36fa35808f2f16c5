//! Structured event emitting for the secret escrow.

#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Fired when an owner deposits or replaces their escrowed secret.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecretDepositedEvent {
    pub owner: Address,
    pub payload_len: u32,
    pub has_attachment: bool,
    pub timestamp: u64,
}

/// Fired each time an heir is handed the secret.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecretReleasedEvent {
    pub owner: Address,
    pub requester: Address,
    pub timestamp: u64,
}

pub fn emit_secret_deposited(env: &Env, owner: Address, payload_len: u32, has_attachment: bool) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("SEC_DEP"), owner.clone()),
        SecretDepositedEvent {
            owner,
            payload_len,
            has_attachment,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn emit_secret_released(env: &Env, owner: Address, requester: Address) {
    env.events().publish(
        (symbol_short!("STREAM"), symbol_short!("SEC_REL"), owner.clone()),
        SecretReleasedEvent {
            owner,
            requester,
            timestamp: env.ledger().timestamp(),
        },
    );
}
