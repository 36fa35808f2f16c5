#![no_std]

//! # Secret Escrow
//!
//! Holds one opaque payload per vault owner and hands it to heirs once the
//! vault registry reports consensus. Payloads are expected to be ciphertext;
//! the escrow never inspects them.
//!
//! Every retrieval re-reads the registry and runs the Access Gate. Nothing
//! about a previous answer is remembered.

pub mod events;
pub mod registry;

use common::access_gate;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Bytes, Env, String,
    Symbol, Vec,
};

// ── Storage keys ─────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
pub(crate) const REGISTRY: Symbol = symbol_short!("REGISTRY");
const SECRET: Symbol = symbol_short!("SECRET");

// TTL: ~60 days at 5s/ledger
pub const TTL_THRESHOLD: u32 = 1_036_800;
const TTL_EXTEND_TO: u32 = 2_073_600;

/// Upper bound on a deposited payload.
pub const MAX_PAYLOAD_BYTES: u32 = 8_192;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum EscrowError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    VaultNotFound = 3,
    VaultSettled = 4,
    AccessDenied = 5,
    SecretNotFound = 6,
    InvalidPayload = 7,
}

/// An escrowed secret as stored.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecretRecord {
    pub owner: Address,
    /// Heir wallets as listed when the secret was deposited. Informational;
    /// release decisions always use the registry's live heir table.
    pub heirs: Vec<Address>,
    pub payload: Bytes,
    pub attachment_ref: Option<String>,
    pub deposited_at: u64,
}

/// What an authorised heir receives.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecretRelease {
    pub owner: Address,
    pub requester: Address,
    /// The requester's allocation percentage.
    pub share: u32,
    pub payload: Bytes,
    pub attachment_ref: Option<String>,
    pub released_at: u64,
}

fn secret_key(owner: &Address) -> (Symbol, Address) {
    (SECRET, owner.clone())
}

#[contract]
pub struct SecretEscrowContract;

#[contractimpl]
impl SecretEscrowContract {
    /// Bind the escrow to a vault registry deployment.
    pub fn initialize(env: Env, admin: Address, registry: Address) -> Result<(), EscrowError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(EscrowError::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&REGISTRY, &registry);
        env.storage().instance().set(&INITIALIZED, &true);
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
        Ok(())
    }

    /// Store or replace the owner's secret while their vault is still locked.
    pub fn deposit_secret(
        env: Env,
        owner: Address,
        payload: Bytes,
        attachment_ref: Option<String>,
    ) -> Result<(), EscrowError> {
        Self::require_initialized(&env)?;
        owner.require_auth();

        if payload.is_empty() || payload.len() > MAX_PAYLOAD_BYTES {
            return Err(EscrowError::InvalidPayload);
        }

        let vault = registry::fetch_vault(&env, &owner)?;
        if vault.is_unlocked {
            return Err(EscrowError::VaultSettled);
        }

        let payload_len = payload.len();
        let has_attachment = attachment_ref.is_some();
        let record = SecretRecord {
            owner: owner.clone(),
            heirs: vault.heir_wallets(&env),
            payload,
            attachment_ref,
            deposited_at: env.ledger().timestamp(),
        };
        let key = secret_key(&owner);
        env.storage().persistent().set(&key, &record);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

        events::emit_secret_deposited(&env, owner, payload_len, has_attachment);
        Ok(())
    }

    /// Release the owner's secret to `requester` if the Access Gate allows it.
    pub fn retrieve_secret(env: Env, requester: Address, owner: Address) -> Result<SecretRelease, EscrowError> {
        Self::require_initialized(&env)?;
        requester.require_auth();

        let vault = registry::fetch_vault(&env, &owner)?;
        if !access_gate::can_retrieve_secret(&vault, &requester) {
            return Err(EscrowError::AccessDenied);
        }
        let share = access_gate::heir_share(&vault, &requester).ok_or(EscrowError::AccessDenied)?;

        let record: SecretRecord = env
            .storage()
            .persistent()
            .get(&secret_key(&owner))
            .ok_or(EscrowError::SecretNotFound)?;

        events::emit_secret_released(&env, owner.clone(), requester.clone());

        Ok(SecretRelease {
            owner,
            requester,
            share,
            payload: record.payload,
            attachment_ref: record.attachment_ref,
            released_at: env.ledger().timestamp(),
        })
    }

    pub fn has_secret(env: Env, owner: Address) -> bool {
        env.storage().persistent().has(&secret_key(&owner))
    }

    pub fn get_registry(env: Env) -> Option<Address> {
        env.storage().instance().get(&REGISTRY)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&ADMIN)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), EscrowError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(EscrowError::NotInitialized);
        }
        Ok(())
    }
}
