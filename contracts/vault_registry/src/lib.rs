#![no_std]

//! # Vault Registry
//!
//! Canonical state of every afterlife vault, one per owner.
//!
//! - **Roles**: an owner, an heir allocation table summing to 100 %, and three
//!   attestors (hospital, government, verifier), all fixed at creation.
//! - **Countdown**: only the hospital may open the death protocol; its own
//!   attestation counts as the first approval.
//! - **Consensus**: government and verifier approve in either order; the
//!   last approval unlocks the vault in the same invocation.
//! - **Owner veto**: while the vault is still locked the owner can cancel,
//!   which rolls every approval back.
//! - **Terminal unlock**: once unlocked nothing about the vault changes again.
//!
//! Per-vault serialisation comes from the ledger executing each invocation
//! atomically against a consistent snapshot.

pub mod allocation;
pub mod events;
pub mod storage;


use common::{
    access_gate, countdown, AttestorRole, Attestors, Countdown, CountdownStatus, HeirShare,
    Settlement, Vault, VaultPhase, VaultView,
};
use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, Vec};

pub use storage::RegistryConfig;

// ── Error codes ───────────────────────────────────────────────────────────────

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VaultError {
    NotFound = 1,
    AlreadyExists = 2,
    InvalidAllocation = 3,
    InvalidRole = 4,
    Unauthorized = 5,
    NotInitiated = 6,
    AlreadyApproved = 7,
    AlreadyInitiated = 8,
    AlreadyUnlocked = 9,
    AlreadyInitialized = 10,
    InvalidConfig = 11,
    NotConfigured = 12,
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct VaultRegistryContract;

#[contractimpl]
impl VaultRegistryContract {
    // ── Configuration ─────────────────────────────────────────────────────────

    /// Record the registry admin and the owner's cancellation window.
    ///
    /// Optional: without it every vault uses the 72-hour default window.
    pub fn initialize(env: Env, admin: Address, cancel_window_secs: u64) -> Result<(), VaultError> {
        if storage::load_config(&env).is_some() {
            return Err(VaultError::AlreadyInitialized);
        }
        admin.require_auth();
        if cancel_window_secs == 0 {
            return Err(VaultError::InvalidConfig);
        }

        storage::store_config(
            &env,
            &RegistryConfig {
                admin: admin.clone(),
                cancel_window_secs,
            },
        );
        events::emit_config_updated(&env, admin, cancel_window_secs);
        Ok(())
    }

    /// Change the cancellation window. Affects status reporting only.
    pub fn set_cancel_window(env: Env, admin: Address, cancel_window_secs: u64) -> Result<(), VaultError> {
        admin.require_auth();
        let mut config = storage::load_config(&env).ok_or(VaultError::NotConfigured)?;
        if config.admin != admin {
            return Err(VaultError::Unauthorized);
        }
        if cancel_window_secs == 0 {
            return Err(VaultError::InvalidConfig);
        }

        config.cancel_window_secs = cancel_window_secs;
        storage::store_config(&env, &config);
        events::emit_config_updated(&env, admin, cancel_window_secs);
        Ok(())
    }

    pub fn get_config(env: Env) -> Option<RegistryConfig> {
        storage::load_config(&env)
    }

    pub fn get_cancel_window(env: Env) -> u64 {
        storage::cancel_window(&env)
    }

    // ── State transitions ─────────────────────────────────────────────────────

    /// Register the caller's vault.
    ///
    /// * `heirs`: allocation table; percentages in `1..=100` summing to 100,
    ///             unique wallets, none equal to `owner`.
    /// * `hospital`, `government`, `verifier`: attestors; pairwise distinct
    ///             and distinct from `owner`.
    pub fn create_vault(
        env: Env,
        owner: Address,
        heirs: Vec<HeirShare>,
        hospital: Address,
        government: Address,
        verifier: Address,
    ) -> Result<VaultView, VaultError> {
        owner.require_auth();

        if storage::has_vault(&env, &owner) {
            return Err(VaultError::AlreadyExists);
        }

        let attestors = Attestors {
            hospital,
            government,
            verifier,
        };
        if !attestors.are_distinct_from(&owner) {
            return Err(VaultError::InvalidRole);
        }
        allocation::validate_heirs(&owner, &heirs)?;

        let vault = Vault {
            owner: owner.clone(),
            heirs,
            attestors,
            created_at: env.ledger().timestamp(),
            phase: VaultPhase::Active,
        };
        storage::store_vault(&env, &vault);

        events::emit_vault_created(
            &env,
            owner,
            vault.heirs.len(),
            vault.attestors.hospital.clone(),
            vault.attestors.government.clone(),
            vault.attestors.verifier.clone(),
        );

        Ok(vault.view())
    }

    /// Open the death protocol. Hospital only; counts as its approval.
    pub fn initiate_countdown(env: Env, owner: Address, caller: Address) -> Result<VaultView, VaultError> {
        caller.require_auth();
        let mut vault = storage::load_vault(&env, &owner).ok_or(VaultError::NotFound)?;

        if caller != vault.attestors.hospital {
            return Err(VaultError::Unauthorized);
        }
        match vault.phase {
            VaultPhase::Active => {}
            VaultPhase::Initiated(_) => return Err(VaultError::AlreadyInitiated),
            VaultPhase::Unlocked(_) => return Err(VaultError::AlreadyUnlocked),
        }

        // Zero is reserved for "no countdown" in the read model.
        vault.phase = VaultPhase::Initiated(Countdown {
            initiated_at: env.ledger().timestamp().max(1),
            gov_approved: false,
            verifier_approved: false,
        });
        storage::store_vault(&env, &vault);
        events::emit_protocol_initiated(&env, owner, caller);

        Ok(vault.view())
    }

    /// Record an attestor's approval of a running protocol.
    ///
    /// Not gated on the cancellation window: attestors may approve as soon
    /// as the countdown exists. The approval that completes the set unlocks
    /// the vault.
    pub fn approve_death(env: Env, owner: Address, caller: Address) -> Result<VaultView, VaultError> {
        caller.require_auth();
        let mut vault = storage::load_vault(&env, &owner).ok_or(VaultError::NotFound)?;

        let role = vault
            .attestors
            .role_of(&caller)
            .ok_or(VaultError::Unauthorized)?;

        let mut pending = match &vault.phase {
            VaultPhase::Active => return Err(VaultError::NotInitiated),
            VaultPhase::Unlocked(_) => return Err(VaultError::AlreadyApproved),
            VaultPhase::Initiated(c) => c.clone(),
        };

        match role {
            // Recorded when the hospital opened the countdown.
            AttestorRole::Hospital => return Err(VaultError::AlreadyApproved),
            AttestorRole::Government => {
                if pending.gov_approved {
                    return Err(VaultError::AlreadyApproved);
                }
                pending.gov_approved = true;
            }
            AttestorRole::Verifier => {
                if pending.verifier_approved {
                    return Err(VaultError::AlreadyApproved);
                }
                pending.verifier_approved = true;
            }
        }

        let now = env.ledger().timestamp().max(pending.initiated_at);
        let unlocked = pending.gov_approved && pending.verifier_approved;
        vault.phase = if unlocked {
            VaultPhase::Unlocked(Settlement {
                initiated_at: pending.initiated_at,
                unlocked_at: now,
            })
        } else {
            VaultPhase::Initiated(pending.clone())
        };
        storage::store_vault(&env, &vault);

        events::emit_death_approved(&env, owner.clone(), caller, role);
        if unlocked {
            events::emit_vault_unlocked(&env, owner, pending.initiated_at, now);
        }

        Ok(vault.view())
    }

    /// Owner's "I am alive": clears the countdown and every approval.
    pub fn cancel_protocol(env: Env, owner: Address, caller: Address) -> Result<VaultView, VaultError> {
        caller.require_auth();
        let mut vault = storage::load_vault(&env, &owner).ok_or(VaultError::NotFound)?;

        if caller != vault.owner {
            return Err(VaultError::Unauthorized);
        }
        if vault.is_unlocked() {
            return Err(VaultError::AlreadyUnlocked);
        }

        vault.phase = VaultPhase::Active;
        storage::store_vault(&env, &vault);
        events::emit_protocol_cancelled(&env, owner);

        Ok(vault.view())
    }

    // ── Views ─────────────────────────────────────────────────────────────────

    /// Full read model of `owner`'s vault, or `None` if none exists.
    pub fn get_vault(env: Env, owner: Address) -> Option<VaultView> {
        storage::load_vault(&env, &owner).map(|v| v.view())
    }

    /// Access Gate over the live read model.
    pub fn can_retrieve_secret(env: Env, owner: Address, requester: Address) -> bool {
        storage::load_vault(&env, &owner)
            .map(|v| access_gate::can_retrieve_secret(&v.view(), &requester))
            .unwrap_or(false)
    }

    /// `true` once the vault exists and has reached consensus.
    pub fn is_claimable(env: Env, owner: Address) -> bool {
        storage::load_vault(&env, &owner)
            .map(|v| v.is_unlocked())
            .unwrap_or(false)
    }

    /// Where the owner's cancellation window stands at the current ledger time.
    pub fn countdown_status(env: Env, owner: Address) -> CountdownStatus {
        match storage::load_vault(&env, &owner) {
            Some(vault) => countdown::status_at(
                &vault,
                env.ledger().timestamp(),
                storage::cancel_window(&env),
            ),
            None => CountdownStatus::Idle,
        }
    }
}
