use soroban_sdk::{contracttype, Address, Env, Vec};

/// One row of a vault's heir allocation table.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HeirShare {
    pub wallet: Address,
    /// Whole percent, 1–100. All shares of a vault sum to exactly 100.
    pub percentage: u32,
}

/// The three independent attestors whose approval unlocks a vault.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attestors {
    /// Medical authority; the only role allowed to start the countdown.
    pub hospital: Address,
    /// Government registry.
    pub government: Address,
    /// Legal verifier.
    pub verifier: Address,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AttestorRole {
    Hospital = 0,
    Government = 1,
    Verifier = 2,
}

impl Attestors {
    /// Resolve which role, if any, `caller` holds on this vault.
    pub fn role_of(&self, caller: &Address) -> Option<AttestorRole> {
        if *caller == self.hospital {
            Some(AttestorRole::Hospital)
        } else if *caller == self.government {
            Some(AttestorRole::Government)
        } else if *caller == self.verifier {
            Some(AttestorRole::Verifier)
        } else {
            None
        }
    }

    /// `true` when no two roles share an identity and none equals `owner`.
    pub fn are_distinct_from(&self, owner: &Address) -> bool {
        self.hospital != self.government
            && self.hospital != self.verifier
            && self.government != self.verifier
            && self.hospital != *owner
            && self.government != *owner
            && self.verifier != *owner
    }
}

/// An open death-protocol countdown.
///
/// The hospital's approval is implied by the countdown existing at all.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Countdown {
    pub initiated_at: u64,
    pub gov_approved: bool,
    pub verifier_approved: bool,
}

/// Settled outcome of a vault that reached consensus.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub initiated_at: u64,
    pub unlocked_at: u64,
}

/// Lifecycle of a vault.
///
/// ```text
/// Active ──initiate──► Initiated ──approve×2──► Unlocked (terminal)
///   ▲                      │
///   └──────cancel──────────┘
/// ```
///
/// Partial approvals only exist inside `Initiated`, so an unlocked vault
/// with a missing approval cannot be expressed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VaultPhase {
    Active,
    Initiated(Countdown),
    Unlocked(Settlement),
}

/// The canonical stored vault record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vault {
    pub owner: Address,
    pub heirs: Vec<HeirShare>,
    pub attestors: Attestors,
    pub created_at: u64,
    pub phase: VaultPhase,
}

/// Flattened read model exposed to callers and secret stores.
///
/// Field names are kept stable for off-chain consumers. The approval flags
/// and `is_unlocked` are derived from [`VaultPhase`] on every read.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultView {
    pub owner: Address,
    pub heirs: Vec<HeirShare>,
    pub hospital: Address,
    pub government: Address,
    pub verifier: Address,
    /// Zero when no countdown is running.
    pub initiation_time: u64,
    pub hospital_approved: bool,
    pub gov_approved: bool,
    pub verifier_approved: bool,
    pub is_unlocked: bool,
    pub created_at: u64,
    /// Zero until the vault unlocks.
    pub unlocked_at: u64,
}

impl Vault {
    pub fn is_unlocked(&self) -> bool {
        matches!(self.phase, VaultPhase::Unlocked(_))
    }

    /// `(hospital, government, verifier)` approval flags for the current phase.
    pub fn approvals(&self) -> (bool, bool, bool) {
        match &self.phase {
            VaultPhase::Active => (false, false, false),
            VaultPhase::Initiated(c) => (true, c.gov_approved, c.verifier_approved),
            VaultPhase::Unlocked(_) => (true, true, true),
        }
    }

    /// Countdown anchor, or zero while `Active`.
    pub fn initiation_time(&self) -> u64 {
        match &self.phase {
            VaultPhase::Active => 0,
            VaultPhase::Initiated(c) => c.initiated_at,
            VaultPhase::Unlocked(s) => s.initiated_at,
        }
    }

    pub fn view(&self) -> VaultView {
        let (hospital_approved, gov_approved, verifier_approved) = self.approvals();
        let unlocked_at = match &self.phase {
            VaultPhase::Unlocked(s) => s.unlocked_at,
            _ => 0,
        };
        VaultView {
            owner: self.owner.clone(),
            heirs: self.heirs.clone(),
            hospital: self.attestors.hospital.clone(),
            government: self.attestors.government.clone(),
            verifier: self.attestors.verifier.clone(),
            initiation_time: self.initiation_time(),
            hospital_approved,
            gov_approved,
            verifier_approved,
            is_unlocked: self.is_unlocked(),
            created_at: self.created_at,
            unlocked_at,
        }
    }
}

impl VaultView {
    /// Heir wallets in allocation order.
    pub fn heir_wallets(&self, env: &Env) -> Vec<Address> {
        let mut wallets = Vec::new(env);
        for share in self.heirs.iter() {
            wallets.push_back(share.wallet);
        }
        wallets
    }
}
