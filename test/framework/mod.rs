//! # Afterlife Contract Testing Framework
//!
//! A reusable harness for the vault registry supporting property-based
//! testing, invariant checking and state exploration.
//!
//! ## Architecture
//!
//! ```text
//! test/framework/
//! ├── mod.rs             # Core TestEnv, registry harness, snapshots
//! ├── generators.rs      # Property-based test value generators
//! ├── invariants.rs      # State invariant definitions & verification
//! └── state_explorer.rs  # Systematic state-space exploration
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use test_framework::{TestEnv, RegistryTestHarness};
//!
//! let mut env = TestEnv::new();
//! let harness = RegistryTestHarness::new(&mut env);
//! let parties = harness.create_parties(2);
//! harness.create_vault(&parties, &[60, 40]);
//! harness.initiate(&parties);
//! ```

extern crate std;


use common::{HeirShare, VaultView};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, Env, Vec,
};
use vault_registry::{VaultRegistryContract, VaultRegistryContractClient};

/// Ledger time every harness starts at, so a live countdown never has a
/// zero anchor.
pub const GENESIS_TIMESTAMP: u64 = 1_700_000_000;

// ── Core Test Environment ────────────────────────────────────────────────────

/// A high-level test environment that wraps the Soroban `Env` and provides
/// contract deployment, time control, and address management.
pub struct TestEnv {
    pub env: Env,
}

impl TestEnv {
    /// Create a new test environment with all auth mocked.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(GENESIS_TIMESTAMP);
        Self { env }
    }

    /// Generate a fresh Soroban address.
    pub fn generate_address(&self) -> Address {
        Address::generate(&self.env)
    }

    /// Set the ledger timestamp.
    pub fn set_timestamp(&self, ts: u64) {
        self.env.ledger().set_timestamp(ts);
    }

    /// Advance the ledger timestamp by `delta` seconds.
    pub fn advance_time(&self, delta: u64) {
        let current = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(current.saturating_add(delta));
    }

    /// Current ledger timestamp.
    pub fn timestamp(&self) -> u64 {
        self.env.ledger().timestamp()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

// ── Registry-Specific Harness ────────────────────────────────────────────────

/// Everyone involved in a single vault.
#[derive(Debug, Clone)]
pub struct VaultParties {
    pub owner: Address,
    pub heirs: std::vec::Vec<Address>,
    pub hospital: Address,
    pub government: Address,
    pub verifier: Address,
    /// Holds no role on the vault.
    pub stranger: Address,
}

/// Pre-wired vault registry fixture.
pub struct RegistryTestHarness<'a> {
    pub env: &'a mut TestEnv,
    pub client: VaultRegistryContractClient<'static>,
    pub contract_id: Address,
}

impl<'a> RegistryTestHarness<'a> {
    /// Deploy a registry running on the default cancellation window.
    pub fn new(env: &'a mut TestEnv) -> Self {
        let contract_id = env.env.register(VaultRegistryContract, ());
        let client = VaultRegistryContractClient::new(&env.env, &contract_id);
        Self {
            env,
            client,
            contract_id,
        }
    }

    /// Deploy a registry with an explicit admin and cancellation window.
    pub fn with_window(env: &'a mut TestEnv, cancel_window_secs: u64) -> Self {
        let admin = env.generate_address();
        let harness = Self::new(env);
        harness.client.initialize(&admin, &cancel_window_secs);
        harness
    }

    /// Fresh, pairwise distinct identities for one vault.
    pub fn create_parties(&self, heir_count: usize) -> VaultParties {
        let env = &self.env.env;
        VaultParties {
            owner: Address::generate(env),
            heirs: (0..heir_count).map(|_| Address::generate(env)).collect(),
            hospital: Address::generate(env),
            government: Address::generate(env),
            verifier: Address::generate(env),
            stranger: Address::generate(env),
        }
    }

    /// Pair heir wallets with percentages (zipped, extra entries ignored).
    pub fn heir_table(&self, wallets: &[Address], percentages: &[u32]) -> Vec<HeirShare> {
        let mut table = Vec::new(&self.env.env);
        for (wallet, percentage) in wallets.iter().zip(percentages.iter()) {
            table.push_back(HeirShare {
                wallet: wallet.clone(),
                percentage: *percentage,
            });
        }
        table
    }

    /// Create a vault for `parties`, panicking on rejection.
    pub fn create_vault(&self, parties: &VaultParties, percentages: &[u32]) -> VaultView {
        let table = self.heir_table(&parties.heirs, percentages);
        self.client.create_vault(
            &parties.owner,
            &table,
            &parties.hospital,
            &parties.government,
            &parties.verifier,
        )
    }

    /// Create a fresh vault with an even-ish split across `heir_count` heirs.
    pub fn create_default_vault(&self, heir_count: usize) -> VaultParties {
        let parties = self.create_parties(heir_count);
        self.create_vault(&parties, &even_split(heir_count));
        parties
    }

    pub fn initiate(&self, parties: &VaultParties) -> VaultView {
        self.client.initiate_countdown(&parties.owner, &parties.hospital)
    }

    pub fn approve(&self, parties: &VaultParties, attestor: &Address) -> VaultView {
        self.client.approve_death(&parties.owner, attestor)
    }

    pub fn cancel(&self, parties: &VaultParties) -> VaultView {
        self.client.cancel_protocol(&parties.owner, &parties.owner)
    }

    /// Drive a vault from Active to Unlocked.
    pub fn unlock(&self, parties: &VaultParties) -> VaultView {
        self.initiate(parties);
        self.approve(parties, &parties.government);
        self.approve(parties, &parties.verifier)
    }

    pub fn vault(&self, owner: &Address) -> Option<VaultView> {
        self.client.get_vault(owner)
    }

    /// Snapshot of every listed vault for invariant checking.
    pub fn snapshot(&self, owners: &[Address]) -> RegistrySnapshot {
        RegistrySnapshot {
            timestamp: self.env.timestamp(),
            vaults: owners
                .iter()
                .map(|o| (o.clone(), self.vault(o)))
                .collect(),
        }
    }
}

/// Percentages summing to 100 across `n` heirs; the first heir takes the
/// remainder.
pub fn even_split(n: usize) -> std::vec::Vec<u32> {
    if n == 0 {
        return std::vec::Vec::new();
    }
    let n32 = n as u32;
    let base = 100 / n32;
    let mut split = std::vec![base; n];
    split[0] += 100 - base * n32;
    split
}

/// Immutable snapshot of registry state at a point in time.
#[derive(Debug, Clone)]
pub struct RegistrySnapshot {
    pub timestamp: u64,
    pub vaults: std::vec::Vec<(Address, Option<VaultView>)>,
}

impl RegistrySnapshot {
    /// Views of the vaults that exist.
    pub fn existing(&self) -> impl Iterator<Item = &VaultView> {
        self.vaults.iter().filter_map(|(_, v)| v.as_ref())
    }

    pub fn find(&self, owner: &Address) -> Option<&VaultView> {
        self.vaults
            .iter()
            .find(|(o, _)| o == owner)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn unlocked_count(&self) -> usize {
        self.existing().filter(|v| v.is_unlocked).count()
    }
}

// ── Test Outcome Tracking ────────────────────────────────────────────────────

/// Result of a single test action, used by the state explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action succeeded.
    Ok,
    /// The action failed with a contract error code.
    ExpectedError(u32),
    /// The action failed unexpectedly.
    UnexpectedError(std::string::String),
}

/// Summary of a test run with coverage metrics.
#[derive(Debug, Clone)]
pub struct TestRunSummary {
    pub actions_executed: usize,
    pub invariant_checks: usize,
    pub invariant_violations: std::vec::Vec<std::string::String>,
    pub entry_points_hit: std::collections::HashSet<std::string::String>,
    pub transitions_observed: usize,
}

impl TestRunSummary {
    pub fn new() -> Self {
        Self {
            actions_executed: 0,
            invariant_checks: 0,
            invariant_violations: std::vec::Vec::new(),
            entry_points_hit: std::collections::HashSet::new(),
            transitions_observed: 0,
        }
    }

    /// True when no invariant violations were detected.
    pub fn passed(&self) -> bool {
        self.invariant_violations.is_empty()
    }

    /// Coverage ratio: entry points hit / total known entry points.
    pub fn entry_point_coverage(&self, total_entry_points: usize) -> f64 {
        if total_entry_points == 0 {
            return 0.0;
        }
        self.entry_points_hit.len() as f64 / total_entry_points as f64
    }
}

impl Default for TestRunSummary {
    fn default() -> Self {
        Self::new()
    }
}
