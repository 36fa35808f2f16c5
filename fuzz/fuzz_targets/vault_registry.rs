#![no_main]

use arbitrary::Arbitrary;
use common::HeirShare;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, Env, Vec,
};
use vault_registry::{VaultRegistryContract, VaultRegistryContractClient};

/// Who signs an action. Resolved against the target vault's parties.
#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum Role {
    Owner,
    Hospital,
    Government,
    Verifier,
    Heir,
    Stranger,
}

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Initiate { vault: u8, role: Role },
    Approve { vault: u8, role: Role },
    Cancel { vault: u8, role: Role },
    AdvanceTime { delta: u32 },
}

#[derive(Arbitrary, Debug)]
pub struct FuzzInput {
    /// Raw allocation tables; most are rejected, the accepted ones are explored.
    tables: std::vec::Vec<std::vec::Vec<u8>>,
    actions: std::vec::Vec<FuzzAction>,
}

struct Parties {
    owner: Address,
    heirs: std::vec::Vec<Address>,
    hospital: Address,
    government: Address,
    verifier: Address,
    stranger: Address,
}

impl Parties {
    fn resolve(&self, role: Role) -> Address {
        match role {
            Role::Owner => self.owner.clone(),
            Role::Hospital => self.hospital.clone(),
            Role::Government => self.government.clone(),
            Role::Verifier => self.verifier.clone(),
            Role::Heir => self.heirs.first().unwrap_or(&self.stranger).clone(),
            Role::Stranger => self.stranger.clone(),
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_700_000_000);

    let contract_id = env.register(VaultRegistryContract, ());
    let client = VaultRegistryContractClient::new(&env, &contract_id);

    let mut vaults = std::vec::Vec::new();
    for table in input.tables.iter().take(4) {
        let table = &table[..table.len().min(8)];
        let parties = Parties {
            owner: Address::generate(&env),
            heirs: table.iter().map(|_| Address::generate(&env)).collect(),
            hospital: Address::generate(&env),
            government: Address::generate(&env),
            verifier: Address::generate(&env),
            stranger: Address::generate(&env),
        };
        let mut heirs = Vec::new(&env);
        for (wallet, pct) in parties.heirs.iter().zip(table.iter()) {
            heirs.push_back(HeirShare {
                wallet: wallet.clone(),
                percentage: *pct as u32,
            });
        }
        let valid = !table.is_empty()
            && table.iter().all(|p| *p > 0)
            && table.iter().map(|p| *p as u32).sum::<u32>() == 100;

        let created = client
            .try_create_vault(
                &parties.owner,
                &heirs,
                &parties.hospital,
                &parties.government,
                &parties.verifier,
            )
            .is_ok();
        assert_eq!(created, valid, "INVARIANT VIOLATION: allocation {:?} accepted={}", table, created);
        if created {
            vaults.push(parties);
        }
    }
    if vaults.is_empty() {
        return;
    }

    for action in input.actions {
        let (target, before) = match &action {
            FuzzAction::Initiate { vault, .. }
            | FuzzAction::Approve { vault, .. }
            | FuzzAction::Cancel { vault, .. } => {
                let p = &vaults[*vault as usize % vaults.len()];
                (Some(p), client.get_vault(&p.owner))
            }
            FuzzAction::AdvanceTime { .. } => (None, None),
        };

        match action {
            FuzzAction::Initiate { role, .. } => {
                if let Some(p) = target {
                    let _ = client.try_initiate_countdown(&p.owner, &p.resolve(role));
                }
            }
            FuzzAction::Approve { role, .. } => {
                if let Some(p) = target {
                    let _ = client.try_approve_death(&p.owner, &p.resolve(role));
                }
            }
            FuzzAction::Cancel { role, .. } => {
                if let Some(p) = target {
                    let _ = client.try_cancel_protocol(&p.owner, &p.resolve(role));
                }
            }
            FuzzAction::AdvanceTime { delta } => {
                let ts = env.ledger().timestamp().saturating_add(delta as u64);
                env.ledger().set_timestamp(ts);
            }
        }

        // ── Post-action invariant checks ──
        if let (Some(before), Some(p)) = (before, target) {
            if before.is_unlocked {
                assert_eq!(
                    client.get_vault(&p.owner),
                    Some(before),
                    "INVARIANT VIOLATION: unlocked vault changed"
                );
            }
        }
        for p in &vaults {
            let Some(v) = client.get_vault(&p.owner) else {
                panic!("INVARIANT VIOLATION: vault disappeared");
            };
            let all = v.hospital_approved && v.gov_approved && v.verifier_approved;
            assert_eq!(v.is_unlocked, all, "INVARIANT VIOLATION: unlock without consensus");
            assert_eq!(
                v.initiation_time != 0,
                v.hospital_approved,
                "INVARIANT VIOLATION: countdown anchor out of sync"
            );
            assert_eq!(v.is_unlocked, v.unlocked_at != 0);
            assert_eq!(client.is_claimable(&p.owner), v.is_unlocked);
            for heir in &p.heirs {
                assert_eq!(client.can_retrieve_secret(&p.owner, heir), v.is_unlocked);
            }
            assert!(!client.can_retrieve_secret(&p.owner, &p.stranger));
        }
    }
});
