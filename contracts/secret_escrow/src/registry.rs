use common::VaultView;
use soroban_sdk::{Address, Env};

use crate::{EscrowError, REGISTRY};

/// The slice of the vault registry interface the escrow depends on.
#[soroban_sdk::contractclient(name = "VaultRegistryClient")]
#[allow(dead_code)]
pub trait VaultRegistryInterface {
    fn get_vault(env: Env, owner: Address) -> Option<VaultView>;
}

/// Read the registry's current view of `owner`'s vault.
pub(crate) fn fetch_vault(env: &Env, owner: &Address) -> Result<VaultView, EscrowError> {
    let registry: Address = env
        .storage()
        .instance()
        .get(&REGISTRY)
        .ok_or(EscrowError::NotInitialized)?;
    VaultRegistryClient::new(env, &registry)
        .get_vault(owner)
        .ok_or(EscrowError::VaultNotFound)
}
