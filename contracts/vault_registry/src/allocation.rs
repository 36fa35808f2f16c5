use common::HeirShare;
use soroban_sdk::{Address, Vec};

use crate::VaultError;

/// Total every heir table must add up to.
pub const FULL_ALLOCATION: u32 = 100;

/// Check an heir allocation table before it is written.
///
/// The table must be non-empty, every percentage must lie in `1..=100`,
/// the percentages must sum to exactly [`FULL_ALLOCATION`], and each wallet
/// must appear once and differ from the vault owner.
pub fn validate_heirs(owner: &Address, heirs: &Vec<HeirShare>) -> Result<(), VaultError> {
    if heirs.is_empty() {
        return Err(VaultError::InvalidAllocation);
    }

    let mut total: u32 = 0;
    for (i, share) in heirs.iter().enumerate() {
        if share.percentage == 0 || share.percentage > FULL_ALLOCATION {
            return Err(VaultError::InvalidAllocation);
        }
        if share.wallet == *owner {
            return Err(VaultError::InvalidAllocation);
        }
        for other in heirs.iter().skip(i + 1) {
            if other.wallet == share.wallet {
                return Err(VaultError::InvalidAllocation);
            }
        }
        total = total.saturating_add(share.percentage);
        if total > FULL_ALLOCATION {
            return Err(VaultError::InvalidAllocation);
        }
    }

    if total != FULL_ALLOCATION {
        return Err(VaultError::InvalidAllocation);
    }
    Ok(())
}
