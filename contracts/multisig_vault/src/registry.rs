//! Owner registry: the membership set consulted by every guarded call.
//!
//! The set is written at initialization and afterwards only through an
//! executed owner-change proposal. Removal performs no threshold
//! re-balancing; if it drops the owner count below the current threshold,
//! every queue stays blocked until a threshold-change proposal lowers it.

use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::errors::VaultError;
use crate::types::DataKey;

pub fn is_owner(env: &Env, who: &Address) -> bool {
    env.storage().instance().has(&DataKey::Owner(who.clone()))
}

pub fn owner_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::OwnerCount).unwrap_or(0)
}

/// Authenticates `caller` against the host and checks membership.
pub fn require_owner(env: &Env, caller: &Address) {
    caller.require_auth();
    if !is_owner(env, caller) {
        panic_with_error!(env, VaultError::Unauthorized);
    }
}

/// Populates the registry from the initialization list.
pub fn install(env: &Env, owners: &Vec<Address>) {
    if owners.is_empty() {
        panic_with_error!(env, VaultError::EmptyOwnerList);
    }
    for owner in owners.iter() {
        if is_owner(env, &owner) {
            panic_with_error!(env, VaultError::DuplicateOwner);
        }
        env.storage().instance().set(&DataKey::Owner(owner), &true);
    }
    env.storage().instance().set(&DataKey::OwnerCount, &owners.len());
}

/// Mutation entry point, reached only from the owner-change execute path.
/// Re-checks the membership state because it may have changed since the
/// proposal was submitted.
pub fn apply_change(env: &Env, target: &Address, add: bool) {
    if is_owner(env, target) == add {
        panic_with_error!(env, VaultError::RedundantOwnerChange);
    }
    let count = owner_count(env);
    if add {
        env.storage().instance().set(&DataKey::Owner(target.clone()), &true);
        env.storage().instance().set(&DataKey::OwnerCount, &(count + 1));
    } else {
        env.storage().instance().remove(&DataKey::Owner(target.clone()));
        env.storage().instance().set(&DataKey::OwnerCount, &(count - 1));
    }
}
