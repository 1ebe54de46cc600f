use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};

use crate::errors::VaultError;
use crate::types::{Action, AssetKind, DataKey, OwnerUpdate, Proposal, Queue, TransferSpec};
use crate::{assets, events, queue, registry};

#[contract]
pub struct VaultContract;

#[contractimpl]
impl VaultContract {
    pub fn initialize(env: Env, owners: Vec<Address>, threshold: u32) {
        if env.storage().instance().has(&DataKey::Init) {
            panic_with_error!(&env, VaultError::AlreadyInitialized);
        }
        registry::install(&env, &owners);
        if threshold == 0 || threshold > registry::owner_count(&env) {
            panic_with_error!(&env, VaultError::InvalidThreshold);
        }
        env.storage().instance().set(&DataKey::Threshold, &threshold);
        env.storage().instance().set(&DataKey::Init, &true);
    }

    // --- transfer queue ---

    pub fn submit_transfer(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
        kind: AssetKind,
        asset: Address,
        unit: u128,
    ) -> u32 {
        Self::require_initialized(&env);
        registry::require_owner(&env, &caller);
        // The Unit kind moves one specific item and ignores the amount.
        if kind != AssetKind::Unit && amount <= 0 {
            panic_with_error!(&env, VaultError::InvalidAmount);
        }
        let action = Action::Transfer(TransferSpec { recipient, amount, kind, asset, unit });
        let index = queue::append(&env, Queue::Transfer, action.clone());
        events::submitted(&env, Queue::Transfer, &caller, index, &action);
        index
    }

    pub fn confirm_transfer(env: Env, caller: Address, index: u32) {
        Self::confirm(env, Queue::Transfer, caller, index);
    }

    pub fn revoke_transfer(env: Env, caller: Address, index: u32) {
        Self::revoke(env, Queue::Transfer, caller, index);
    }

    pub fn execute_transfer(env: Env, caller: Address, index: u32) {
        Self::require_initialized(&env);
        registry::require_owner(&env, &caller);
        let proposal = queue::begin_execute(&env, Queue::Transfer, index);
        if let Action::Transfer(transfer) = &proposal.action {
            assets::release(&env, transfer);
        }
        events::executed(&env, Queue::Transfer, &caller, index);
    }

    // --- owner-change queue ---

    pub fn submit_owner_change(env: Env, caller: Address, target: Address, add: bool) -> u32 {
        Self::require_initialized(&env);
        registry::require_owner(&env, &caller);
        if registry::is_owner(&env, &target) == add {
            panic_with_error!(&env, VaultError::RedundantOwnerChange);
        }
        let action = Action::OwnerChange(OwnerUpdate { target, add });
        let index = queue::append(&env, Queue::OwnerChange, action.clone());
        events::submitted(&env, Queue::OwnerChange, &caller, index, &action);
        index
    }

    pub fn confirm_owner_change(env: Env, caller: Address, index: u32) {
        Self::confirm(env, Queue::OwnerChange, caller, index);
    }

    pub fn revoke_owner_change(env: Env, caller: Address, index: u32) {
        Self::revoke(env, Queue::OwnerChange, caller, index);
    }

    pub fn execute_owner_change(env: Env, caller: Address, index: u32) {
        Self::require_initialized(&env);
        registry::require_owner(&env, &caller);
        let proposal = queue::begin_execute(&env, Queue::OwnerChange, index);
        if let Action::OwnerChange(update) = &proposal.action {
            registry::apply_change(&env, &update.target, update.add);
        }
        events::executed(&env, Queue::OwnerChange, &caller, index);
    }

    // --- threshold-change queue ---

    pub fn submit_threshold_change(env: Env, caller: Address, new_threshold: u32) -> u32 {
        Self::require_initialized(&env);
        registry::require_owner(&env, &caller);
        Self::validate_threshold_range(&env, new_threshold);
        let current: u32 = env.storage().instance().get(&DataKey::Threshold).unwrap();
        if new_threshold == current {
            panic_with_error!(&env, VaultError::InvalidThreshold);
        }
        let action = Action::Threshold(new_threshold);
        let index = queue::append(&env, Queue::Threshold, action.clone());
        events::submitted(&env, Queue::Threshold, &caller, index, &action);
        index
    }

    pub fn confirm_threshold_change(env: Env, caller: Address, index: u32) {
        Self::confirm(env, Queue::Threshold, caller, index);
    }

    pub fn revoke_threshold_change(env: Env, caller: Address, index: u32) {
        Self::revoke(env, Queue::Threshold, caller, index);
    }

    pub fn execute_threshold_change(env: Env, caller: Address, index: u32) {
        Self::require_initialized(&env);
        registry::require_owner(&env, &caller);
        let proposal = queue::begin_execute(&env, Queue::Threshold, index);
        if let Action::Threshold(new_threshold) = proposal.action {
            // The owner set may have shrunk since submission.
            Self::validate_threshold_range(&env, new_threshold);
            env.storage().instance().set(&DataKey::Threshold, &new_threshold);
        }
        events::executed(&env, Queue::Threshold, &caller, index);
    }

    // --- deposits ---

    pub fn deposit(env: Env, from: Address, kind: AssetKind, asset: Address, unit: u128, amount: i128) {
        Self::require_initialized(&env);
        assets::accept(&env, &from, kind, &asset, unit, amount);
    }

    // --- views ---

    pub fn is_owner(env: Env, who: Address) -> bool {
        Self::require_initialized(&env);
        registry::is_owner(&env, &who)
    }

    pub fn owner_count(env: Env) -> u32 {
        Self::require_initialized(&env);
        registry::owner_count(&env)
    }

    pub fn threshold(env: Env) -> u32 {
        Self::require_initialized(&env);
        env.storage().instance().get(&DataKey::Threshold).unwrap()
    }

    pub fn transfer_count(env: Env) -> u32 {
        Self::require_initialized(&env);
        queue::len(&env, Queue::Transfer)
    }

    pub fn owner_change_count(env: Env) -> u32 {
        Self::require_initialized(&env);
        queue::len(&env, Queue::OwnerChange)
    }

    pub fn threshold_change_count(env: Env) -> u32 {
        Self::require_initialized(&env);
        queue::len(&env, Queue::Threshold)
    }

    pub fn get_proposal(env: Env, queue: Queue, index: u32) -> Proposal {
        Self::require_initialized(&env);
        queue::load(&env, queue, index)
    }

    pub fn is_confirmed(env: Env, queue: Queue, index: u32, owner: Address) -> bool {
        Self::require_initialized(&env);
        queue::is_confirmed(&env, queue, index, &owner)
    }

    // --- shared guards ---

    fn confirm(env: Env, q: Queue, caller: Address, index: u32) {
        Self::require_initialized(&env);
        registry::require_owner(&env, &caller);
        queue::confirm(&env, q, index, &caller);
        events::confirmed(&env, q, &caller, index);
    }

    fn revoke(env: Env, q: Queue, caller: Address, index: u32) {
        Self::require_initialized(&env);
        registry::require_owner(&env, &caller);
        queue::revoke(&env, q, index, &caller);
        events::revoked(&env, q, &caller, index);
    }

    fn validate_threshold_range(env: &Env, new_threshold: u32) {
        if new_threshold == 0 || new_threshold > registry::owner_count(env) {
            panic_with_error!(env, VaultError::InvalidThreshold);
        }
    }

    fn require_initialized(env: &Env) {
        if !env.storage().instance().has(&DataKey::Init) {
            panic_with_error!(env, VaultError::NotInitialized);
        }
    }
}
