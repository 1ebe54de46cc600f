//! Generic confirmation ledger shared by the transfer, owner-change and
//! threshold-change queues.
//!
//! A proposal is referenced by its queue and its sequential index (assigned
//! from 0). Confirmation flags live under their own storage key so that an
//! owner's confirmation on one queue's index is unrelated to the same index
//! in another queue. Proposals are never deleted; a queue only grows.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::errors::VaultError;
use crate::types::{Action, DataKey, Proposal, Queue};

pub fn len(env: &Env, queue: Queue) -> u32 {
    env.storage().instance().get(&DataKey::QueueLen(queue)).unwrap_or(0)
}

pub fn load(env: &Env, queue: Queue, index: u32) -> Proposal {
    env.storage()
        .instance()
        .get(&DataKey::Proposal(queue, index))
        .unwrap_or_else(|| panic_with_error!(env, VaultError::ProposalNotFound))
}

fn store(env: &Env, queue: Queue, index: u32, proposal: &Proposal) {
    env.storage().instance().set(&DataKey::Proposal(queue, index), proposal);
}

pub fn is_confirmed(env: &Env, queue: Queue, index: u32, owner: &Address) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Confirmed(queue, index, owner.clone()))
        .unwrap_or(false)
}

/// Appends a validated payload and returns its assigned index.
pub fn append(env: &Env, queue: Queue, action: Action) -> u32 {
    let index = len(env, queue);
    store(
        env,
        queue,
        index,
        &Proposal { action, confirmations: 0, executed: false },
    );
    env.storage().instance().set(&DataKey::QueueLen(queue), &(index + 1));
    index
}

/// Records one owner's confirmation, at most once per owner per proposal.
pub fn confirm(env: &Env, queue: Queue, index: u32, owner: &Address) {
    let mut proposal = load(env, queue, index);
    if proposal.executed {
        panic_with_error!(env, VaultError::AlreadyExecuted);
    }
    if is_confirmed(env, queue, index, owner) {
        panic_with_error!(env, VaultError::AlreadyConfirmed);
    }
    env.storage()
        .instance()
        .set(&DataKey::Confirmed(queue, index, owner.clone()), &true);
    proposal.confirmations += 1;
    store(env, queue, index, &proposal);
}

/// Withdraws a previously recorded confirmation.
pub fn revoke(env: &Env, queue: Queue, index: u32, owner: &Address) {
    let mut proposal = load(env, queue, index);
    if proposal.executed {
        panic_with_error!(env, VaultError::AlreadyExecuted);
    }
    if !is_confirmed(env, queue, index, owner) {
        panic_with_error!(env, VaultError::NotConfirmed);
    }
    env.storage()
        .instance()
        .remove(&DataKey::Confirmed(queue, index, owner.clone()));
    proposal.confirmations -= 1;
    store(env, queue, index, &proposal);
}

/// Checks the execution guard and persists `executed = true` BEFORE the
/// caller performs the side effect, so a reentrant or duplicated call on the
/// same index cannot dispatch twice. A failing side effect panics, which
/// discards this write along with the rest of the frame.
pub fn begin_execute(env: &Env, queue: Queue, index: u32) -> Proposal {
    let mut proposal = load(env, queue, index);
    if proposal.executed {
        panic_with_error!(env, VaultError::AlreadyExecuted);
    }
    // Always present once initialized; every entry point checks Init first.
    let threshold: u32 = env.storage().instance().get(&DataKey::Threshold).unwrap();
    if proposal.confirmations < threshold {
        panic_with_error!(env, VaultError::InsufficientConfirmations);
    }
    proposal.executed = true;
    store(env, queue, index, &proposal);
    proposal
}
