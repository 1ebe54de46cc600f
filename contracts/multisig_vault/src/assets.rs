//! Asset movement at the vault boundary: release of an approved transfer and
//! the unguarded deposit path.
//!
//! The vault never keeps its own token accounting. Fungible balances use the
//! standard Soroban token interface (which also covers the native asset,
//! itself a token contract on Stellar); item and multi-unit ledgers are
//! reached through the `UnitLedger` client below.

use soroban_sdk::{contractclient, panic_with_error, token, Address, Env};

use crate::errors::VaultError;
use crate::types::{AssetKind, TransferSpec};

/// External collaborator holding non-fungible and multi-unit assets.
#[contractclient(name = "UnitLedgerClient")]
pub trait UnitLedger {
    /// Moves ownership of the single item `unit` from `from` to `to`.
    fn transfer_unit(env: Env, from: Address, to: Address, unit: u128);

    /// Moves `amount` units of item `unit` from `from` to `to`.
    fn transfer_units(env: Env, from: Address, to: Address, unit: u128, amount: i128);
}

/// Dispatches an approved transfer out of the vault. Any collaborator
/// failure surfaces as `DispatchFailure`, aborting the invocation so the
/// proposal's executed flag and confirmations roll back with it.
pub fn release(env: &Env, transfer: &TransferSpec) {
    let vault = env.current_contract_address();
    let failed = match transfer.kind {
        AssetKind::Unit => UnitLedgerClient::new(env, &transfer.asset)
            .try_transfer_unit(&vault, &transfer.recipient, &transfer.unit)
            .is_err(),
        AssetKind::MultiUnit => UnitLedgerClient::new(env, &transfer.asset)
            .try_transfer_units(&vault, &transfer.recipient, &transfer.unit, &transfer.amount)
            .is_err(),
        AssetKind::Fungible => token::Client::new(env, &transfer.asset)
            .try_transfer(&vault, &transfer.recipient, &transfer.amount)
            .is_err(),
    };
    if failed {
        panic_with_error!(env, VaultError::DispatchFailure);
    }
}

/// Pulls an asset from `from` into the vault. Pass-through: any party may
/// deposit, no owner check. `from` must authorize the pull.
pub fn accept(env: &Env, from: &Address, kind: AssetKind, asset: &Address, unit: u128, amount: i128) {
    from.require_auth();
    let vault = env.current_contract_address();
    match kind {
        AssetKind::Unit => {
            UnitLedgerClient::new(env, asset).transfer_unit(from, &vault, &unit);
        }
        AssetKind::MultiUnit => {
            UnitLedgerClient::new(env, asset).transfer_units(from, &vault, &unit, &amount);
        }
        AssetKind::Fungible => {
            token::Client::new(env, asset).transfer(from, &vault, &amount);
        }
    }
}
