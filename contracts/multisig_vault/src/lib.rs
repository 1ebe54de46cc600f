#![no_std]

mod assets;
mod errors;
mod events;
mod queue;
mod registry;
mod types;
mod vault;

pub use crate::assets::{UnitLedger, UnitLedgerClient};
pub use crate::errors::VaultError;
pub use crate::types::{Action, AssetKind, OwnerUpdate, Proposal, Queue, TransferSpec};
pub use crate::vault::{VaultContract, VaultContractClient};
