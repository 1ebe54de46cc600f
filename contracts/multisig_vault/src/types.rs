use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Init,
    Owner(Address),
    OwnerCount,
    Threshold,
    QueueLen(Queue),
    Proposal(Queue, u32),
    Confirmed(Queue, u32, Address),
}

/// Discriminant for the three proposal queues. Each queue has its own
/// independent index space and confirmation flags.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Queue {
    Transfer,
    OwnerChange,
    Threshold,
}

/// Closed set of transferable asset categories. An unrecognized kind cannot
/// be decoded from a host value, so submissions carrying one never reach
/// contract code.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssetKind {
    /// A single non-fungible item identified by `unit`; `amount` is ignored.
    Unit,
    /// `amount` units of item `unit` on a multi-unit ledger.
    MultiUnit,
    /// `amount` of a fungible token balance; `unit` is ignored.
    Fungible,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferSpec {
    pub recipient: Address,
    pub amount: i128,
    pub kind: AssetKind,
    /// The external ledger contract holding the asset.
    pub asset: Address,
    pub unit: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerUpdate {
    pub target: Address,
    pub add: bool,
}

/// Category-specific payload carried by a proposal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Transfer(TransferSpec),
    OwnerChange(OwnerUpdate),
    Threshold(u32),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub action: Action,
    pub confirmations: u32,
    pub executed: bool,
}
