use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    EmptyOwnerList = 3,
    DuplicateOwner = 4,
    InvalidThreshold = 5,
    Unauthorized = 6,
    ProposalNotFound = 7,
    AlreadyExecuted = 8,
    AlreadyConfirmed = 9,
    NotConfirmed = 10,
    InsufficientConfirmations = 11,
    RedundantOwnerChange = 12,
    InvalidAmount = 13,
    DispatchFailure = 14,
}
