use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 500,
    NotInitialized = 501,
    NotOwner = 502,
    NotProposedOwner = 503,
    NoPendingProposal = 504,
    SelfOwnershipTransfer = 505,
}
