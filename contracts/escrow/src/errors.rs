use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 200,
    NotInitialized = 201,
    Unauthorized = 202,
    InvalidFeePercentage = 203,
    AuctionContractNotSet = 204,
    InvalidAmount = 205,
    InsufficientEscrowBalance = 206,
    ConflictingDeposit = 207,
}
