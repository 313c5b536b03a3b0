use soroban_sdk::{contracttype, Address};

/// Funds held for one auction key: the balance and the identity it is
/// owed back to if the auction never settles.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Held {
    pub amount: i128,
    pub bidder: Address,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    FeePercentage,
    AuctionContract,
    Held(Address, u64),
}
