use soroban_sdk::{contracttype, Address, String};

/// A listed design: content hash of the artwork, who made it, asking price.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Design {
    pub ipfs_hash: String,
    pub creator: Address,
    pub price: i128,
    pub created_at: u64,
}

#[contracttype]
pub enum DataKey {
    Design(u64),
}
