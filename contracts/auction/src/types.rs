use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionCategory {
    Fabric = 0,
    ReadyToWear = 1,
}

/// One auction record, addressed by (collection, token id). There is no
/// stored "active" flag: whether bidding or settlement is legal is always
/// re-derived from the timestamps and `finalized` at call time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub seller: Address,
    pub minimum_selling_price: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub category: AuctionCategory,
    pub bid_floor_is_minimum: bool,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub finalized: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighestBid {
    pub bidder: Option<Address>,
    pub bid: i128,
}

#[contracttype]
pub enum DataKey {
    Admin,
    EscrowContract,
    Auction(Address, u64),
}
