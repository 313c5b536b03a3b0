use crate::types::AuctionCategory;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEvent {
    pub collection: Address,
    pub token_id: u64,
    pub category: AuctionCategory,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEvent {
    pub collection: Address,
    pub token_id: u64,
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionFinalizedEvent {
    pub seller: Address,
    pub collection: Address,
    pub token_id: u64,
    pub winner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidReclaimedEvent {
    pub collection: Address,
    pub token_id: u64,
    pub bidder: Address,
    pub amount: i128,
}

pub fn emit_auction_created(env: &Env, collection: Address, token_id: u64, category: AuctionCategory) {
    let event = AuctionCreatedEvent {
        collection: collection.clone(),
        token_id,
        category,
    };
    env.events().publish(("auction_created", collection), event);
}

pub fn emit_bid_placed(env: &Env, collection: Address, token_id: u64, bidder: Address, amount: i128) {
    let event = BidPlacedEvent {
        collection: collection.clone(),
        token_id,
        bidder: bidder.clone(),
        amount,
    };
    env.events().publish(("bid_placed", collection, bidder), event);
}

pub fn emit_auction_finalized(
    env: &Env,
    seller: Address,
    collection: Address,
    token_id: u64,
    winner: Address,
    amount: i128,
) {
    let event = AuctionFinalizedEvent {
        seller: seller.clone(),
        collection: collection.clone(),
        token_id,
        winner: winner.clone(),
        amount,
    };
    env.events().publish(("auction_finalized", collection, winner), event);
}

pub fn emit_bid_reclaimed(env: &Env, collection: Address, token_id: u64, bidder: Address, amount: i128) {
    let event = BidReclaimedEvent {
        collection: collection.clone(),
        token_id,
        bidder: bidder.clone(),
        amount,
    };
    env.events().publish(("bid_reclaimed", collection, bidder), event);
}
