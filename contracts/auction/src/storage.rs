use crate::types::{Auction, DataKey};
use soroban_sdk::{Address, Env};

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_escrow_contract(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::EscrowContract).unwrap()
}

pub fn set_escrow_contract(env: &Env, escrow: &Address) {
    env.storage().instance().set(&DataKey::EscrowContract, escrow);
}

pub fn get_auction(env: &Env, collection: &Address, token_id: u64) -> Option<Auction> {
    let key = DataKey::Auction(collection.clone(), token_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(env: &Env, collection: &Address, token_id: u64, auction: &Auction) {
    let key = DataKey::Auction(collection.clone(), token_id);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
