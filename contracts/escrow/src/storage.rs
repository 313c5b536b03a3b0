use crate::types::{DataKey, Held};
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

pub fn get_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Token).unwrap()
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_fee_percentage(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::FeePercentage).unwrap_or(0)
}

pub fn set_fee_percentage(env: &Env, fee_percentage: u32) {
    env.storage()
        .instance()
        .set(&DataKey::FeePercentage, &fee_percentage);
}

pub fn get_auction_contract(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::AuctionContract)
}

pub fn set_auction_contract(env: &Env, auction: &Address) {
    env.storage().instance().set(&DataKey::AuctionContract, auction);
}

pub fn get_held(env: &Env, collection: &Address, token_id: u64) -> Option<Held> {
    let key = DataKey::Held(collection.clone(), token_id);
    let held = env.storage().persistent().get::<_, Held>(&key);
    if held.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    held
}

pub fn set_held(env: &Env, collection: &Address, token_id: u64, held: &Held) {
    let key = DataKey::Held(collection.clone(), token_id);
    env.storage().persistent().set(&key, held);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn remove_held(env: &Env, collection: &Address, token_id: u64) {
    let key = DataKey::Held(collection.clone(), token_id);
    env.storage().persistent().remove(&key);
}
