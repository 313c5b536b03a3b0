use crate::types::{DataKey, Design};
use soroban_sdk::Env;

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

pub fn get_design(env: &Env, design_id: u64) -> Option<Design> {
    let key = DataKey::Design(design_id);
    let design = env.storage().persistent().get::<_, Design>(&key);
    if design.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    design
}

pub fn set_design(env: &Env, design_id: u64, design: &Design) {
    let key = DataKey::Design(design_id);
    env.storage().persistent().set(&key, design);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
