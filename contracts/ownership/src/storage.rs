use crate::types::DataKey;
use soroban_sdk::{Address, Env};

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_proposed_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::ProposedOwner)
}

pub fn set_proposed_owner(env: &Env, proposed: &Address) {
    env.storage().instance().set(&DataKey::ProposedOwner, proposed);
}

pub fn clear_proposed_owner(env: &Env) {
    env.storage().instance().remove(&DataKey::ProposedOwner);
}
