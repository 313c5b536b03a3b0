use crate::types::DataKey;
use soroban_sdk::{Address, Env, Vec};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn is_accepted(env: &Env, token: &Address) -> bool {
    env.storage()
        .instance()
        .has(&DataKey::Accepted(token.clone()))
}

pub fn set_accepted(env: &Env, token: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Accepted(token.clone()), &true);
    let mut tokens = get_tokens(env);
    tokens.push_back(token.clone());
    env.storage().instance().set(&DataKey::Tokens, &tokens);
}

pub fn remove_accepted(env: &Env, token: &Address) {
    env.storage()
        .instance()
        .remove(&DataKey::Accepted(token.clone()));
    let tokens = get_tokens(env);
    let mut remaining = Vec::new(env);
    for entry in tokens.iter() {
        if entry != token.clone() {
            remaining.push_back(entry);
        }
    }
    env.storage().instance().set(&DataKey::Tokens, &remaining);
}

pub fn get_tokens(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Tokens)
        .unwrap_or(Vec::new(env))
}
