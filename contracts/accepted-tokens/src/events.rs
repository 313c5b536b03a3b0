use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenAddedEvent {
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenRemovedEvent {
    pub token: Address,
}

pub fn emit_token_added(env: &Env, token: Address) {
    let event = TokenAddedEvent {
        token: token.clone(),
    };
    env.events().publish(("token_added", token), event);
}

pub fn emit_token_removed(env: &Env, token: Address) {
    let event = TokenRemovedEvent {
        token: token.clone(),
    };
    env.events().publish(("token_removed", token), event);
}
