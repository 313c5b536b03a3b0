use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipProposedEvent {
    pub owner: Address,
    pub proposed: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub old_owner: Address,
    pub new_owner: Address,
}

pub fn emit_ownership_proposed(env: &Env, owner: Address, proposed: Address) {
    let event = OwnershipProposedEvent {
        owner: owner.clone(),
        proposed: proposed.clone(),
    };
    env.events().publish(("ownership_proposed", owner, proposed), event);
}

pub fn emit_ownership_transferred(env: &Env, old_owner: Address, new_owner: Address) {
    let event = OwnershipTransferredEvent {
        old_owner: old_owner.clone(),
        new_owner: new_owner.clone(),
    };
    env.events().publish(("ownership_transferred", old_owner, new_owner), event);
}
