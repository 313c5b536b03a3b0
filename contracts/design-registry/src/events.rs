use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DesignCreatedEvent {
    pub design_id: u64,
    pub creator: Address,
    pub ipfs_hash: String,
    pub price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DesignPriceUpdatedEvent {
    pub design_id: u64,
    pub old_price: i128,
    pub new_price: i128,
}

pub fn emit_design_created(env: &Env, design_id: u64, creator: Address, ipfs_hash: String, price: i128) {
    let event = DesignCreatedEvent {
        design_id,
        creator: creator.clone(),
        ipfs_hash,
        price,
    };
    env.events().publish(("design_created", creator), event);
}

pub fn emit_design_price_updated(env: &Env, design_id: u64, old_price: i128, new_price: i128) {
    let event = DesignPriceUpdatedEvent {
        design_id,
        old_price,
        new_price,
    };
    env.events().publish(("design_price_updated", design_id), event);
}
