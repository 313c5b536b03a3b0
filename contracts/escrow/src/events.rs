use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsDepositedEvent {
    pub collection: Address,
    pub token_id: u64,
    pub payer: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsRefundedEvent {
    pub collection: Address,
    pub token_id: u64,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsReleasedEvent {
    pub collection: Address,
    pub token_id: u64,
    pub seller: Address,
    pub net_amount: i128,
    pub fee_amount: i128,
}

pub fn emit_funds_deposited(env: &Env, collection: Address, token_id: u64, payer: Address, amount: i128) {
    let event = FundsDepositedEvent {
        collection: collection.clone(),
        token_id,
        payer: payer.clone(),
        amount,
    };
    env.events().publish(("funds_deposited", collection, payer), event);
}

pub fn emit_funds_refunded(env: &Env, collection: Address, token_id: u64, recipient: Address, amount: i128) {
    let event = FundsRefundedEvent {
        collection: collection.clone(),
        token_id,
        recipient: recipient.clone(),
        amount,
    };
    env.events().publish(("funds_refunded", collection, recipient), event);
}

pub fn emit_funds_released(
    env: &Env,
    collection: Address,
    token_id: u64,
    seller: Address,
    net_amount: i128,
    fee_amount: i128,
) {
    let event = FundsReleasedEvent {
        collection: collection.clone(),
        token_id,
        seller: seller.clone(),
        net_amount,
        fee_amount,
    };
    env.events().publish(("funds_released", collection, seller), event);
}
