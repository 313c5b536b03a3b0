//! Clients for the contracts this one drives: the NFT collection holding
//! the auctioned asset, and the custodial escrow bound at initialization.

use soroban_sdk::{contractclient, Address, Env};

/// Asset custody interface of an NFT collection contract. The collection
/// address doubles as the first half of the auction key.
#[contractclient(name = "AssetClient")]
pub trait AssetInterface {
    fn owner_of(env: Env, token_id: u64) -> Address;

    fn transfer(env: Env, from: Address, to: Address, token_id: u64);
}

/// Fund custody interface of the escrow contract. Every call carries this
/// contract's own address as `caller`; the escrow rejects any other caller.
#[contractclient(name = "EscrowClient")]
pub trait EscrowInterface {
    fn deposit(env: Env, caller: Address, collection: Address, token_id: u64, payer: Address, amount: i128);

    fn refund(env: Env, caller: Address, collection: Address, token_id: u64, recipient: Address, amount: i128);

    fn release(env: Env, caller: Address, collection: Address, token_id: u64, seller: Address, amount: i128);
}
