pub mod auction_test;

use crate::{AuctionCategory, AuctionContract, AuctionContractClient};
use asoebi_escrow::{EscrowContract, EscrowContractClient};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger, LedgerInfo},
    token, Address, Env,
};

pub const TOKEN_ID: u64 = 1;
pub const MINIMUM_SELLING_PRICE: i128 = 1_000;
pub const FEE_PERCENTAGE: u32 = 5;
pub const STARTING_BALANCE: i128 = 1_000_000;

/// Minimal NFT collection standing in for the asset collaborator.
#[contract]
pub struct MockCollection;

#[contracttype]
pub enum MockCollectionKey {
    Owner(u64),
}

#[contractimpl]
impl MockCollection {
    pub fn mint(env: Env, to: Address, token_id: u64) {
        env.storage()
            .persistent()
            .set(&MockCollectionKey::Owner(token_id), &to);
    }

    pub fn owner_of(env: Env, token_id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&MockCollectionKey::Owner(token_id))
            .unwrap()
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) {
        let owner: Address = env
            .storage()
            .persistent()
            .get(&MockCollectionKey::Owner(token_id))
            .unwrap();
        assert_eq!(owner, from, "transfer from non-owner");
        env.storage()
            .persistent()
            .set(&MockCollectionKey::Owner(token_id), &to);
    }
}

pub struct Setup {
    pub env: Env,
    pub admin: Address,
    pub seller: Address,
    pub bidder: Address,
    pub second_bidder: Address,
    pub collection: Address,
    pub auction: AuctionContractClient<'static>,
    pub escrow: EscrowContractClient<'static>,
    pub token: token::TokenClient<'static>,
}

pub fn setup_test() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 23,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    });

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let bidder = Address::generate(&env);
    let second_bidder = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);
    token_admin_client.mint(&bidder, &STARTING_BALANCE);
    token_admin_client.mint(&second_bidder, &STARTING_BALANCE);

    let escrow_id = env.register(EscrowContract, ());
    let escrow = EscrowContractClient::new(&env, &escrow_id);
    escrow.initialize(&admin, &token_address, &FEE_PERCENTAGE);

    let auction_id = env.register(AuctionContract, ());
    let auction = AuctionContractClient::new(&env, &auction_id);
    auction.initialize(&admin, &escrow_id);
    escrow.set_auction_contract(&admin, &auction_id);

    let collection = env.register(MockCollection, ());
    MockCollectionClient::new(&env, &collection).mint(&seller, &TOKEN_ID);

    Setup {
        env,
        admin,
        seller,
        bidder,
        second_bidder,
        collection,
        auction,
        escrow,
        token,
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set(LedgerInfo {
        timestamp: env.ledger().timestamp() + seconds,
        protocol_version: 23,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    });
}

/// Creates an auction starting one hour out and running 24 hours, returning
/// its (start_time, end_time).
pub fn create_default_auction(s: &Setup, bid_floor_is_minimum: bool) -> (u64, u64) {
    let start_time = s.env.ledger().timestamp() + 3600;
    let end_time = start_time + 86400;
    s.auction.create_auction(
        &s.seller,
        &s.collection,
        &TOKEN_ID,
        &MINIMUM_SELLING_PRICE,
        &start_time,
        &end_time,
        &AuctionCategory::Fabric,
        &bid_floor_is_minimum,
    );
    (start_time, end_time)
}

pub fn asset_owner(s: &Setup, token_id: u64) -> Address {
    MockCollectionClient::new(&s.env, &s.collection).owner_of(&token_id)
}
