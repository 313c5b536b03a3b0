#![no_std]

//! Registry of listed designs: a content hash, the creator who uploaded
//! it, and an asking price. Plain keyed CRUD, no lifecycle.

mod errors;
mod events;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env, String};

pub use errors::Error;
pub use types::Design;

#[contract]
pub struct DesignRegistry;

#[contractimpl]
impl DesignRegistry {
    pub fn create_design(
        env: Env,
        creator: Address,
        design_id: u64,
        ipfs_hash: String,
        price: i128,
    ) -> Result<(), Error> {
        creator.require_auth();

        if storage::get_design(&env, design_id).is_some() {
            return Err(Error::DesignAlreadyExists);
        }
        if ipfs_hash.is_empty() {
            return Err(Error::MissingContentHash);
        }
        if price <= 0 {
            return Err(Error::InvalidPrice);
        }

        let design = Design {
            ipfs_hash: ipfs_hash.clone(),
            creator: creator.clone(),
            price,
            created_at: env.ledger().timestamp(),
        };
        storage::set_design(&env, design_id, &design);

        events::emit_design_created(&env, design_id, creator, ipfs_hash, price);
        Ok(())
    }

    /// Repricing is the only mutation a creator gets; the content hash and
    /// creator identity are fixed at creation.
    pub fn update_price(env: Env, creator: Address, design_id: u64, price: i128) -> Result<(), Error> {
        creator.require_auth();

        let mut design = storage::get_design(&env, design_id).ok_or(Error::DesignNotFound)?;
        if design.creator != creator {
            return Err(Error::NotCreator);
        }
        if price <= 0 {
            return Err(Error::InvalidPrice);
        }

        let old_price = design.price;
        design.price = price;
        storage::set_design(&env, design_id, &design);

        events::emit_design_price_updated(&env, design_id, old_price, price);
        Ok(())
    }

    pub fn get_design(env: Env, design_id: u64) -> Result<Design, Error> {
        storage::get_design(&env, design_id).ok_or(Error::DesignNotFound)
    }
}
