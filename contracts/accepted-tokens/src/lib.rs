#![no_std]

//! Admin-curated set of payment tokens accepted across the marketplace.

mod errors;
mod events;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

pub use errors::Error;

#[contract]
pub struct AcceptedTokens;

#[contractimpl]
impl AcceptedTokens {
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        Ok(())
    }

    pub fn add_token(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        if storage::is_accepted(&env, &token) {
            return Err(Error::TokenAlreadyAccepted);
        }
        storage::set_accepted(&env, &token);
        events::emit_token_added(&env, token);
        Ok(())
    }

    pub fn remove_token(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        if !storage::is_accepted(&env, &token) {
            return Err(Error::TokenNotAccepted);
        }
        storage::remove_accepted(&env, &token);
        events::emit_token_removed(&env, token);
        Ok(())
    }

    pub fn is_accepted(env: Env, token: Address) -> bool {
        storage::is_accepted(&env, &token)
    }

    pub fn get_tokens(env: Env) -> Vec<Address> {
        storage::get_tokens(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        if !storage::has_admin(&env) {
            return Err(Error::NotInitialized);
        }
        Ok(storage::get_admin(&env))
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        if !storage::has_admin(env) {
            return Err(Error::NotInitialized);
        }
        admin.require_auth();
        if *admin != storage::get_admin(env) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
