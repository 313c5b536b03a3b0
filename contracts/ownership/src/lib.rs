#![no_std]

//! Two-phase administrative ownership transfer: the owner proposes a
//! successor, the successor accepts. Soroban addresses have no null value,
//! so the classic zero-address guard becomes a propose-self guard.

mod errors;
mod events;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env};

pub use errors::Error;

#[contract]
pub struct Ownership;

#[contractimpl]
impl Ownership {
    pub fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        if storage::has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        storage::set_owner(&env, &owner);
        Ok(())
    }

    pub fn propose_new_owner(env: Env, caller: Address, proposed: Address) -> Result<(), Error> {
        if !storage::has_owner(&env) {
            return Err(Error::NotInitialized);
        }
        caller.require_auth();
        let owner = storage::get_owner(&env);
        if caller != owner {
            return Err(Error::NotOwner);
        }
        if proposed == owner {
            return Err(Error::SelfOwnershipTransfer);
        }

        storage::set_proposed_owner(&env, &proposed);
        events::emit_ownership_proposed(&env, owner, proposed);
        Ok(())
    }

    pub fn accept_ownership(env: Env, caller: Address) -> Result<(), Error> {
        if !storage::has_owner(&env) {
            return Err(Error::NotInitialized);
        }
        caller.require_auth();
        let proposed = storage::get_proposed_owner(&env).ok_or(Error::NoPendingProposal)?;
        if caller != proposed {
            return Err(Error::NotProposedOwner);
        }

        let old_owner = storage::get_owner(&env);
        storage::set_owner(&env, &proposed);
        storage::clear_proposed_owner(&env);

        events::emit_ownership_transferred(&env, old_owner, proposed);
        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        if !storage::has_owner(&env) {
            return Err(Error::NotInitialized);
        }
        Ok(storage::get_owner(&env))
    }

    pub fn get_proposed_owner(env: Env) -> Option<Address> {
        storage::get_proposed_owner(&env)
    }
}
