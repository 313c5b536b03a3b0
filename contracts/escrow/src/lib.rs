#![no_std]

//! Custodial escrow for auction bids. Holds the standing bid for each
//! (collection, token id) key and only moves funds on instruction from the
//! single bound auction contract. Accounting is enforced here as well:
//! no refund or release may exceed the recorded held balance, whatever the
//! caller claims.

mod errors;
mod events;
pub mod fee;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, token, Address, Env};

pub use errors::Error;
pub use types::Held;

#[contract]
pub struct EscrowContract;

#[contractimpl]
impl EscrowContract {
    /// One-time setup. `admin` administers the contract and collects fees;
    /// `token` is the payment asset; `fee_percentage` is a whole-number
    /// percentage in `0..=100` applied at release.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        fee_percentage: u32,
    ) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        if fee_percentage > 100 {
            return Err(Error::InvalidFeePercentage);
        }
        storage::set_admin(&env, &admin);
        storage::set_token(&env, &token);
        storage::set_fee_percentage(&env, fee_percentage);
        Ok(())
    }

    /// Binds the auction contract allowed to move funds. Admin only.
    pub fn set_auction_contract(env: Env, admin: Address, auction: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        storage::set_auction_contract(&env, &auction);
        Ok(())
    }

    /// Takes `amount` of the payment token from `payer` into custody for
    /// the given auction key, recording `payer` as the refundable identity.
    /// While another bidder's balance is held for the key, the deposit is
    /// rejected: accepting it would overwrite the refundable identity of
    /// funds still in custody.
    pub fn deposit(
        env: Env,
        caller: Address,
        collection: Address,
        token_id: u64,
        payer: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::require_auction_contract(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let previous = storage::get_held(&env, &collection, token_id);
        if let Some(held) = &previous {
            if held.bidder != payer {
                return Err(Error::ConflictingDeposit);
            }
        }

        let client = token::TokenClient::new(&env, &storage::get_token(&env));
        client.transfer(&payer, &env.current_contract_address(), &amount);

        let balance = previous.map(|held| held.amount).unwrap_or(0);
        storage::set_held(
            &env,
            &collection,
            token_id,
            &Held {
                amount: balance + amount,
                bidder: payer.clone(),
            },
        );

        events::emit_funds_deposited(&env, collection, token_id, payer, amount);
        Ok(())
    }

    /// Pays exactly `amount` back to `recipient` out of the key's held
    /// balance. Used when a standing bid is replaced or reclaimed.
    pub fn refund(
        env: Env,
        caller: Address,
        collection: Address,
        token_id: u64,
        recipient: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::require_auction_contract(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let held = storage::get_held(&env, &collection, token_id)
            .ok_or(Error::InsufficientEscrowBalance)?;
        if amount > held.amount {
            return Err(Error::InsufficientEscrowBalance);
        }

        let client = token::TokenClient::new(&env, &storage::get_token(&env));
        client.transfer(&env.current_contract_address(), &recipient, &amount);

        let remaining = held.amount - amount;
        if remaining == 0 {
            storage::remove_held(&env, &collection, token_id);
        } else {
            storage::set_held(
                &env,
                &collection,
                token_id,
                &Held {
                    amount: remaining,
                    bidder: held.bidder,
                },
            );
        }

        events::emit_funds_refunded(&env, collection, token_id, recipient, amount);
        Ok(())
    }

    /// Settles `amount` of the key's held balance: the fee split is applied,
    /// the net portion goes to `seller` and the fee to the admin beneficiary.
    pub fn release(
        env: Env,
        caller: Address,
        collection: Address,
        token_id: u64,
        seller: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::require_auction_contract(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let held = storage::get_held(&env, &collection, token_id)
            .ok_or(Error::InsufficientEscrowBalance)?;
        if amount > held.amount {
            return Err(Error::InsufficientEscrowBalance);
        }

        let (net_amount, fee_amount) = fee::split(amount, storage::get_fee_percentage(&env));

        let client = token::TokenClient::new(&env, &storage::get_token(&env));
        let contract_address = env.current_contract_address();
        client.transfer(&contract_address, &seller, &net_amount);
        if fee_amount > 0 {
            client.transfer(&contract_address, &storage::get_admin(&env), &fee_amount);
        }

        let remaining = held.amount - amount;
        if remaining == 0 {
            storage::remove_held(&env, &collection, token_id);
        } else {
            storage::set_held(
                &env,
                &collection,
                token_id,
                &Held {
                    amount: remaining,
                    bidder: held.bidder,
                },
            );
        }

        events::emit_funds_released(&env, collection, token_id, seller, net_amount, fee_amount);
        Ok(())
    }

    // ========== QUERIES ==========

    pub fn get_held(env: Env, collection: Address, token_id: u64) -> Option<Held> {
        storage::get_held(&env, &collection, token_id)
    }

    pub fn get_fee_percentage(env: Env) -> Result<u32, Error> {
        if !storage::has_admin(&env) {
            return Err(Error::NotInitialized);
        }
        Ok(storage::get_fee_percentage(&env))
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        if !storage::has_admin(&env) {
            return Err(Error::NotInitialized);
        }
        Ok(storage::get_admin(&env))
    }

    pub fn get_auction_contract(env: Env) -> Result<Address, Error> {
        storage::get_auction_contract(&env).ok_or(Error::AuctionContractNotSet)
    }

    // ========== INTERNAL HELPERS ==========

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

    fn require_auction_contract(env: &Env, caller: &Address) -> Result<(), Error> {
        if !storage::has_admin(env) {
            return Err(Error::NotInitialized);
        }
        let auction = storage::get_auction_contract(env).ok_or(Error::AuctionContractNotSet)?;
        caller.require_auth();
        if *caller != auction {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
