#![no_std]

//! Time-boxed ascending-price auctions for NFTs, one live auction per
//! (collection, token id) key. Bids are custodied in a separate escrow
//! contract; settlement transfers the asset and releases the winning bid
//! net of the escrow's fee in one invocation.

mod errors;
mod events;
mod external;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env};

use external::{AssetClient, EscrowClient};

pub use errors::Error;
pub use external::{AssetInterface, EscrowInterface};
pub use types::{Auction, AuctionCategory, HighestBid};

/// Shortest allowed bidding window, in seconds.
pub const MIN_AUCTION_DURATION: u64 = 600;

/// How long past `end_time` a standing deposit stays locked before the
/// highest bidder may reclaim it without the seller finalizing.
pub const RECLAIM_GRACE_PERIOD: u64 = 7 * 24 * 3600;

#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    pub fn initialize(env: Env, admin: Address, escrow: Address) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        storage::set_escrow_contract(&env, &escrow);
        Ok(())
    }

    /// Rebinds the escrow contract. Admin only.
    pub fn set_escrow_contract(env: Env, admin: Address, escrow: Address) -> Result<(), Error> {
        Self::require_admin(&env, &admin)?;
        storage::set_escrow_contract(&env, &escrow);
        Ok(())
    }

    /// Opens an auction for an asset the seller currently owns. No funds
    /// move here. A key may be reused once its previous auction is settled
    /// or has ended with nothing left in escrow; a live record rejects.
    #[allow(clippy::too_many_arguments)]
    pub fn create_auction(
        env: Env,
        seller: Address,
        collection: Address,
        token_id: u64,
        minimum_selling_price: i128,
        start_time: u64,
        end_time: u64,
        category: AuctionCategory,
        bid_floor_is_minimum: bool,
    ) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        seller.require_auth();

        let now = env.ledger().timestamp();

        // A key is free again once its auction is finalized, or once it
        // ended with nothing in escrow (no bid ever, or the bid reclaimed).
        // A live record, or an ended one whose deposit is still held,
        // blocks the key.
        if let Some(existing) = storage::get_auction(&env, &collection, token_id) {
            let ended_without_funds = now >= existing.end_time && existing.highest_bid == 0;
            if !existing.finalized && !ended_without_funds {
                return Err(Error::AuctionAlreadyExists);
            }
        }

        let owner = AssetClient::new(&env, &collection).owner_of(&token_id);
        if owner != seller {
            return Err(Error::InvalidOwner);
        }
        if minimum_selling_price <= 0 {
            return Err(Error::InvalidSellingPrice);
        }
        if start_time < now {
            return Err(Error::InvalidStartTime);
        }
        if end_time < start_time || end_time - start_time < MIN_AUCTION_DURATION {
            return Err(Error::InvalidEndTime);
        }

        let auction = Auction {
            seller,
            minimum_selling_price,
            start_time,
            end_time,
            category,
            bid_floor_is_minimum,
            highest_bid: 0,
            highest_bidder: None,
            finalized: false,
        };
        storage::save_auction(&env, &collection, token_id, &auction);

        events::emit_auction_created(&env, collection, token_id, category);
        Ok(())
    }

    /// Accepts a bid inside the `[start_time, end_time)` window. The
    /// previous highest bidder is refunded and the new deposit taken in the
    /// same invocation, so the escrow never holds two live deposits for one
    /// key. The record is advanced before any external fund movement.
    pub fn place_bid(
        env: Env,
        collection: Address,
        token_id: u64,
        bidder: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        bidder.require_auth();

        let mut auction =
            storage::get_auction(&env, &collection, token_id).ok_or(Error::InvalidAuction)?;
        if auction.finalized {
            return Err(Error::AuctionAlreadyFinalized);
        }
        let now = env.ledger().timestamp();
        if now < auction.start_time || now >= auction.end_time {
            return Err(Error::InvalidAuction);
        }

        let previous = auction
            .highest_bidder
            .clone()
            .map(|prior| (prior, auction.highest_bid));
        match &previous {
            None => {
                let floor = if auction.bid_floor_is_minimum {
                    auction.minimum_selling_price
                } else {
                    1
                };
                if amount < floor {
                    return Err(Error::InvalidBid);
                }
            }
            Some((_, highest)) => {
                if amount <= *highest {
                    return Err(Error::DidNotOutBid);
                }
            }
        }

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());
        storage::save_auction(&env, &collection, token_id, &auction);

        let escrow = EscrowClient::new(&env, &storage::get_escrow_contract(&env));
        let this = env.current_contract_address();
        if let Some((prior_bidder, prior_bid)) = previous {
            escrow.refund(&this, &collection, &token_id, &prior_bidder, &prior_bid);
        }
        escrow.deposit(&this, &collection, &token_id, &bidder, &amount);

        events::emit_bid_placed(&env, collection, token_id, bidder, amount);
        Ok(())
    }

    /// Settles an ended auction: asset custody moves to the winner and the
    /// winning bid is released net of fee. The winning bid must meet the
    /// minimum selling price whatever floor policy applied at bid time.
    /// `finalized` is committed before the external transfer and release;
    /// a trap in either rolls the whole invocation back, so a failed
    /// settlement stays retryable.
    pub fn finalize_auction(
        env: Env,
        collection: Address,
        token_id: u64,
        caller: Address,
    ) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let mut auction =
            storage::get_auction(&env, &collection, token_id).ok_or(Error::AuctionNotFound)?;
        if caller != auction.seller {
            return Err(Error::InvalidOwner);
        }
        if auction.finalized {
            return Err(Error::AuctionAlreadyFinalized);
        }
        if env.ledger().timestamp() < auction.end_time {
            return Err(Error::AuctionIsActive);
        }
        let winner = auction.highest_bidder.clone().ok_or(Error::NoBid)?;
        let winning_bid = auction.highest_bid;
        if winning_bid < auction.minimum_selling_price {
            return Err(Error::InvalidWinningBid);
        }

        auction.finalized = true;
        storage::save_auction(&env, &collection, token_id, &auction);

        AssetClient::new(&env, &collection).transfer(&auction.seller, &winner, &token_id);

        let escrow = EscrowClient::new(&env, &storage::get_escrow_contract(&env));
        escrow.release(
            &env.current_contract_address(),
            &collection,
            &token_id,
            &auction.seller,
            &winning_bid,
        );

        events::emit_auction_finalized(&env, auction.seller, collection, token_id, winner, winning_bid);
        Ok(())
    }

    /// Recovery path for deposits stranded in an ended, unfinalized
    /// auction. The highest bidder may pull their funds back once the
    /// standing bid can never settle (below the absolute floor), or after a
    /// grace period in which the seller failed to finalize. Clears the
    /// standing bid so a later finalize cannot double-spend it.
    pub fn reclaim_bid(
        env: Env,
        collection: Address,
        token_id: u64,
        bidder: Address,
    ) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        bidder.require_auth();

        let mut auction =
            storage::get_auction(&env, &collection, token_id).ok_or(Error::AuctionNotFound)?;
        if auction.finalized {
            return Err(Error::AuctionAlreadyFinalized);
        }
        let now = env.ledger().timestamp();
        if now < auction.end_time {
            return Err(Error::AuctionIsActive);
        }
        let holder = auction.highest_bidder.clone().ok_or(Error::NoBid)?;
        if holder != bidder {
            return Err(Error::NotHighestBidder);
        }

        // `now >= end_time` holds here, so the subtraction cannot wrap.
        let can_never_settle = auction.highest_bid < auction.minimum_selling_price;
        if !can_never_settle && now - auction.end_time < RECLAIM_GRACE_PERIOD {
            return Err(Error::ReclaimUnavailable);
        }

        let amount = auction.highest_bid;
        auction.highest_bid = 0;
        auction.highest_bidder = None;
        storage::save_auction(&env, &collection, token_id, &auction);

        let escrow = EscrowClient::new(&env, &storage::get_escrow_contract(&env));
        escrow.refund(
            &env.current_contract_address(),
            &collection,
            &token_id,
            &bidder,
            &amount,
        );

        events::emit_bid_reclaimed(&env, collection, token_id, bidder, amount);
        Ok(())
    }

    // ========== QUERIES ==========

    pub fn get_auction(env: Env, collection: Address, token_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, &collection, token_id).ok_or(Error::AuctionNotFound)
    }

    pub fn get_highest_bidder(
        env: Env,
        collection: Address,
        token_id: u64,
    ) -> Result<HighestBid, Error> {
        let auction =
            storage::get_auction(&env, &collection, token_id).ok_or(Error::AuctionNotFound)?;
        Ok(HighestBid {
            bidder: auction.highest_bidder,
            bid: auction.highest_bid,
        })
    }

    pub fn get_escrow_contract(env: Env) -> Result<Address, Error> {
        if !storage::has_admin(&env) {
            return Err(Error::NotInitialized);
        }
        Ok(storage::get_escrow_contract(&env))
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        if !storage::has_admin(&env) {
            return Err(Error::NotInitialized);
        }
        Ok(storage::get_admin(&env))
    }

    // ========== INTERNAL HELPERS ==========

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::has_admin(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        Self::require_initialized(env)?;
        admin.require_auth();
        if *admin != storage::get_admin(env) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test;
