use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidOwner = 4,
    InvalidSellingPrice = 5,
    InvalidStartTime = 6,
    InvalidEndTime = 7,
    AuctionAlreadyExists = 8,
    InvalidAuction = 9,
    AuctionAlreadyFinalized = 10,
    InvalidBid = 11,
    DidNotOutBid = 12,
    AuctionIsActive = 13,
    NoBid = 14,
    InvalidWinningBid = 15,
    AuctionNotFound = 16,
    NotHighestBidder = 17,
    ReclaimUnavailable = 18,
}
