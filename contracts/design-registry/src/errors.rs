use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    DesignNotFound = 300,
    DesignAlreadyExists = 301,
    InvalidPrice = 302,
    MissingContentHash = 303,
    NotCreator = 304,
}
