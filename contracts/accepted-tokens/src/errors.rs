use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    Unauthorized = 402,
    TokenAlreadyAccepted = 403,
    TokenNotAccepted = 404,
}
