use soroban_sdk::contracttype;

#[contracttype]
pub enum DataKey {
    Owner,
    ProposedOwner,
}
