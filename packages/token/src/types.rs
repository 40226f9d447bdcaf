use soroban_sdk::{contracttype, String};

/// Token display metadata, written once
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

/// Allowance granted by a holder to a spender
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    /// Last ledger sequence at which the allowance can be spent
    pub expiration_ledger: u32,
}
