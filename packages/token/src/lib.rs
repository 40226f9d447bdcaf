// LBC Swap Token Package
//
// Balance, allowance and supply bookkeeping for the reserve token. The ledger
// lives in the storage of whichever contract calls into it; authorization is
// the caller's job.

#![no_std]

pub mod error;
pub mod events;
pub mod ledger;
pub mod storage;
pub mod types;

pub use error::TokenError;
pub use types::{AllowanceValue, TokenMetadata};

pub use ledger::{
    allowance,
    approve,
    balance,
    burn,
    metadata,
    mint,
    spend_allowance,
    total_supply,
    transfer,
};
pub use storage::write_metadata;
