//! Infrastructure for the ledger: account storage, the orchestrating
//! service, and statement rendering.

pub mod service;
pub mod statement;
pub mod store;

pub use service::LedgerService;
pub use store::{AccountStore, InMemoryAccountStore};
