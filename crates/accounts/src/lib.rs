//! Bank account domain: the `Account` aggregate and its transaction history.

pub mod account;

pub use account::{Account, Transaction, TransactionKind};
