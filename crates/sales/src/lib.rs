//! Sales and returns.
//!
//! Transactions are short-lived values: they decide a stock delta, are logged
//! by the caller, and are dropped. Nothing here performs IO.

pub mod transaction;

pub use transaction::{DATE_FORMAT, Transaction, TransactionDetails, TransactionKind};
