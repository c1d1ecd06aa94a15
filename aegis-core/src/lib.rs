//! Core types for the Aegis prediction market
//!
//! This crate defines the shared data structures used across the
//! application: markets, their options, recorded transactions, and the
//! workspace-wide error type.

pub mod error;
pub mod market;
pub mod transaction;

pub use error::{AegisError, AegisResult};
pub use market::{Market, MarketOption, MarketWithOptions};
pub use transaction::{NewTransaction, Transaction, TransactionType, TransactionUpdate};
