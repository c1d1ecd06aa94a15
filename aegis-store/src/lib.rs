//! Shared application state for the Aegis prediction market
//!
//! This crate provides the store that mediates between views and the
//! repository, together with the thin view-model collaborators: the trade
//! ticket behind the place/edit modal and the resolved transaction rows of
//! the history page.

pub mod display;
pub mod store;
pub mod trade_form;

pub use display::TransactionView;
pub use store::{AppState, AppStore};
pub use trade_form::{FormError, TradeForm, TradeSubmission};
