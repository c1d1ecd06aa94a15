//! Repository capability trait

use aegis_core::{
    AegisResult, Market, MarketOption, NewTransaction, Transaction, TransactionUpdate,
};
use async_trait::async_trait;

/// Capability surface a data backend must provide
///
/// The store and the HTTP handlers only ever talk to this trait, so the
/// in-memory implementation can be swapped for a network-backed one without
/// touching either. Expected not-found outcomes are signaled by `Ok(None)` /
/// `Ok(false)`, never by an error.
#[async_trait]
pub trait MarketRepository: Send + Sync {
    /// All markets, in seed order
    async fn list_markets(&self) -> AegisResult<Vec<Market>>;

    /// A single market, `None` if the id is unknown
    async fn get_market(&self, id: &str) -> AegisResult<Option<Market>>;

    /// Options belonging to the given market, empty if there are none
    async fn list_options(&self, market_id: &str) -> AegisResult<Vec<MarketOption>>;

    /// A single option, `None` if the id is unknown
    async fn get_option(&self, id: &str) -> AegisResult<Option<MarketOption>>;

    /// All transactions, in insertion order
    ///
    /// Deletes do not reorder the surviving records.
    async fn list_transactions(&self) -> AegisResult<Vec<Transaction>>;

    /// Assign a fresh unique id, store the record, and return it
    async fn create_transaction(&self, new: NewTransaction) -> AegisResult<Transaction>;

    /// Merge the named fields onto the matching record
    ///
    /// Returns the merged record, or `None` if the id is unknown.
    async fn update_transaction(
        &self,
        id: &str,
        update: TransactionUpdate,
    ) -> AegisResult<Option<Transaction>>;

    /// Remove the matching record; `true` iff one was removed
    async fn delete_transaction(&self, id: &str) -> AegisResult<bool>;
}
