//! In-memory repository
//!
//! Emulates a remote resource API over three in-memory collections. All
//! operations resolve without simulated network failure; "not found" is the
//! only expected miss. Markets and options are fixed at construction, while
//! the transaction collection mutates behind a `RwLock` so create, update,
//! and delete serialize correctly on a multi-threaded runtime.

use std::sync::atomic::{AtomicU64, Ordering};

use aegis_core::{
    AegisResult, Market, MarketOption, NewTransaction, Transaction, TransactionUpdate,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::repository::MarketRepository;
use crate::seed;

/// In-memory implementation of [`MarketRepository`]
pub struct InMemoryRepository {
    markets: Vec<Market>,
    options: Vec<MarketOption>,
    transactions: RwLock<Vec<Transaction>>,
    next_id: AtomicU64,
}

impl InMemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::with_catalog(Vec::new(), Vec::new(), Vec::new())
    }

    /// Create a repository seeded with the demo catalog
    pub fn seeded() -> Self {
        Self::with_catalog(seed::markets(), seed::options(), seed::transactions())
    }

    /// Create a repository over an explicit catalog
    pub fn with_catalog(
        markets: Vec<Market>,
        options: Vec<MarketOption>,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            markets,
            options,
            next_id: AtomicU64::new(transactions.len() as u64 + 1),
            transactions: RwLock::new(transactions),
        }
    }

    /// Next unused `tx{n}` id
    ///
    /// The counter alone guarantees uniqueness among generated ids; the
    /// occupancy check also skips over ids the seed catalog already claimed.
    fn next_transaction_id(&self, transactions: &[Transaction]) -> String {
        loop {
            let n = self.next_id.fetch_add(1, Ordering::Relaxed);
            let id = format!("tx{}", n);
            if !transactions.iter().any(|t| t.id == id) {
                return id;
            }
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketRepository for InMemoryRepository {
    async fn list_markets(&self) -> AegisResult<Vec<Market>> {
        Ok(self.markets.clone())
    }

    async fn get_market(&self, id: &str) -> AegisResult<Option<Market>> {
        Ok(self.markets.iter().find(|m| m.id == id).cloned())
    }

    async fn list_options(&self, market_id: &str) -> AegisResult<Vec<MarketOption>> {
        Ok(self
            .options
            .iter()
            .filter(|o| o.market_id == market_id)
            .cloned()
            .collect())
    }

    async fn get_option(&self, id: &str) -> AegisResult<Option<MarketOption>> {
        Ok(self.options.iter().find(|o| o.id == id).cloned())
    }

    async fn list_transactions(&self) -> AegisResult<Vec<Transaction>> {
        Ok(self.transactions.read().clone())
    }

    async fn create_transaction(&self, new: NewTransaction) -> AegisResult<Transaction> {
        let mut transactions = self.transactions.write();
        let id = self.next_transaction_id(&transactions);
        let transaction = new.into_transaction(id);
        transactions.push(transaction.clone());
        debug!("created transaction {}", transaction.id);
        Ok(transaction)
    }

    async fn update_transaction(
        &self,
        id: &str,
        update: TransactionUpdate,
    ) -> AegisResult<Option<Transaction>> {
        let mut transactions = self.transactions.write();
        let Some(existing) = transactions.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        update.apply_to(existing);
        debug!("updated transaction {}", id);
        Ok(Some(existing.clone()))
    }

    async fn delete_transaction(&self, id: &str) -> AegisResult<bool> {
        let mut transactions = self.transactions.write();
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        let removed = transactions.len() < before;
        if removed {
            debug!("deleted transaction {}", id);
        }
        Ok(removed)
    }
}
