//! Application store
//!
//! A single shared state container consumed by every view. All mutation goes
//! through the actions here: each action calls the repository, then publishes
//! the new state through a watch channel so subscribers re-render. Repository
//! faults are logged and leave the previously published state untouched, so
//! the views show stale-but-consistent data rather than crashing.

use std::collections::HashMap;
use std::sync::Arc;

use aegis_core::{Market, MarketOption, NewTransaction, Transaction, TransactionUpdate};
use aegis_data::MarketRepository;
use tokio::sync::watch;
use tracing::error;

/// Snapshot of everything the views render
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// All known markets, in catalog order
    pub markets: Vec<Market>,

    /// Options per market id, filled lazily or during initialization
    pub market_options: HashMap<String, Vec<MarketOption>>,

    /// Transaction history, in insertion order
    pub transactions: Vec<Transaction>,

    /// Loading flags, one per independently fetched slice
    pub loading_markets: bool,
    pub loading_options: bool,
    pub loading_transactions: bool,
}

/// Shared store mediating between views and the repository
pub struct AppStore {
    repository: Arc<dyn MarketRepository>,
    state: watch::Sender<AppState>,
}

impl AppStore {
    pub fn new(repository: Arc<dyn MarketRepository>) -> Self {
        let (state, _) = watch::channel(AppState::default());
        Self { repository, state }
    }

    /// The currently published state
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Observe every published state change
    ///
    /// The receiver sees each publish; a dropped receiver is tolerated.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    /// Fetch markets, transactions, and every market's options, then publish
    /// all three slices as a single state update
    ///
    /// Fail-coarse: if any fetch fails, nothing fetched in the same call is
    /// published; the loading flags end cleared either way.
    pub async fn initialize(&self) {
        self.state.send_modify(|state| {
            state.loading_markets = true;
            state.loading_options = true;
            state.loading_transactions = true;
        });

        let (markets, transactions) = tokio::join!(
            self.repository.list_markets(),
            self.repository.list_transactions(),
        );
        let (markets, transactions) = match (markets, transactions) {
            (Ok(markets), Ok(transactions)) => (markets, transactions),
            (Err(e), _) | (_, Err(e)) => {
                error!("Error initializing store: {}", e);
                self.clear_loading();
                return;
            }
        };

        let fetches = markets.iter().map(|market| async move {
            let options = self.repository.list_options(&market.id).await;
            (market.id.clone(), options)
        });

        let mut market_options = HashMap::new();
        for (market_id, result) in futures::future::join_all(fetches).await {
            match result {
                Ok(options) => {
                    market_options.insert(market_id, options);
                }
                Err(e) => {
                    error!("Error initializing store: {}", e);
                    self.clear_loading();
                    return;
                }
            }
        }

        self.state.send_modify(|state| {
            state.markets = markets;
            state.transactions = transactions;
            state.market_options = market_options;
            state.loading_markets = false;
            state.loading_options = false;
            state.loading_transactions = false;
        });
    }

    /// Refetch the market list
    pub async fn load_markets(&self) {
        self.state.send_modify(|state| state.loading_markets = true);
        match self.repository.list_markets().await {
            Ok(markets) => self.state.send_modify(|state| {
                state.markets = markets;
                state.loading_markets = false;
            }),
            Err(e) => {
                error!("Error loading markets: {}", e);
                self.state.send_modify(|state| state.loading_markets = false);
            }
        }
    }

    /// Fetch (or refetch) the options of a single market
    pub async fn load_options_for_market(&self, market_id: &str) {
        self.state.send_modify(|state| state.loading_options = true);
        match self.repository.list_options(market_id).await {
            Ok(options) => self.state.send_modify(|state| {
                state.market_options.insert(market_id.to_string(), options);
                state.loading_options = false;
            }),
            Err(e) => {
                error!("Error loading options: {}", e);
                self.state.send_modify(|state| state.loading_options = false);
            }
        }
    }

    /// Refetch the transaction history
    pub async fn load_transactions(&self) {
        self.state
            .send_modify(|state| state.loading_transactions = true);
        match self.repository.list_transactions().await {
            Ok(transactions) => self.state.send_modify(|state| {
                state.transactions = transactions;
                state.loading_transactions = false;
            }),
            Err(e) => {
                error!("Error loading transactions: {}", e);
                self.state
                    .send_modify(|state| state.loading_transactions = false);
            }
        }
    }

    /// Create a transaction and append it to the published history
    pub async fn add_transaction(&self, new: NewTransaction) {
        match self.repository.create_transaction(new).await {
            Ok(transaction) => self
                .state
                .send_modify(|state| state.transactions.push(transaction)),
            Err(e) => error!("Error adding transaction: {}", e),
        }
    }

    /// Merge a partial update into one transaction, in the repository and in
    /// the published history
    pub async fn update_transaction(&self, id: &str, update: TransactionUpdate) {
        match self.repository.update_transaction(id, update).await {
            Ok(Some(merged)) => self.state.send_modify(|state| {
                if let Some(slot) = state.transactions.iter_mut().find(|t| t.id == merged.id) {
                    *slot = merged;
                }
            }),
            Ok(None) => error!("Error updating transaction: {} not found", id),
            Err(e) => error!("Error updating transaction: {}", e),
        }
    }

    /// Delete a transaction and drop it from the published history
    pub async fn remove_transaction(&self, id: &str) {
        match self.repository.delete_transaction(id).await {
            Ok(true) => self
                .state
                .send_modify(|state| state.transactions.retain(|t| t.id != id)),
            Ok(false) => error!("Error removing transaction: {} not found", id),
            Err(e) => error!("Error removing transaction: {}", e),
        }
    }

    fn clear_loading(&self) {
        self.state.send_modify(|state| {
            state.loading_markets = false;
            state.loading_options = false;
            state.loading_transactions = false;
        });
    }
}
