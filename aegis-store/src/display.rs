//! Transaction history presentation
//!
//! Each history row shows a transaction alongside its resolved market and
//! option details. Resolution happens on demand through the repository;
//! dangling references render placeholders instead of failing the row.

use aegis_core::{AegisResult, Transaction};
use aegis_data::MarketRepository;

const UNKNOWN_MARKET: &str = "Unknown market";
const UNKNOWN_OPTION: &str = "Unknown option";

/// A transaction with its market and option references resolved for display
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionView {
    pub transaction: Transaction,
    pub market_title: String,
    pub market_description: String,
    pub option_title: String,
}

impl TransactionView {
    /// Resolve one transaction's references through the repository
    pub async fn resolve(
        repository: &dyn MarketRepository,
        transaction: Transaction,
    ) -> AegisResult<Self> {
        let market = repository.get_market(&transaction.market_id).await?;
        let option = repository.get_option(&transaction.option_id).await?;

        let (market_title, market_description) = match market {
            Some(market) => (market.title, market.description),
            None => (UNKNOWN_MARKET.to_string(), String::new()),
        };
        let option_title = option
            .map(|o| o.title)
            .unwrap_or_else(|| UNKNOWN_OPTION.to_string());

        Ok(Self {
            transaction,
            market_title,
            market_description,
            option_title,
        })
    }

    /// Resolve a whole history listing, preserving its order
    pub async fn resolve_all(
        repository: &dyn MarketRepository,
        transactions: Vec<Transaction>,
    ) -> AegisResult<Vec<Self>> {
        let mut views = Vec::with_capacity(transactions.len());
        for transaction in transactions {
            views.push(Self::resolve(repository, transaction).await?);
        }
        Ok(views)
    }

    /// Price formatted for the row, e.g. `$12.50`
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.transaction.price)
    }

    /// Creation time formatted for the row, e.g. `Nov 1, 2024, 02:30 PM`
    pub fn date_label(&self) -> String {
        self.transaction
            .created_at
            .format("%b %-d, %Y, %I:%M %p")
            .to_string()
    }
}
