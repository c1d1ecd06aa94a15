//! Transaction types and partial-update shapes

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of a recorded trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Buy => write!(f, "buy"),
            TransactionType::Sell => write!(f, "sell"),
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(TransactionType::Buy),
            "sell" => Ok(TransactionType::Sell),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

/// A recorded buy/sell action against one option of one market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the repository at creation time
    pub id: String,

    /// User who placed the trade
    pub user_id: String,

    /// Market the trade was placed on
    pub market_id: String,

    /// Selected option within that market
    pub option_id: String,

    /// Whether the position was bought or sold
    pub transaction_type: TransactionType,

    /// Price paid or received (non-negative)
    pub price: Decimal,

    /// When the trade was recorded
    pub created_at: DateTime<Utc>,
}

/// Input for creating a transaction; the repository assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub user_id: String,
    pub market_id: String,
    pub option_id: String,
    pub transaction_type: TransactionType,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl NewTransaction {
    /// Materialize into a stored record carrying the assigned id
    pub fn into_transaction(self, id: String) -> Transaction {
        Transaction {
            id,
            user_id: self.user_id,
            market_id: self.market_id,
            option_id: self.option_id,
            transaction_type: self.transaction_type,
            price: self.price,
            created_at: self.created_at,
        }
    }
}

/// Partial-field update for a transaction
///
/// Only the fields that are `Some` are overwritten by a merge; everything
/// else retains its prior value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl TransactionUpdate {
    /// Update that changes only the price
    pub fn price(price: Decimal) -> Self {
        TransactionUpdate {
            price: Some(price),
            ..Default::default()
        }
    }

    /// Merge the named fields onto an existing record
    pub fn apply_to(&self, transaction: &mut Transaction) {
        if let Some(user_id) = &self.user_id {
            transaction.user_id = user_id.clone();
        }
        if let Some(market_id) = &self.market_id {
            transaction.market_id = market_id.clone();
        }
        if let Some(option_id) = &self.option_id {
            transaction.option_id = option_id.clone();
        }
        if let Some(transaction_type) = self.transaction_type {
            transaction.transaction_type = transaction_type;
        }
        if let Some(price) = self.price {
            transaction.price = price;
        }
        if let Some(created_at) = self.created_at {
            transaction.created_at = created_at;
        }
    }
}
