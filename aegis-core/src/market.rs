//! Market data structures

use serde::{Deserialize, Serialize};

/// A tradeable prediction question
///
/// Markets are seeded once and immutable afterwards; no lifecycle
/// transitions are modeled beyond the free-text status label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    /// Unique identifier (opaque string; a UUID in a real deployment)
    pub id: String,

    /// Human-readable question (e.g. "Will Bitcoin reach $100k?")
    pub title: String,

    /// Longer description of what is being predicted
    pub description: String,

    /// Free-text status label (e.g. "Active")
    pub status: String,
}

/// One selectable outcome belonging to a market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketOption {
    /// Unique identifier
    pub id: String,

    /// Market this option belongs to
    pub market_id: String,

    /// Display title (e.g. "Yes", "No", "Rally")
    pub title: String,
}

/// A market together with its options, as served by detail lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketWithOptions {
    #[serde(flatten)]
    pub market: Market,
    pub options: Vec<MarketOption>,
}
