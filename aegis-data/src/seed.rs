//! Demo seed catalog
//!
//! The fixed markets, options, and starting transactions the application
//! boots with. Markets and options are read-only after seeding; the
//! transactions are just a starting history and remain fully mutable.

use aegis_core::{Market, MarketOption, Transaction, TransactionType};
use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

fn market(id: &str, title: &str, description: &str) -> Market {
    Market {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status: "Active".to_string(),
    }
}

fn option(id: &str, market_id: &str, title: &str) -> MarketOption {
    MarketOption {
        id: id.to_string(),
        market_id: market_id.to_string(),
        title: title.to_string(),
    }
}

/// The seeded markets, in display order
pub fn markets() -> Vec<Market> {
    vec![
        market(
            "1",
            "Will Bitcoin reach $100k?",
            "Predict if BTC will hit $100k by end of 2024",
        ),
        market(
            "2",
            "Will Ethereum outperform Bitcoin?",
            "Predict ETH performance vs BTC in Q4",
        ),
        market(
            "3",
            "Will AI stocks rally?",
            "Predict the movement of AI-focused stocks",
        ),
        market("5", "Tech IPO Q4 2024", "Will there be a major tech IPO?"),
        market("6", "Gold price forecast", "Will gold break $2500/oz?"),
    ]
}

/// The seeded options, grouped by market in insertion order
pub fn options() -> Vec<MarketOption> {
    vec![
        option("opt1", "1", "Yes"),
        option("opt2", "1", "No"),
        option("opt3", "2", "Yes"),
        option("opt4", "2", "No"),
        option("opt5", "3", "Rally"),
        option("opt6", "3", "Decline"),
        option("opt9", "5", "Yes"),
        option("opt10", "5", "No"),
        option("opt11", "6", "Yes"),
        option("opt12", "6", "No"),
    ]
}

/// The seeded starting history for the demo user
pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "tx1".to_string(),
            user_id: "user1".to_string(),
            market_id: "1".to_string(),
            option_id: "opt1".to_string(),
            transaction_type: TransactionType::Buy,
            price: dec!(45.50),
            created_at: Utc.with_ymd_and_hms(2024, 11, 1, 14, 30, 0).unwrap(),
        },
        Transaction {
            id: "tx2".to_string(),
            user_id: "user1".to_string(),
            market_id: "2".to_string(),
            option_id: "opt3".to_string(),
            transaction_type: TransactionType::Sell,
            price: dec!(32.75),
            created_at: Utc.with_ymd_and_hms(2024, 11, 1, 12, 15, 0).unwrap(),
        },
        Transaction {
            id: "tx3".to_string(),
            user_id: "user1".to_string(),
            market_id: "3".to_string(),
            option_id: "opt5".to_string(),
            transaction_type: TransactionType::Buy,
            price: dec!(67.25),
            created_at: Utc.with_ymd_and_hms(2024, 10, 31, 9, 45, 0).unwrap(),
        },
    ]
}
