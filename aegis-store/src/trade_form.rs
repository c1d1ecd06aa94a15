//! Trade ticket logic
//!
//! Backs the place/edit trade modal: one selectable option, a free-text
//! price field, and a submit that either creates a new transaction or
//! produces a partial update for the transaction being edited. Validation
//! failures surface synchronously at submission time.

use aegis_core::{Market, MarketOption, NewTransaction, Transaction, TransactionType, TransactionUpdate};
use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

/// Validation failure raised at submission time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please select an option")]
    NoOptionSelected,

    #[error("Please enter a valid price")]
    InvalidPrice,
}

/// Outcome of a valid submission
#[derive(Debug, Clone, PartialEq)]
pub enum TradeSubmission {
    /// Create a brand new transaction
    Create(NewTransaction),
    /// Merge the edited option and price onto an existing transaction
    Update {
        transaction_id: String,
        update: TransactionUpdate,
    },
}

enum FormMode {
    Create,
    Edit { transaction_id: String },
}

/// State of the trade modal, scoped to one market
pub struct TradeForm {
    market: Market,
    options: Vec<MarketOption>,
    mode: FormMode,
    selected: Option<MarketOption>,
    price_input: String,
    transaction_type: TransactionType,
    user_id: String,
}

impl TradeForm {
    /// Open an empty form for placing a new trade
    pub fn create(market: Market, options: Vec<MarketOption>, user_id: impl Into<String>) -> Self {
        Self {
            market,
            options,
            mode: FormMode::Create,
            selected: None,
            price_input: String::new(),
            transaction_type: TransactionType::Buy,
            user_id: user_id.into(),
        }
    }

    /// Open a form pre-filled from an existing transaction
    ///
    /// The transaction's option is pre-selected when it appears in the given
    /// option list; its price pre-fills the price field.
    pub fn edit(market: Market, options: Vec<MarketOption>, transaction: &Transaction) -> Self {
        let selected = options
            .iter()
            .find(|o| o.id == transaction.option_id)
            .cloned();
        Self {
            market,
            mode: FormMode::Edit {
                transaction_id: transaction.id.clone(),
            },
            selected,
            price_input: transaction.price.to_string(),
            transaction_type: transaction.transaction_type,
            user_id: transaction.user_id.clone(),
            options,
        }
    }

    pub fn market(&self) -> &Market {
        &self.market
    }

    pub fn options(&self) -> &[MarketOption] {
        &self.options
    }

    pub fn selected_option(&self) -> Option<&MarketOption> {
        self.selected.as_ref()
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Select one of the form's options; `false` if the id is not offered
    pub fn select_option(&mut self, option_id: &str) -> bool {
        match self.options.iter().find(|o| o.id == option_id) {
            Some(option) => {
                self.selected = Some(option.clone());
                true
            }
            None => false,
        }
    }

    /// Replace the raw price field content
    pub fn set_price(&mut self, input: impl Into<String>) {
        self.price_input = input.into();
    }

    pub fn set_transaction_type(&mut self, transaction_type: TransactionType) {
        self.transaction_type = transaction_type;
    }

    /// Validate and produce the submission
    ///
    /// An option must be selected and the price field must parse to a
    /// strictly positive decimal.
    pub fn submit(&self) -> Result<TradeSubmission, FormError> {
        let option = self.selected.as_ref().ok_or(FormError::NoOptionSelected)?;

        let price: Decimal = self
            .price_input
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidPrice)?;
        if price <= Decimal::ZERO {
            return Err(FormError::InvalidPrice);
        }

        match &self.mode {
            FormMode::Create => Ok(TradeSubmission::Create(NewTransaction {
                user_id: self.user_id.clone(),
                market_id: self.market.id.clone(),
                option_id: option.id.clone(),
                transaction_type: self.transaction_type,
                price,
                created_at: Utc::now(),
            })),
            FormMode::Edit { transaction_id } => Ok(TradeSubmission::Update {
                transaction_id: transaction_id.clone(),
                update: TransactionUpdate {
                    option_id: Some(option.id.clone()),
                    price: Some(price),
                    ..Default::default()
                },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_market() -> Market {
        Market {
            id: "1".to_string(),
            title: "Will Bitcoin reach $100k?".to_string(),
            description: "Predict if BTC will hit $100k by end of 2024".to_string(),
            status: "Active".to_string(),
        }
    }

    fn make_options() -> Vec<MarketOption> {
        vec![
            MarketOption {
                id: "opt1".to_string(),
                market_id: "1".to_string(),
                title: "Yes".to_string(),
            },
            MarketOption {
                id: "opt2".to_string(),
                market_id: "1".to_string(),
                title: "No".to_string(),
            },
        ]
    }

    #[test]
    fn test_submit_requires_an_option() {
        let mut form = TradeForm::create(make_market(), make_options(), "user1");
        form.set_price("12.50");

        assert_eq!(form.submit(), Err(FormError::NoOptionSelected));
    }

    #[test]
    fn test_submit_rejects_non_positive_and_garbage_prices() {
        let mut form = TradeForm::create(make_market(), make_options(), "user1");
        assert!(form.select_option("opt1"));

        for input in ["", "abc", "0", "-5"] {
            form.set_price(input);
            assert_eq!(form.submit(), Err(FormError::InvalidPrice), "input {:?}", input);
        }
    }

    #[test]
    fn test_create_submission_carries_the_selection() {
        let mut form = TradeForm::create(make_market(), make_options(), "user1");
        assert!(form.select_option("opt1"));
        form.set_price("12.50");

        match form.submit().unwrap() {
            TradeSubmission::Create(new) => {
                assert_eq!(new.market_id, "1");
                assert_eq!(new.option_id, "opt1");
                assert_eq!(new.user_id, "user1");
                assert_eq!(new.price, dec!(12.50));
                assert_eq!(new.transaction_type, TransactionType::Buy);
            }
            other => panic!("expected a create submission, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_form_prefills_and_submits_an_update() {
        let transaction = aegis_core::Transaction {
            id: "tx1".to_string(),
            user_id: "user1".to_string(),
            market_id: "1".to_string(),
            option_id: "opt2".to_string(),
            transaction_type: TransactionType::Sell,
            price: dec!(45.50),
            created_at: chrono::Utc::now(),
        };

        let mut form = TradeForm::edit(make_market(), make_options(), &transaction);
        assert!(form.is_edit());
        assert_eq!(form.selected_option().unwrap().id, "opt2");

        form.set_price("20.00");
        match form.submit().unwrap() {
            TradeSubmission::Update {
                transaction_id,
                update,
            } => {
                assert_eq!(transaction_id, "tx1");
                assert_eq!(update.price, Some(dec!(20.00)));
                assert_eq!(update.option_id, Some("opt2".to_string()));
                assert!(update.user_id.is_none());
                assert!(update.created_at.is_none());
            }
            other => panic!("expected an update submission, got {:?}", other),
        }
    }

    #[test]
    fn test_selecting_a_foreign_option_is_refused() {
        let mut form = TradeForm::create(make_market(), make_options(), "user1");
        assert!(!form.select_option("opt5"));
        assert!(form.selected_option().is_none());
    }
}
