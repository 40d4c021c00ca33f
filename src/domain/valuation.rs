use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Pence;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionValue {
    pub symbol: String,
    pub quantity: u32,
    pub price_pence: Pence,
    pub value_pence: Pence,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioValuation {
    pub as_of: DateTime<Utc>,
    pub positions: Vec<PositionValue>,
    pub total_pence: Pence,
}

/// Value holdings against a quote table.
///
/// Positions come back sorted by symbol. Every held symbol must be quoted;
/// a missing quote fails the whole valuation rather than pricing at zero.
pub fn value_holdings(
    holdings: &HashMap<String, u32>,
    prices: &HashMap<String, Pence>,
) -> Result<PortfolioValuation, ValuationError> {
    let mut symbols: Vec<&String> = holdings.keys().collect();
    symbols.sort();

    let mut positions = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let quantity = holdings[symbol];
        let price = prices
            .get(symbol)
            .copied()
            .ok_or_else(|| ValuationError::MissingPrice {
                symbol: symbol.clone(),
            })?;
        positions.push(PositionValue {
            symbol: symbol.clone(),
            quantity,
            price_pence: price,
            value_pence: Pence::from(quantity) * price,
        });
    }

    let total_pence = positions.iter().map(|p| p.value_pence).sum();
    Ok(PortfolioValuation {
        as_of: Utc::now(),
        positions,
        total_pence,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValuationError {
    /// A held symbol has no entry in the quote table.
    MissingPrice { symbol: String },
}

impl fmt::Display for ValuationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuationError::MissingPrice { symbol } => {
                write!(f, "no price quoted for {symbol}")
            }
        }
    }
}

impl std::error::Error for ValuationError {}
