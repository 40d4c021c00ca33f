use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Pence, PortfolioValuation, parse_pence, value_holdings};

use super::ScenarioError;

/// One row of an "I own the following stocks" table. The price arrives as a
/// money token (`"150"`, `"£1,250.50"`) and is parsed by the fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRow {
    pub symbol: String,
    pub quantity: u32,
    pub current_price: String,
}

impl StockRow {
    pub fn new(
        symbol: impl Into<String>,
        quantity: u32,
        current_price: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            current_price: current_price.into(),
        }
    }
}

/// Driver for portfolio-valuation scenarios. The table carries its own
/// prices, independent of any ledger.
#[derive(Debug)]
pub struct ValuationScenario {
    // symbol -> (quantity, price); a repeated symbol replaces the earlier row
    stocks: HashMap<String, (u32, Pence)>,
}

impl ValuationScenario {
    pub fn given_stocks(rows: &[StockRow]) -> Result<Self, ScenarioError> {
        let mut stocks = HashMap::new();
        for row in rows {
            let price = parse_pence(&row.current_price)?;
            stocks.insert(row.symbol.clone(), (row.quantity, price));
        }
        Ok(Self { stocks })
    }

    /// Total value of the table: Σ quantity × price.
    pub fn portfolio_value(&self) -> Pence {
        self.stocks
            .values()
            .map(|&(quantity, price)| Pence::from(quantity) * price)
            .sum()
    }

    /// Per-position report over the same table.
    pub fn valuation(&self) -> Result<PortfolioValuation, ScenarioError> {
        let mut holdings = HashMap::new();
        let mut prices = HashMap::new();
        for (symbol, &(quantity, price)) in &self.stocks {
            holdings.insert(symbol.clone(), quantity);
            prices.insert(symbol.clone(), price);
        }
        Ok(value_holdings(&holdings, &prices)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pounds;

    #[test]
    fn test_portfolio_value_sums_the_table() {
        let scenario = ValuationScenario::given_stocks(&[
            StockRow::new("AAPL", 10, "£150"),
            StockRow::new("GOOG", 5, "£100"),
        ])
        .unwrap();

        assert_eq!(scenario.portfolio_value(), pounds(2000));
    }

    #[test]
    fn test_bad_price_token_fails_setup() {
        let result = ValuationScenario::given_stocks(&[StockRow::new("AAPL", 10, "cheap")]);
        assert!(matches!(result, Err(ScenarioError::InvalidMoney(_))));
    }

    #[test]
    fn test_repeated_symbol_takes_the_last_row() {
        let scenario = ValuationScenario::given_stocks(&[
            StockRow::new("AAPL", 10, "£150"),
            StockRow::new("AAPL", 2, "£150"),
        ])
        .unwrap();

        assert_eq!(scenario.portfolio_value(), pounds(300));
    }

    #[test]
    fn test_valuation_report_matches_total() {
        let scenario = ValuationScenario::given_stocks(&[
            StockRow::new("TSLA", 4, "£250.50"),
            StockRow::new("AAPL", 10, "£150"),
        ])
        .unwrap();

        let report = scenario.valuation().unwrap();

        assert_eq!(report.total_pence, scenario.portfolio_value());
        assert_eq!(report.positions[0].symbol, "AAPL");
        assert_eq!(report.positions[1].symbol, "TSLA");
        assert_eq!(report.positions[1].value_pence, 100200);
    }
}
