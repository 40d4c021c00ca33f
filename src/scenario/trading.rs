use crate::domain::{AccountLedger, OrderStatus, Pence, parse_pence};

use super::ScenarioError;

/// Driver for account-trading scenarios.
///
/// Owns the ledger under test plus the bookkeeping the scenario steps need:
/// the balance the account started with and whether the user logged in.
/// When-steps leave order outcomes on the ledger's status and error slots
/// instead of propagating them, so then-steps can inspect success and
/// failure alike.
#[derive(Debug)]
pub struct TradingScenario {
    ledger: AccountLedger,
    logged_in: bool,
    starting_balance: Pence,
}

impl TradingScenario {
    pub fn new() -> Self {
        Self {
            ledger: AccountLedger::new(),
            logged_in: false,
            starting_balance: 0,
        }
    }

    // ========================
    // Given-steps
    // ========================

    pub fn log_in(&mut self) {
        self.logged_in = true;
    }

    /// Fund the account and remember the figure for delta assertions.
    pub fn fund_account(&mut self, amount: Pence) {
        self.ledger.set_balance(amount);
        self.starting_balance = amount;
    }

    /// Fund the account from a money token such as `"£5,000"`.
    pub fn fund_account_from(&mut self, token: &str) -> Result<(), ScenarioError> {
        let amount = parse_pence(token)?;
        self.fund_account(amount);
        Ok(())
    }

    pub fn seed_holding(&mut self, symbol: &str, quantity: u32) {
        self.ledger.set_holding(symbol, quantity);
    }

    // ========================
    // When-steps
    // ========================

    pub fn place_buy(&mut self, symbol: &str, quantity: u32, price_pence: Pence) {
        // The ledger records the outcome; then-steps read it back
        let _ = self.ledger.buy(symbol, quantity, price_pence);
    }

    pub fn place_sell(&mut self, symbol: &str, quantity: u32, price_pence: Pence) {
        let _ = self.ledger.sell(symbol, quantity, price_pence);
    }

    // ========================
    // Then-step queries
    // ========================

    pub fn logged_in(&self) -> bool {
        self.logged_in
    }

    /// True when the last placed order filled.
    pub fn order_succeeded(&self) -> bool {
        self.status().is_success()
    }

    pub fn status(&self) -> OrderStatus {
        self.ledger.last_status()
    }

    pub fn balance(&self) -> Pence {
        self.ledger.balance()
    }

    /// Balance movement since funding; negative after a net purchase.
    pub fn balance_delta(&self) -> Pence {
        self.ledger.balance() - self.starting_balance
    }

    pub fn holding(&self, symbol: &str) -> u32 {
        self.ledger.holding_quantity(symbol)
    }

    pub fn error_message(&self) -> Option<String> {
        self.ledger.last_error_message()
    }

    pub fn ledger(&self) -> &AccountLedger {
        &self.ledger
    }
}

impl Default for TradingScenario {
    fn default() -> Self {
        Self::new()
    }
}
