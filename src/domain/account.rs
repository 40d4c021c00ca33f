use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use super::{Execution, OrderSide, OrderStatus, Pence, format_pence};

/// A single account's cash balance and instrument holdings, with buy/sell
/// adjudication against current state.
///
/// Holdings only ever contain strictly positive quantities; an entry that
/// reaches zero is removed. Every failure is reported through the returned
/// `Result` and the recorded status, never raised, so the ledger stays usable
/// after a rejected order.
#[derive(Debug, Clone)]
pub struct AccountLedger {
    balance_pence: Pence,
    holdings: HashMap<String, u32>,
    last_status: OrderStatus,
    last_error: Option<TradeError>,
    executions: Vec<Execution>,
}

impl AccountLedger {
    /// Create an empty ledger with a zero balance.
    pub fn new() -> Self {
        Self::with_balance(0)
    }

    /// Create a ledger seeded with an initial balance.
    pub fn with_balance(balance_pence: Pence) -> Self {
        Self {
            balance_pence,
            holdings: HashMap::new(),
            last_status: OrderStatus::Unset,
            last_error: None,
            executions: Vec::new(),
        }
    }

    /// Replace the balance unconditionally.
    ///
    /// Any value is accepted, including zero or a negative amount; whether the
    /// balance covers an order is checked per operation, not here. Does not
    /// touch holdings or the recorded order outcome.
    pub fn set_balance(&mut self, amount: Pence) {
        self.balance_pence = amount;
    }

    /// Set the held quantity for a symbol directly, bypassing `buy`.
    ///
    /// Used by scenario tables to seed preconditions. A quantity of zero
    /// removes the entry. Does not touch the recorded order outcome.
    pub fn set_holding(&mut self, symbol: &str, quantity: u32) {
        if quantity == 0 {
            self.holdings.remove(symbol);
        } else {
            self.holdings.insert(symbol.to_string(), quantity);
        }
    }

    /// Buy `quantity` units of `symbol` at `price_pence` per unit.
    ///
    /// Succeeds when the balance covers `quantity * price_pence`: the cost is
    /// deducted, the holding incremented, and a fill recorded. Otherwise the
    /// ledger is left untouched and the failure is reported. An order whose
    /// cost or updated holding would overflow is rejected the same way.
    pub fn buy(
        &mut self,
        symbol: &str,
        quantity: u32,
        price_pence: Pence,
    ) -> Result<(), TradeError> {
        self.validate_order(quantity, price_pence)?;

        let cost = match Pence::from(quantity).checked_mul(price_pence) {
            Some(cost) => cost,
            None => return self.fail(TradeError::OrderTooLarge),
        };
        if self.balance_pence < cost {
            debug!(
                "buy rejected for {}: cost {}, available {}",
                symbol,
                format_pence(cost),
                format_pence(self.balance_pence)
            );
            return self.fail(TradeError::InsufficientFunds {
                required: cost,
                available: self.balance_pence,
            });
        }

        let held = self.holdings.get(symbol).copied().unwrap_or(0);
        let new_held = match held.checked_add(quantity) {
            Some(new_held) => new_held,
            None => return self.fail(TradeError::OrderTooLarge),
        };

        self.balance_pence -= cost;
        self.holdings.insert(symbol.to_string(), new_held);
        self.executions.push(Execution::new(
            OrderSide::Buy,
            symbol,
            quantity,
            price_pence,
            cost,
        ));
        self.last_status = OrderStatus::Success;
        Ok(())
    }

    /// Sell `quantity` units of `symbol` at `price_pence` per unit.
    ///
    /// Succeeds when at least `quantity` units are held: the revenue is added
    /// to the balance, the holding decremented (and removed once it reaches
    /// zero), and a fill recorded. Otherwise the ledger is left untouched and
    /// the failure is reported. Revenue the balance cannot represent rejects
    /// the order the same way.
    pub fn sell(
        &mut self,
        symbol: &str,
        quantity: u32,
        price_pence: Pence,
    ) -> Result<(), TradeError> {
        self.validate_order(quantity, price_pence)?;

        let held = self.holdings.get(symbol).copied().unwrap_or(0);
        if held < quantity {
            debug!(
                "sell rejected for {}: requested {}, held {}",
                symbol, quantity, held
            );
            return self.fail(TradeError::InsufficientShares {
                symbol: symbol.to_string(),
                requested: quantity,
                held,
            });
        }

        let revenue = match Pence::from(quantity).checked_mul(price_pence) {
            Some(revenue) => revenue,
            None => return self.fail(TradeError::OrderTooLarge),
        };
        let new_balance = match self.balance_pence.checked_add(revenue) {
            Some(new_balance) => new_balance,
            None => return self.fail(TradeError::OrderTooLarge),
        };

        self.balance_pence = new_balance;
        debug!(
            "sell executed for {}: revenue {}, balance {}",
            symbol,
            format_pence(revenue),
            format_pence(self.balance_pence)
        );

        let remaining = held - quantity;
        if remaining == 0 {
            self.holdings.remove(symbol);
        } else {
            self.holdings.insert(symbol.to_string(), remaining);
        }
        self.executions.push(Execution::new(
            OrderSide::Sell,
            symbol,
            quantity,
            price_pence,
            revenue,
        ));
        self.last_status = OrderStatus::Success;
        Ok(())
    }

    /// Current cash balance in pence.
    pub fn balance(&self) -> Pence {
        self.balance_pence
    }

    /// Held quantity for a symbol, zero if absent.
    pub fn holding_quantity(&self, symbol: &str) -> u32 {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// All holdings. Every value is strictly positive.
    pub fn holdings(&self) -> &HashMap<String, u32> {
        &self.holdings
    }

    /// Outcome of the most recently attempted buy/sell, `Unset` before the
    /// first attempt. Reads and `set_balance`/`set_holding` never change it.
    pub fn last_status(&self) -> OrderStatus {
        self.last_status
    }

    /// The most recent failure. Persists until overwritten by the next
    /// failure; a success does not clear it, so check `last_status` first.
    pub fn last_error(&self) -> Option<&TradeError> {
        self.last_error.as_ref()
    }

    /// Rendered form of `last_error`, the presentation boundary for the
    /// user-facing message texts.
    pub fn last_error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(|error| error.to_string())
    }

    /// Append-only audit trail of filled orders, oldest first.
    pub fn executions(&self) -> &[Execution] {
        &self.executions
    }

    fn validate_order(&mut self, quantity: u32, price_pence: Pence) -> Result<(), TradeError> {
        if quantity == 0 {
            return self.fail(TradeError::InvalidQuantity);
        }
        if price_pence < 0 {
            return self.fail(TradeError::NegativePrice { price_pence });
        }
        Ok(())
    }

    fn fail(&mut self, error: TradeError) -> Result<(), TradeError> {
        self.last_status = OrderStatus::Failure;
        self.last_error = Some(error.clone());
        Err(error)
    }
}

impl Default for AccountLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeError {
    /// Buy rejected: the cost exceeds the available balance.
    InsufficientFunds { required: Pence, available: Pence },
    /// Sell rejected: symbol absent or fewer units held than requested.
    InsufficientShares {
        symbol: String,
        requested: u32,
        held: u32,
    },
    /// Order rejected before adjudication: zero quantity.
    InvalidQuantity,
    /// Order rejected before adjudication: negative unit price.
    NegativePrice { price_pence: Pence },
    /// Order rejected: the fill would overflow a holding or the balance.
    OrderTooLarge,
}

impl fmt::Display for TradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeError::InsufficientFunds { .. } => write!(f, "Insufficient funds"),
            TradeError::InsufficientShares { .. } => write!(f, "Insufficient shares to sell"),
            TradeError::InvalidQuantity => write!(f, "Order quantity must be positive"),
            TradeError::NegativePrice { .. } => write!(f, "Order price must not be negative"),
            TradeError::OrderTooLarge => write!(f, "Order too large"),
        }
    }
}

impl std::error::Error for TradeError {}
