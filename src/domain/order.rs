use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Pence;

pub type ExecutionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

/// Outcome marker of the most recently attempted buy or sell.
///
/// `Unset` means no order has been attempted yet on the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Unset,
    Success,
    Failure,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Unset => "unset",
            OrderStatus::Success => "success",
            OrderStatus::Failure => "failure",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OrderStatus::Success)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable record of one filled order. Executions are append-only; the
/// ledger never edits or removes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Execution {
    pub id: ExecutionId,
    pub side: OrderSide,
    pub symbol: String,
    pub quantity: u32,
    pub price_pence: Pence,
    /// Cash moved by the fill: cost for a buy, revenue for a sell.
    pub total_pence: Pence,
    pub executed_at: DateTime<Utc>,
}

impl Execution {
    /// Record a fill. The total is taken as adjudicated by the ledger, not
    /// recomputed here.
    pub fn new(
        side: OrderSide,
        symbol: &str,
        quantity: u32,
        price_pence: Pence,
        total_pence: Pence,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            side,
            symbol: symbol.to_string(),
            quantity,
            price_pence,
            total_pence,
            executed_at: Utc::now(),
        }
    }
}
