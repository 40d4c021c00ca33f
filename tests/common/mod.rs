// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use papertrade::domain::{AccountLedger, pounds};
use papertrade::scenario::{FleetRow, TradingScenario};

/// Install a debug-level test subscriber once; later calls are no-ops.
/// Set RUST_LOG to override the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Ledger funded with a whole-pound balance, the way most scenarios start.
pub fn funded_ledger(balance_pounds: i64) -> AccountLedger {
    init_tracing();
    AccountLedger::with_balance(pounds(balance_pounds))
}

/// Logged-in trading scenario with a funded account.
pub fn logged_in_scenario(balance_pounds: i64) -> TradingScenario {
    init_tracing();
    let mut scenario = TradingScenario::new();
    scenario.log_in();
    scenario.fund_account(pounds(balance_pounds));
    scenario
}

/// The three-train setup table the fleet scenarios share.
pub fn sample_fleet() -> Vec<FleetRow> {
    vec![
        FleetRow::new("Tube", 6, 160),
        FleetRow::new("SouthWestRail", 4, 250),
        FleetRow::new("Eurostar", 3, 240),
    ]
}
