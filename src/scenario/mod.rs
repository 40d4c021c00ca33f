// Scenario layer - fixtures that drive the domain the way the
// behaviour suites exercise it, one mutable driver per scenario.

pub mod error;
pub mod trading;
pub mod train;
pub mod valuation;

pub use error::*;
pub use trading::*;
pub use train::*;
pub use valuation::*;
