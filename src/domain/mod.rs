mod account;
mod money;
mod order;
mod train;
mod valuation;

pub use account::*;
pub use money::*;
pub use order::*;
pub use train::*;
pub use valuation::*;
