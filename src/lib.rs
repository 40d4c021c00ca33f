pub mod domain;
pub mod scenario;

pub use domain::*;
