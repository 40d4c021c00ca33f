use thiserror::Error;

use crate::domain::{ParsePenceError, UnknownTrainType, ValuationError};

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Invalid train setup: {0}")]
    InvalidTrain(#[from] UnknownTrainType),

    #[error("Invalid money token: {0}")]
    InvalidMoney(#[from] ParsePenceError),

    #[error("Valuation failed: {0}")]
    Valuation(#[from] ValuationError),

    #[error("No train has been set up")]
    MissingTrain,

    #[error("No passenger count has been recorded")]
    MissingPassengers,
}
