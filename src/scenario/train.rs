use serde::{Deserialize, Serialize};

use crate::domain::{CapacityVerdict, Train, TrainType};

use super::ScenarioError;

/// One row of a fleet setup table: an untyped train description plus the
/// passengers expected to board it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetRow {
    pub train_type: String,
    pub carriages: u32,
    pub passengers: u32,
}

impl FleetRow {
    pub fn new(train_type: impl Into<String>, carriages: u32, passengers: u32) -> Self {
        Self {
            train_type: train_type.into(),
            carriages,
            passengers,
        }
    }
}

/// One row of a fleet assessment result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetAssessment {
    pub train_type: TrainType,
    pub verdict: CapacityVerdict,
}

/// Driver for train-capacity scenarios, covering both the single-train
/// given/when/then flow and the table-driven fleet flow.
#[derive(Debug, Default)]
pub struct TrainScenario {
    train: Option<Train>,
    passengers: Option<u32>,
    verdict: Option<CapacityVerdict>,
    fleet: Vec<(Train, u32)>,
    fleet_verdicts: Vec<FleetAssessment>,
}

impl TrainScenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set up the train under assessment from its table description.
    pub fn given_train(&mut self, type_name: &str, carriages: u32) -> Result<(), ScenarioError> {
        self.train = Some(Train::from_type_name(type_name, carriages)?);
        Ok(())
    }

    /// Board passengers and record the capacity verdict.
    pub fn passengers_onboard(&mut self, passengers: u32) -> Result<(), ScenarioError> {
        let train = self.train.ok_or(ScenarioError::MissingTrain)?;
        self.passengers = Some(passengers);
        self.verdict = Some(train.assess(passengers));
        Ok(())
    }

    /// The verdict recorded by the last `passengers_onboard`.
    pub fn verdict(&self) -> Result<CapacityVerdict, ScenarioError> {
        self.verdict.ok_or(ScenarioError::MissingPassengers)
    }

    /// Whether coupling one more carriage would seat the recorded passengers.
    pub fn fits_with_additional_carriage(&self) -> Result<bool, ScenarioError> {
        let train = self.train.ok_or(ScenarioError::MissingTrain)?;
        let passengers = self.passengers.ok_or(ScenarioError::MissingPassengers)?;
        Ok(train
            .with_additional_carriages(1)
            .assess(passengers)
            .is_sufficient())
    }

    /// Set up several trains at once. Any unknown type fails the whole setup.
    pub fn given_fleet(&mut self, rows: &[FleetRow]) -> Result<(), ScenarioError> {
        let mut fleet = Vec::with_capacity(rows.len());
        for row in rows {
            let train = Train::from_type_name(&row.train_type, row.carriages)?;
            fleet.push((train, row.passengers));
        }
        self.fleet = fleet;
        Ok(())
    }

    /// Assess every fleet train against its own passenger count.
    pub fn assess_fleet(&mut self) {
        self.fleet_verdicts = self
            .fleet
            .iter()
            .map(|(train, passengers)| FleetAssessment {
                train_type: train.train_type,
                verdict: train.assess(*passengers),
            })
            .collect();
    }

    /// Results of the last `assess_fleet`, in table order.
    pub fn assessments(&self) -> &[FleetAssessment] {
        &self.fleet_verdicts
    }
}
