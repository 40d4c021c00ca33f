use std::fmt;

use serde::{Deserialize, Serialize};

/// Rolling-stock classes with a fixed seating capacity per carriage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainType {
    /// Underground stock, 28 seats per carriage
    Tube,
    /// Suburban stock, 50 seats per carriage
    SouthWestRail,
    /// Cross-channel stock, 80 seats per carriage
    Eurostar,
}

impl TrainType {
    pub const ALL: [TrainType; 3] = [
        TrainType::Tube,
        TrainType::SouthWestRail,
        TrainType::Eurostar,
    ];

    pub fn seats_per_carriage(&self) -> u32 {
        match self {
            TrainType::Tube => 28,
            TrainType::SouthWestRail => 50,
            TrainType::Eurostar => 80,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrainType::Tube => "Tube",
            TrainType::SouthWestRail => "SouthWestRail",
            TrainType::Eurostar => "Eurostar",
        }
    }

    /// Matching is exact: type names are proper nouns, no case folding.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Tube" => Some(TrainType::Tube),
            "SouthWestRail" => Some(TrainType::SouthWestRail),
            "Eurostar" => Some(TrainType::Eurostar),
            _ => None,
        }
    }
}

impl fmt::Display for TrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a capacity assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityVerdict {
    Sufficient,
    Insufficient,
}

impl CapacityVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapacityVerdict::Sufficient => "Sufficient",
            CapacityVerdict::Insufficient => "Insufficient",
        }
    }

    pub fn is_sufficient(&self) -> bool {
        matches!(self, CapacityVerdict::Sufficient)
    }
}

impl fmt::Display for CapacityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A train of uniform carriages.
///
/// Zero carriages is a valid train; it simply has no capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Train {
    pub train_type: TrainType,
    pub carriages: u32,
}

impl Train {
    pub fn new(train_type: TrainType, carriages: u32) -> Self {
        Self {
            train_type,
            carriages,
        }
    }

    /// Build a train from an untyped type name, as scenario tables supply it.
    pub fn from_type_name(name: &str, carriages: u32) -> Result<Self, UnknownTrainType> {
        let train_type = TrainType::from_str(name).ok_or_else(|| UnknownTrainType {
            name: name.to_string(),
        })?;
        Ok(Self::new(train_type, carriages))
    }

    pub fn with_additional_carriages(mut self, extra: u32) -> Self {
        self.carriages += extra;
        self
    }

    /// Total seats across all carriages.
    pub fn total_capacity(&self) -> u64 {
        u64::from(self.carriages) * u64::from(self.train_type.seats_per_carriage())
    }

    /// Sufficient when every passenger gets a seat.
    pub fn assess(&self, passengers: u32) -> CapacityVerdict {
        if u64::from(passengers) <= self.total_capacity() {
            CapacityVerdict::Sufficient
        } else {
            CapacityVerdict::Insufficient
        }
    }

    /// Assess one carriage in isolation against the passengers boarding it.
    pub fn carriage_capacity(seats: u32, passengers: u32) -> CapacityVerdict {
        if passengers <= seats {
            CapacityVerdict::Sufficient
        } else {
            CapacityVerdict::Insufficient
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTrainType {
    pub name: String,
}

impl fmt::Display for UnknownTrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valid = TrainType::ALL.map(|t| t.as_str()).join(", ");
        write!(
            f,
            "Unknown train type: {}. Valid types are: {}",
            self.name, valid
        )
    }
}

impl std::error::Error for UnknownTrainType {}
