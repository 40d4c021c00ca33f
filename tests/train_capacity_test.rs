mod common;

use anyhow::Result;
use common::sample_fleet;
use papertrade::domain::{CapacityVerdict, Train, TrainType};
use papertrade::scenario::TrainScenario;

#[test]
fn test_tube_with_enough_seats() -> Result<()> {
    // Given a "Tube" train with 6 carriages, when 160 passengers are onboard
    let mut scenario = TrainScenario::new();
    scenario.given_train("Tube", 6)?;
    scenario.passengers_onboard(160)?;

    // Then the train should have "Sufficient" capacity
    assert_eq!(scenario.verdict()?.to_string(), "Sufficient");
    Ok(())
}

#[test]
fn test_south_west_rail_overloaded() -> Result<()> {
    let mut scenario = TrainScenario::new();
    scenario.given_train("SouthWestRail", 4)?;
    scenario.passengers_onboard(250)?;

    assert_eq!(scenario.verdict()?.to_string(), "Insufficient");
    Ok(())
}

#[test]
fn test_exact_fit_counts_as_sufficient() -> Result<()> {
    let mut scenario = TrainScenario::new();
    scenario.given_train("Eurostar", 3)?;
    scenario.passengers_onboard(240)?;

    assert_eq!(scenario.verdict()?, CapacityVerdict::Sufficient);
    Ok(())
}

#[test]
fn test_one_passenger_over_tips_the_verdict() -> Result<()> {
    let mut scenario = TrainScenario::new();
    scenario.given_train("Tube", 6)?;

    scenario.passengers_onboard(168)?;
    assert_eq!(scenario.verdict()?, CapacityVerdict::Sufficient);

    scenario.passengers_onboard(169)?;
    assert_eq!(scenario.verdict()?, CapacityVerdict::Insufficient);
    Ok(())
}

#[test]
fn test_an_additional_carriage_accommodates_the_overflow() -> Result<()> {
    let mut scenario = TrainScenario::new();
    scenario.given_train("Tube", 3)?;
    scenario.passengers_onboard(100)?;

    assert_eq!(scenario.verdict()?, CapacityVerdict::Insufficient);
    // An additional carriage can be added to accommodate the passengers
    assert!(scenario.fits_with_additional_carriage()?);
    Ok(())
}

#[test]
fn test_fleet_assessment_matches_the_expected_table() -> Result<()> {
    let mut scenario = TrainScenario::new();
    scenario.given_fleet(&sample_fleet())?;

    scenario.assess_fleet();

    // | train_type    | capacity     |
    // | Tube          | Sufficient   |
    // | SouthWestRail | Insufficient |
    // | Eurostar      | Sufficient   |
    let expected = [
        (TrainType::Tube, "Sufficient"),
        (TrainType::SouthWestRail, "Insufficient"),
        (TrainType::Eurostar, "Sufficient"),
    ];
    for (actual, (train_type, verdict)) in scenario.assessments().iter().zip(expected) {
        assert_eq!(actual.train_type, train_type);
        assert_eq!(actual.verdict.as_str(), verdict);
    }
    assert_eq!(scenario.assessments().len(), expected.len());
    Ok(())
}

#[test]
fn test_unknown_type_reports_the_valid_ones() {
    let mut scenario = TrainScenario::new();

    let err = scenario.given_train("Maglev", 5).unwrap_err();

    assert!(err.to_string().ends_with(
        "Unknown train type: Maglev. Valid types are: Tube, SouthWestRail, Eurostar"
    ));
}

#[test]
fn test_unknown_type_anywhere_in_the_fleet_fails_setup() {
    let mut scenario = TrainScenario::new();
    let mut rows = sample_fleet();
    rows[1].train_type = "Hovercraft".to_string();

    assert!(scenario.given_fleet(&rows).is_err());
    // Nothing to assess after a failed setup
    scenario.assess_fleet();
    assert!(scenario.assessments().is_empty());
}

#[test]
fn test_single_carriage_assessment() {
    assert_eq!(
        Train::carriage_capacity(28, 20),
        CapacityVerdict::Sufficient
    );
    assert_eq!(
        Train::carriage_capacity(28, 30),
        CapacityVerdict::Insufficient
    );
}
