//! End-to-end checks against the 355.6 × 9.5 reference thermal dataset.

use std::path::PathBuf;

use approx::assert_relative_eq;
use cfst_core::calculations::column::{calculate, CfstColumnInput};
use cfst_core::calculations::pipeline::{evaluate, evaluate_over_time, minute_grid, CapacityCurve};
use cfst_core::config::CalculationConfig;
use cfst_core::section::ReinforcementLayout;
use cfst_core::thermal::{load_series, ThermalChannel, ThermalLibrary, ThermalSeries};
use cfst_core::units::Seconds;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn reference_series() -> ThermalSeries {
    load_series(data_dir().join("355.6x9.5.json")).unwrap()
}

fn reference_column() -> CfstColumnInput {
    CfstColumnInput {
        label: "K-1".to_string(),
        ..CfstColumnInput::default()
    }
}

#[test]
fn reference_dataset_loads_with_legacy_keys() {
    let series = reference_series();
    assert_eq!(series.len(), 37);
    assert_eq!(series.max_time_s(), Some(10_800.0));

    let first = series.records()[0];
    assert_eq!(first.temperature(ThermalChannel::T1), Some(20.0));
    assert_eq!(first.temperature(ThermalChannel::T10), None);
}

#[test]
fn library_picks_reference_dataset() {
    let library = ThermalLibrary::load_dir(data_dir()).unwrap();
    let dataset = library.closest(360.0, 10.0).unwrap();
    assert_eq!(dataset.diameter_mm, 355.6);
    assert_eq!(dataset.thickness_mm, 9.5);
    assert_eq!(dataset.series, reference_series());
}

#[test]
fn ambient_baseline() {
    let input = reference_column();
    let result = evaluate(
        &input.geometry,
        &input.materials,
        None,
        &reference_series(),
        Seconds(0.0),
        &CalculationConfig::default(),
    );
    assert_relative_eq!(result.capacity_kn, 7404.318, epsilon = 1e-3);
    assert_relative_eq!(result.final_capacity_kn, 7289.884, epsilon = 1e-2);
}

#[test]
fn capacity_never_increases_over_reference_fire() {
    let series = reference_series();
    let input = reference_column();
    let rebar = ReinforcementLayout::new(8, 10.0);
    let grid: Vec<Seconds> = minute_grid(&series).into_iter().map(Seconds::from).collect();
    assert_eq!(grid.len(), 181);

    for reinforcement in [None, Some(&rebar)] {
        let results = evaluate_over_time(
            &input.geometry,
            &input.materials,
            reinforcement,
            &series,
            &grid,
            &CalculationConfig::default(),
        );
        for pair in results.windows(2) {
            assert!(pair[1].capacity_kn <= pair[0].capacity_kn + 1e-9);
            assert!(pair[1].final_capacity_kn <= pair[0].final_capacity_kn + 1e-9);
        }
    }
}

#[test]
fn hold_last_known_between_records() {
    let series = reference_series();
    let input = reference_column();
    let config = CalculationConfig::default();

    // records every 5 min: 7 min resolves to the 5 min record
    let at_5 = evaluate(&input.geometry, &input.materials, None, &series, Seconds(300.0), &config);
    let at_7 = evaluate(&input.geometry, &input.materials, None, &series, Seconds(420.0), &config);
    assert_eq!(at_7.snapshot_time_s, Some(300.0));
    assert_eq!(at_5.final_capacity_kn, at_7.final_capacity_kn);
}

#[test]
fn column_check_finds_fire_resistance_limit() {
    let mut input = reference_column();
    input.normative_load_kn = 2000.0;
    input.exposure_time_min = 120.0;

    let result = calculate(&input, &reference_series(), &CalculationConfig::default()).unwrap();
    assert!(!result.passes());
    assert_eq!(result.curve.len(), 181);

    let limit = result.fire_resistance_limit_min.unwrap();
    assert!(limit > 60.0 && limit < 90.0, "limit {limit}");

    let before = capacity_at(&result.curve, limit.floor());
    let after = capacity_at(&result.curve, limit.ceil() + 1.0);
    assert!(before >= 2000.0);
    assert!(after < 2000.0);
}

#[test]
fn reinforced_column_passes_at_one_hour() {
    let mut input = reference_column();
    input.reinforcement = Some(ReinforcementLayout::new(8, 10.0));
    input.exposure_time_min = 60.0;

    let result = calculate(&input, &reference_series(), &CalculationConfig::default()).unwrap();
    assert!(result.passes());
    assert!(result.safety_factor > 2.0);
    assert_eq!(result.fire_resistance_limit_min, None);

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"fire_resistance_limit_min\":null"));
}

fn capacity_at(curve: &CapacityCurve, time_min: f64) -> f64 {
    curve
        .points
        .iter()
        .find(|p| p.time_min == time_min)
        .map(|p| p.final_capacity_kn)
        .unwrap()
}
