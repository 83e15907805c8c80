//! # Capacity Pipeline
//!
//! Runs one capacity evaluation end to end and sweeps it over a time grid:
//!
//! 1. resolve the thermal snapshot for the exposure time
//! 2. cut the core into rings and describe the steel wall
//! 3. accumulate capacity and stiffness
//! 4. apply the buckling reduction
//!
//! Sweeps also produce a [`CapacityCurve`], from which the fire-resistance
//! limit and the safety factors against a normative load are read.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::capacity::{accumulate, RebarCage, SectionCapacity};
use super::stability::reduce;
use crate::config::CalculationConfig;
use crate::materials::MaterialProperties;
use crate::section::{discretize, steel_annulus, Geometry, ReinforcementLayout};
use crate::thermal::ThermalSeries;
use crate::units::{Minutes, Seconds};

/// Capacity of the column at one exposure time.
///
/// ## JSON Example
///
/// ```json
/// {
///   "exposure_time_s": 0.0,
///   "snapshot_time_s": 0.0,
///   "capacity_kn": 7404.32,
///   "stiffness_kn_m2": 43089.93,
///   "critical_load_kn": 138867.13,
///   "slenderness": 0.2309,
///   "reduction_coeff": 0.9845,
///   "final_capacity_kn": 7289.88,
///   "section": { "components": [] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    /// Requested exposure time (s)
    pub exposure_time_s: f64,

    /// Time of the thermal record actually used (s), `None` without data
    pub snapshot_time_s: Option<f64>,

    /// Pre-buckling capacity N (kN)
    pub capacity_kn: f64,

    /// Flexural rigidity EI (kN·m²)
    pub stiffness_kn_m2: f64,

    /// Euler critical load N_cr (kN)
    pub critical_load_kn: f64,

    /// Conditional slenderness λ̄
    pub slenderness: f64,

    /// Buckling reduction coefficient φ
    pub reduction_coeff: f64,

    /// N·φ (kN)
    pub final_capacity_kn: f64,

    /// Per-component contributions
    pub section: SectionCapacity,
}

/// Evaluate the column at one exposure time.
///
/// Never fails: without thermal data every component contributes zero and the
/// result is a zero capacity.
pub fn evaluate(
    geometry: &Geometry,
    materials: &MaterialProperties,
    reinforcement: Option<&ReinforcementLayout>,
    series: &ThermalSeries,
    exposure: Seconds,
    config: &CalculationConfig,
) -> CapacityResult {
    let snapshot = series.resolve(exposure);

    let rings = discretize(
        geometry.diameter_mm,
        geometry.wall_thickness_mm,
        snapshot.as_ref(),
        &config.ring_plan,
    );
    let wall = steel_annulus(geometry, snapshot.as_ref());
    let cage = reinforcement.map(|layout| RebarCage {
        layout: *layout,
        cage_radius_mm: layout.cage_radius_mm(geometry, config.rebar_cover_mm),
    });

    let section = accumulate(&rings, &wall, materials, cage.as_ref(), snapshot.as_ref());
    let capacity_kn = section.total_capacity_kn();
    let stiffness_kn_m2 = section.total_stiffness_kn_m2();
    let stability = reduce(
        stiffness_kn_m2,
        capacity_kn,
        geometry.height_m,
        geometry.effective_length_coeff,
    );

    debug!(
        exposure_s = exposure.0,
        capacity_kn,
        stiffness_kn_m2,
        slenderness = stability.slenderness,
        final_capacity_kn = stability.final_capacity_kn,
        "evaluated column capacity"
    );

    CapacityResult {
        exposure_time_s: exposure.0,
        snapshot_time_s: snapshot.map(|s| s.time_s),
        capacity_kn,
        stiffness_kn_m2,
        critical_load_kn: stability.critical_load_kn,
        slenderness: stability.slenderness,
        reduction_coeff: stability.reduction_coeff,
        final_capacity_kn: stability.final_capacity_kn,
        section,
    }
}

/// [`evaluate`] at every grid point, in grid order.
pub fn evaluate_over_time(
    geometry: &Geometry,
    materials: &MaterialProperties,
    reinforcement: Option<&ReinforcementLayout>,
    series: &ThermalSeries,
    grid: &[Seconds],
    config: &CalculationConfig,
) -> Vec<CapacityResult> {
    info!(points = grid.len(), "capacity sweep");
    grid.iter()
        .map(|t| evaluate(geometry, materials, reinforcement, series, *t, config))
        .collect()
}

/// Same as [`evaluate_over_time`], with grid points evaluated on the rayon
/// thread pool. Results keep grid order.
pub fn evaluate_over_time_parallel(
    geometry: &Geometry,
    materials: &MaterialProperties,
    reinforcement: Option<&ReinforcementLayout>,
    series: &ThermalSeries,
    grid: &[Seconds],
    config: &CalculationConfig,
) -> Vec<CapacityResult> {
    info!(points = grid.len(), "parallel capacity sweep");
    grid.par_iter()
        .map(|t| evaluate(geometry, materials, reinforcement, series, *t, config))
        .collect()
}

/// Whole minutes from 0 up to the last record of the series.
///
/// An empty series gives `[0]`.
///
/// # Example
///
/// ```rust
/// use cfst_core::calculations::pipeline::minute_grid;
/// use cfst_core::thermal::{ThermalRecord, ThermalSeries};
///
/// let series = ThermalSeries::new(vec![
///     ThermalRecord::uniform(0.0, 20.0),
///     ThermalRecord::uniform(330.0, 400.0),
/// ])?;
/// assert_eq!(minute_grid(&series).len(), 6);
/// # Ok::<(), cfst_core::CalcError>(())
/// ```
pub fn minute_grid(series: &ThermalSeries) -> Vec<Minutes> {
    let last = series
        .max_time_s()
        .map_or(0.0, |t| (t / 60.0).floor().max(0.0)) as u32;
    (0..=last).map(|m| Minutes(f64::from(m))).collect()
}

/// One point of a capacity curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub time_min: f64,
    pub final_capacity_kn: f64,
}

/// Final capacity over exposure time, ordered by time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapacityCurve {
    pub points: Vec<CurvePoint>,
}

impl CapacityCurve {
    pub fn new(points: Vec<CurvePoint>) -> Self {
        CapacityCurve { points }
    }

    /// Curve from sweep results; times come from each result's exposure time.
    pub fn from_results(results: &[CapacityResult]) -> Self {
        let points = results
            .iter()
            .map(|r| CurvePoint {
                time_min: Minutes::from(Seconds(r.exposure_time_s)).0,
                final_capacity_kn: r.final_capacity_kn,
            })
            .collect();
        CapacityCurve { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Time (min) at which the final capacity first drops below `load_kn`.
///
/// The crossing is interpolated linearly between the two grid points that
/// bracket it. `None` when the curve never goes from at-or-above the load to
/// below it.
///
/// # Example
///
/// ```rust
/// use cfst_core::calculations::pipeline::{fire_resistance_limit, CapacityCurve, CurvePoint};
///
/// let curve = CapacityCurve::new(vec![
///     CurvePoint { time_min: 0.0, final_capacity_kn: 2000.0 },
///     CurvePoint { time_min: 10.0, final_capacity_kn: 1000.0 },
///     CurvePoint { time_min: 20.0, final_capacity_kn: 500.0 },
/// ]);
/// assert_eq!(fire_resistance_limit(&curve, 1500.0), Some(5.0));
/// assert_eq!(fire_resistance_limit(&curve, 100.0), None);
/// ```
pub fn fire_resistance_limit(curve: &CapacityCurve, load_kn: f64) -> Option<f64> {
    curve.points.windows(2).find_map(|pair| {
        let (prev, curr) = (pair[0], pair[1]);
        if prev.final_capacity_kn >= load_kn && curr.final_capacity_kn < load_kn {
            let dn = curr.final_capacity_kn - prev.final_capacity_kn;
            if dn == 0.0 {
                return Some(prev.time_min);
            }
            Some(prev.time_min + (load_kn - prev.final_capacity_kn) * (curr.time_min - prev.time_min) / dn)
        } else {
            None
        }
    })
}

/// Safety factor n = N_final / load for every point of the curve.
///
/// All zeros when the load is not positive.
pub fn safety_factors(curve: &CapacityCurve, load_kn: f64) -> Vec<f64> {
    curve
        .points
        .iter()
        .map(|p| if load_kn > 0.0 { p.final_capacity_kn / load_kn } else { 0.0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thermal::{ThermalChannel, ThermalRecord};
    use approx::assert_relative_eq;

    fn geometry() -> Geometry {
        Geometry::new(355.6, 9.5, 2.5, 0.7)
    }

    fn materials() -> MaterialProperties {
        MaterialProperties::new(355.0, 210_000.0, 42.0)
    }

    /// Steel heats first, the core lags behind; every channel only rises.
    fn heating_series() -> ThermalSeries {
        let records = (0..=12)
            .map(|step| {
                let minutes = f64::from(step) * 10.0;
                let surface = 20.0 + 8.0 * minutes;
                let mut record = ThermalRecord::uniform(minutes * 60.0, 20.0);
                for (depth, channel) in ThermalChannel::ALL.iter().enumerate() {
                    let t = 20.0 + (surface - 20.0) / (1.0 + depth as f64);
                    record = record.with_channel(*channel, t);
                }
                record
            })
            .collect();
        ThermalSeries::new(records).unwrap()
    }

    #[test]
    fn test_reference_baseline_at_ambient() {
        let series = ThermalSeries::new(vec![ThermalRecord::uniform(0.0, 20.0)]).unwrap();
        let result = evaluate(
            &geometry(),
            &materials(),
            None,
            &series,
            Seconds(0.0),
            &CalculationConfig::default(),
        );

        assert_eq!(result.snapshot_time_s, Some(0.0));
        assert_relative_eq!(result.capacity_kn, 7404.318, epsilon = 1e-3);
        assert_relative_eq!(result.stiffness_kn_m2, 43_089.931, epsilon = 1e-3);
        assert_relative_eq!(result.critical_load_kn, 138_867.126, epsilon = 1e-2);
        assert_relative_eq!(result.slenderness, 0.230_910, epsilon = 1e-5);
        assert_relative_eq!(result.reduction_coeff, 0.984_545, epsilon = 1e-5);
        assert_relative_eq!(result.final_capacity_kn, 7289.884, epsilon = 1e-2);
    }

    #[test]
    fn test_reinforced_baseline_at_ambient() {
        let series = ThermalSeries::new(vec![ThermalRecord::uniform(0.0, 20.0)]).unwrap();
        let rebar = ReinforcementLayout::new(8, 10.0);
        let result = evaluate(
            &geometry(),
            &materials(),
            Some(&rebar),
            &series,
            Seconds(0.0),
            &CalculationConfig::default(),
        );

        assert_relative_eq!(result.capacity_kn, 7627.371, epsilon = 1e-3);
        assert_relative_eq!(result.stiffness_kn_m2, 44_176.737, epsilon = 1e-3);
        assert_relative_eq!(result.final_capacity_kn, 7507.387, epsilon = 1e-2);
    }

    #[test]
    fn test_empty_series_gives_zero_capacity() {
        let result = evaluate(
            &geometry(),
            &materials(),
            None,
            &ThermalSeries::default(),
            Seconds(600.0),
            &CalculationConfig::default(),
        );
        assert_eq!(result.snapshot_time_s, None);
        assert_eq!(result.capacity_kn, 0.0);
        assert_eq!(result.final_capacity_kn, 0.0);
        assert_eq!(result.reduction_coeff, 1.0);
    }

    #[test]
    fn test_capacity_never_rises_while_heating() {
        let series = heating_series();
        let grid: Vec<Seconds> = minute_grid(&series).into_iter().map(Seconds::from).collect();
        let results = evaluate_over_time(
            &geometry(),
            &materials(),
            Some(&ReinforcementLayout::new(8, 10.0)),
            &series,
            &grid,
            &CalculationConfig::default(),
        );

        assert_eq!(results.len(), 121);
        for pair in results.windows(2) {
            assert!(pair[1].capacity_kn <= pair[0].capacity_kn + 1e-9);
        }
    }

    #[test]
    fn test_parallel_sweep_matches_sequential() {
        let series = heating_series();
        let grid: Vec<Seconds> = minute_grid(&series).into_iter().map(Seconds::from).collect();
        let config = CalculationConfig::default();
        let rebar = ReinforcementLayout::new(8, 12.0);

        let sequential = evaluate_over_time(&geometry(), &materials(), Some(&rebar), &series, &grid, &config);
        let parallel = evaluate_over_time_parallel(&geometry(), &materials(), Some(&rebar), &series, &grid, &config);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_minute_grid() {
        assert_eq!(minute_grid(&ThermalSeries::default()), vec![Minutes(0.0)]);

        let series = ThermalSeries::new(vec![
            ThermalRecord::uniform(7200.0, 900.0),
            ThermalRecord::uniform(0.0, 20.0),
        ])
        .unwrap();
        let grid = minute_grid(&series);
        assert_eq!(grid.len(), 121);
        assert_eq!(grid[0], Minutes(0.0));
        assert_eq!(grid[120], Minutes(120.0));
    }

    #[test]
    fn test_fire_resistance_limit() {
        let curve = CapacityCurve::new(vec![
            CurvePoint { time_min: 0.0, final_capacity_kn: 1200.0 },
            CurvePoint { time_min: 1.0, final_capacity_kn: 1000.0 },
            CurvePoint { time_min: 2.0, final_capacity_kn: 800.0 },
            CurvePoint { time_min: 3.0, final_capacity_kn: 950.0 },
            CurvePoint { time_min: 4.0, final_capacity_kn: 600.0 },
        ]);
        // first crossing only: 1000 → 800 over [1, 2]
        assert_relative_eq!(fire_resistance_limit(&curve, 900.0).unwrap(), 1.5, epsilon = 1e-12);
        // load reached exactly at a grid point counts as still holding
        assert_relative_eq!(fire_resistance_limit(&curve, 1000.0).unwrap(), 1.0, epsilon = 1e-12);
        assert_eq!(fire_resistance_limit(&curve, 500.0), None);
        assert_eq!(fire_resistance_limit(&curve, 1500.0), None);
        assert_eq!(fire_resistance_limit(&CapacityCurve::default(), 500.0), None);
    }

    #[test]
    fn test_safety_factors() {
        let curve = CapacityCurve::new(vec![
            CurvePoint { time_min: 0.0, final_capacity_kn: 1800.0 },
            CurvePoint { time_min: 1.0, final_capacity_kn: 450.0 },
        ]);
        assert_eq!(safety_factors(&curve, 900.0), vec![2.0, 0.5]);
        assert_eq!(safety_factors(&curve, 0.0), vec![0.0, 0.0]);
        assert_eq!(safety_factors(&curve, -10.0), vec![0.0, 0.0]);
    }

    #[test]
    fn test_curve_from_results() {
        let series = heating_series();
        let grid = [Seconds(0.0), Seconds(600.0), Seconds(1200.0)];
        let results = evaluate_over_time(
            &geometry(),
            &materials(),
            None,
            &series,
            &grid,
            &CalculationConfig::default(),
        );
        let curve = CapacityCurve::from_results(&results);
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.points[1].time_min, 10.0);
        assert_eq!(curve.points[2].final_capacity_kn, results[2].final_capacity_kn);
    }
}
