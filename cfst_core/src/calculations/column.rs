//! # CFST Column Calculation
//!
//! Fire-resistance check of one concrete-filled steel tube column against a
//! normative load.
//!
//! The calculation validates the input, evaluates the column at the requested
//! exposure time and sweeps it over every whole minute of the thermal data to
//! build the capacity curve, the fire-resistance limit and the safety factor.
//!
//! ## Example
//!
//! ```rust
//! use cfst_core::calculations::column::{calculate, CfstColumnInput};
//! use cfst_core::config::CalculationConfig;
//! use cfst_core::materials::MaterialProperties;
//! use cfst_core::section::Geometry;
//! use cfst_core::thermal::{ThermalRecord, ThermalSeries};
//!
//! let input = CfstColumnInput {
//!     label: "K-1".to_string(),
//!     geometry: Geometry::new(355.6, 9.5, 2.5, 0.7),
//!     materials: MaterialProperties::new(355.0, 210_000.0, 42.0),
//!     reinforcement: None,
//!     normative_load_kn: 900.0,
//!     exposure_time_min: 0.0,
//! };
//! let series = ThermalSeries::new(vec![ThermalRecord::uniform(0.0, 20.0)])?;
//!
//! let result = calculate(&input, &series, &CalculationConfig::default())?;
//! assert!(result.passes());
//! # Ok::<(), cfst_core::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use super::pipeline::{
    evaluate, evaluate_over_time_parallel, fire_resistance_limit, minute_grid, safety_factors, CapacityCurve,
    CapacityResult,
};
use crate::config::{defaults, CalculationConfig, ValidationLimits};
use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialProperties;
use crate::section::{Geometry, ReinforcementLayout};
use crate::thermal::ThermalSeries;
use crate::units::{Minutes, Seconds};

/// Input parameters for a CFST column.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "K-1",
///   "geometry": {
///     "diameter_mm": 355.6,
///     "wall_thickness_mm": 9.5,
///     "height_m": 2.5,
///     "effective_length_coeff": 0.7
///   },
///   "materials": {
///     "steel_strength_mpa": 355.0,
///     "steel_elastic_modulus_mpa": 210000.0,
///     "concrete_strength_mpa": 42.0
///   },
///   "reinforcement": { "bar_count": 8, "bar_diameter_mm": 10.0 },
///   "normative_load_kn": 900.0,
///   "exposure_time_min": 60.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfstColumnInput {
    /// User label for this column (e.g., "K-1")
    pub label: String,

    pub geometry: Geometry,

    pub materials: MaterialProperties,

    /// Bar cage inside the core, `None` for an unreinforced core
    #[serde(default)]
    pub reinforcement: Option<ReinforcementLayout>,

    /// Normative axial load (kN)
    pub normative_load_kn: f64,

    /// Fire exposure time to check (min)
    pub exposure_time_min: f64,
}

impl Default for CfstColumnInput {
    fn default() -> Self {
        CfstColumnInput {
            label: String::new(),
            geometry: Geometry::new(
                defaults::DIAMETER_MM,
                defaults::WALL_THICKNESS_MM,
                defaults::HEIGHT_M,
                defaults::EFFECTIVE_LENGTH_COEFF,
            ),
            materials: MaterialProperties::new(
                defaults::STEEL_STRENGTH_MPA,
                defaults::STEEL_ELASTIC_MODULUS_MPA,
                defaults::CONCRETE_STRENGTH_MPA,
            ),
            reinforcement: None,
            normative_load_kn: defaults::NORMATIVE_LOAD_KN,
            exposure_time_min: defaults::FIRE_EXPOSURE_TIME_MIN,
        }
    }
}

impl CfstColumnInput {
    /// Validate input parameters.
    pub fn validate(&self, limits: &ValidationLimits) -> CalcResult<()> {
        self.geometry.validate(&limits.geometry)?;
        self.materials.validate(&limits.materials)?;

        if !self.normative_load_kn.is_finite() || self.normative_load_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "normative_load_kn",
                self.normative_load_kn.to_string(),
                "Load cannot be negative",
            ));
        }
        if self.normative_load_kn > limits.loads.max_load_kn {
            return Err(CalcError::invalid_input(
                "normative_load_kn",
                self.normative_load_kn.to_string(),
                format!("Load exceeds {} kN", limits.loads.max_load_kn),
            ));
        }

        if !self.exposure_time_min.is_finite() || self.exposure_time_min < 0.0 {
            return Err(CalcError::invalid_input(
                "exposure_time_min",
                self.exposure_time_min.to_string(),
                "Exposure time cannot be negative",
            ));
        }
        if self.exposure_time_min > limits.loads.max_exposure_time_min {
            return Err(CalcError::invalid_input(
                "exposure_time_min",
                self.exposure_time_min.to_string(),
                format!("Exposure time exceeds {} min", limits.loads.max_exposure_time_min),
            ));
        }

        if let Some(rebar) = &self.reinforcement {
            rebar.validate(&limits.loads, &self.geometry)?;
        }
        Ok(())
    }

    pub fn exposure_time(&self) -> Seconds {
        Seconds::from(Minutes(self.exposure_time_min))
    }
}

/// Results of a CFST column fire-resistance check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfstColumnResult {
    pub label: String,

    pub normative_load_kn: f64,

    /// Capacity at the requested exposure time
    pub at_exposure: CapacityResult,

    /// Final capacity at every whole minute of the thermal data
    pub curve: CapacityCurve,

    /// Time (min) at which capacity drops below the load, `None` if it never does
    pub fire_resistance_limit_min: Option<f64>,

    /// n = N_final / load at the requested time, 0 for a zero load
    pub safety_factor: f64,

    /// n at every point of the curve
    pub safety_factors: Vec<f64>,
}

impl CfstColumnResult {
    /// Check if the column carries the load at the requested time
    pub fn passes(&self) -> bool {
        self.at_exposure.final_capacity_kn >= self.normative_load_kn
    }

    /// Load over final capacity; infinite when nothing is left
    pub fn utilization(&self) -> f64 {
        if self.at_exposure.final_capacity_kn > 0.0 {
            self.normative_load_kn / self.at_exposure.final_capacity_kn
        } else {
            f64::INFINITY
        }
    }
}

/// Run the fire-resistance check.
///
/// # Arguments
///
/// * `input` - Column parameters
/// * `series` - Thermal data for the column's section
/// * `config` - Normative constants and validation bounds
///
/// # Returns
///
/// * `Ok(CfstColumnResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid or there is no thermal data
pub fn calculate(
    input: &CfstColumnInput,
    series: &ThermalSeries,
    config: &CalculationConfig,
) -> CalcResult<CfstColumnResult> {
    input.validate(&config.limits)?;

    if series.is_empty() {
        return Err(CalcError::calculation_failed(
            "CfstColumn",
            "No thermal data for this section",
        ));
    }

    let reinforcement = input.reinforcement.as_ref();
    let at_exposure = evaluate(
        &input.geometry,
        &input.materials,
        reinforcement,
        series,
        input.exposure_time(),
        config,
    );

    let grid: Vec<Seconds> = minute_grid(series).into_iter().map(Seconds::from).collect();
    let sweep = evaluate_over_time_parallel(&input.geometry, &input.materials, reinforcement, series, &grid, config);
    let curve = CapacityCurve::from_results(&sweep);

    let fire_resistance_limit_min = fire_resistance_limit(&curve, input.normative_load_kn);
    let safety_factors = safety_factors(&curve, input.normative_load_kn);
    let safety_factor = if input.normative_load_kn > 0.0 {
        at_exposure.final_capacity_kn / input.normative_load_kn
    } else {
        0.0
    };

    info!(
        label = %input.label,
        final_capacity_kn = at_exposure.final_capacity_kn,
        fire_resistance_limit_min = ?fire_resistance_limit_min,
        "column calculation complete"
    );

    Ok(CfstColumnResult {
        label: input.label.clone(),
        normative_load_kn: input.normative_load_kn,
        at_exposure,
        curve,
        fire_resistance_limit_min,
        safety_factor,
        safety_factors,
    })
}
