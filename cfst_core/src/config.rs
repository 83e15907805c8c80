//! # Calculation Configuration
//!
//! Normative constants and bounds, passed explicitly into the pipeline
//! rather than read from globals. Everything here serializes so a calculation
//! can be reproduced from its JSON record.
//!
//! ## Example
//!
//! ```rust
//! use cfst_core::config::CalculationConfig;
//! use cfst_core::section::{RingPlan, RingThickness};
//!
//! let config = CalculationConfig {
//!     ring_plan: RingPlan::new(vec![
//!         RingThickness::Fixed(15.0),
//!         RingThickness::Fixed(30.0),
//!         RingThickness::Remainder,
//!     ])?,
//!     ..CalculationConfig::default()
//! };
//! assert_eq!(config.rebar_cover_mm, 35.0);
//! # Ok::<(), cfst_core::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::section::RingPlan;

/// Default input values of the reference column (355.6 × 9.5 tube).
pub mod defaults {
    pub const DIAMETER_MM: f64 = 355.6;
    pub const WALL_THICKNESS_MM: f64 = 9.5;
    pub const HEIGHT_M: f64 = 2.5;
    pub const EFFECTIVE_LENGTH_COEFF: f64 = 0.7;

    pub const STEEL_STRENGTH_MPA: f64 = 355.0;
    pub const STEEL_ELASTIC_MODULUS_MPA: f64 = 210_000.0;
    pub const CONCRETE_STRENGTH_MPA: f64 = 42.0;

    pub const NORMATIVE_LOAD_KN: f64 = 900.0;
    pub const FIRE_EXPOSURE_TIME_MIN: f64 = 0.0;

    /// Concrete cover to reinforcement per SP 63.13330 (mm)
    pub const REBAR_COVER_MM: f64 = 35.0;
    /// Bars placed around the cage
    pub const REBAR_COUNT: u32 = 8;
    /// Bar diameter (mm)
    pub const REBAR_DIAMETER_MM: f64 = 10.0;
}

/// Constants consumed by the calculation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Concrete cover from the tube wall to the bar surface (mm)
    pub rebar_cover_mm: f64,

    /// Ring thicknesses of the concrete core, outermost first
    pub ring_plan: RingPlan,

    /// Bounds checked by [`crate::calculations::column::calculate`] before evaluation
    pub limits: ValidationLimits,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        CalculationConfig {
            rebar_cover_mm: defaults::REBAR_COVER_MM,
            ring_plan: RingPlan::default(),
            limits: ValidationLimits::default(),
        }
    }
}

/// Geometry bounds checked before a calculation is run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryLimits {
    pub min_diameter_mm: f64,
    pub max_diameter_mm: f64,
    pub min_thickness_mm: f64,
    pub max_thickness_mm: f64,
    pub min_height_m: f64,
    pub max_height_m: f64,
    /// Smallest concrete core radius that still gives a meaningful ring plan
    pub min_core_radius_mm: f64,
}

impl Default for GeometryLimits {
    fn default() -> Self {
        GeometryLimits {
            min_diameter_mm: 200.0,
            max_diameter_mm: 1200.0,
            min_thickness_mm: 3.0,
            max_thickness_mm: 30.0,
            min_height_m: 0.5,
            max_height_m: 30.0,
            min_core_radius_mm: 50.0,
        }
    }
}

/// Material bounds checked before a calculation is run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialLimits {
    pub min_steel_strength_mpa: f64,
    pub max_steel_strength_mpa: f64,
    pub min_steel_modulus_mpa: f64,
    pub max_steel_modulus_mpa: f64,
    pub min_concrete_strength_mpa: f64,
    pub max_concrete_strength_mpa: f64,
}

impl Default for MaterialLimits {
    fn default() -> Self {
        MaterialLimits {
            min_steel_strength_mpa: 200.0,
            max_steel_strength_mpa: 1000.0,
            min_steel_modulus_mpa: 150_000.0,
            max_steel_modulus_mpa: 250_000.0,
            min_concrete_strength_mpa: 5.0,
            max_concrete_strength_mpa: 120.0,
        }
    }
}

/// Load, exposure-time and reinforcement bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadLimits {
    pub max_load_kn: f64,
    pub max_exposure_time_min: f64,
    pub max_rebar_count: u32,
    pub min_rebar_diameter_mm: f64,
    pub max_rebar_diameter_mm: f64,
}

impl Default for LoadLimits {
    fn default() -> Self {
        LoadLimits {
            max_load_kn: 50_000.0,
            max_exposure_time_min: 360.0,
            max_rebar_count: 40,
            min_rebar_diameter_mm: 4.0,
            max_rebar_diameter_mm: 60.0,
        }
    }
}

/// All validation bounds together.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    pub geometry: GeometryLimits,
    pub materials: MaterialLimits,
    pub loads: LoadLimits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalculationConfig::default();
        assert_eq!(config.rebar_cover_mm, 35.0);
        assert_eq!(config.ring_plan, RingPlan::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CalculationConfig = serde_json::from_str(r#"{ "rebar_cover_mm": 40.0 }"#).unwrap();
        assert_eq!(config.rebar_cover_mm, 40.0);
        assert_eq!(config.ring_plan.len(), 7);
        assert_eq!(config.limits, ValidationLimits::default());

        let limits: ValidationLimits =
            serde_json::from_str(r#"{ "geometry": { "max_height_m": 12.0 } }"#).unwrap();
        assert_eq!(limits.geometry.max_height_m, 12.0);
        assert_eq!(limits.geometry.min_diameter_mm, 200.0);
        assert_eq!(limits.materials, MaterialLimits::default());
    }
}
