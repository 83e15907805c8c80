//! # Materials
//!
//! Nominal material properties of the column and their degradation at
//! elevated temperature.
//!
//! ## Example
//!
//! ```rust
//! use cfst_core::materials::MaterialProperties;
//!
//! let materials = MaterialProperties::new(355.0, 210_000.0, 42.0);
//! assert_eq!(materials.rebar_strength_mpa(), 355.0);
//!
//! let with_rebar = materials.with_rebar_strength(400.0);
//! assert_eq!(with_rebar.rebar_strength_mpa(), 400.0);
//! ```

pub mod degradation;

pub use degradation::{
    concrete_ultimate_strain, concrete_working_condition, steel_working_condition, DegradationTable,
};

use serde::{Deserialize, Serialize};

use crate::config::MaterialLimits;
use crate::errors::{CalcError, CalcResult};

/// Nominal (20 °C) material properties.
///
/// ## JSON Example
///
/// ```json
/// {
///   "steel_strength_mpa": 355.0,
///   "steel_elastic_modulus_mpa": 210000.0,
///   "concrete_strength_mpa": 42.0,
///   "rebar_strength_mpa": null
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Tube steel yield strength (MPa)
    pub steel_strength_mpa: f64,

    /// Steel elastic modulus (MPa), shared by tube and bars
    pub steel_elastic_modulus_mpa: f64,

    /// Concrete strength (MPa)
    pub concrete_strength_mpa: f64,

    /// Reinforcing bar yield strength (MPa); the tube steel value when absent
    #[serde(default)]
    pub rebar_strength_mpa: Option<f64>,
}

impl MaterialProperties {
    pub fn new(steel_strength_mpa: f64, steel_elastic_modulus_mpa: f64, concrete_strength_mpa: f64) -> Self {
        MaterialProperties {
            steel_strength_mpa,
            steel_elastic_modulus_mpa,
            concrete_strength_mpa,
            rebar_strength_mpa: None,
        }
    }

    pub fn with_rebar_strength(mut self, rebar_strength_mpa: f64) -> Self {
        self.rebar_strength_mpa = Some(rebar_strength_mpa);
        self
    }

    /// Effective rebar yield strength (MPa)
    pub fn rebar_strength_mpa(&self) -> f64 {
        self.rebar_strength_mpa.unwrap_or(self.steel_strength_mpa)
    }

    /// Validate against material bounds.
    pub fn validate(&self, limits: &MaterialLimits) -> CalcResult<()> {
        check_range(
            "steel_strength_mpa",
            self.steel_strength_mpa,
            limits.min_steel_strength_mpa,
            limits.max_steel_strength_mpa,
        )?;
        check_range(
            "steel_elastic_modulus_mpa",
            self.steel_elastic_modulus_mpa,
            limits.min_steel_modulus_mpa,
            limits.max_steel_modulus_mpa,
        )?;
        check_range(
            "concrete_strength_mpa",
            self.concrete_strength_mpa,
            limits.min_concrete_strength_mpa,
            limits.max_concrete_strength_mpa,
        )?;
        if let Some(rebar) = self.rebar_strength_mpa {
            check_range(
                "rebar_strength_mpa",
                rebar,
                limits.min_steel_strength_mpa,
                limits.max_steel_strength_mpa,
            )?;
        }
        Ok(())
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive number"));
    }
    if value < min {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Too low (minimum {min})"),
        ));
    }
    if value > max {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Too high (maximum {max})"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> MaterialProperties {
        MaterialProperties::new(355.0, 210_000.0, 42.0)
    }

    #[test]
    fn test_rebar_strength_defaults_to_steel() {
        assert_eq!(reference().rebar_strength_mpa(), 355.0);
        assert_eq!(reference().with_rebar_strength(500.0).rebar_strength_mpa(), 500.0);
    }

    #[test]
    fn test_reference_materials_valid() {
        assert!(reference().validate(&MaterialLimits::default()).is_ok());
    }

    #[test]
    fn test_out_of_range_materials() {
        let limits = MaterialLimits::default();

        let mut m = reference();
        m.steel_strength_mpa = 150.0;
        let err = m.validate(&limits).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "steel_strength_mpa"));

        let mut m = reference();
        m.steel_elastic_modulus_mpa = 300_000.0;
        assert!(m.validate(&limits).is_err());

        let mut m = reference();
        m.concrete_strength_mpa = -1.0;
        assert!(m.validate(&limits).is_err());

        let m = reference().with_rebar_strength(f64::NAN);
        assert!(m.validate(&limits).is_err());
    }

    #[test]
    fn test_serialization_without_rebar_field() {
        let json = r#"{
            "steel_strength_mpa": 355.0,
            "steel_elastic_modulus_mpa": 210000.0,
            "concrete_strength_mpa": 42.0
        }"#;
        let m: MaterialProperties = serde_json::from_str(json).unwrap();
        assert_eq!(m, reference());
    }
}
