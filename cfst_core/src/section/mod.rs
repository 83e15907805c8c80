//! # Cross-Section
//!
//! Column geometry, the reinforcing bar cage and the discretization of the
//! concrete core into temperature rings.
//!
//! ```text
//!   ┌───────── D/2 ─────────┐
//!   │ steel │ B1 │ B2 │ ... │ B7 (fills to center)
//!   └── t ──┴────┴────┴─────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cfst_core::section::Geometry;
//!
//! let geometry = Geometry::new(355.6, 9.5, 2.5, 0.7);
//! assert!((geometry.core_radius_mm() - 168.3).abs() < 1e-9);
//! assert!((geometry.effective_length_m() - 1.75).abs() < 1e-12);
//! ```

pub mod rings;

pub use rings::{discretize, steel_annulus, RingDescriptor, RingPlan, RingThickness};

use serde::{Deserialize, Serialize};

use crate::config::{GeometryLimits, LoadLimits};
use crate::equations::{annulus_area, bar_area};
use crate::errors::{CalcError, CalcResult};

/// Tube and column dimensions.
///
/// ## JSON Example
///
/// ```json
/// {
///   "diameter_mm": 355.6,
///   "wall_thickness_mm": 9.5,
///   "height_m": 2.5,
///   "effective_length_coeff": 0.7
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Outer tube diameter (mm)
    pub diameter_mm: f64,

    /// Tube wall thickness (mm)
    pub wall_thickness_mm: f64,

    /// Column height (m)
    pub height_m: f64,

    /// Effective length coefficient μ (0.7 for fixed-pinned)
    pub effective_length_coeff: f64,
}

impl Geometry {
    pub fn new(diameter_mm: f64, wall_thickness_mm: f64, height_m: f64, effective_length_coeff: f64) -> Self {
        Geometry {
            diameter_mm,
            wall_thickness_mm,
            height_m,
            effective_length_coeff,
        }
    }

    pub fn outer_radius_mm(&self) -> f64 {
        self.diameter_mm / 2.0
    }

    /// Radius of the concrete core, D/2 − t (mm)
    pub fn core_radius_mm(&self) -> f64 {
        self.outer_radius_mm() - self.wall_thickness_mm
    }

    /// Effective buckling length μ·L (m)
    pub fn effective_length_m(&self) -> f64 {
        self.height_m * self.effective_length_coeff
    }

    /// Area of the steel tube wall (mm²)
    pub fn steel_area_mm2(&self) -> f64 {
        annulus_area(self.outer_radius_mm(), self.core_radius_mm())
    }

    /// Area of the concrete core (mm²)
    pub fn core_area_mm2(&self) -> f64 {
        annulus_area(self.core_radius_mm(), 0.0)
    }

    /// Validate against geometry bounds.
    pub fn validate(&self, limits: &GeometryLimits) -> CalcResult<()> {
        positive("diameter_mm", self.diameter_mm)?;
        within(
            "diameter_mm",
            self.diameter_mm,
            limits.min_diameter_mm,
            limits.max_diameter_mm,
        )?;

        positive("wall_thickness_mm", self.wall_thickness_mm)?;
        within(
            "wall_thickness_mm",
            self.wall_thickness_mm,
            limits.min_thickness_mm,
            limits.max_thickness_mm,
        )?;
        if self.wall_thickness_mm >= self.outer_radius_mm() {
            return Err(CalcError::invalid_input(
                "wall_thickness_mm",
                self.wall_thickness_mm.to_string(),
                format!(
                    "Wall thickness must be less than the tube radius ({:.1} mm)",
                    self.outer_radius_mm()
                ),
            ));
        }
        if self.core_radius_mm() < limits.min_core_radius_mm {
            return Err(CalcError::invalid_input(
                "wall_thickness_mm",
                self.wall_thickness_mm.to_string(),
                format!(
                    "Concrete core radius {:.1} mm is below {} mm; increase the diameter or reduce the wall",
                    self.core_radius_mm(),
                    limits.min_core_radius_mm
                ),
            ));
        }

        positive("height_m", self.height_m)?;
        within("height_m", self.height_m, limits.min_height_m, limits.max_height_m)?;

        positive("effective_length_coeff", self.effective_length_coeff)?;
        Ok(())
    }
}

/// Longitudinal bars placed on one circle inside the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementLayout {
    /// Number of bars
    pub bar_count: u32,

    /// Bar diameter (mm)
    pub bar_diameter_mm: f64,
}

impl ReinforcementLayout {
    pub fn new(bar_count: u32, bar_diameter_mm: f64) -> Self {
        ReinforcementLayout {
            bar_count,
            bar_diameter_mm,
        }
    }

    /// Distance from the section center to the bar centers,
    /// D/2 − t − cover − d/2 (mm)
    pub fn cage_radius_mm(&self, geometry: &Geometry, cover_mm: f64) -> f64 {
        geometry.core_radius_mm() - cover_mm - self.bar_diameter_mm / 2.0
    }

    /// Total steel area of all bars (mm²)
    pub fn total_area_mm2(&self) -> f64 {
        bar_area(self.bar_diameter_mm) * f64::from(self.bar_count)
    }

    /// Validate against bar bounds and the core it must fit into.
    pub fn validate(&self, limits: &LoadLimits, geometry: &Geometry) -> CalcResult<()> {
        if self.bar_count > limits.max_rebar_count {
            return Err(CalcError::invalid_input(
                "bar_count",
                self.bar_count.to_string(),
                format!("Too many bars (maximum {})", limits.max_rebar_count),
            ));
        }
        positive("bar_diameter_mm", self.bar_diameter_mm)?;
        within(
            "bar_diameter_mm",
            self.bar_diameter_mm,
            limits.min_rebar_diameter_mm,
            limits.max_rebar_diameter_mm,
        )?;
        if self.bar_diameter_mm > geometry.core_radius_mm() {
            return Err(CalcError::invalid_input(
                "bar_diameter_mm",
                self.bar_diameter_mm.to_string(),
                format!(
                    "Bar is larger than the concrete core radius ({:.1} mm)",
                    geometry.core_radius_mm()
                ),
            ));
        }
        Ok(())
    }
}

pub(crate) fn positive(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive number"))
    }
}

pub(crate) fn within(field: &str, value: f64, min: f64, max: f64) -> CalcResult<()> {
    if value < min || value > max {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Must be between {min} and {max}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> Geometry {
        Geometry::new(355.6, 9.5, 2.5, 0.7)
    }

    #[test]
    fn test_derived_dimensions() {
        let g = reference();
        assert_relative_eq!(g.outer_radius_mm(), 177.8);
        assert_relative_eq!(g.core_radius_mm(), 168.3, epsilon = 1e-9);
        // A_steel = π(177.8² − 168.3²)
        assert_relative_eq!(g.steel_area_mm2(), 10_329.40, epsilon = 0.01);
        assert_relative_eq!(g.core_area_mm2(), 88_985.0, epsilon = 1.0);
    }

    #[test]
    fn test_reference_geometry_valid() {
        assert!(reference().validate(&GeometryLimits::default()).is_ok());
    }

    #[test]
    fn test_invalid_geometry() {
        let limits = GeometryLimits::default();

        let mut g = reference();
        g.diameter_mm = 150.0;
        assert!(g.validate(&limits).is_err());

        let mut g = reference();
        g.wall_thickness_mm = 0.0;
        assert!(g.validate(&limits).is_err());

        let mut g = reference();
        g.height_m = 45.0;
        assert!(g.validate(&limits).is_err());

        let mut g = reference();
        g.effective_length_coeff = -0.5;
        assert!(g.validate(&limits).is_err());
    }

    #[test]
    fn test_core_too_small() {
        // 200 mm tube with a 60 mm wall leaves a 40 mm core
        let limits = GeometryLimits {
            max_thickness_mm: 100.0,
            ..GeometryLimits::default()
        };
        let g = Geometry::new(200.0, 60.0, 3.0, 1.0);
        let err = g.validate(&limits).unwrap_err();
        assert!(err.to_string().contains("core radius"));

        let g = Geometry::new(200.0, 100.0, 3.0, 1.0);
        let err = g.validate(&limits).unwrap_err();
        assert!(err.to_string().contains("tube radius"));
    }

    #[test]
    fn test_rebar_geometry() {
        let g = reference();
        let rebar = ReinforcementLayout::new(8, 10.0);
        // 168.3 − 35 − 5 = 128.3
        assert_relative_eq!(rebar.cage_radius_mm(&g, 35.0), 128.3, epsilon = 1e-9);
        assert_relative_eq!(rebar.total_area_mm2(), 628.3185, epsilon = 1e-4);
    }

    #[test]
    fn test_rebar_validation() {
        let limits = LoadLimits::default();
        let g = reference();
        assert!(ReinforcementLayout::new(8, 10.0).validate(&limits, &g).is_ok());
        assert!(ReinforcementLayout::new(0, 10.0).validate(&limits, &g).is_ok());
        assert!(ReinforcementLayout::new(41, 10.0).validate(&limits, &g).is_err());
        assert!(ReinforcementLayout::new(8, 2.0).validate(&limits, &g).is_err());
        assert!(ReinforcementLayout::new(8, 80.0).validate(&limits, &g).is_err());
    }
}
