//! # Unit Types
//!
//! Type-safe wrappers for the units that cross module boundaries, plus the
//! fixed conversion factors used by the capacity formulas.
//!
//! ## SI Units
//!
//! The calculation follows the metric normative method:
//! - Length: millimeters (section), meters (column height)
//! - Time: seconds (thermal data), minutes (exposure input and curves)
//! - Stress: megapascals (MPa)
//! - Force: kilonewtons (kN)
//! - Stiffness: kN·m²
//!
//! ## Example
//!
//! ```rust
//! use cfst_core::units::{Minutes, Seconds};
//!
//! let exposure = Minutes(30.0);
//! let seconds: Seconds = exposure.into();
//! assert_eq!(seconds.0, 1800.0);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Time Units
// ============================================================================

/// Duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

/// Duration in minutes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(pub f64);

impl From<Minutes> for Seconds {
    fn from(min: Minutes) -> Self {
        Seconds(min.0 * 60.0)
    }
}

impl From<Seconds> for Minutes {
    fn from(s: Seconds) -> Self {
        Minutes(s.0 / 60.0)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Conversion Factors
// ============================================================================

/// mm² → m²
pub const MM2_TO_M2: f64 = 1e-6;

/// mm⁴ → m⁴
pub const MM4_TO_M4: f64 = 1e-12;

/// MPa·m² → kN (1 MPa = 1000 kN/m²)
pub const MPA_M2_TO_KN: f64 = 1e3;

/// Per-mille strain → absolute strain
pub const PER_MILLE: f64 = 1e-3;

/// Axial force in kN carried by `area_mm2` at `stress_mpa`.
#[inline]
pub fn axial_force_kn(area_mm2: f64, stress_mpa: f64) -> f64 {
    area_mm2 * MM2_TO_M2 * stress_mpa * MPA_M2_TO_KN
}

/// Flexural rigidity in kN·m² for `inertia_mm4` at `modulus_mpa`.
#[inline]
pub fn flexural_rigidity_kn_m2(inertia_mm4: f64, modulus_mpa: f64) -> f64 {
    inertia_mm4 * MM4_TO_M4 * modulus_mpa * MPA_M2_TO_KN
}
