//! # Stability Reduction
//!
//! Euler critical load, conditional slenderness and the buckling reduction
//! coefficient φ applied to the pre-buckling capacity.
//!
//! ```text
//! N_cr = π²·EI / (μ·L)²
//! λ̄    = √(N / N_cr)
//! N_f  = φ(λ̄)·N
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::equations::interpolate;

/// Reduction coefficient φ by conditional slenderness λ̄.
pub const REDUCTION_TABLE: [(f64, f64); 16] = [
    (0.0, 1.0),
    (0.2, 1.0),
    (0.4, 0.9),
    (0.6, 0.785),
    (0.8, 0.6),
    (1.0, 0.54),
    (1.2, 0.43),
    (1.4, 0.36),
    (1.6, 0.285),
    (1.8, 0.24),
    (2.0, 0.2),
    (2.2, 0.17),
    (2.4, 0.15),
    (2.6, 0.125),
    (2.8, 0.11),
    (3.0, 0.1),
];

/// Buckling check of a section with known capacity and stiffness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityResult {
    /// Euler critical load N_cr (kN), 0 when undefined
    pub critical_load_kn: f64,

    /// Conditional slenderness λ̄
    pub slenderness: f64,

    /// Reduction coefficient φ ∈ [0.1, 1.0]
    pub reduction_coeff: f64,

    /// N·φ (kN)
    pub final_capacity_kn: f64,
}

/// Euler critical load (kN) for stiffness EI (kN·m²) over an effective
/// length μ·L (m). Zero when any input is not positive.
pub fn critical_load_kn(stiffness_kn_m2: f64, height_m: f64, effective_length_coeff: f64) -> f64 {
    if stiffness_kn_m2 <= 0.0 || height_m <= 0.0 || effective_length_coeff <= 0.0 {
        return 0.0;
    }
    let effective_length_m = effective_length_coeff * height_m;
    PI.powi(2) * stiffness_kn_m2 / effective_length_m.powi(2)
}

/// φ for slenderness λ̄, clamped to the table ends.
pub fn reduction_coefficient(slenderness: f64) -> f64 {
    interpolate(&REDUCTION_TABLE, slenderness)
}

/// Apply the buckling reduction to a pre-buckling capacity.
///
/// An undefined critical load (no stiffness left) gives λ̄ = 0 and φ = 1.
///
/// # Example
///
/// ```rust
/// use cfst_core::calculations::stability::reduce;
///
/// let result = reduce(43_089.93, 7_404.318, 2.5, 0.7);
/// assert!((result.slenderness - 0.2309).abs() < 1e-4);
/// assert!((result.final_capacity_kn - 7_289.88).abs() < 0.01);
/// ```
pub fn reduce(stiffness_kn_m2: f64, capacity_kn: f64, height_m: f64, effective_length_coeff: f64) -> StabilityResult {
    let critical_load_kn = critical_load_kn(stiffness_kn_m2, height_m, effective_length_coeff);
    let slenderness = if critical_load_kn > 0.0 {
        (capacity_kn.max(0.0) / critical_load_kn).sqrt()
    } else {
        0.0
    };
    let reduction_coeff = reduction_coefficient(slenderness);

    StabilityResult {
        critical_load_kn,
        slenderness,
        reduction_coeff,
        final_capacity_kn: capacity_kn * reduction_coeff,
    }
}
