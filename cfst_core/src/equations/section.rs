//! # Cross-Section Property Formulas
//!
//! Geometric properties of the circular and annular regions that make up a
//! concrete-filled steel tube section.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Second moment of area about a centroidal diameter
//! - `R_out`, `R_in` = Outer and inner radius of an annulus
//! - `d` = Bar diameter
//! - `r` = Distance from the section center to a bar center
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - Any structural mechanics textbook (parallel-axis theorem)

use std::f64::consts::PI;

// =============================================================================
// ANNULAR SECTION PROPERTIES
// Steel tube wall and concrete rings
// =============================================================================

/// Area of an annulus.
///
/// ```text
///        ╭───────╮
///      ╭─┘ ╭───╮ └─╮
///      │   │   │   │  ← shaded between R_in and R_out
///      ╰─╮ ╰───╯ ╭─╯
///        ╰───────╯
/// ```
///
/// # Formula
/// A = π(R_out² − R_in²)
///
/// Returns zero when `outer_radius <= inner_radius`; a misconfigured ring plan
/// can produce such rings and they carry nothing.
///
/// # Example
/// ```rust
/// use cfst_core::equations::section::annulus_area;
///
/// let area = annulus_area(177.8, 168.3);
/// assert!((area - 10_329.0).abs() < 1.0);
/// assert_eq!(annulus_area(10.0, 12.0), 0.0);
/// ```
#[inline]
pub fn annulus_area(outer_radius: f64, inner_radius: f64) -> f64 {
    if outer_radius > inner_radius {
        PI * (outer_radius.powi(2) - inner_radius.powi(2))
    } else {
        0.0
    }
}

/// Second moment of area of an annulus about a diameter.
///
/// # Formula
/// I = (π/4)(R_out⁴ − R_in⁴)
///
/// A solid disk is the special case `inner_radius = 0`.
///
/// # Example
/// ```rust
/// use cfst_core::equations::section::annulus_moment_of_inertia;
///
/// // Solid disk of radius 100 mm: πr⁴/4
/// let i = annulus_moment_of_inertia(100.0, 0.0);
/// assert!((i - 78_539_816.3).abs() < 1.0);
/// ```
#[inline]
pub fn annulus_moment_of_inertia(outer_radius: f64, inner_radius: f64) -> f64 {
    if outer_radius > inner_radius {
        PI / 4.0 * (outer_radius.powi(4) - inner_radius.powi(4))
    } else {
        0.0
    }
}

// =============================================================================
// REINFORCING BAR PROPERTIES
// =============================================================================

/// Area of one round bar, A = πd²/4
#[inline]
pub fn bar_area(diameter: f64) -> f64 {
    PI * diameter.powi(2) / 4.0
}

/// Self second moment of area of one round bar, I = πd⁴/64
#[inline]
pub fn bar_moment_of_inertia(diameter: f64) -> f64 {
    PI * diameter.powi(4) / 64.0
}

/// Second moment of area of a circular bar cage about a diameter.
///
/// ```text
///          ●
///      ●       ●
///    ●     +     ●    ← 8 bars on radius r
///      ●       ●
///          ●
/// ```
///
/// # Formula
/// I = 8·I_self + 4·A·r²
///
/// This is the parallel-axis sum for eight equally spaced bars
/// (Σ r²sin²θ over 8 bars = 4r²). It is applied for every bar count, so it is
/// exact only for eight bars.
///
/// # Example
/// ```rust
/// use cfst_core::equations::section::{bar_area, bar_moment_of_inertia, bar_cage_moment_of_inertia};
///
/// let i = bar_cage_moment_of_inertia(10.0, 128.3);
/// let expected = 8.0 * bar_moment_of_inertia(10.0) + 4.0 * bar_area(10.0) * 128.3_f64.powi(2);
/// assert!((i - expected).abs() < 1e-6);
/// ```
#[inline]
pub fn bar_cage_moment_of_inertia(bar_diameter: f64, cage_radius: f64) -> f64 {
    8.0 * bar_moment_of_inertia(bar_diameter) + 4.0 * bar_area(bar_diameter) * cage_radius.powi(2)
}
