//! # Structural Equations
//!
//! Fundamental formulas shared by the section discretizer, the capacity
//! accumulator and the stability check. Keeping them in one place makes them
//! easy to check against the normative references.
//!
//! ## Modules
//!
//! - [`section`] - Circle, annulus and bar-cage properties (A, I)
//! - [`interpolation`] - Piecewise-linear table lookup
//!
//! ## Units
//!
//! Formulas are unit-agnostic: results come back in the powers of whatever
//! length unit is passed in. Callers in this crate pass millimeters.

pub mod interpolation;
pub mod section;

pub use interpolation::interpolate;
pub use section::{
    annulus_area,
    annulus_moment_of_inertia,
    bar_area,
    bar_cage_moment_of_inertia,
    bar_moment_of_inertia,
};
