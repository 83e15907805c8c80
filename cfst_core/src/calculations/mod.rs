//! # Fire Capacity Calculations
//!
//! The capacity pipeline and the column check built on it. The column check
//! follows the crate-wide pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, ..) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`capacity`] - Per-component capacity and stiffness of a heated section
//! - [`stability`] - Euler load, slenderness and buckling reduction
//! - [`pipeline`] - Single-time evaluation, time sweeps and capacity curves
//! - [`column`] - Fire-resistance check of a CFST column against a load

pub mod capacity;
pub mod column;
pub mod pipeline;
pub mod stability;

// Re-export commonly used types
pub use capacity::{accumulate, ComponentContribution, RebarCage, SectionCapacity};
pub use column::{CfstColumnInput, CfstColumnResult};
pub use pipeline::{
    evaluate, evaluate_over_time, evaluate_over_time_parallel, fire_resistance_limit, minute_grid, safety_factors,
    CapacityCurve, CapacityResult, CurvePoint,
};
pub use stability::{reduce, reduction_coefficient, StabilityResult};
