//! # cfst_core - CFST Column Fire-Resistance Engine
//!
//! `cfst_core` estimates how the load-bearing capacity of a concrete-filled
//! steel tube (CFST) column falls during a fire. The cross-section is cut into
//! temperature zones, each zone's strength and stiffness are degraded by
//! normative coefficients, contributions are summed and a buckling reduction
//! is applied. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Graceful Data Gaps**: Missing temperatures reduce capacity, they do not fail
//!
//! ## Quick Start
//!
//! ```rust
//! use cfst_core::calculations::pipeline::evaluate;
//! use cfst_core::config::CalculationConfig;
//! use cfst_core::materials::MaterialProperties;
//! use cfst_core::section::Geometry;
//! use cfst_core::thermal::ThermalSeries;
//! use cfst_core::units::{Minutes, Seconds};
//!
//! let series = ThermalSeries::from_json_str(
//!     r#"[{"time_minutes": 0, "temp_t1": 20, "temp_t2": 20, "temp_t3": 20,
//!          "temp_t5": 20, "temp_t6": 20, "temp_t7": 20, "temp_t8": 20, "temp_t9": 20}]"#,
//! )?;
//! let result = evaluate(
//!     &Geometry::new(355.6, 9.5, 2.5, 0.7),
//!     &MaterialProperties::new(355.0, 210_000.0, 42.0),
//!     None,
//!     &series,
//!     Seconds::from(Minutes(30.0)),
//!     &CalculationConfig::default(),
//! );
//! assert!(result.final_capacity_kn > 7000.0);
//! # Ok::<(), cfst_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Capacity pipeline and the column fire-resistance check
//! - [`section`] - Geometry, reinforcement and ring discretization
//! - [`thermal`] - Thermal records, snapshot resolution and dataset files
//! - [`materials`] - Material properties and degradation tables
//! - [`equations`] - Section formulas and table interpolation
//! - [`config`] - Normative constants and validation bounds
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod section;
pub mod thermal;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CapacityResult, CfstColumnInput, CfstColumnResult};
pub use config::{CalculationConfig, ValidationLimits};
pub use errors::{CalcError, CalcResult};
pub use thermal::{ThermalLibrary, ThermalSeries};
