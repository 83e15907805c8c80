//! # Material Degradation at Elevated Temperature
//!
//! Temperature-dependent working-condition coefficients for steel (γ_st) and
//! concrete (γ_bt), and the ultimate strain of concrete ε. Every other module
//! reads degradation values through [`DegradationTable::lookup`]; nothing else
//! re-derives them.
//!
//! ## Table Summary
//!
//! | T, °C | γ_st   | γ_bt | ε, ‰ |
//! |-------|--------|------|------|
//! | 20    | 1.00   | 1.00 | 2.5  |
//! | 100   | 1.00   | 1.00 | 4.0  |
//! | 200   | 0.90   | 0.95 | 5.5  |
//! | 300   | 0.80   | 0.85 | 7.0  |
//! | 400   | 0.70   | 0.75 | 10.0 |
//! | 500   | 0.60   | 0.60 | 15.0 |
//! | 600   | 0.31   | 0.45 | 25.0 |
//! | 700   | 0.13   | 0.30 | 25.0 |
//! | 800   | 0.09   | 0.15 | 25.0 |
//! | 900   | 0.0675 | 0.08 | 25.0 |
//! | 1000  | 0.0450 | 0.04 | 25.0 |
//! | 1100  | 0.0225 | 0.01 | 25.0 |
//! | 1200  | 0.0    | 0.0  | —    |
//!
//! At 1200 °C concrete is fully destroyed and has no usable strain. Between
//! 1100 °C and 1200 °C the strain is likewise undefined, since there is no
//! upper value to interpolate towards.
//!
//! ## Example
//!
//! ```rust
//! use cfst_core::materials::degradation::DegradationTable;
//!
//! let gamma_st = DegradationTable::SteelStrength.lookup(550.0).unwrap();
//! assert!((gamma_st - 0.455).abs() < 1e-12);
//! assert_eq!(DegradationTable::ConcreteStrain.lookup(1200.0), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::interpolate;

/// Normative references for the degradation tables.
pub mod norm_ref {
    /// Steel working-condition coefficient γ_st
    pub const STEEL_WORKING_CONDITION: &str = "SP 468.1325800.2019, Table 5.1";
    /// Concrete working-condition coefficient γ_bt
    pub const CONCRETE_WORKING_CONDITION: &str = "SP 468.1325800.2019";
    /// Ultimate strain of heated concrete ε
    pub const CONCRETE_ULTIMATE_STRAIN: &str = "SP 468.1325800.2019";
}

const STEEL_STRENGTH: [(f64, f64); 13] = [
    (20.0, 1.00),
    (100.0, 1.00),
    (200.0, 0.90),
    (300.0, 0.80),
    (400.0, 0.70),
    (500.0, 0.60),
    (600.0, 0.31),
    (700.0, 0.13),
    (800.0, 0.09),
    (900.0, 0.0675),
    (1000.0, 0.0450),
    (1100.0, 0.0225),
    (1200.0, 0.0),
];

const CONCRETE_STRENGTH: [(f64, f64); 13] = [
    (20.0, 1.00),
    (100.0, 1.00),
    (200.0, 0.95),
    (300.0, 0.85),
    (400.0, 0.75),
    (500.0, 0.60),
    (600.0, 0.45),
    (700.0, 0.30),
    (800.0, 0.15),
    (900.0, 0.08),
    (1000.0, 0.04),
    (1100.0, 0.01),
    (1200.0, 0.0),
];

// Defined part only; the 1200 °C total-loss breakpoint is CONCRETE_LOSS_TEMPERATURE_C.
const CONCRETE_STRAIN: [(f64, f64); 12] = [
    (20.0, 2.5),
    (100.0, 4.0),
    (200.0, 5.5),
    (300.0, 7.0),
    (400.0, 10.0),
    (500.0, 15.0),
    (600.0, 25.0),
    (700.0, 25.0),
    (800.0, 25.0),
    (900.0, 25.0),
    (1000.0, 25.0),
    (1100.0, 25.0),
];

/// Temperature at which concrete is considered fully destroyed (°C)
pub const CONCRETE_LOSS_TEMPERATURE_C: f64 = 1200.0;

/// One of the three temperature-dependent material tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DegradationTable {
    /// Steel working-condition coefficient γ_st (yield strength and modulus)
    SteelStrength,
    /// Concrete working-condition coefficient γ_bt
    ConcreteStrength,
    /// Ultimate concrete strain ε in per-mille
    ConcreteStrain,
}

impl DegradationTable {
    /// All tables, for iteration in reports and tests
    pub const ALL: [DegradationTable; 3] = [
        DegradationTable::SteelStrength,
        DegradationTable::ConcreteStrength,
        DegradationTable::ConcreteStrain,
    ];

    /// Short symbol used in reports
    pub fn symbol(&self) -> &'static str {
        match self {
            DegradationTable::SteelStrength => "γ_st",
            DegradationTable::ConcreteStrength => "γ_bt",
            DegradationTable::ConcreteStrain => "ε",
        }
    }

    /// Normative reference for the table
    pub fn reference(&self) -> &'static str {
        match self {
            DegradationTable::SteelStrength => norm_ref::STEEL_WORKING_CONDITION,
            DegradationTable::ConcreteStrength => norm_ref::CONCRETE_WORKING_CONDITION,
            DegradationTable::ConcreteStrain => norm_ref::CONCRETE_ULTIMATE_STRAIN,
        }
    }

    /// The defined `(temperature °C, value)` breakpoints of the table.
    pub fn points(&self) -> &'static [(f64, f64)] {
        match self {
            DegradationTable::SteelStrength => &STEEL_STRENGTH,
            DegradationTable::ConcreteStrength => &CONCRETE_STRENGTH,
            DegradationTable::ConcreteStrain => &CONCRETE_STRAIN,
        }
    }

    /// All breakpoints including a terminal undefined one.
    pub fn breakpoints(&self) -> Vec<(f64, Option<f64>)> {
        let mut points: Vec<(f64, Option<f64>)> =
            self.points().iter().map(|&(t, v)| (t, Some(v))).collect();
        if *self == DegradationTable::ConcreteStrain {
            points.push((CONCRETE_LOSS_TEMPERATURE_C, None));
        }
        points
    }

    /// Look up the table value at `temperature_c`.
    ///
    /// Clamps to the first value below the first breakpoint and to the last
    /// defined value above the last one. The strain table returns `None` above
    /// its last defined breakpoint (1100 °C): concrete has no usable strain
    /// there.
    pub fn lookup(&self, temperature_c: f64) -> Option<f64> {
        let points = self.points();
        if *self == DegradationTable::ConcreteStrain {
            let last_defined = points.last().map_or(f64::NEG_INFINITY, |p| p.0);
            if temperature_c > last_defined || temperature_c.is_nan() {
                return None;
            }
        }
        Some(interpolate(points, temperature_c))
    }
}

/// Steel working-condition coefficient γ_st at `temperature_c`.
pub fn steel_working_condition(temperature_c: f64) -> f64 {
    interpolate(&STEEL_STRENGTH, temperature_c)
}

/// Concrete working-condition coefficient γ_bt at `temperature_c`.
pub fn concrete_working_condition(temperature_c: f64) -> f64 {
    interpolate(&CONCRETE_STRENGTH, temperature_c)
}

/// Ultimate concrete strain in per-mille, `None` once the concrete is destroyed.
pub fn concrete_ultimate_strain(temperature_c: f64) -> Option<f64> {
    DegradationTable::ConcreteStrain.lookup(temperature_c)
}
