//! Discretization of the concrete core into concentric temperature rings.
//!
//! The core (radius D/2 − t) is cut into rings from the outside in following a
//! [`RingPlan`]. Each ring receives the temperature of its channel in the
//! resolved snapshot (see [`crate::thermal::channels`]).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::equations::{annulus_area, annulus_moment_of_inertia};
use crate::errors::{CalcError, CalcResult};
use crate::section::Geometry;
use crate::thermal::{ChannelRole, ThermalSnapshot};

/// Radial thickness of one ring in a plan.
///
/// Serializes as a number, or `null` for [`RingThickness::Remainder`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum RingThickness {
    /// Fixed thickness (mm)
    Fixed(f64),
    /// Everything between the previous ring and the center
    Remainder,
}

impl From<Option<f64>> for RingThickness {
    fn from(value: Option<f64>) -> Self {
        value.map_or(RingThickness::Remainder, RingThickness::Fixed)
    }
}

impl From<RingThickness> for Option<f64> {
    fn from(value: RingThickness) -> Self {
        match value {
            RingThickness::Fixed(t) => Some(t),
            RingThickness::Remainder => None,
        }
    }
}

impl fmt::Display for RingThickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingThickness::Fixed(t) => write!(f, "{t} mm"),
            RingThickness::Remainder => write!(f, "remainder"),
        }
    }
}

/// Ordered ring thicknesses, outermost ring first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RingThickness>", into = "Vec<RingThickness>")]
pub struct RingPlan {
    rings: Vec<RingThickness>,
}

impl RingPlan {
    /// Build a plan, rejecting empty plans and fixed thicknesses that are not
    /// positive finite numbers.
    pub fn new(rings: Vec<RingThickness>) -> CalcResult<Self> {
        if rings.is_empty() {
            return Err(CalcError::invalid_ring_plan("plan has no rings"));
        }
        for (i, ring) in rings.iter().enumerate() {
            if let RingThickness::Fixed(t) = ring {
                if !t.is_finite() || *t <= 0.0 {
                    return Err(CalcError::invalid_ring_plan(format!(
                        "ring {i} thickness {t} must be a positive number"
                    )));
                }
            }
        }
        Ok(RingPlan { rings })
    }

    /// `count` rings of equal thickness covering `core_radius_mm`.
    pub fn uniform(core_radius_mm: f64, count: usize) -> CalcResult<Self> {
        if count == 0 {
            return Err(CalcError::invalid_ring_plan("ring count must be at least 1"));
        }
        let thickness = core_radius_mm / count as f64;
        RingPlan::new(vec![RingThickness::Fixed(thickness); count])
    }

    pub fn rings(&self) -> &[RingThickness] {
        &self.rings
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

impl Default for RingPlan {
    /// 10, 20, 20, 20, 20, 20 mm, then the rest of the core.
    fn default() -> Self {
        RingPlan {
            rings: vec![
                RingThickness::Fixed(10.0),
                RingThickness::Fixed(20.0),
                RingThickness::Fixed(20.0),
                RingThickness::Fixed(20.0),
                RingThickness::Fixed(20.0),
                RingThickness::Fixed(20.0),
                RingThickness::Remainder,
            ],
        }
    }
}

impl TryFrom<Vec<RingThickness>> for RingPlan {
    type Error = CalcError;

    fn try_from(rings: Vec<RingThickness>) -> Result<Self, Self::Error> {
        RingPlan::new(rings)
    }
}

impl From<RingPlan> for Vec<RingThickness> {
    fn from(plan: RingPlan) -> Self {
        plan.rings
    }
}

/// One annular zone of the section with its representative temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingDescriptor {
    /// Zone the ring represents
    pub role: ChannelRole,
    pub outer_radius_mm: f64,
    pub inner_radius_mm: f64,
    pub area_mm2: f64,
    /// Temperature from the snapshot, `None` when there is no reading
    pub temperature_c: Option<f64>,
}

impl RingDescriptor {
    fn new(role: ChannelRole, outer_radius_mm: f64, inner_radius_mm: f64, snapshot: Option<&ThermalSnapshot>) -> Self {
        RingDescriptor {
            role,
            outer_radius_mm,
            inner_radius_mm,
            area_mm2: annulus_area(outer_radius_mm, inner_radius_mm),
            temperature_c: snapshot.and_then(|s| s.role_temperature(role)),
        }
    }

    /// Radial depth R_out − R_in (mm)
    pub fn depth_mm(&self) -> f64 {
        self.outer_radius_mm - self.inner_radius_mm
    }

    /// Second moment of area about a diameter (mm⁴)
    pub fn moment_of_inertia_mm4(&self) -> f64 {
        annulus_moment_of_inertia(self.outer_radius_mm, self.inner_radius_mm)
    }
}

/// Cut the concrete core into rings, outermost first.
///
/// A fixed-thickness ring that would cross the center stops at the center;
/// rings after that are empty. Nothing here fails: a plan that leaves part of
/// the core uncovered simply produces fewer or thinner rings.
///
/// # Example
///
/// ```rust
/// use cfst_core::section::{discretize, RingPlan};
///
/// let rings = discretize(355.6, 9.5, None, &RingPlan::default());
/// assert_eq!(rings.len(), 7);
/// assert!((rings[0].outer_radius_mm - 168.3).abs() < 1e-9);
/// assert_eq!(rings[6].inner_radius_mm, 0.0);
/// assert!(rings.iter().all(|r| r.temperature_c.is_none()));
/// ```
pub fn discretize(
    diameter_mm: f64,
    wall_thickness_mm: f64,
    snapshot: Option<&ThermalSnapshot>,
    plan: &RingPlan,
) -> Vec<RingDescriptor> {
    let mut outer = diameter_mm / 2.0 - wall_thickness_mm;

    plan.rings()
        .iter()
        .enumerate()
        .map(|(i, thickness)| {
            let inner = match thickness {
                RingThickness::Fixed(t) => (outer - t).max(0.0),
                RingThickness::Remainder => 0.0,
            };
            let ring = RingDescriptor::new(ChannelRole::ConcreteRing(i), outer, inner, snapshot);
            outer = inner;
            ring
        })
        .collect()
}

/// Ring describing the steel tube wall.
pub fn steel_annulus(geometry: &Geometry, snapshot: Option<&ThermalSnapshot>) -> RingDescriptor {
    RingDescriptor::new(
        ChannelRole::SteelWall,
        geometry.outer_radius_mm(),
        geometry.core_radius_mm(),
        snapshot,
    )
}
