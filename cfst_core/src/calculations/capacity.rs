//! # Section Capacity and Stiffness
//!
//! Sums the fire-degraded axial capacity N (kN) and flexural rigidity EI
//! (kN·m²) of every component of the section: the concrete rings, the steel
//! tube wall and the optional bar cage.
//!
//! ## Per-component Formulas
//!
//! ```text
//! Concrete ring:  f = γ_bt(T)·f_c        N = A·f
//!                 E = f / (ε(T)/1000)    EI = I·E
//! Steel wall:     f = γ_st(T1)·f_y       N = A·f
//!                 E = γ_st(T1)·E_s       EI = I·E
//! Bar cage:       f = γ_st(T4)·f_r       N = n·A_bar·f
//!                 E = γ_st(T4)·E_s       EI = (8·I_bar + 4·A_bar·r²)·E
//! ```
//!
//! A component without a temperature reading contributes nothing. A concrete
//! ring whose strain is undefined (above 1100 °C) still carries its residual
//! strength but adds no stiffness.

use serde::{Deserialize, Serialize};

use crate::equations::bar_cage_moment_of_inertia;
use crate::materials::{concrete_ultimate_strain, concrete_working_condition, steel_working_condition, MaterialProperties};
use crate::section::{RingDescriptor, ReinforcementLayout};
use crate::thermal::{ChannelRole, ThermalSnapshot};
use crate::units::{axial_force_kn, flexural_rigidity_kn_m2, PER_MILLE};

/// Bar cage placed at a known radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebarCage {
    pub layout: ReinforcementLayout,

    /// Distance from the section center to the bar centers (mm)
    pub cage_radius_mm: f64,
}

/// Contribution of one component of the section.
///
/// Degraded quantities are `None` when the component has no temperature
/// reading (or, for the modulus of concrete, no defined strain).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentContribution {
    pub role: ChannelRole,
    pub temperature_c: Option<f64>,

    /// Working-condition coefficient γ_st or γ_bt
    pub working_condition: Option<f64>,

    /// Degraded strength (MPa)
    pub design_strength_mpa: Option<f64>,

    /// Degraded elastic modulus (MPa)
    pub elastic_modulus_mpa: Option<f64>,

    pub area_mm2: f64,
    pub moment_of_inertia_mm4: f64,

    /// Axial capacity (kN)
    pub capacity_kn: f64,

    /// Flexural rigidity (kN·m²)
    pub stiffness_kn_m2: f64,
}

impl ComponentContribution {
    fn build(
        role: ChannelRole,
        temperature_c: Option<f64>,
        working_condition: Option<f64>,
        design_strength_mpa: Option<f64>,
        elastic_modulus_mpa: Option<f64>,
        area_mm2: f64,
        moment_of_inertia_mm4: f64,
    ) -> Self {
        ComponentContribution {
            role,
            temperature_c,
            working_condition,
            design_strength_mpa,
            elastic_modulus_mpa,
            area_mm2,
            moment_of_inertia_mm4,
            capacity_kn: design_strength_mpa.map_or(0.0, |f| axial_force_kn(area_mm2, f)),
            stiffness_kn_m2: elastic_modulus_mpa.map_or(0.0, |e| flexural_rigidity_kn_m2(moment_of_inertia_mm4, e)),
        }
    }
}

/// Summed capacity and stiffness with the per-component breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionCapacity {
    /// Concrete rings (outermost first), then the steel wall, then the bar cage
    pub components: Vec<ComponentContribution>,
}

impl SectionCapacity {
    /// Total axial capacity before buckling (kN)
    pub fn total_capacity_kn(&self) -> f64 {
        self.components.iter().map(|c| c.capacity_kn).sum()
    }

    /// Total flexural rigidity (kN·m²)
    pub fn total_stiffness_kn_m2(&self) -> f64 {
        self.components.iter().map(|c| c.stiffness_kn_m2).sum()
    }

    pub fn concrete(&self) -> impl Iterator<Item = &ComponentContribution> {
        self.components
            .iter()
            .filter(|c| matches!(c.role, ChannelRole::ConcreteRing(_)))
    }

    pub fn steel_wall(&self) -> Option<&ComponentContribution> {
        self.components.iter().find(|c| c.role == ChannelRole::SteelWall)
    }

    pub fn rebar(&self) -> Option<&ComponentContribution> {
        self.components.iter().find(|c| c.role == ChannelRole::Reinforcement)
    }

    /// Capacity and stiffness of the concrete rings together
    pub fn concrete_totals(&self) -> (f64, f64) {
        self.concrete()
            .fold((0.0, 0.0), |(n, ei), c| (n + c.capacity_kn, ei + c.stiffness_kn_m2))
    }
}

/// Contribution of one concrete ring.
pub fn concrete_ring(ring: &RingDescriptor, concrete_strength_mpa: f64) -> ComponentContribution {
    let gamma = ring.temperature_c.map(concrete_working_condition);
    let strength = gamma.map(|g| g * concrete_strength_mpa);
    let modulus = strength.and_then(|f| {
        ring.temperature_c
            .and_then(concrete_ultimate_strain)
            .filter(|eps| *eps > 0.0)
            .map(|eps| f / (eps * PER_MILLE))
    });

    ComponentContribution::build(
        ring.role,
        ring.temperature_c,
        gamma,
        strength,
        modulus,
        ring.area_mm2,
        ring.moment_of_inertia_mm4(),
    )
}

/// Contribution of the steel tube wall (temperature T1).
pub fn steel_wall(wall: &RingDescriptor, materials: &MaterialProperties) -> ComponentContribution {
    let gamma = wall.temperature_c.map(steel_working_condition);

    ComponentContribution::build(
        ChannelRole::SteelWall,
        wall.temperature_c,
        gamma,
        gamma.map(|g| g * materials.steel_strength_mpa),
        gamma.map(|g| g * materials.steel_elastic_modulus_mpa),
        wall.area_mm2,
        wall.moment_of_inertia_mm4(),
    )
}

/// Contribution of the bar cage (temperature T4).
///
/// The cage inertia uses the closed form for eight bars regardless of
/// `bar_count`; see [`bar_cage_moment_of_inertia`].
pub fn rebar_cage(
    cage: &RebarCage,
    materials: &MaterialProperties,
    snapshot: Option<&ThermalSnapshot>,
) -> ComponentContribution {
    let temperature = snapshot.and_then(|s| s.role_temperature(ChannelRole::Reinforcement));
    let gamma = temperature.map(steel_working_condition);

    ComponentContribution::build(
        ChannelRole::Reinforcement,
        temperature,
        gamma,
        gamma.map(|g| g * materials.rebar_strength_mpa()),
        gamma.map(|g| g * materials.steel_elastic_modulus_mpa),
        cage.layout.total_area_mm2(),
        bar_cage_moment_of_inertia(cage.layout.bar_diameter_mm, cage.cage_radius_mm),
    )
}

/// Sum the contributions of every component of the section.
///
/// A cage with no bars is left out of the breakdown entirely.
///
/// # Example
///
/// ```rust
/// use cfst_core::calculations::capacity::accumulate;
/// use cfst_core::materials::MaterialProperties;
/// use cfst_core::section::{discretize, steel_annulus, Geometry, RingPlan};
/// use cfst_core::thermal::ThermalRecord;
///
/// let geometry = Geometry::new(355.6, 9.5, 2.5, 0.7);
/// let snapshot = ThermalRecord::uniform(0.0, 20.0).snapshot();
/// let rings = discretize(355.6, 9.5, Some(&snapshot), &RingPlan::default());
/// let wall = steel_annulus(&geometry, Some(&snapshot));
/// let materials = MaterialProperties::new(355.0, 210_000.0, 42.0);
///
/// let section = accumulate(&rings, &wall, &materials, None, Some(&snapshot));
/// assert!((section.total_capacity_kn() - 7404.318).abs() < 0.01);
/// ```
pub fn accumulate(
    rings: &[RingDescriptor],
    wall: &RingDescriptor,
    materials: &MaterialProperties,
    rebar: Option<&RebarCage>,
    snapshot: Option<&ThermalSnapshot>,
) -> SectionCapacity {
    let mut components: Vec<ComponentContribution> = rings
        .iter()
        .map(|ring| concrete_ring(ring, materials.concrete_strength_mpa))
        .collect();

    components.push(steel_wall(wall, materials));

    if let Some(cage) = rebar.filter(|c| c.layout.bar_count > 0) {
        components.push(rebar_cage(cage, materials, snapshot));
    }

    SectionCapacity { components }
}
