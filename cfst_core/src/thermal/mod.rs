//! # Thermal Field
//!
//! Temperature histories of the cross-section zones and the rule that picks
//! the reading applicable at a given fire-exposure time.
//!
//! - [`channels`] - Channel names and the fixed zone → channel layout
//! - [`series`] - Records, series, snapshots and the JSON dataset format
//! - [`resolver`] - Hold-last-known-value record selection
//! - [`library`] - Dataset files keyed by tube diameter and wall thickness

pub mod channels;
pub mod library;
pub mod resolver;
pub mod series;

pub use channels::{ChannelRole, ThermalChannel, CHANNEL_COUNT, CONCRETE_RING_CHANNELS};
pub use library::{load_series, parse_section_name, ThermalDataset, ThermalLibrary};
pub use resolver::resolve;
pub use series::{ThermalRecord, ThermalSeries, ThermalSnapshot};
