//! Temperature channels of the thermal datasets and the roles they play in
//! the cross-section.
//!
//! The datasets carry up to twelve thermocouple-style channels `T1..T12`.
//! Which physical zone each channel describes is fixed:
//!
//! | Role                | Channel |
//! |---------------------|---------|
//! | Steel wall          | T1      |
//! | Concrete ring 0..=1 | T2, T3  |
//! | Reinforcement       | T4      |
//! | Concrete ring 2..=6 | T5..T9  |
//!
//! [`CONCRETE_RING_CHANNELS`] and [`ChannelRole::channel`] are the only place
//! this layout is written down.

use serde::{Deserialize, Serialize};

/// Number of temperature channels a record can carry
pub const CHANNEL_COUNT: usize = 12;

/// A named temperature channel of a thermal record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThermalChannel {
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
    T7,
    T8,
    T9,
    T10,
    T11,
    T12,
}

impl ThermalChannel {
    pub const ALL: [ThermalChannel; CHANNEL_COUNT] = [
        ThermalChannel::T1,
        ThermalChannel::T2,
        ThermalChannel::T3,
        ThermalChannel::T4,
        ThermalChannel::T5,
        ThermalChannel::T6,
        ThermalChannel::T7,
        ThermalChannel::T8,
        ThermalChannel::T9,
        ThermalChannel::T10,
        ThermalChannel::T11,
        ThermalChannel::T12,
    ];

    /// Zero-based slot of the channel inside a record
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based channel number as printed in the datasets
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// JSON key of the channel (`temp_t1` .. `temp_t12`)
    pub fn key(self) -> &'static str {
        match self {
            ThermalChannel::T1 => "temp_t1",
            ThermalChannel::T2 => "temp_t2",
            ThermalChannel::T3 => "temp_t3",
            ThermalChannel::T4 => "temp_t4",
            ThermalChannel::T5 => "temp_t5",
            ThermalChannel::T6 => "temp_t6",
            ThermalChannel::T7 => "temp_t7",
            ThermalChannel::T8 => "temp_t8",
            ThermalChannel::T9 => "temp_t9",
            ThermalChannel::T10 => "temp_t10",
            ThermalChannel::T11 => "temp_t11",
            ThermalChannel::T12 => "temp_t12",
        }
    }
}

/// Concrete ring index → channel, outermost ring first.
pub const CONCRETE_RING_CHANNELS: [ThermalChannel; 7] = [
    ThermalChannel::T2,
    ThermalChannel::T3,
    ThermalChannel::T5,
    ThermalChannel::T6,
    ThermalChannel::T7,
    ThermalChannel::T8,
    ThermalChannel::T9,
];

/// Physical zone of the cross-section that reads a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelRole {
    /// Steel tube wall
    SteelWall,
    /// Reinforcing bar cage
    Reinforcement,
    /// Concrete ring, 0 = outermost
    ConcreteRing(usize),
}

impl ChannelRole {
    /// Channel that carries this zone's temperature.
    ///
    /// Rings past the end of [`CONCRETE_RING_CHANNELS`] have no channel and
    /// therefore never receive a temperature.
    pub fn channel(self) -> Option<ThermalChannel> {
        match self {
            ChannelRole::SteelWall => Some(ThermalChannel::T1),
            ChannelRole::Reinforcement => Some(ThermalChannel::T4),
            ChannelRole::ConcreteRing(ring) => CONCRETE_RING_CHANNELS.get(ring).copied(),
        }
    }

    /// Label used in reports (`Steel`, `Rebar`, `B1`..)
    pub fn label(self) -> String {
        match self {
            ChannelRole::SteelWall => "Steel".to_string(),
            ChannelRole::Reinforcement => "Rebar".to_string(),
            ChannelRole::ConcreteRing(ring) => format!("B{}", ring + 1),
        }
    }
}
