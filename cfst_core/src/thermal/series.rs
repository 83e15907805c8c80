//! Thermal records, time series and resolved snapshots.
//!
//! ## JSON Format
//!
//! A dataset is an array of records. The time offset is in seconds; the
//! legacy key `time_minutes` is accepted for it even though those datasets also
//! store seconds. Channels that were not measured are omitted or `null`.
//!
//! ```json
//! [
//!   { "time_s": 0,    "temp_t1": 20.0,  "temp_t2": 20.0, "temp_t4": 20.0 },
//!   { "time_s": 1800, "temp_t1": 742.0, "temp_t2": 510.0, "temp_t4": 300.0 }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use super::channels::{ChannelRole, ThermalChannel, CHANNEL_COUNT};
use super::resolver;
use crate::errors::{CalcError, CalcResult};
use crate::units::Seconds;

/// One time-stamped set of channel temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThermalRecord", into = "RawThermalRecord")]
pub struct ThermalRecord {
    time_s: f64,
    temperatures: [Option<f64>; CHANNEL_COUNT],
}

impl ThermalRecord {
    /// Record at `time_s` with no channel readings.
    pub fn new(time_s: f64) -> Self {
        ThermalRecord {
            time_s,
            temperatures: [None; CHANNEL_COUNT],
        }
    }

    /// Record at `time_s` with every channel at `temperature_c`.
    pub fn uniform(time_s: f64, temperature_c: f64) -> Self {
        ThermalRecord {
            time_s,
            temperatures: [Some(temperature_c); CHANNEL_COUNT],
        }
    }

    pub fn with_channel(mut self, channel: ThermalChannel, temperature_c: f64) -> Self {
        self.temperatures[channel.index()] = Some(temperature_c);
        self
    }

    pub fn without_channel(mut self, channel: ThermalChannel) -> Self {
        self.temperatures[channel.index()] = None;
        self
    }

    /// Time offset from the start of fire exposure (s)
    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    pub fn temperature(&self, channel: ThermalChannel) -> Option<f64> {
        self.temperatures[channel.index()]
    }

    /// Immutable view used by one capacity evaluation
    pub fn snapshot(&self) -> ThermalSnapshot {
        ThermalSnapshot {
            time_s: self.time_s,
            temperatures: self.temperatures,
        }
    }

    fn check(&self) -> Result<(), String> {
        if !self.time_s.is_finite() {
            return Err(format!("time offset {} is not finite", self.time_s));
        }
        for channel in ThermalChannel::ALL {
            if let Some(t) = self.temperature(channel) {
                if !t.is_finite() {
                    return Err(format!("{} = {t} is not finite", channel.key()));
                }
            }
        }
        Ok(())
    }
}

/// Wire shape of a record: explicit channel keys, optional time so a missing
/// time can be reported as a malformed record rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawThermalRecord {
    #[serde(alias = "time_minutes")]
    time_s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temp_t1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temp_t2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temp_t3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temp_t4: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temp_t5: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temp_t6: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temp_t7: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temp_t8: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temp_t9: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temp_t10: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temp_t11: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temp_t12: Option<f64>,
}

impl RawThermalRecord {
    fn into_record(self, index: usize) -> CalcResult<ThermalRecord> {
        let time_s = self
            .time_s
            .ok_or_else(|| CalcError::invalid_thermal_record(index, "missing time offset"))?;
        let record = ThermalRecord {
            time_s,
            temperatures: [
                self.temp_t1,
                self.temp_t2,
                self.temp_t3,
                self.temp_t4,
                self.temp_t5,
                self.temp_t6,
                self.temp_t7,
                self.temp_t8,
                self.temp_t9,
                self.temp_t10,
                self.temp_t11,
                self.temp_t12,
            ],
        };
        record
            .check()
            .map_err(|reason| CalcError::invalid_thermal_record(index, reason))?;
        Ok(record)
    }
}

impl TryFrom<RawThermalRecord> for ThermalRecord {
    type Error = CalcError;

    fn try_from(raw: RawThermalRecord) -> Result<Self, Self::Error> {
        raw.into_record(0)
    }
}

impl From<ThermalRecord> for RawThermalRecord {
    fn from(record: ThermalRecord) -> Self {
        let [t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11, t12] = record.temperatures;
        RawThermalRecord {
            time_s: Some(record.time_s),
            temp_t1: t1,
            temp_t2: t2,
            temp_t3: t3,
            temp_t4: t4,
            temp_t5: t5,
            temp_t6: t6,
            temp_t7: t7,
            temp_t8: t8,
            temp_t9: t9,
            temp_t10: t10,
            temp_t11: t11,
            temp_t12: t12,
        }
    }
}

/// Channel temperatures that apply at one exposure time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalSnapshot {
    /// Time offset of the record this snapshot came from (s)
    pub time_s: f64,
    temperatures: [Option<f64>; CHANNEL_COUNT],
}

impl ThermalSnapshot {
    pub fn temperature(&self, channel: ThermalChannel) -> Option<f64> {
        self.temperatures[channel.index()]
    }

    /// Temperature of a cross-section zone; `None` when the zone has no
    /// channel or the channel has no reading.
    pub fn role_temperature(&self, role: ChannelRole) -> Option<f64> {
        role.channel().and_then(|channel| self.temperature(channel))
    }
}

/// Time series of thermal records for one column section.
///
/// Records keep their input order; lookups do not rely on it being sorted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThermalSeries {
    records: Vec<ThermalRecord>,
}

impl ThermalSeries {
    /// Build a series, failing on the first structurally malformed record.
    pub fn new(records: Vec<ThermalRecord>) -> CalcResult<Self> {
        for (index, record) in records.iter().enumerate() {
            record
                .check()
                .map_err(|reason| CalcError::invalid_thermal_record(index, reason))?;
        }
        Ok(ThermalSeries { records })
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let raw: Vec<RawThermalRecord> = serde_json::from_str(json)?;
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(index, r)| r.into_record(index))
            .collect::<CalcResult<Vec<_>>>()?;
        Ok(ThermalSeries { records })
    }

    pub fn to_json_string(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    pub fn records(&self) -> &[ThermalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Largest time offset in the series (s)
    pub fn max_time_s(&self) -> Option<f64> {
        self.records.iter().map(|r| r.time_s).reduce(f64::max)
    }

    /// Snapshot applicable at `exposure`; see [`resolver::resolve`].
    pub fn resolve(&self, exposure: Seconds) -> Option<ThermalSnapshot> {
        resolver::resolve(&self.records, exposure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_legacy_keys() {
        let json = r#"[
            { "time_minutes": 0, "temp_t1": 20, "temp_t2": 20.5, "temp_t4": null },
            { "time_minutes": 60, "temp_t1": 95.0, "unused_column": "ignored" }
        ]"#;
        let series = ThermalSeries::from_json_str(json).unwrap();
        assert_eq!(series.len(), 2);

        let first = series.records()[0];
        assert_eq!(first.time_s(), 0.0);
        assert_eq!(first.temperature(ThermalChannel::T1), Some(20.0));
        assert_eq!(first.temperature(ThermalChannel::T2), Some(20.5));
        assert_eq!(first.temperature(ThermalChannel::T4), None);
        assert_eq!(series.records()[1].temperature(ThermalChannel::T3), None);
        assert_eq!(series.max_time_s(), Some(60.0));
    }

    #[test]
    fn test_missing_time_is_malformed() {
        let json = r#"[ { "time_s": 0, "temp_t1": 20 }, { "temp_t1": 30 } ]"#;
        let err = ThermalSeries::from_json_str(json).unwrap_err();
        assert_eq!(err, CalcError::invalid_thermal_record(1, "missing time offset"));
    }

    #[test]
    fn test_wrong_type_is_serialization_error() {
        let json = r#"[ { "time_s": "zero", "temp_t1": 20 } ]"#;
        let err = ThermalSeries::from_json_str(json).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        assert!(ThermalSeries::from_json_str(r#"{ "time_s": 0 }"#).is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let records = vec![
            ThermalRecord::uniform(0.0, 20.0),
            ThermalRecord::uniform(60.0, 20.0).with_channel(ThermalChannel::T5, f64::INFINITY),
        ];
        let err = ThermalSeries::new(records).unwrap_err();
        assert!(matches!(err, CalcError::InvalidThermalRecord { index: 1, .. }));

        let err = ThermalSeries::new(vec![ThermalRecord::new(f64::NAN)]).unwrap_err();
        assert!(matches!(err, CalcError::InvalidThermalRecord { index: 0, .. }));
    }

    #[test]
    fn test_json_roundtrip_preserves_missing_channels() {
        let series = ThermalSeries::new(vec![
            ThermalRecord::new(0.0).with_channel(ThermalChannel::T1, 20.0),
            ThermalRecord::uniform(120.0, 150.0).without_channel(ThermalChannel::T12),
        ])
        .unwrap();
        let json = series.to_json_string().unwrap();
        assert!(!json.contains("temp_t12\": null"));
        let back = ThermalSeries::from_json_str(&json).unwrap();
        assert_eq!(back, series);
    }

    #[test]
    fn test_snapshot_role_temperature() {
        let snapshot = ThermalRecord::new(0.0)
            .with_channel(ThermalChannel::T1, 600.0)
            .with_channel(ThermalChannel::T5, 300.0)
            .snapshot();
        assert_eq!(snapshot.role_temperature(ChannelRole::SteelWall), Some(600.0));
        assert_eq!(snapshot.role_temperature(ChannelRole::ConcreteRing(2)), Some(300.0));
        assert_eq!(snapshot.role_temperature(ChannelRole::ConcreteRing(0)), None);
        assert_eq!(snapshot.role_temperature(ChannelRole::ConcreteRing(9)), None);
    }
}
