//! Selection of the thermal record that applies at a given exposure time.
//!
//! Policy: hold the last known reading. Among records at or before the
//! exposure time the latest one wins. When the exposure time precedes every
//! record, the earliest record of the whole series is used as the best early
//! estimate. There is no interpolation between records.
//!
//! Records sharing the winning time resolve to the first one in input order.

use tracing::debug;

use super::series::{ThermalRecord, ThermalSnapshot};
use crate::units::Seconds;

/// Resolve the snapshot applicable at `exposure`.
///
/// Returns `None` only for an empty series.
///
/// # Example
///
/// ```rust
/// use cfst_core::thermal::{resolve, ThermalRecord};
/// use cfst_core::units::Seconds;
///
/// let records = [ThermalRecord::uniform(0.0, 20.0), ThermalRecord::uniform(3600.0, 800.0)];
/// assert_eq!(resolve(&records, Seconds(1800.0)).unwrap().time_s, 0.0);
/// assert_eq!(resolve(&records, Seconds(-100.0)).unwrap().time_s, 0.0);
/// assert_eq!(resolve(&records, Seconds(7200.0)).unwrap().time_s, 3600.0);
/// ```
pub fn resolve(records: &[ThermalRecord], exposure: Seconds) -> Option<ThermalSnapshot> {
    let latest_applicable = records
        .iter()
        .filter(|r| r.time_s() <= exposure.0)
        .fold(None, |best: Option<&ThermalRecord>, r| match best {
            Some(b) if b.time_s() >= r.time_s() => Some(b),
            _ => Some(r),
        });

    if let Some(record) = latest_applicable {
        debug!(exposure_s = exposure.0, record_s = record.time_s(), "resolved thermal record");
        return Some(record.snapshot());
    }

    let earliest = records.iter().fold(None, |best: Option<&ThermalRecord>, r| match best {
        Some(b) if b.time_s() <= r.time_s() => Some(b),
        _ => Some(r),
    })?;

    debug!(
        exposure_s = exposure.0,
        record_s = earliest.time_s(),
        "exposure precedes thermal data, using earliest record"
    );
    Some(earliest.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thermal::ThermalChannel;

    fn two_point_series() -> Vec<ThermalRecord> {
        vec![ThermalRecord::uniform(0.0, 20.0), ThermalRecord::uniform(3600.0, 900.0)]
    }

    #[test]
    fn test_hold_last_known_value() {
        let records = two_point_series();
        let snapshot = resolve(&records, Seconds(1800.0)).unwrap();
        assert_eq!(snapshot.time_s, 0.0);
        assert_eq!(snapshot.temperature(ThermalChannel::T1), Some(20.0));
    }

    #[test]
    fn test_exact_time_match() {
        let records = two_point_series();
        assert_eq!(resolve(&records, Seconds(3600.0)).unwrap().time_s, 3600.0);
    }

    #[test]
    fn test_before_all_data_uses_earliest() {
        let records = two_point_series();
        assert_eq!(resolve(&records, Seconds(-100.0)).unwrap().time_s, 0.0);
    }

    #[test]
    fn test_empty_series() {
        assert!(resolve(&[], Seconds(0.0)).is_none());
    }

    #[test]
    fn test_unsorted_input() {
        let records = vec![
            ThermalRecord::uniform(1200.0, 400.0),
            ThermalRecord::uniform(60.0, 50.0),
            ThermalRecord::uniform(600.0, 200.0),
            ThermalRecord::uniform(300.0, 100.0),
        ];
        assert_eq!(resolve(&records, Seconds(700.0)).unwrap().time_s, 600.0);
        assert_eq!(resolve(&records, Seconds(10.0)).unwrap().time_s, 60.0);
        assert_eq!(resolve(&records, Seconds(1e6)).unwrap().time_s, 1200.0);
    }

    #[test]
    fn test_ties_resolve_to_first_occurrence() {
        let records = vec![
            ThermalRecord::uniform(0.0, 10.0),
            ThermalRecord::uniform(0.0, 11.0),
            ThermalRecord::uniform(600.0, 100.0),
            ThermalRecord::uniform(600.0, 200.0),
        ];
        let latest = resolve(&records, Seconds(900.0)).unwrap();
        assert_eq!(latest.temperature(ThermalChannel::T1), Some(100.0));

        let earliest = resolve(&records, Seconds(-1.0)).unwrap();
        assert_eq!(earliest.temperature(ThermalChannel::T1), Some(10.0));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let records = two_point_series();
        for t in [-5.0, 0.0, 1799.0, 3600.0, 99999.0] {
            assert_eq!(resolve(&records, Seconds(t)), resolve(&records, Seconds(t)));
        }
    }
}
