//! Loading thermal datasets from disk and choosing the one that fits a section.
//!
//! Datasets are JSON files named after the tube they were computed for,
//! `<diameter>x<thickness>.json`, e.g. `355.6x9.5.json`. Cyrillic `х`/`Х`
//! separators and decimal commas (`355,6x9,5.json`) are accepted too.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cfst_core::thermal::ThermalLibrary;
//!
//! let library = ThermalLibrary::load_dir("thermal_data")?;
//! if let Some(dataset) = library.closest(360.0, 10.0) {
//!     println!("using {}x{}", dataset.diameter_mm, dataset.thickness_mm);
//! }
//! # Ok::<(), cfst_core::CalcError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::series::ThermalSeries;
use crate::errors::{CalcError, CalcResult};

/// Read one JSON dataset file.
pub fn load_series(path: impl AsRef<Path>) -> CalcResult<ThermalSeries> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    ThermalSeries::from_json_str(&json)
}

/// Parse `(diameter_mm, thickness_mm)` from a dataset file stem.
pub fn parse_section_name(stem: &str) -> Option<(f64, f64)> {
    let normalized: String = stem
        .chars()
        .map(|c| match c {
            'х' | 'Х' | 'X' => 'x',
            other => other,
        })
        .collect();

    let parts: Vec<&str> = if normalized.contains('x') {
        normalized.split('x').collect()
    } else {
        normalized.split(',').collect()
    };
    if parts.len() < 2 {
        return None;
    }

    let parse = |s: &str| s.trim().replace(',', ".").parse::<f64>().ok();
    Some((parse(parts[0])?, parse(parts[1])?))
}

/// A thermal series together with the tube it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalDataset {
    pub diameter_mm: f64,
    pub thickness_mm: f64,
    pub series: ThermalSeries,
}

/// Collection of datasets for different tube sizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThermalLibrary {
    datasets: Vec<ThermalDataset>,
}

impl ThermalLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, diameter_mm: f64, thickness_mm: f64, series: ThermalSeries) {
        self.datasets.push(ThermalDataset {
            diameter_mm,
            thickness_mm,
            series,
        });
    }

    pub fn datasets(&self) -> &[ThermalDataset] {
        &self.datasets
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Load every `*.json` file of `dir`.
    ///
    /// Files whose name does not encode a section or whose content does not
    /// parse are skipped with a warning. A missing directory is an error.
    pub fn load_dir(dir: impl AsRef<Path>) -> CalcResult<Self> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir)
            .map_err(|e| CalcError::file_error("read_dir", dir.display().to_string(), e.to_string()))?;

        let mut library = ThermalLibrary::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let Some((diameter_mm, thickness_mm)) = parse_section_name(stem) else {
                warn!(file = %path.display(), "cannot read diameter and thickness from file name");
                continue;
            };
            match load_series(&path) {
                Ok(series) => library.insert(diameter_mm, thickness_mm, series),
                Err(e) => warn!(file = %path.display(), error = %e, "skipping thermal dataset"),
            }
        }

        info!(dir = %dir.display(), datasets = library.datasets.len(), "loaded thermal library");
        Ok(library)
    }

    /// Dataset for the closest available diameter and closest available
    /// thickness, each chosen independently.
    ///
    /// Returns `None` when the library is empty or when that diameter and
    /// thickness were never computed together. Equidistant candidates resolve
    /// to the smaller value.
    pub fn closest(&self, diameter_mm: f64, thickness_mm: f64) -> Option<&ThermalDataset> {
        let diameter = nearest(self.datasets.iter().map(|d| d.diameter_mm), diameter_mm)?;
        let thickness = nearest(self.datasets.iter().map(|d| d.thickness_mm), thickness_mm)?;
        self.datasets
            .iter()
            .find(|d| d.diameter_mm == diameter && d.thickness_mm == thickness)
    }
}

fn nearest(values: impl Iterator<Item = f64>, target: f64) -> Option<f64> {
    let mut available: Vec<f64> = values.collect();
    available.sort_by(f64::total_cmp);
    available.dedup();
    available
        .into_iter()
        .fold(None, |best: Option<f64>, v| match best {
            Some(b) if (b - target).abs() <= (v - target).abs() => Some(b),
            _ => Some(v),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thermal::ThermalRecord;

    fn series(temp: f64) -> ThermalSeries {
        ThermalSeries::new(vec![ThermalRecord::uniform(0.0, temp)]).unwrap()
    }

    #[test]
    fn test_parse_section_name() {
        assert_eq!(parse_section_name("355.6x9.5"), Some((355.6, 9.5)));
        assert_eq!(parse_section_name("355,6х9,5"), Some((355.6, 9.5)));
        assert_eq!(parse_section_name("426Х10"), Some((426.0, 10.0)));
        assert_eq!(parse_section_name("530,12"), Some((530.0, 12.0)));
        assert_eq!(parse_section_name("thermal"), None);
        assert_eq!(parse_section_name("abcxdef"), None);
    }

    #[test]
    fn test_closest_picks_nearest_pair() {
        let mut library = ThermalLibrary::new();
        library.insert(355.6, 9.5, series(1.0));
        library.insert(426.0, 10.0, series(2.0));
        library.insert(355.6, 10.0, series(3.0));

        let d = library.closest(360.0, 9.0).unwrap();
        assert_eq!((d.diameter_mm, d.thickness_mm), (355.6, 9.5));

        let d = library.closest(430.0, 12.0).unwrap();
        assert_eq!((d.diameter_mm, d.thickness_mm), (426.0, 10.0));
    }

    #[test]
    fn test_closest_missing_combination() {
        let mut library = ThermalLibrary::new();
        library.insert(355.6, 9.5, series(1.0));
        library.insert(426.0, 12.0, series(2.0));
        // nearest diameter 426, nearest thickness 9.5 → never computed together
        assert!(library.closest(420.0, 9.0).is_none());
        assert!(ThermalLibrary::new().closest(355.6, 9.5).is_none());
    }

    #[test]
    fn test_nearest_tie_prefers_smaller() {
        assert_eq!(nearest([10.0, 20.0].into_iter(), 15.0), Some(10.0));
        assert_eq!(nearest(std::iter::empty(), 15.0), None);
    }

    #[test]
    fn test_load_dir_and_series() {
        let dir = std::env::temp_dir().join(format!("cfst_thermal_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("355.6x9.5.json"), r#"[{"time_minutes": 0, "temp_t1": 20}]"#).unwrap();
        fs::write(dir.join("bad_name.json"), r#"[]"#).unwrap();
        fs::write(dir.join("426x10.json"), r#"not json"#).unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let library = ThermalLibrary::load_dir(&dir).unwrap();
        assert_eq!(library.datasets().len(), 1);
        assert_eq!(library.datasets()[0].diameter_mm, 355.6);

        let err = load_series(dir.join("missing.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");

        fs::remove_dir_all(&dir).unwrap();
        assert!(ThermalLibrary::load_dir(&dir).is_err());
    }
}
