//! # CFST Fire-Resistance CLI
//!
//! Terminal report for one concrete-filled steel tube column: loads a thermal
//! dataset (a single JSON file or a directory of `<D>x<t>.json` files), runs
//! the fire-resistance check and prints the results followed by JSON.
//!
//! Set `RUST_LOG=cfst_core=debug` to trace every evaluation.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cfst_core::calculations::column::{calculate, CfstColumnInput, CfstColumnResult};
use cfst_core::config::{defaults, CalculationConfig};
use cfst_core::materials::MaterialProperties;
use cfst_core::section::{Geometry, ReinforcementLayout};
use cfst_core::thermal::{load_series, ThermalLibrary, ThermalSeries};
use cfst_core::{CalcError, CalcResult};

/// Fire resistance of a concrete-filled steel tube column
#[derive(Parser, Debug)]
#[command(name = "cfst_cli")]
#[command(about = "Capacity of a CFST column under fire exposure", long_about = None)]
struct Args {
    /// Thermal dataset: a JSON file, or a directory of <D>x<t>.json files
    #[arg(short = 'T', long)]
    thermal: PathBuf,

    /// Calculation config JSON (ring plan, rebar cover, validation limits)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Column label
    #[arg(long, default_value = "K-1")]
    label: String,

    /// Outer tube diameter (mm)
    #[arg(short, long, default_value_t = defaults::DIAMETER_MM)]
    diameter: f64,

    /// Tube wall thickness (mm)
    #[arg(short = 't', long, default_value_t = defaults::WALL_THICKNESS_MM)]
    thickness: f64,

    /// Column height (m)
    #[arg(long, default_value_t = defaults::HEIGHT_M)]
    height: f64,

    /// Effective length coefficient μ
    #[arg(long, default_value_t = defaults::EFFECTIVE_LENGTH_COEFF)]
    mu: f64,

    /// Steel yield strength (MPa)
    #[arg(long, default_value_t = defaults::STEEL_STRENGTH_MPA)]
    steel_strength: f64,

    /// Steel elastic modulus (MPa)
    #[arg(long, default_value_t = defaults::STEEL_ELASTIC_MODULUS_MPA)]
    steel_modulus: f64,

    /// Concrete strength (MPa)
    #[arg(long, default_value_t = defaults::CONCRETE_STRENGTH_MPA)]
    concrete_strength: f64,

    /// Number of reinforcing bars (omit for an unreinforced core)
    #[arg(long)]
    rebar_count: Option<u32>,

    /// Reinforcing bar diameter (mm)
    #[arg(long, default_value_t = defaults::REBAR_DIAMETER_MM)]
    rebar_diameter: f64,

    /// Reinforcing bar yield strength (MPa), defaults to the tube steel
    #[arg(long)]
    rebar_strength: Option<f64>,

    /// Normative axial load (kN)
    #[arg(short, long, default_value_t = defaults::NORMATIVE_LOAD_KN)]
    load: f64,

    /// Fire exposure time to check (min)
    #[arg(short = 'm', long, default_value_t = defaults::FIRE_EXPOSURE_TIME_MIN)]
    time: f64,

    /// Print the capacity curve table
    #[arg(long)]
    curve: bool,

    /// Print only the JSON result
    #[arg(long)]
    json: bool,
}

impl Args {
    fn column_input(&self) -> CfstColumnInput {
        let mut materials = MaterialProperties::new(self.steel_strength, self.steel_modulus, self.concrete_strength);
        if let Some(strength) = self.rebar_strength {
            materials = materials.with_rebar_strength(strength);
        }

        CfstColumnInput {
            label: self.label.clone(),
            geometry: Geometry::new(self.diameter, self.thickness, self.height, self.mu),
            materials,
            reinforcement: self
                .rebar_count
                .map(|count| ReinforcementLayout::new(count, self.rebar_diameter)),
            normative_load_kn: self.load,
            exposure_time_min: self.time,
        }
    }
}

fn load_config(path: Option<&Path>) -> CalcResult<CalculationConfig> {
    let Some(path) = path else {
        return Ok(CalculationConfig::default());
    };
    let json = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(serde_json::from_str(&json)?)
}

/// Single file as is; for a directory, the dataset closest to the section.
fn load_thermal(path: &Path, diameter_mm: f64, thickness_mm: f64) -> CalcResult<ThermalSeries> {
    if !path.is_dir() {
        return load_series(path);
    }

    let library = ThermalLibrary::load_dir(path)?;
    let dataset = library.closest(diameter_mm, thickness_mm).ok_or_else(|| {
        CalcError::calculation_failed(
            "ThermalLookup",
            format!("No thermal dataset near {diameter_mm}x{thickness_mm} in {}", path.display()),
        )
    })?;
    info!(
        diameter_mm = dataset.diameter_mm,
        thickness_mm = dataset.thickness_mm,
        "using closest thermal dataset"
    );
    Ok(dataset.series.clone())
}

fn run(args: &Args) -> CalcResult<CfstColumnResult> {
    let config = load_config(args.config.as_deref())?;
    let series = load_thermal(&args.thermal, args.diameter, args.thickness)?;
    calculate(&args.column_input(), &series, &config)
}

fn print_report(args: &Args, result: &CfstColumnResult) {
    let at = &result.at_exposure;

    println!("═══════════════════════════════════════");
    println!("  CFST COLUMN FIRE RESISTANCE: {}", result.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Section:  {:.1} x {:.1} mm, H = {:.2} m, μ = {:.2}", args.diameter, args.thickness, args.height, args.mu);
    println!(
        "  Steel:    R = {:.0} MPa, E = {:.0} MPa",
        args.steel_strength, args.steel_modulus
    );
    println!("  Concrete: R = {:.1} MPa", args.concrete_strength);
    match args.rebar_count {
        Some(count) => println!("  Rebar:    {} × Ø{:.0} mm", count, args.rebar_diameter),
        None => println!("  Rebar:    none"),
    }
    println!("  Load:     {:.1} kN at {:.0} min", result.normative_load_kn, args.time);
    println!();

    println!("Section at {:.0} min:", args.time);
    println!("  {:<6} {:>8} {:>8} {:>10} {:>12}", "Zone", "T, °C", "γ", "N, kN", "EI, kN·m²");
    for c in &at.section.components {
        println!(
            "  {:<6} {:>8} {:>8} {:>10.1} {:>12.1}",
            c.role.label(),
            c.temperature_c.map_or("n/a".to_string(), |t| format!("{t:.0}")),
            c.working_condition.map_or("n/a".to_string(), |g| format!("{g:.3}")),
            c.capacity_kn,
            c.stiffness_kn_m2
        );
    }
    println!();

    println!("Stability:");
    println!("  N     = {:.1} kN", at.capacity_kn);
    println!("  EI    = {:.1} kN·m²", at.stiffness_kn_m2);
    println!("  N_cr  = {:.1} kN", at.critical_load_kn);
    println!("  λ̄     = {:.3}", at.slenderness);
    println!("  φ     = {:.3}", at.reduction_coeff);
    println!("  N_f   = {:.1} kN", at.final_capacity_kn);
    println!();

    if args.curve {
        println!("Capacity curve:");
        println!("  {:>6} {:>10} {:>6}", "t, min", "N_f, kN", "n");
        for (point, n) in result.curve.points.iter().zip(&result.safety_factors) {
            println!("  {:>6.0} {:>10.1} {:>6.2}", point.time_min, point.final_capacity_kn, n);
        }
        println!();
    }

    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {} (n = {:.2})",
        if result.passes() { "PASS" } else { "FAIL" },
        result.safety_factor
    );
    match result.fire_resistance_limit_min {
        Some(limit) => println!("  Fire resistance limit: {limit:.1} min"),
        None => println!("  Fire resistance limit: not reached within the thermal data"),
    }
    println!("═══════════════════════════════════════");
    println!();
    println!("JSON Output:");
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cfst_cli=info,cfst_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(result) => {
            if !args.json {
                print_report(&args, &result);
            }
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["cfst_cli", "--thermal", "data.json"]);
        let input = args.column_input();
        assert_eq!(input.geometry, Geometry::new(355.6, 9.5, 2.5, 0.7));
        assert_eq!(input.normative_load_kn, 900.0);
        assert!(input.reinforcement.is_none());
        assert_eq!(input.materials.rebar_strength_mpa(), 355.0);
    }

    #[test]
    fn test_rebar_args() {
        let args = Args::parse_from([
            "cfst_cli",
            "-T",
            "thermal",
            "--rebar-count",
            "6",
            "--rebar-diameter",
            "16",
            "--rebar-strength",
            "500",
        ]);
        let input = args.column_input();
        assert_eq!(input.reinforcement, Some(ReinforcementLayout::new(6, 16.0)));
        assert_eq!(input.materials.rebar_strength_mpa(), 500.0);
    }

    #[test]
    fn test_missing_config_file() {
        assert_eq!(load_config(None).unwrap(), CalculationConfig::default());
        let err = load_config(Some(Path::new("/nonexistent/cfst.json"))).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
