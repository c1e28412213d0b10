use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

use hd_fit::FitMethod;
use hd_scenario::{Scenario, ScenarioError};
use hd_sweep::{
    DEFAULT_POINT_COUNT, GridSpec, HeatmapGrid, HydrateEngine, ModelOptions, OperatingCondition,
    SupercoolingSweep, SweepError,
};
use hd_thermo::{Gas, GasSpecies, ReferenceData, SaltSpecies};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error("{what}")]
    Usage { what: String },
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "hd-cli")]
#[command(about = "Hydrate desalination CLI - maximum salinity and water yield estimates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in salts and hydrate formers
    Species,
    /// Reference dissociation temperature of a gas in pure water
    T0 {
        /// Gas key (CH4, CO2, C2H6, C3H8, CP)
        #[arg(long)]
        gas: String,
        /// Pressure in MPa (ignored by fixed-reference gases)
        #[arg(long)]
        pressure: Option<f64>,
        /// Fit method: polynomial or spline
        #[arg(long, default_value = "polynomial")]
        fit: String,
    },
    /// Sweep MAS and MWY over extra supercooling
    Sweep(SweepArgs),
    /// Grid of MWY over initial salinity and formation temperature
    Grid(GridArgs),
    /// Validate a scenario file
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
}

#[derive(Args)]
struct CaseArgs {
    /// Load gas, salt, pressure and model options from a scenario file
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Gas key
    #[arg(long, default_value = "CH4")]
    gas: String,
    /// Salt key
    #[arg(long, default_value = "NaCl")]
    salt: String,
    /// Pressure in MPa (defaults to the nominal pressure of fixed-reference gases)
    #[arg(long)]
    pressure: Option<f64>,
    /// Fit method: polynomial or spline
    #[arg(long, default_value = "polynomial")]
    fit: String,
    /// Apply the structure-II correction to β
    #[arg(long)]
    sii_correction: bool,
}

#[derive(Args)]
struct SweepArgs {
    #[command(flatten)]
    case: CaseArgs,
    /// Initial salinity in wt%
    #[arg(long, default_value_t = 3.5)]
    salinity: f64,
    /// Lower bound of extra supercooling in K
    #[arg(long, default_value_t = 0.5)]
    min: f64,
    /// Upper bound of extra supercooling in K
    #[arg(long, default_value_t = 5.0)]
    max: f64,
    /// Number of supercooling steps
    #[arg(long, default_value_t = DEFAULT_POINT_COUNT)]
    points: usize,
}

#[derive(Args)]
struct GridArgs {
    #[command(flatten)]
    case: CaseArgs,
    #[arg(long, default_value_t = 0.0)]
    salinity_min: f64,
    #[arg(long, default_value_t = 15.0)]
    salinity_max: f64,
    #[arg(long, default_value_t = 0.3)]
    salinity_step: f64,
    #[arg(long, default_value_t = 271.0)]
    temperature_min: f64,
    #[arg(long, default_value_t = 285.0)]
    temperature_max: f64,
    #[arg(long, default_value_t = 0.3)]
    temperature_step: f64,
    /// Normalization window on ΔMAS / (100 - s)
    #[arg(long, default_value_t = 0.0)]
    mas_min: f64,
    #[arg(long, default_value_t = 1.0)]
    mas_max: f64,
    /// Hide cells whose MAS did not increase
    #[arg(long)]
    hide_near_zero: bool,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let engine = HydrateEngine::new();

    match cli.command {
        Commands::Species => cmd_species(),
        Commands::T0 { gas, pressure, fit } => cmd_t0(&engine, &gas, pressure, &fit),
        Commands::Sweep(args) => cmd_sweep(&engine, &args),
        Commands::Grid(args) => cmd_grid(&engine, &args),
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
    }
}

fn cmd_species() -> CliResult<()> {
    println!("Salts:");
    for salt in SaltSpecies::ALL {
        println!(
            "  {:<6} {:<20} M = {:>7.2} g/mol  ions = {}",
            salt.key(),
            salt.display_name(),
            salt.molar_mass(),
            salt.ion_count()
        );
    }

    println!("Gases:");
    for gas in GasSpecies::ALL {
        let reference = match gas.reference() {
            ReferenceData::Curve(points) => match (points.first(), points.last()) {
                (Some(first), Some(last)) => format!(
                    "{} points, {:.2}-{:.2} MPa",
                    points.len(),
                    first.pressure_mpa,
                    last.pressure_mpa
                ),
                _ => "no reference points".to_string(),
            },
            ReferenceData::Fixed {
                t0_k,
                pressure_mpa,
            } => format!("fixed T0 = {:.2} K at {:.6} MPa", t0_k, pressure_mpa),
        };
        println!(
            "  {:<5} {:<16} {:<4} {}",
            gas.key(),
            gas.display_name(),
            gas.structure().key(),
            reference
        );
    }
    Ok(())
}

fn parse_fit(fit: &str) -> CliResult<FitMethod> {
    fit.parse::<FitMethod>().map_err(|_| CliError::Usage {
        what: format!("Unknown fit method '{}' (expected polynomial or spline)", fit),
    })
}

/// Pressure to use for `gas`, falling back to the nominal pressure of a
/// fixed-reference gas.
fn resolve_pressure(gas: &Gas, pressure: Option<f64>) -> CliResult<f64> {
    match (pressure, gas.reference()) {
        (Some(p), _) => Ok(p),
        (None, ReferenceData::Fixed { pressure_mpa, .. }) => Ok(pressure_mpa),
        (None, ReferenceData::Curve(_)) => Err(CliError::Usage {
            what: format!("--pressure is required for {}", gas),
        }),
    }
}

fn cmd_t0(engine: &HydrateEngine, gas: &str, pressure: Option<f64>, fit: &str) -> CliResult<()> {
    let species = gas.parse::<GasSpecies>().map_err(SweepError::from)?;
    let gas = Gas::Builtin(species);
    let pressure = resolve_pressure(&gas, pressure)?;
    let method = parse_fit(fit)?;

    let t0_k = engine.reference_temperature_k(&gas, pressure, method)?;
    println!(
        "{} at {:.3} MPa ({}): T0 = {:.3} K ({:.2} °C)",
        species.display_name(),
        pressure,
        method,
        t0_k,
        t0_k - 273.15
    );
    Ok(())
}

/// Gas, salt, pressure and options from a scenario file or the flags.
struct Case {
    gas: Gas,
    salt: SaltSpecies,
    pressure_mpa: f64,
    options: ModelOptions,
    scenario: Option<Scenario>,
}

fn resolve_case(args: &CaseArgs) -> CliResult<Case> {
    if let Some(path) = &args.scenario {
        debug!(path = %path.display(), "loading scenario");
        let scenario = hd_scenario::load(path)?;
        return Ok(Case {
            gas: scenario.gas()?,
            salt: scenario.salt()?,
            pressure_mpa: scenario.pressure_mpa,
            options: scenario.model_options()?,
            scenario: Some(scenario),
        });
    }

    let species = args.gas.parse::<GasSpecies>().map_err(SweepError::from)?;
    let gas = Gas::Builtin(species);
    let salt = args.salt.parse::<SaltSpecies>().map_err(SweepError::from)?;
    let pressure_mpa = resolve_pressure(&gas, args.pressure)?;
    Ok(Case {
        gas,
        salt,
        pressure_mpa,
        options: ModelOptions {
            fit_method: parse_fit(&args.fit)?,
            structure_ii_correction: args.sii_correction,
        },
        scenario: None,
    })
}

fn cmd_sweep(engine: &HydrateEngine, args: &SweepArgs) -> CliResult<()> {
    let case = resolve_case(&args.case)?;
    let condition = match case.scenario.as_ref().map(Scenario::operating_condition) {
        Some(converted) => converted?.ok_or_else(|| CliError::Usage {
            what: "scenario has no sweep block".to_string(),
        })?,
        None => OperatingCondition::new(case.gas, case.salt, case.pressure_mpa, args.salinity)
            .with_supercooling(args.min, args.max)
            .with_point_count(args.points),
    };

    println!(
        "Sweeping {} / {} at {:.3} MPa, initial salinity {:.2} wt%",
        condition.gas, condition.salt, condition.pressure_mpa, condition.initial_salinity
    );
    let sweep = engine.sweep(&condition, case.options)?;
    print_sweep(&sweep);
    Ok(())
}

fn print_sweep(sweep: &SupercoolingSweep) {
    println!(
        "  T0 = {:.3} K, initial supercooling = {:.3} K, β = {:.4e} 1/K",
        sweep.t0_k, sweep.initial_supercooling_k, sweep.beta
    );
    println!(
        "  {:>8} {:>8} {:>9} {:>9} {:>8} {:>8} {:>8}",
        "ΔT+ [K]", "ΔT [K]", "T [K]", "ln aw", "X", "MAS %", "MWY %"
    );
    for p in &sweep.points {
        println!(
            "  {:>8.3} {:>8.3} {:>9.3} {:>9.5} {:>8.5} {:>8.3} {:>8.3}",
            p.extra_supercooling_k,
            p.total_supercooling_k,
            p.t_hls_k,
            p.ln_activity,
            p.x,
            p.mas,
            p.mwy
        );
    }
    println!(
        "✓ MAS = {:.3} wt%, MWY = {:.3} % at {:.3} K ({} of {} points, {} dropped)",
        sweep.mas,
        sweep.mwy,
        sweep.operating_temperature_k,
        sweep.points.len(),
        sweep.requested_points,
        sweep.dropped_points
    );
}

fn cmd_grid(engine: &HydrateEngine, args: &GridArgs) -> CliResult<()> {
    let case = resolve_case(&args.case)?;
    let spec = match case.scenario.as_ref().and_then(Scenario::grid_spec) {
        Some(spec) => spec,
        None if case.scenario.is_some() => {
            return Err(CliError::Usage {
                what: "scenario has no grid block".to_string(),
            });
        }
        None => GridSpec {
            salinity_min: args.salinity_min,
            salinity_max: args.salinity_max,
            salinity_step: args.salinity_step,
            temperature_min_k: args.temperature_min,
            temperature_max_k: args.temperature_max,
            temperature_step_k: args.temperature_step,
            mas_window_min: args.mas_min,
            mas_window_max: args.mas_max,
            hide_near_zero: args.hide_near_zero,
        },
    };

    println!(
        "Grid for {} / {} at {:.3} MPa",
        case.gas, case.salt, case.pressure_mpa
    );
    let started = Instant::now();
    let grid = engine.grid(&case.gas, case.salt, case.pressure_mpa, &spec, case.options)?;
    print_grid(&grid);
    println!("  Elapsed: {:.3} s", started.elapsed().as_secs_f64());
    Ok(())
}

fn print_grid(grid: &HeatmapGrid) {
    println!("  T0 = {:.3} K", grid.t0_k);
    println!(
        "  Cells: {} ({} salinities x {} temperatures), {} forming hydrate",
        grid.cells.len(),
        grid.salinities.len(),
        grid.temperatures_k.len(),
        grid.forming_cells()
    );
    println!(
        "  MWY range: {:.3} - {:.3} %",
        grid.mwy_range.min, grid.mwy_range.max
    );
    match grid.normalized_mas_range {
        Some(range) => println!(
            "  Normalized ΔMAS range: {:.4} - {:.4}",
            range.min, range.max
        ),
        None => println!("  Normalized ΔMAS range: all cells hidden"),
    }
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = hd_scenario::load(scenario_path)?;
    scenario.gas()?;
    scenario.salt()?;
    scenario.model_options()?;
    println!("✓ Scenario '{}' is valid", scenario.name);
    if scenario.sweep.is_some() {
        println!("  Contains a sweep block");
    }
    if scenario.grid.is_some() {
        println!("  Contains a grid block");
    }
    Ok(())
}
