//! ledwall-planner: resource planning for modular LED video walls
//!
//! Prints a comparison across every supported pixel pitch, or the full
//! port/circuit/breaker plan for a single pitch.

mod report;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use ledwall_planner::config;
use ledwall_planner::planning::{Environment, PlanRequest, Planner};

/// Plans cabinets, network ports and electrical circuits for an LED video wall.
#[derive(Parser, Debug)]
#[command(name = "ledwall-planner")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Screen width in millimetres
    #[arg(long, value_name = "MM")]
    width: f64,

    /// Screen height in millimetres
    #[arg(long, value_name = "MM")]
    height: f64,

    /// Installation environment (indoor or outdoor)
    #[arg(short, long, default_value = "indoor")]
    environment: Environment,

    /// Pixel pitch in millimetres; omit to compare every supported pitch
    #[arg(short, long, value_name = "MM")]
    pitch: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Path to configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable text.
    Table,
    /// Pretty-printed JSON.
    Json,
    /// Comma-separated values.
    Csv,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the requested report and writes it to `out`.
fn run<W: Write>(args: &Args, planner: &Planner, out: &mut W) -> Result<(), String> {
    let written = match args.pitch {
        Some(pitch) => {
            let request = PlanRequest::new(args.width, args.height, pitch, args.environment);
            let plan = planner.plan(&request).map_err(|e| e.to_string())?;
            match args.format {
                Format::Table => report::plan_table(out, &plan),
                Format::Json => report::json(out, &plan),
                Format::Csv => report::plan_csv(out, &plan),
            }
        }
        None => {
            let results = planner
                .compare(args.width, args.height, args.environment)
                .map_err(|e| e.to_string())?;
            match args.format {
                Format::Table => report::comparison_table(out, &results),
                Format::Json => report::json(out, &results),
                Format::Csv => report::comparison_csv(out, &results),
            }
        }
    };
    written.map_err(|e: io::Error| format!("failed to write report: {e}"))
}

/// Entry point for the ledwall-planner CLI.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let config_path = args.config.as_deref();
    let cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            if let Some(default_path) = config::default_config_path() {
                eprintln!("\nDefault config location: {}", default_path.display());
            }
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        width_mm = args.width,
        height_mm = args.height,
        environment = %args.environment,
        pitch = ?args.pitch,
        "Planning LED wall"
    );

    let planner = Planner::new(cfg.planning);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&args, &planner, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Planning failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn parse_plan_arguments() {
        let args = Args::try_parse_from([
            "ledwall-planner",
            "--width",
            "5000",
            "--height",
            "3000",
            "--pitch",
            "2.5",
            "-e",
            "outdoor",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.environment, Environment::Outdoor);
        assert_eq!(args.format, Format::Json);
        assert_eq!(args.pitch, Some(2.5));
    }

    #[test]
    fn reject_unknown_environment() {
        let result = Args::try_parse_from([
            "ledwall-planner",
            "--width",
            "5000",
            "--height",
            "3000",
            "-e",
            "underwater",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn log_level_precedence() {
        assert_eq!(get_log_level(0, true, "trace"), Level::ERROR);
        assert_eq!(get_log_level(0, false, "debug"), Level::DEBUG);
        assert_eq!(get_log_level(2, false, "error"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "nonsense"), Level::WARN);
    }

    #[test]
    fn run_reports_invalid_dimensions() {
        let args = Args::try_parse_from(["ledwall-planner", "--width", "0", "--height", "3000"])
            .unwrap();
        let mut out = Vec::new();
        let err = run(&args, &Planner::default(), &mut out).unwrap_err();
        assert!(err.contains("width"));
    }

    #[test]
    fn run_writes_comparison() {
        let args = Args::try_parse_from(["ledwall-planner", "--width", "5000", "--height", "3000"])
            .unwrap();
        let mut out = Vec::new();
        run(&args, &Planner::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("VX16s"));
        assert!(text.contains("FHD"));
    }
}
