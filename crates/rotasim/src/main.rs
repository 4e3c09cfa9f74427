use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use rotasim_core::SweepConfig;
use rotasim_core::sweep::{run_mode_summaries, run_sweep};
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Parser, Debug)]
#[command(name = "rotasim")]
#[command(about = "Monte Carlo simulator for infection spread under workplace rotation policies")]
struct Args {
    /// Path to a JSON scenario file (default: the built-in reference scenario)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Override the scenario's random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of Monte Carlo iterations per sweep point
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Report variant written to stdout
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Sweep)]
    report: ReportFormat,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ReportFormat {
    /// Normalized CSV records, one per sweep point
    Sweep,
    /// Unnormalized per-mode means in the original study's print format
    Summary,
}

fn load_scenario(path: &Path) -> color_eyre::Result<SweepConfig> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading scenario {}", path.display()))?;
    serde_json::from_str(&text)
        .wrap_err_with(|| format!("parsing scenario {}", path.display()))
}

fn init_logging(level: &str) {
    // Logs go to stderr; stdout is reserved for the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => SweepConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }

    tracing::info!(
        iterations = config.iterations,
        seed = config.seed,
        modes = config.modes.len(),
        rotation_periods = config.rotation_periods.len(),
        team_sizes = config.team_sizes.len(),
        "running rotation sweep"
    );

    let stdout = std::io::stdout().lock();
    match args.report {
        ReportFormat::Sweep => {
            let records = run_sweep(&config)?;
            report::write_sweep_csv(stdout, &records)?;
            tracing::info!(records = records.len(), "sweep complete");
        }
        ReportFormat::Summary => {
            let summaries = run_mode_summaries(&config)?;
            report::write_mode_summary(stdout, &summaries)?;
            tracing::info!(modes = summaries.len(), "summary complete");
        }
    }

    Ok(())
}
