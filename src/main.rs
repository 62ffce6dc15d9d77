use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use puzzle_solvers::config::{AppConfig, DEFAULT_CONFIG_PATH};
use puzzle_solvers::input::read_input;
use puzzle_solvers::solvers::Day;
use puzzle_solvers::OutputFormat;

/// Solve the location-list, report-safety, and corrupted-memory puzzles.
#[derive(Parser)]
#[command(name = "puzzle-solvers", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format; overrides the config file.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Total distance and similarity of two location lists.
    Day1(InputArgs),

    /// Count safe reports, with and without the one-level margin.
    Day2 {
        #[command(flatten)]
        input: InputArgs,

        /// Largest allowed step between adjacent levels.
        #[arg(long)]
        max_step: Option<u64>,
    },

    /// Sum mul() instructions, with and without do()/don't() masking.
    Day3(InputArgs),

    /// Validate and display configuration.
    Config {
        /// Show the resolved configuration.
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Path to the input file.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (mut config, config_found) = load_config(&cli.config)?;

    let filter = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    if !config_found {
        info!(path = %cli.config.display(), "Config file not found, using defaults");
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    match cli.command {
        Commands::Day1(input) => cmd_solve(Day::One, input.file, &config)?,
        Commands::Day2 { input, max_step } => {
            if let Some(step) = max_step {
                config.day2.max_step = step;
                config.validate()?;
            }
            cmd_solve(Day::Two, input.file, &config)?
        }
        Commands::Day3(input) => cmd_solve(Day::Three, input.file, &config)?,
        Commands::Config { show } => cmd_config(&cli.config, &config, show)?,
    }

    Ok(())
}

fn cmd_solve(day: Day, file: Option<PathBuf>, config: &AppConfig) -> Result<()> {
    let path = config.inputs.resolve(day.number(), file)?;
    let text = read_input(&path)?;
    let report = day
        .solve(&text, config)
        .with_context(|| format!("day {} failed on {}", day.number(), path.display()))?
        .with_input(&path);

    print!("{}", report.render(config.output.format)?);
    if config.output.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn cmd_config(config_path: &Path, config: &AppConfig, show: bool) -> Result<()> {
    if show {
        let toml_str = toml::to_string_pretty(config).context("TOML error")?;
        println!("{toml_str}");
    } else {
        println!("Configuration at '{}' is valid.", config_path.display());
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<(AppConfig, bool)> {
    if path.exists() {
        let config = AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?;
        Ok((config, true))
    } else {
        Ok((AppConfig::default(), false))
    }
}
