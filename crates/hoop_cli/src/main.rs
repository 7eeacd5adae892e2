//! Hoop CLI
//!
//! JSON 요청 실행, 데모 경기, 배치 통계

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "hoop")]
#[command(about = "Possession-based basketball match simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Simulate a match from a JSON request file
    Simulate {
        /// Request JSON file path
        #[arg(long)]
        request: PathBuf,

        /// Write the response here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Also emit the persisted match record
        #[arg(long, default_value = "false")]
        record: bool,
    },

    /// Play a demo match between two stock rosters
    Demo {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        #[arg(long, default_value_t = 4)]
        quarters: u32,

        /// Total match length in minutes
        #[arg(long, default_value_t = 48)]
        minutes: u32,
    },

    /// Run many seeded games and print aggregate statistics
    Batch {
        #[arg(long, default_value_t = 100)]
        runs: u32,

        /// First seed; runs use consecutive seeds
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// outside | balanced | inside
        #[arg(long)]
        home_spacing: Option<String>,

        #[arg(long)]
        away_spacing: Option<String>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { request, out, record } => run_simulate(&request, out, record),
        Commands::Demo { seed, quarters, minutes } => run_demo(seed, quarters, minutes),
        Commands::Batch { runs, seed, home_spacing, away_spacing } => {
            run_batch(runs, seed, home_spacing.as_deref(), away_spacing.as_deref())
        }
    }
}

#[cfg(feature = "cli")]
fn run_simulate(request: &std::path::Path, out: Option<PathBuf>, record: bool) -> Result<()> {
    let request_json = hoop_cli::read_request(request)?;
    log::debug!("Loaded request from {}", request.display());

    if record {
        let (response, record) = hoop_core::simulate_match_json_with_record(&request_json)
            .context("Simulation failed")?;
        hoop_cli::write_output(out.as_deref(), &response)?;
        let record_path = out.as_ref().map(|p| p.with_extension("record.json"));
        hoop_cli::write_output(record_path.as_deref(), &record)?;
    } else {
        let response =
            hoop_core::simulate_match_json(&request_json).context("Simulation failed")?;
        hoop_cli::write_output(out.as_deref(), &response)?;
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn run_demo(seed: u64, quarters: u32, minutes: u32) -> Result<()> {
    use hoop_core::{BasketballGameEngine, MatchConfig, PlainNarrator};

    let (home, away) = hoop_cli::stock_teams();
    let (home_name, away_name) = (home.name.clone(), away.name.clone());

    let state = BasketballGameEngine::new(MatchConfig::new(minutes, quarters), home, away, seed)
        .context("Invalid demo setup")?
        .simulate()
        .context("Simulation failed")?;

    print!("{}", hoop_cli::render_play_by_play(&state, &PlainNarrator));
    println!();
    print!("{}", hoop_cli::render_box_score(&state, &home_name, &away_name));
    Ok(())
}

#[cfg(feature = "cli")]
fn run_batch(
    runs: u32,
    seed: u64,
    home_spacing: Option<&str>,
    away_spacing: Option<&str>,
) -> Result<()> {
    use hoop_core::calibration::seed_range;
    use hoop_core::{EngineConfig, MatchConfig};

    let (mut home, mut away) = hoop_cli::stock_teams();
    if let Some(spacing) = home_spacing {
        home.tactics.spacing = hoop_cli::parse_spacing(spacing)?;
    }
    if let Some(spacing) = away_spacing {
        away.tactics.spacing = hoop_cli::parse_spacing(spacing)?;
    }

    let engine_config = hoop_core::api::engine_config_from_env()
        .context("Failed to load engine config")?
        .unwrap_or_else(EngineConfig::default);

    let summary = hoop_core::run_batch(
        MatchConfig::default(),
        &home,
        &away,
        &engine_config,
        &seed_range(seed, runs),
    )
    .context("Batch run failed")?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("hoop CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
