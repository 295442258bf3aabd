//! Command-line batch simulator.
//!
//! Runs every team matchup from the built-in roster and prints per-template
//! win rates and averages. Set `RUST_LOG` to change log verbosity.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use rust_skirmish::content::Catalog;
use rust_skirmish::core::SimError;
use rust_skirmish::policy::PolicyKind;
use rust_skirmish::sim::{BatchRunner, SimConfig};

/// Simulate team battles and report per-character statistics
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON content file replacing the built-in roster
    #[arg(long)]
    content: Option<PathBuf>,

    /// Members per team
    #[arg(long)]
    team_size: Option<usize>,

    /// Battles per matchup
    #[arg(long)]
    trials: Option<u32>,

    /// Character level
    #[arg(long)]
    level: Option<u32>,

    /// Master RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Decision policy: uniform or utility
    #[arg(long)]
    policy: Option<PolicyKind>,

    /// Restrict teams to these template keys (comma separated)
    #[arg(long, value_delimiter = ',')]
    roster: Option<Vec<String>>,
}

impl Cli {
    fn sim_config(&self) -> Result<SimConfig, SimError> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_json_file(path)?,
            None => SimConfig::default(),
        };
        if let Some(size) = self.team_size {
            config = config.with_team_size(size);
        }
        if let Some(trials) = self.trials {
            config = config.with_trials(trials);
        }
        if let Some(level) = self.level {
            config = config.with_level(level);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(policy) = self.policy {
            config = config.with_policy(policy);
        }
        if let Some(roster) = &self.roster {
            config = config.with_roster(roster.iter().cloned());
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<(), SimError> {
    let config = cli.sim_config()?;
    let report = match &cli.content {
        Some(path) => {
            let catalog = Catalog::from_json_str(&std::fs::read_to_string(path)?)?;
            BatchRunner::new(&catalog, config).run()?
        }
        None => BatchRunner::new(Catalog::shared()?, config).run()?,
    };
    println!("{report}");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "batch failed");
            ExitCode::FAILURE
        }
    }
}
