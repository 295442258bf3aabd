//! Batch driver: every team matchup of a roster, many trials each.
//!
//! ```no_run
//! use rust_skirmish::content::Catalog;
//! use rust_skirmish::sim::{BatchRunner, SimConfig};
//!
//! let catalog = Catalog::builtin()?;
//! let config = SimConfig::new().with_team_size(2).with_trials(10).with_seed(42);
//! let report = BatchRunner::new(&catalog, config).run()?;
//! println!("{report}");
//! # Ok::<(), rust_skirmish::core::SimError>(())
//! ```

mod config;
mod matchup;
mod report;
mod runner;
mod stats;

pub use config::SimConfig;
pub use matchup::{matchups, unique_teams};
pub use report::{BatchReport, ReportRow};
pub use runner::BatchRunner;
pub use stats::{BatchTally, CharacterStats};
