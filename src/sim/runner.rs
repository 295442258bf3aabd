//! Parallel batch execution.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

use crate::battle::Engine;
use crate::content::Catalog;
use crate::core::{BattleRng, SimError, Side, TemplateId};
use crate::policy::DecisionPolicy;
use crate::roster::TeamFactory;

use super::config::SimConfig;
use super::matchup::{matchups, unique_teams};
use super::report::BatchReport;
use super::stats::BatchTally;

/// Runs every matchup of a roster for a configured number of trials.
///
/// Matchups run in parallel. Matchup `n` draws its battles from the `n`th
/// fork of the master seed, so a report depends only on the config.
pub struct BatchRunner<'a> {
    catalog: &'a Catalog,
    config: SimConfig,
}

impl<'a> BatchRunner<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: SimConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Sorted, de-duplicated roster keys.
    pub fn roster(&self) -> Vec<String> {
        let mut keys: Vec<String> = match &self.config.roster {
            Some(keys) => keys.clone(),
            None => self
                .catalog
                .templates
                .sorted_keys()
                .into_iter()
                .map(str::to_string)
                .collect(),
        };
        keys.sort();
        keys.dedup();
        keys
    }

    /// Run the batch and summarise it.
    pub fn run(&self) -> Result<BatchReport, SimError> {
        self.config.validate()?;

        let keys = self.roster();
        if keys.len() < self.config.team_size {
            return Err(SimError::InvalidConfig(format!(
                "team size {} exceeds roster of {}",
                self.config.team_size,
                keys.len()
            )));
        }
        let ids = self.catalog.templates.resolve_all(&keys)?;
        let teams = unique_teams(&ids, self.config.team_size);
        let pairs = matchups(teams.len());
        let total = pairs.len() * self.config.trials as usize;

        info!(
            roster = keys.len(),
            teams = teams.len(),
            matchups = pairs.len(),
            trials = self.config.trials,
            battles = total,
            policy = %self.config.policy,
            "starting batch"
        );

        let start = Instant::now();
        let policy = self.config.build_policy();
        let factory = self.catalog.factory();
        let master = BattleRng::new(self.config.seed);
        let completed = AtomicUsize::new(0);

        let tally = pairs
            .par_iter()
            .enumerate()
            .map(|(index, &(i, j))| {
                let mut rng = master.nth_fork(index as u64);
                let mut tally = BatchTally::new();
                for _ in 0..self.config.trials {
                    self.play_one(
                        &factory,
                        &teams[i],
                        &teams[j],
                        rng.fork(),
                        policy.as_ref(),
                        &mut tally,
                    );
                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    self.log_progress(done, total, start);
                }
                tally
            })
            .reduce(BatchTally::new, BatchTally::merge);

        let elapsed = start.elapsed();
        info!(
            battles = tally.battles(),
            elapsed_ms = elapsed.as_millis() as u64,
            "batch complete"
        );

        Ok(BatchReport::from_tally(&tally, &keys, pairs.len()))
    }

    /// Build fresh teams and play one battle into `tally`.
    fn play_one(
        &self,
        factory: &TeamFactory<'_>,
        allies: &[TemplateId],
        enemies: &[TemplateId],
        rng: BattleRng,
        policy: &dyn DecisionPolicy,
        tally: &mut BatchTally,
    ) {
        let allies = factory.build(allies, self.config.level, Side::Ally);
        let enemies = factory.build(enemies, self.config.level, Side::Enemy);
        let mut engine = Engine::with_config(allies, enemies, rng, self.config.battle.clone());
        tally.play(&mut engine, policy);
    }

    fn log_progress(&self, done: usize, total: usize, start: Instant) {
        let interval = self.config.progress_interval;
        if interval == 0 || done % interval != 0 {
            return;
        }
        let secs = start.elapsed().as_secs_f64();
        let rate = if secs > 0.0 { done as f64 / secs } else { 0.0 };
        info!(
            completed = done,
            total,
            pct = format_args!("{:.2}", 100.0 * done as f64 / total as f64),
            rate = format_args!("{rate:.1}"),
            "progress"
        );
    }
}
