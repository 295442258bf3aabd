//! Batch summary table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::stats::{BatchTally, CharacterStats};

/// Per-battle averages for one template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub key: String,
    pub battles: u64,
    /// `None` when the template never fought.
    pub win_pct: Option<f64>,
    pub damage_dealt: Option<f64>,
    pub damage_taken: Option<f64>,
    pub healing_done: Option<f64>,
    pub dot_dealt: Option<f64>,
}

impl ReportRow {
    fn new(key: &str, stats: &CharacterStats) -> Self {
        Self {
            key: key.to_string(),
            battles: stats.battles,
            win_pct: stats.win_pct(),
            damage_dealt: stats.per_battle(stats.damage_dealt),
            damage_taken: stats.per_battle(stats.damage_taken),
            healing_done: stats.per_battle(stats.healing_done),
            dot_dealt: stats.per_battle(stats.dot_dealt),
        }
    }
}

/// Result of a batch run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// One row per roster template, sorted by key.
    pub rows: Vec<ReportRow>,
    pub battles: u64,
    pub matchups: usize,
    pub average_rounds: f64,
    pub average_turns: f64,
}

impl BatchReport {
    /// Summarise `tally` for the given roster keys.
    ///
    /// Keys missing from the tally still get a row, with no averages.
    #[must_use]
    pub fn from_tally<S: AsRef<str>>(tally: &BatchTally, roster: &[S], matchups: usize) -> Self {
        let mut rows: Vec<ReportRow> = roster
            .iter()
            .map(|key| {
                let key = key.as_ref();
                let stats = tally.get(key).copied().unwrap_or_default();
                ReportRow::new(key, &stats)
            })
            .collect();
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        rows.dedup_by(|a, b| a.key == b.key);

        let per_battle = |total: u64| {
            if tally.battles() == 0 {
                0.0
            } else {
                total as f64 / tally.battles() as f64
            }
        };

        Self {
            rows,
            battles: tally.battles(),
            matchups,
            average_rounds: per_battle(tally.total_rounds()),
            average_turns: per_battle(tally.total_turns()),
        }
    }

    #[must_use]
    pub fn row(&self, key: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.key == key)
    }
}

fn cell(f: &mut fmt::Formatter<'_>, value: Option<f64>) -> fmt::Result {
    match value {
        Some(v) => write!(f, " | {v:>9.1}"),
        None => write!(f, " | {:>9}", "N/A"),
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<22} | {:>7} | {:>9} | {:>9} | {:>9} | {:>9}",
            "Character", "Win%", "Dealt", "Taken", "Healed", "DoT"
        )?;
        writeln!(f, "{:-<23}+{:-<9}+{:-<11}+{:-<11}+{:-<11}+{:-<10}", "", "", "", "", "", "")?;
        for row in &self.rows {
            write!(f, "{:<22}", row.key)?;
            match row.win_pct {
                Some(pct) => write!(f, " | {pct:>6.2}%")?,
                None => write!(f, " | {:>7}", "N/A")?,
            }
            cell(f, row.damage_dealt)?;
            cell(f, row.damage_taken)?;
            cell(f, row.healing_done)?;
            cell(f, row.dot_dealt)?;
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(f, "Battles: {} over {} matchups", self.battles, self.matchups)?;
        writeln!(f, "Average rounds per battle: {:.5}", self.average_rounds)?;
        write!(f, "Average turns per battle: {:.5}", self.average_turns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tally() {
        let report = BatchReport::from_tally(&BatchTally::new(), &["wolf", "capy"], 0);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].key, "capy");
        assert_eq!(report.rows[0].win_pct, None);
        assert_eq!(report.average_rounds, 0.0);

        let text = report.to_string();
        assert!(text.contains("N/A"));
        assert!(text.starts_with("Character"));
    }

    #[test]
    fn test_row_lookup() {
        let report = BatchReport::from_tally(&BatchTally::new(), &["wolf", "wolf"], 0);
        assert_eq!(report.rows.len(), 1);
        assert!(report.row("wolf").is_some());
        assert!(report.row("capy").is_none());
    }
}
