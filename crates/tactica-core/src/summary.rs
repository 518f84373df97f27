//! Batch-level counts over a classified table.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classify::derived_columns;
use crate::dictionary::Dictionary;
use crate::table::Table;

/// How many statements one tactic flagged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TacticSummary {
    pub tactic: String,
    pub present: usize,
    pub total: usize,
    pub percent: f64,
}

/// Counts for a whole classification pass.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub tactics: Vec<TacticSummary>,
    /// Statements flagged by at least one tactic.
    pub any_tactic: usize,
}

impl Summary {
    /// Summarize a table produced by `classify_table` with the same dictionary.
    ///
    /// Tactics whose derived columns are missing count as zero.
    pub fn from_table(table: &Table, dictionary: &Dictionary) -> Self {
        let total = table.len();
        let mut any = vec![false; total];

        let tactics = dictionary
            .names()
            .map(|tactic| {
                let (present_col, _, _) = derived_columns(tactic);
                let mut present = 0;
                if let Some(col) = table.column_index(&present_col) {
                    for (row, hit) in table.rows().iter().zip(any.iter_mut()) {
                        if row[col].as_bool() {
                            present += 1;
                            *hit = true;
                        }
                    }
                }
                TacticSummary {
                    tactic: tactic.to_string(),
                    present,
                    total,
                    percent: percent(present, total),
                }
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            total,
            tactics,
            any_tactic: any.iter().filter(|hit| **hit).count(),
        }
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
