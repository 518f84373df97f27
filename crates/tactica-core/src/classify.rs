//! Keyword classification of statements against a [`Dictionary`].
//!
//! Matching is a lowercase substring test. There is no tokenization and no
//! word-boundary check, so `"vip"` matches inside `"vipers"`, and nested
//! keywords (`"limited"` and `"limited time"`) both count.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::dictionary::Dictionary;
use crate::error::TacticaError;
use crate::table::{Table, Value};

/// Separator used when matched keywords are flattened into one cell.
pub const MATCHES_SEPARATOR: &str = ", ";

/// Outcome of one tactic for one statement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ClassificationResult {
    pub present: bool,
    pub count: usize,
    /// Keywords as spelled in the dictionary, in sorted order.
    pub matches: Vec<String>,
}

impl ClassificationResult {
    pub fn from_matches(matches: Vec<String>) -> Self {
        Self {
            present: !matches.is_empty(),
            count: matches.len(),
            matches,
        }
    }

    pub fn joined_matches(&self) -> String {
        self.matches.join(MATCHES_SEPARATOR)
    }
}

/// Per-tactic results for one statement.
pub type Classification = BTreeMap<String, ClassificationResult>;

/// Classify one statement. Absent text yields an empty map.
pub fn classify_one(text: Option<&str>, dictionary: &Dictionary) -> Classification {
    let Some(text) = text else {
        return Classification::new();
    };
    let text_lower = text.to_lowercase();

    dictionary
        .list_tactics()
        .map(|(name, keywords)| {
            let matches = keywords
                .iter()
                .filter(|kw| text_lower.contains(&kw.to_lowercase()))
                .cloned()
                .collect();
            (name.to_string(), ClassificationResult::from_matches(matches))
        })
        .collect()
}

/// Column names derived for a tactic: `(present, count, matches)`.
pub fn derived_columns(tactic: &str) -> (String, String, String) {
    (
        format!("{tactic}_present"),
        format!("{tactic}_count"),
        format!("{tactic}_matches"),
    )
}

/// Classify every row's `text_field` and return the table with three derived
/// columns per tactic.
///
/// Rows keep their order and original cells. Derived columns that already
/// exist are overwritten in place, so classifying an earlier output again
/// gives the same columns.
pub fn classify_table(
    table: &Table,
    dictionary: &Dictionary,
    text_field: &str,
) -> Result<Table, TacticaError> {
    let text_col = table.require_column(text_field)?;

    let classifications: Vec<Classification> = table
        .rows()
        .iter()
        .map(|row| classify_one(row[text_col].as_text().as_deref(), dictionary))
        .collect();

    let mut out = table.clone();
    for tactic in dictionary.names() {
        let (present_col, count_col, matches_col) = derived_columns(tactic);
        let results: Vec<Option<&ClassificationResult>> =
            classifications.iter().map(|c| c.get(tactic)).collect();

        out.set_column(
            &present_col,
            results
                .iter()
                .map(|r| Value::Bool(r.is_some_and(|r| r.present)))
                .collect(),
        );
        out.set_column(
            &count_col,
            results
                .iter()
                .map(|r| Value::Count(r.map_or(0, |r| r.count)))
                .collect(),
        );
        out.set_column(
            &matches_col,
            results
                .iter()
                .map(|r| Value::Text(r.map(|r| r.joined_matches()).unwrap_or_default()))
                .collect(),
        );
    }

    debug!(
        "classified {} rows against {} tactics",
        out.len(),
        dictionary.len()
    );
    Ok(out)
}
