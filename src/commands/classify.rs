//! `tactica classify` and `tactica check`: run the classifier and present results.

use clap::{Args, ValueEnum};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

use tactica_core::classify::derived_columns;
use tactica_core::config::{shellexpand, Config};
use tactica_core::{classify_one, classify_table, Dictionary, Summary, Table};

/// How `classify` prints to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Summary plus per-statement detail.
    #[default]
    Report,
    /// The augmented table as CSV.
    Csv,
    /// The summary and the augmented table as JSON.
    Json,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Input CSV file.
    #[arg(default_value = "sample_data.csv")]
    pub input: PathBuf,
    /// Column holding the statement text (overrides config).
    #[arg(long)]
    pub text_column: Option<String>,
    /// Column shown as the statement ID in reports (overrides config).
    #[arg(long)]
    pub id_column: Option<String>,
    /// Where to write the augmented CSV (overrides config).
    #[arg(short, long)]
    pub output: Option<String>,
    /// Dictionary file (overrides config).
    #[arg(long)]
    pub dictionary: Option<String>,
    /// Stdout format.
    #[arg(long, value_enum, default_value_t = Format::Report)]
    pub format: Format,
    /// Only write the output file.
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(cfg: &Config, args: ClassifyArgs) -> anyhow::Result<()> {
    let dict = super::load_dictionary(cfg, args.dictionary.as_deref())?;
    let text_column = args
        .text_column
        .unwrap_or_else(|| cfg.input.text_column.clone());
    let id_column = args.id_column.unwrap_or_else(|| cfg.input.id_column.clone());
    let output = PathBuf::from(shellexpand(
        args.output.as_deref().unwrap_or(&cfg.output.path),
    ));

    let table = Table::from_csv_path(&args.input)
        .map_err(|e| anyhow::anyhow!("failed to load {}: {e}", args.input.display()))?;
    info!(
        "loaded {} statements from {}",
        table.len(),
        args.input.display()
    );

    let classified = classify_table(&table, &dict, &text_column)?;
    classified.to_csv_path(&output)?;
    info!("results saved to {}", output.display());

    if args.quiet {
        return Ok(());
    }

    match args.format {
        Format::Report => {
            let summary = Summary::from_table(&classified, &dict);
            print!("{}", render_summary(&summary));
            print!(
                "{}",
                render_details(&classified, &dict, &id_column, &text_column)
            );
            println!("\nResults saved to: {}", output.display());
            print!("{}", render_quick_stats(&summary));
        }
        Format::Csv => classified.write_csv(std::io::stdout().lock())?,
        Format::Json => {
            let summary = Summary::from_table(&classified, &dict);
            println!("{}", render_json(&classified, &summary)?);
        }
    }
    Ok(())
}

/// `{"summary": ..., "rows": [...]}`, pretty-printed.
pub fn render_json(table: &Table, summary: &Summary) -> anyhow::Result<String> {
    let doc = serde_json::json!({
        "summary": serde_json::to_value(summary)?,
        "rows": table.to_json_records()?,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Per-tactic totals.
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Classification Results:");
    let _ = writeln!(out, "{}", "=".repeat(50));
    for t in &summary.tactics {
        let _ = writeln!(
            out,
            "{}: {}/{} statements ({:.1}%)",
            t.tactic, t.present, t.total, t.percent
        );
    }
    out
}

/// Every statement with a ✓/✗ line per tactic.
pub fn render_details(
    table: &Table,
    dictionary: &Dictionary,
    id_column: &str,
    text_column: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nDetailed Results:");
    let _ = writeln!(out, "{}", "=".repeat(50));

    for row in 0..table.len() {
        let id = table
            .get(row, id_column)
            .map(|v| v.to_string())
            .unwrap_or_else(|| (row + 1).to_string());
        let text = table
            .get(row, text_column)
            .map(|v| v.to_string())
            .unwrap_or_default();
        let _ = writeln!(out, "\nID: {id}");
        let _ = writeln!(out, "Statement: {text}");

        for tactic in dictionary.names() {
            let (present_col, _, matches_col) = derived_columns(tactic);
            let present = table.get(row, &present_col).is_some_and(|v| v.as_bool());
            if present {
                let matches = table
                    .get(row, &matches_col)
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                let _ = writeln!(out, "  ✓ {tactic}: {matches}");
            } else {
                let _ = writeln!(out, "  ✗ {tactic}: No matches");
            }
        }
    }
    out
}

pub fn render_quick_stats(summary: &Summary) -> String {
    format!(
        "\nQuick Stats:\nTotal statements: {}\nStatements with any tactic: {}\n",
        summary.total, summary.any_tactic
    )
}

/// One statement, one line per tactic.
pub fn render_check(text: &str, dictionary: &Dictionary) -> String {
    let results = classify_one(Some(text), dictionary);
    let mut out = String::new();
    for tactic in dictionary.names() {
        match results.get(tactic) {
            Some(r) if r.present => {
                let _ = writeln!(
                    out,
                    "  ✓ {tactic} ({}): {}",
                    r.count,
                    r.joined_matches()
                );
            }
            _ => {
                let _ = writeln!(out, "  ✗ {tactic}: No matches");
            }
        }
    }
    out
}
