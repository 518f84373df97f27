//! `tactica tactics`: list and edit the dictionary file.

use clap::Subcommand;
use std::fmt::Write as _;
use std::path::PathBuf;

use tactica_core::config::Config;
use tactica_core::Dictionary;

#[derive(Debug, Subcommand)]
pub enum TacticsCommand {
    /// Show every tactic and its keywords.
    List {
        /// Dictionary file (overrides config).
        #[arg(long)]
        dictionary: Option<String>,
    },
    /// Replace the keywords of a tactic, creating it if needed.
    Set {
        /// Tactic name, used as given.
        name: String,
        /// Keywords, one per line.
        #[arg(long)]
        keywords: Option<String>,
        /// File with one keyword per line.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Dictionary file (overrides config).
        #[arg(long)]
        dictionary: Option<String>,
    },
    /// Add a tactic. The name is lowercased and spaces become underscores.
    Add {
        name: String,
        /// Keywords, one per line.
        #[arg(long)]
        keywords: Option<String>,
        /// File with one keyword per line.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Dictionary file (overrides config).
        #[arg(long)]
        dictionary: Option<String>,
    },
    /// Restore the built-in tactics.
    Reset {
        /// Dictionary file (overrides config).
        #[arg(long)]
        dictionary: Option<String>,
    },
}

pub fn run(cfg: &Config, command: TacticsCommand) -> anyhow::Result<()> {
    match command {
        TacticsCommand::List { dictionary } => {
            let dict = super::load_dictionary(cfg, dictionary.as_deref())?;
            print!("{}", render_list(&dict));
        }
        TacticsCommand::Set {
            name,
            keywords,
            file,
            dictionary,
        } => {
            if name.trim().is_empty() {
                anyhow::bail!("tactic name must not be blank");
            }
            let block = super::read_keyword_block(keywords, file.as_deref())?;
            let path = super::dictionary_path(cfg, dictionary.as_deref());
            let mut dict = Dictionary::load_file(&path)?;
            dict.set_keywords(&name, super::split_phrases(&block));
            dict.save_file(&path)?;
            let count = dict.keywords(&name).map_or(0, |k| k.len());
            println!("Updated {name}: {count} keywords");
        }
        TacticsCommand::Add {
            name,
            keywords,
            file,
            dictionary,
        } => {
            let block = super::read_keyword_block(keywords, file.as_deref())?;
            let path = super::dictionary_path(cfg, dictionary.as_deref());
            let mut dict = Dictionary::load_file(&path)?;
            let canonical = dict.add_tactic(&name, super::split_phrases(&block))?;
            dict.save_file(&path)?;
            println!("Added tactic: {canonical}");
        }
        TacticsCommand::Reset { dictionary } => {
            let path = super::dictionary_path(cfg, dictionary.as_deref());
            let mut dict = Dictionary::load_file(&path)?;
            dict.load_default();
            dict.save_file(&path)?;
            println!("Dictionary reset to defaults");
        }
    }
    Ok(())
}

/// Each tactic with its keyword count and keywords.
pub fn render_list(dictionary: &Dictionary) -> String {
    let mut out = String::new();
    for (name, keywords) in dictionary.list_tactics() {
        let _ = writeln!(out, "{name} ({} keywords)", keywords.len());
        for kw in keywords {
            let _ = writeln!(out, "  - {kw}");
        }
    }
    out
}
