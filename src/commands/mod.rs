//! CLI commands: dictionary editing and result presentation.

pub mod classify;
pub mod tactics;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::MakeWriter;

use tactica_core::config::{self, shellexpand, Config};
use tactica_core::Dictionary;

/// Load the config with a scoped `info` subscriber writing to `writer`.
///
/// `RUST_LOG` still applies when set.
pub fn load_config<W>(path: &str, writer: W) -> anyhow::Result<Config>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    Ok(tracing::subscriber::with_default(subscriber, || config::load(path))?)
}

/// Resolve the dictionary path, preferring an explicit override.
pub fn dictionary_path(cfg: &Config, override_path: Option<&str>) -> PathBuf {
    PathBuf::from(shellexpand(override_path.unwrap_or(&cfg.dictionary.path)))
}

/// Load the dictionary from its file, or the built-in tactics if absent.
pub fn load_dictionary(cfg: &Config, override_path: Option<&str>) -> anyhow::Result<Dictionary> {
    Ok(Dictionary::load_file(&dictionary_path(cfg, override_path))?)
}

/// Split a newline-separated block into phrases.
///
/// Blank lines are dropped; the dictionary trims and dedupes the rest.
pub fn split_phrases(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keyword block from `--keywords` text or a `--file`, whichever is given.
pub fn read_keyword_block(keywords: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    match (keywords, file) {
        (Some(_), Some(_)) => anyhow::bail!("pass either --keywords or --file, not both"),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display())),
        (None, None) => anyhow::bail!("no keywords given. Use --keywords or --file"),
    }
}
