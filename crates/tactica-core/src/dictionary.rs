//! The dictionary store: tactic names mapped to keyword sets.
//!
//! Tactics keep insertion order so derived columns and reports come out in
//! a stable order. Keyword sets are `BTreeSet`s, which gives the classifier
//! a sorted, deterministic iteration order for free.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

use crate::dictionary_data::DEFAULT_TACTICS;
use crate::error::TacticaError;

/// A named set of trigger phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tactic {
    pub name: String,
    pub keywords: BTreeSet<String>,
}

/// Mapping from tactic name to keyword set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    tactics: Vec<Tactic>,
}

impl Default for Dictionary {
    fn default() -> Self {
        let mut dict = Self {
            tactics: Vec::new(),
        };
        dict.load_default();
        dict
    }
}

impl Dictionary {
    /// An empty dictionary with no tactics.
    pub fn empty() -> Self {
        Self {
            tactics: Vec::new(),
        }
    }

    /// Reset to exactly the built-in tactics.
    pub fn load_default(&mut self) {
        self.tactics = DEFAULT_TACTICS
            .iter()
            .map(|(name, kws)| Tactic {
                name: (*name).to_string(),
                keywords: clean_phrases(kws.iter().copied()),
            })
            .collect();
    }

    /// Replace the keyword set for `name`, creating the tactic if absent.
    ///
    /// Phrases are trimmed, blanks dropped, duplicates collapsed.
    pub fn set_keywords<I, S>(&mut self, name: &str, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = clean_phrases(phrases);
        match self.tactics.iter_mut().find(|t| t.name == name) {
            Some(tactic) => tactic.keywords = keywords,
            None => self.tactics.push(Tactic {
                name: name.to_string(),
                keywords,
            }),
        }
    }

    /// Add a tactic from a user-supplied name.
    ///
    /// The name is lowercased with whitespace runs turned into underscores. Returns the
    /// canonical name on success.
    pub fn add_tactic<I, S>(&mut self, name: &str, phrases: I) -> Result<String, TacticaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if name.trim().is_empty() {
            return Err(TacticaError::Validation(
                "tactic name must not be blank".to_string(),
            ));
        }
        let keywords = clean_phrases(phrases);
        if keywords.is_empty() {
            return Err(TacticaError::Validation(format!(
                "tactic '{}' needs at least one keyword",
                name.trim()
            )));
        }
        let canonical = canonical_name(name);
        self.set_keywords(&canonical, keywords);
        Ok(canonical)
    }

    /// Tactics with their keyword sets, in insertion order.
    pub fn list_tactics(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.tactics.iter().map(|t| (t.name.as_str(), &t.keywords))
    }

    /// Tactic names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tactics.iter().map(|t| t.name.as_str())
    }

    /// Keyword set of one tactic.
    pub fn keywords(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.tactics
            .iter()
            .find(|t| t.name == name)
            .map(|t| &t.keywords)
    }

    pub fn len(&self) -> usize {
        self.tactics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tactics.is_empty()
    }

    /// Load a dictionary file, falling back to the built-in tactics if it
    /// does not exist.
    pub fn load_file(path: &Path) -> Result<Self, TacticaError> {
        if !path.exists() {
            info!(
                "dictionary not found at {}, using built-in tactics",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let file: DictionaryFile = toml::from_str(&content).map_err(|e| {
            TacticaError::Dictionary(format!("failed to parse {}: {e}", path.display()))
        })?;

        let mut dict = Self::empty();
        for entry in file.tactic {
            if entry.name.trim().is_empty() {
                return Err(TacticaError::Dictionary(format!(
                    "{} contains a tactic with a blank name",
                    path.display()
                )));
            }
            dict.set_keywords(&entry.name, entry.keywords);
        }
        debug!("loaded {} tactics from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Write the dictionary to `path`, creating parent directories.
    pub fn save_file(&self, path: &Path) -> Result<(), TacticaError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = DictionaryFile {
            tactic: self
                .tactics
                .iter()
                .map(|t| TacticEntry {
                    name: t.name.clone(),
                    keywords: t.keywords.iter().cloned().collect(),
                })
                .collect(),
        };
        let content = toml::to_string_pretty(&file)
            .map_err(|e| TacticaError::Dictionary(format!("failed to serialize: {e}")))?;
        std::fs::write(path, content)?;
        info!("saved {} tactics to {}", self.len(), path.display());
        Ok(())
    }
}

/// On-disk form: an ordered array of `[[tactic]]` tables.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    tactic: Vec<TacticEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TacticEntry {
    name: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Trim, drop blanks, dedupe.
fn clean_phrases<I, S>(phrases: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    phrases
        .into_iter()
        .map(|p| p.as_ref().trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// "New Tactic" → "new_tactic". Any run of whitespace becomes one underscore.
fn canonical_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
