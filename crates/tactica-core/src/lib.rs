//! # tactica-core
//!
//! Dictionary store, keyword classifier, result tables, and configuration
//! for Tactica.

pub mod classify;
pub mod config;
pub mod dictionary;
pub mod dictionary_data;
pub mod error;
pub mod summary;
pub mod table;

pub use classify::{classify_one, classify_table, Classification, ClassificationResult};
pub use dictionary::{Dictionary, Tactic};
pub use error::TacticaError;
pub use summary::{Summary, TacticSummary};
pub use table::{Table, Value};
