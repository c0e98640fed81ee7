//! # Ghostwriter
//!
//! Contextual synonym resolution for writing assistants.
//!
//! ## Features
//!
//! - Rule-based English part-of-speech tagging and lemmatization
//! - WordNet and JSON thesaurus backends
//! - Per-request custom synonyms with reverse lookup
//! - Synonyms inflected to match the selected word
//! - Word frequency by stem, with n-grams
//! - HTTP API and command line interface

pub mod analysis;
pub mod cli;
pub mod config;
pub mod custom;
pub mod error;
pub mod frequency;
pub mod inflection;
pub mod lexical;
pub mod morphology;
pub mod phrase;
pub mod server;
pub mod service;
pub mod span;
pub mod synonym;
pub mod tagger;

pub mod prelude {
    pub use crate::config::AppConfig;
    pub use crate::error::{GhostwriterError, Result};
    pub use crate::phrase::{PhraseOrchestrator, WordSynonymResult};
    pub use crate::service::ThesaurusService;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
