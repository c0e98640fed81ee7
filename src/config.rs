//! Application configuration.
//!
//! [`AppConfig`] starts from built-in defaults, can be read from a JSON file,
//! and is then overridden by command line arguments, which also read the
//! environment (see [`crate::cli::args`]).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GhostwriterError, Result};
use crate::frequency::{DEFAULT_MIN_LEN_WORDS, DEFAULT_N_WORDS_GRAM, FrequencyOptions};
use crate::synonym::ResolverOptions;

pub const DEFAULT_DOMAIN: &str = "localhost";
pub const DEFAULT_PORT: u16 = 7860;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Seconds between background health probes.
pub const DEFAULT_HEALTHCHECK_SLEEP: u64 = 900;

/// Settings of the service and the HTTP server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub domain: String,
    pub host: String,
    pub port: u16,
    /// CORS origins; empty means `http://{domain}:{port}`
    pub allowed_origins: Vec<String>,
    pub log_level: String,
    /// Serve the API only, without the static folder
    pub api_mode: bool,
    pub static_folder: Option<PathBuf>,
    pub n_words_gram: usize,
    pub min_len_words: usize,
    /// Princeton WordNet `dict/` directory
    pub wordnet_dir: Option<PathBuf>,
    /// JSON thesaurus, used when no WordNet directory is set
    pub thesaurus_file: Option<PathBuf>,
    /// Extra tagger vocabulary
    pub tagger_lexicon: Option<PathBuf>,
    pub healthcheck_sleep: u64,
    pub legacy_custom_overwrite: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            domain: DEFAULT_DOMAIN.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            api_mode: false,
            static_folder: None,
            n_words_gram: DEFAULT_N_WORDS_GRAM,
            min_len_words: DEFAULT_MIN_LEN_WORDS,
            wordnet_dir: None,
            thesaurus_file: None,
            tagger_lexicon: None,
            healthcheck_sleep: DEFAULT_HEALTHCHECK_SLEEP,
            legacy_custom_overwrite: false,
        }
    }
}

impl AppConfig {
    /// Read a JSON configuration file; missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GhostwriterError::config(format!("Cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            GhostwriterError::config(format!("Invalid configuration in {}: {e}", path.display()))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(GhostwriterError::config("port must be greater than 0"));
        }
        if self.n_words_gram == 0 {
            return Err(GhostwriterError::config("n_words_gram must be greater than 0"));
        }
        if self.healthcheck_sleep == 0 {
            return Err(GhostwriterError::config("healthcheck_sleep must be greater than 0"));
        }
        parse_log_level(&self.log_level)?;
        Ok(())
    }

    /// The CORS origins actually in force.
    pub fn effective_origins(&self) -> Vec<String> {
        if self.allowed_origins.is_empty() {
            vec![format!("http://{}:{}", self.domain, self.port)]
        } else {
            self.allowed_origins.clone()
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn frequency_options(&self) -> FrequencyOptions {
        FrequencyOptions {
            n_words_gram: self.n_words_gram,
            min_len_words: self.min_len_words,
        }
    }

    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            legacy_custom_overwrite: self.legacy_custom_overwrite,
        }
    }

    pub fn healthcheck_interval(&self) -> Duration {
        Duration::from_secs(self.healthcheck_sleep)
    }

    /// The static folder to serve, if any: none in API mode or when the
    /// folder does not exist.
    pub fn served_static_folder(&self) -> Option<&Path> {
        if self.api_mode {
            return None;
        }
        self.static_folder.as_deref().filter(|p| p.is_dir())
    }
}

/// Parse a `LOG_LEVEL` value ("info", "DEBUG", ...).
pub fn parse_log_level(level: &str) -> Result<log::LevelFilter> {
    level
        .trim()
        .parse()
        .map_err(|_| GhostwriterError::config(format!("Unknown log level '{level}'")))
}
