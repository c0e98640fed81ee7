//! Command line argument parsing for the Ghostwriter CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::config::{self, AppConfig};
use crate::error::Result;

/// Ghostwriter - contextual synonyms for a text editor
#[derive(Parser, Debug, Clone)]
#[command(name = "ghostwriter")]
#[command(about = "Contextual synonym resolution for writing assistants")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GhostwriterArgs {
    /// Verbosity level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(flatten)]
    pub backend: BackendArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GhostwriterArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n + 1,
            }
        }
    }

    /// Log level from the verbosity flags, or the configured one.
    pub fn log_level(&self, config: &AppConfig) -> Result<LevelFilter> {
        match self.verbosity() {
            0 => Ok(LevelFilter::Error),
            1 => config::parse_log_level(&config.log_level),
            2 => Ok(LevelFilter::Info),
            _ => Ok(LevelFilter::Debug),
        }
    }

    /// The configuration: file (or defaults), then arguments and environment.
    pub fn config(&self) -> Result<AppConfig> {
        let mut config = match &self.backend.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        self.backend.apply(&mut config);
        if let Command::Serve(serve) = &self.command {
            serve.apply(&mut config);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct BackendArgs {
    /// JSON configuration file
    #[arg(long, global = true, env = "GHOSTWRITER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Princeton WordNet `dict` directory
    #[arg(long, global = true, env = "WORDNET_DIR", value_name = "DIR")]
    pub wordnet_dir: Option<PathBuf>,

    /// JSON thesaurus file, used without a WordNet directory
    #[arg(long, global = true, env = "THESAURUS_FILE", value_name = "FILE")]
    pub thesaurus_file: Option<PathBuf>,

    /// Extra tagger vocabulary (word, tag, lemma per line)
    #[arg(long, global = true, env = "TAGGER_LEXICON", value_name = "FILE")]
    pub tagger_lexicon: Option<PathBuf>,

    /// Log level when neither -v nor -q is given
    #[arg(long, global = true, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Longest n-gram counted by word frequency
    #[arg(long, global = true, env = "N_WORDS_GRAM")]
    pub n_words_gram: Option<usize>,

    /// Shortest word counted by word frequency
    #[arg(long, global = true, env = "MIN_LEN_WORDS")]
    pub min_len_words: Option<usize>,

    /// Let a custom lookup return either direct or reverse synonyms, not both
    #[arg(
        long,
        global = true,
        env = "LEGACY_CUSTOM_OVERWRITE",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub legacy_custom_overwrite: Option<bool>,
}

impl BackendArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.wordnet_dir {
            config.wordnet_dir = Some(dir.clone());
        }
        if let Some(file) = &self.thesaurus_file {
            config.thesaurus_file = Some(file.clone());
        }
        if let Some(file) = &self.tagger_lexicon {
            config.tagger_lexicon = Some(file.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(n) = self.n_words_gram {
            config.n_words_gram = n;
        }
        if let Some(n) = self.min_len_words {
            config.min_len_words = n;
        }
        if let Some(legacy) = self.legacy_custom_overwrite {
            config.legacy_custom_overwrite = legacy;
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP API
    Serve(ServeArgs),

    /// Synonyms for every eligible word of a selection
    Synonyms(SpanArgs),

    /// Grammatical context of a selected word
    Context(WordSpanArgs),

    /// Dictionary and custom senses of a word
    Lookup(LookupArgs),

    /// Inflect a base form to a tag
    Inflect(InflectArgs),

    /// Word frequency by stem
    Frequency(FrequencyArgs),
}

/// Arguments for the HTTP server
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Domain used for the default CORS origin
    #[arg(long, env = "DOMAIN")]
    pub domain: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Allowed CORS origins, comma separated
    #[arg(long = "allowed-origin", env = "ALLOWED_ORIGIN", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Serve the API only
    #[arg(long, env = "API_MODE", num_args = 0..=1, default_missing_value = "true")]
    pub api_mode: Option<bool>,

    /// Front-end folder served under /static
    #[arg(long, env = "STATIC_FOLDER", value_name = "DIR")]
    pub static_folder: Option<PathBuf>,

    /// Seconds between health probes
    #[arg(long, env = "HEALTHCHECK_SLEEP")]
    pub healthcheck_sleep: Option<u64>,
}

impl ServeArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(domain) = &self.domain {
            config.domain = domain.clone();
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        let origins: Vec<String> = self
            .allowed_origins
            .iter()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();
        if !origins.is_empty() {
            config.allowed_origins = origins;
        }
        if let Some(api_mode) = self.api_mode {
            config.api_mode = api_mode;
        }
        if let Some(folder) = &self.static_folder {
            config.static_folder = Some(folder.clone());
        }
        if let Some(seconds) = self.healthcheck_sleep {
            config.healthcheck_sleep = seconds;
        }
    }
}

/// A character selection in a text
#[derive(Args, Debug, Clone)]
pub struct SpanArgs {
    /// The full text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// First selected character
    #[arg(value_name = "START", allow_negative_numbers = true)]
    pub start: i64,

    /// One past the last selected character
    #[arg(value_name = "END", allow_negative_numbers = true)]
    pub end: i64,
}

/// A selected word in a text
#[derive(Args, Debug, Clone)]
pub struct WordSpanArgs {
    #[command(flatten)]
    pub span: SpanArgs,

    /// The selected word; defaults to the selected characters
    #[arg(short, long)]
    pub word: Option<String>,
}

impl WordSpanArgs {
    /// The expected word: given, or the characters of the selection.
    pub fn word(&self) -> String {
        if let Some(word) = &self.word {
            return word.clone();
        }
        let start = self.span.start.max(0) as usize;
        let end = self.span.end.max(0) as usize;
        self.span
            .text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }
}

/// Arguments for a dictionary lookup
#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Coarse part of speech (NOUN, VERB, ADJ, ADV)
    #[arg(long)]
    pub pos: Option<String>,
}

/// Arguments for inflection
#[derive(Args, Debug, Clone)]
pub struct InflectArgs {
    /// Base form
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Fine tag, e.g. VBD or NNS
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Coarse part of speech; guessed from the tag when omitted
    #[arg(long)]
    pub pos: Option<String>,
}

impl InflectArgs {
    /// The coarse part of speech to inflect as.
    pub fn pos(&self) -> &str {
        if let Some(pos) = &self.pos {
            return pos;
        }
        let tag = self.tag.to_uppercase();
        if tag.starts_with("VB") {
            "VERB"
        } else if tag.starts_with("JJ") {
            "ADJ"
        } else if tag.starts_with("RB") {
            "ADV"
        } else {
            "NOUN"
        }
    }
}

/// Arguments for word frequency
#[derive(Args, Debug, Clone)]
pub struct FrequencyArgs {
    /// Text file, plain or a JSON list of rows; stdin when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Show only the most frequent entries
    #[arg(short, long, default_value = "20")]
    pub top: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
