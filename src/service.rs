//! The thesaurus service.
//!
//! One [`ThesaurusService`] is built at startup and shared by every request
//! handler. It owns the tagger, the lexical database and the custom synonym
//! store. A backend that fails to load leaves its capability off: the paths
//! needing it answer with `ServiceUnavailable` instead of the process
//! failing to start.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::config::AppConfig;
use crate::custom::{CustomEntry, CustomSynonymStore};
use crate::error::{GhostwriterError, Result};
use crate::frequency::{self, FrequencyInput, WordFrequency};
use crate::inflection::InflectionEngine;
use crate::lexical::json::JsonThesaurus;
use crate::lexical::wordnet::WordNetDatabase;
use crate::lexical::{DatabaseInfo, LexicalDatabase};
use crate::phrase::{PhraseOrchestrator, SentenceSplit, WordResolution, WordSynonymResult};
use crate::span::{self, ContextInfo};
use crate::synonym::{Sense, SynonymResolver};
use crate::tagger::Tagger;
use crate::tagger::rules::RuleTagger;

/// Load the tagger named by the configuration.
fn load_tagger(config: &AppConfig) -> Result<Arc<dyn Tagger>> {
    let tagger = match &config.tagger_lexicon {
        Some(path) => RuleTagger::from_lexicon_file(path)?,
        None => RuleTagger::new(),
    };
    Ok(Arc::new(tagger))
}

/// Load the lexical database named by the configuration: WordNet, then a
/// JSON thesaurus file, then the embedded thesaurus.
fn load_database(config: &AppConfig) -> Result<Arc<dyn LexicalDatabase>> {
    if let Some(dir) = &config.wordnet_dir {
        return Ok(Arc::new(WordNetDatabase::open(dir)?));
    }
    if let Some(path) = &config.thesaurus_file {
        return Ok(Arc::new(JsonThesaurus::from_file(path)?));
    }
    Ok(Arc::new(JsonThesaurus::embedded()?))
}

/// Shared entry point to every thesaurus operation.
pub struct ThesaurusService {
    config: AppConfig,
    database: Option<Arc<dyn LexicalDatabase>>,
    custom: Arc<CustomSynonymStore>,
    resolver: SynonymResolver,
    inflection: InflectionEngine,
    orchestrator: Option<PhraseOrchestrator>,
    started_at: DateTime<Utc>,
}

impl ThesaurusService {
    /// Assemble a service from loaded backends.
    pub fn new(
        config: AppConfig,
        tagger: Option<Arc<dyn Tagger>>,
        database: Option<Arc<dyn LexicalDatabase>>,
    ) -> Self {
        let custom = Arc::new(CustomSynonymStore::new());
        let resolver = SynonymResolver::new(custom.clone(), database.clone(), config.resolver_options());
        let inflection = InflectionEngine::new();
        let orchestrator =
            tagger.map(|tagger| PhraseOrchestrator::new(tagger, resolver.clone(), inflection));
        ThesaurusService {
            config,
            database,
            custom,
            resolver,
            inflection,
            orchestrator,
            started_at: Utc::now(),
        }
    }

    /// Load every backend the configuration names.
    pub fn from_config(config: &AppConfig) -> Self {
        let tagger = match load_tagger(config) {
            Ok(tagger) => {
                info!("Tagger '{}' loaded", tagger.name());
                Some(tagger)
            }
            Err(e) => {
                error!("Tagger unavailable, synonym endpoints will answer 503: {e}");
                None
            }
        };
        let database = match load_database(config) {
            Ok(database) => {
                let info = database.info();
                info!(
                    "Lexical database '{}' {} ({}) loaded: {} senses",
                    info.name, info.version, info.lang, info.senses
                );
                Some(database)
            }
            Err(e) => {
                error!("Lexical database unavailable, only custom synonyms will be served: {e}");
                None
            }
        };
        Self::new(config.clone(), tagger, database)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time since the service was assembled.
    pub fn uptime(&self) -> chrono::Duration {
        Utc::now() - self.started_at
    }

    pub fn is_nlp_available(&self) -> bool {
        self.orchestrator.is_some()
    }

    pub fn is_lexicon_available(&self) -> bool {
        self.database.is_some()
    }

    pub fn inflection(&self) -> InflectionEngine {
        self.inflection
    }

    fn orchestrator(&self) -> Result<&PhraseOrchestrator> {
        self.orchestrator.as_ref().ok_or_else(|| {
            warn!("Request needs the tagger, which is not loaded");
            GhostwriterError::unavailable("NLP service is unavailable")
        })
    }

    /// Identification of the lexical database.
    pub fn database_info(&self) -> Result<DatabaseInfo> {
        self.database
            .as_ref()
            .map(|db| db.info())
            .ok_or_else(|| GhostwriterError::unavailable("Lexical database is unavailable"))
    }

    /// Synonyms for every eligible word of a selection.
    pub fn synonyms_for_phrase(&self, text: &str, start: i64, end: i64) -> Result<Vec<WordSynonymResult>> {
        self.orchestrator()?.resolve_phrase(text, start, end)
    }

    /// Synonyms for one selected word.
    pub fn synonyms_for_word(&self, text: &str, start: i64, end: i64, word: &str) -> Result<WordResolution> {
        self.orchestrator()?.resolve_word(text, start, end, word)
    }

    /// Grammatical context of one selected word.
    pub fn context(&self, text: &str, start: i64, end: i64, word: &str) -> Result<ContextInfo> {
        span::resolve_context(self.orchestrator()?.tagger(), text, start, end, word)
    }

    pub fn split_text(&self, text: &str, start: i64, end: i64, word: &str) -> Result<SentenceSplit> {
        self.orchestrator()?.split_text(text, start, end, word)
    }

    /// Custom and dictionary senses of a word, without context.
    pub fn lookup(&self, word: &str, pos: Option<&str>) -> Result<Vec<Sense>> {
        self.resolver.get_synonyms(word, pos)
    }

    /// Inflect a base form for a coarse POS and a fine tag.
    pub fn inflect(&self, word: &str, pos: &str, tag: &str) -> Option<String> {
        self.inflection.inflect_tag(word, pos, tag)
    }

    /// Word frequency with the configured n-gram size and word length.
    pub fn word_frequency(&self, input: &FrequencyInput) -> Result<(usize, WordFrequency)> {
        frequency::text_stemming(input, &self.config.frequency_options())
    }

    /// Register synonyms for a word; returns those actually added.
    pub fn add_custom_synonyms(&self, word: &str, synonyms: &[String]) -> Result<Vec<String>> {
        if word.trim().is_empty() {
            return Err(GhostwriterError::invalid_input("word must not be empty"));
        }
        let added = self.custom.register_synonyms(word, synonyms);
        info!("Added {} custom synonym(s) for '{}'", added.len(), word.trim());
        Ok(added)
    }

    pub fn custom_entry(&self, word: &str) -> Result<CustomEntry> {
        self.custom.entry(word).ok_or_else(|| {
            GhostwriterError::not_found(format!("No custom synonyms found for word '{word}'."))
        })
    }

    pub fn delete_custom_entry(&self, word: &str) -> Result<()> {
        self.custom.delete_entry(word)?;
        info!("Deleted custom synonyms for '{word}'");
        Ok(())
    }

    pub fn custom_store(&self) -> &CustomSynonymStore {
        &self.custom
    }
}
