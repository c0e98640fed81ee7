//! JSON thesaurus.
//!
//! ```json
//! {
//!   "name": "ghostwriter-thesaurus",
//!   "version": "1.0",
//!   "lang": "en",
//!   "synsets": [
//!     { "id": "happy.a.01", "pos": "a", "definition": "...",
//!       "examples": ["..."], "lemmas": ["happy"] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::Result;
use crate::lexical::{DatabaseInfo, DictSense, LexicalDatabase, SenseIndex, WordNetPos};

/// The thesaurus compiled into the binary.
pub const DEFAULT_THESAURUS: &str = include_str!("../../resources/thesaurus.json");

fn default_lang() -> String {
    "en".to_string()
}

#[derive(Deserialize)]
struct ThesaurusFile {
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default = "default_lang")]
    lang: String,
    synsets: Vec<DictSense>,
}

/// A thesaurus loaded from JSON.
#[derive(Clone, Debug)]
pub struct JsonThesaurus {
    index: SenseIndex,
    info: DatabaseInfo,
}

impl JsonThesaurus {
    /// Parse thesaurus JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ThesaurusFile = serde_json::from_str(json)?;
        let mut index = SenseIndex::new();
        for sense in file.synsets {
            index.insert(sense)?;
        }
        let info = DatabaseInfo {
            name: file.name,
            version: file.version,
            lang: file.lang,
            senses: index.len(),
        };
        Ok(JsonThesaurus { index, info })
    }

    /// Load a thesaurus file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let thesaurus = Self::from_json(&fs::read_to_string(path)?)?;
        info!(
            "Loaded thesaurus '{}' from {}: {} synsets",
            thesaurus.info.name,
            path.display(),
            thesaurus.info.senses
        );
        Ok(thesaurus)
    }

    /// The embedded default thesaurus.
    pub fn embedded() -> Result<Self> {
        Self::from_json(DEFAULT_THESAURUS)
    }
}

impl LexicalDatabase for JsonThesaurus {
    fn senses(&self, word: &str) -> Result<Vec<DictSense>> {
        Ok(self.index.lookup(word))
    }

    fn has_lemma(&self, lemma: &str, pos: WordNetPos) -> bool {
        self.index.has_lemma(lemma, pos)
    }

    fn info(&self) -> DatabaseInfo {
        self.info.clone()
    }
}
