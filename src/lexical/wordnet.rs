//! Princeton WordNet dictionary reader.
//!
//! Reads the `data.noun`, `data.verb`, `data.adj` and `data.adv` files of a
//! WordNet `dict/` directory. When the matching `index.*` files are present
//! they fix the sense order of each lemma (most frequent first); `*.exc`
//! files supply irregular base forms to [`morphy`](super::morphy).
//!
//! Data line layout:
//!
//! ```text
//! offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] p_cnt [ptr...] [frames...] | gloss
//! ```
//!
//! `w_cnt` is hexadecimal; adjective words may carry a syntactic marker such
//! as `(a)` or `(ip)`; license lines start with two spaces.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use ahash::AHashMap;
use log::{debug, info, warn};
use regex::Regex;

use crate::error::{GhostwriterError, Result};
use crate::lexical::{DatabaseInfo, DictSense, LexicalDatabase, SenseIndex, WordNetPos, lemma_key};

const FILES: [(&str, WordNetPos); 4] = [
    ("noun", WordNetPos::Noun),
    ("verb", WordNetPos::Verb),
    ("adj", WordNetPos::Adjective),
    ("adv", WordNetPos::Adverb),
];

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"WordNet (\d+(?:\.\d+)*)").unwrap_or_else(|_| unreachable!()));

/// A WordNet database loaded into memory.
#[derive(Clone, Debug)]
pub struct WordNetDatabase {
    index: SenseIndex,
    exceptions: AHashMap<WordNetPos, AHashMap<String, Vec<String>>>,
    info: DatabaseInfo,
}

impl WordNetDatabase {
    /// Load a WordNet `dict/` directory.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(GhostwriterError::config(format!(
                "WordNet directory not found: {}",
                dir.display()
            )));
        }

        let mut index = SenseIndex::new();
        let mut exceptions = AHashMap::new();
        let mut order: AHashMap<String, Vec<usize>> = AHashMap::new();
        let mut version = None;
        let mut loaded = 0;

        for (suffix, pos) in FILES {
            let data_path = dir.join(format!("data.{suffix}"));
            if !data_path.is_file() {
                warn!("Missing WordNet data file {}", data_path.display());
                continue;
            }
            let data = load_data_file(&data_path, pos, &mut index)?;
            version = version.or(data.version);
            loaded += 1;

            let index_path = dir.join(format!("index.{suffix}"));
            if index_path.is_file() {
                load_index_file(&index_path, &data.offsets, &mut order)?;
            }

            let exc_path = dir.join(format!("{suffix}.exc"));
            if exc_path.is_file() {
                exceptions.insert(pos, load_exceptions(&exc_path)?);
            }
        }

        if loaded == 0 {
            return Err(GhostwriterError::lookup(format!(
                "No WordNet data files found in {}",
                dir.display()
            )));
        }
        for (lemma, positions) in &order {
            index.set_order(lemma, positions);
        }

        let info = DatabaseInfo {
            name: "WordNet".to_string(),
            version: version.unwrap_or_else(|| "unknown".to_string()),
            lang: "en".to_string(),
            senses: index.len(),
        };
        info!(
            "Loaded WordNet {} from {}: {} synsets",
            info.version,
            dir.display(),
            info.senses
        );
        Ok(WordNetDatabase {
            index,
            exceptions,
            info,
        })
    }
}

impl LexicalDatabase for WordNetDatabase {
    fn senses(&self, word: &str) -> Result<Vec<DictSense>> {
        Ok(self.index.lookup(word))
    }

    fn has_lemma(&self, lemma: &str, pos: WordNetPos) -> bool {
        self.index.has_lemma(lemma, pos)
    }

    fn exceptions(&self, word: &str, pos: WordNetPos) -> Vec<String> {
        self.exceptions
            .get(&pos.morphological_class())
            .and_then(|table| table.get(&lemma_key(word)))
            .cloned()
            .unwrap_or_default()
    }

    fn info(&self) -> DatabaseInfo {
        self.info.clone()
    }
}

struct DataFile {
    /// Synset offset to position in the sense index
    offsets: AHashMap<u64, usize>,
    version: Option<String>,
}

fn malformed(path: &Path, number: usize, what: &str) -> GhostwriterError {
    GhostwriterError::lookup(format!(
        "Malformed line {} in {}: {what}",
        number + 1,
        path.display()
    ))
}

fn load_data_file(path: &Path, default_pos: WordNetPos, index: &mut SenseIndex) -> Result<DataFile> {
    let reader = BufReader::new(File::open(path)?);
    let mut offsets = AHashMap::new();
    let mut version = None;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with("  ") {
            if version.is_none()
                && let Some(captures) = VERSION_PATTERN.captures(&line)
            {
                version = Some(captures[1].to_string());
            }
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        let (offset, sense) = parse_data_line(&line, default_pos)
            .ok_or_else(|| malformed(path, number, "unexpected synset layout"))?;
        let position = index.insert(sense)?;
        offsets.insert(offset, position);
    }

    debug!("Read {} synsets from {}", offsets.len(), path.display());
    Ok(DataFile { offsets, version })
}

/// Parse one synset line.
pub fn parse_data_line(line: &str, default_pos: WordNetPos) -> Option<(u64, DictSense)> {
    let (fields, gloss) = line.split_once('|').unwrap_or((line, ""));
    let parts: Vec<&str> = fields.split_whitespace().collect();
    if parts.len() < 4 {
        return None;
    }

    let offset: u64 = parts[0].parse().ok()?;
    let pos = WordNetPos::from_letter(parts[2]).unwrap_or(default_pos);
    let count = usize::from_str_radix(parts[3], 16).ok()?;
    if count == 0 || parts.len() < 4 + 2 * count {
        return None;
    }
    let lemmas = (0..count)
        .map(|i| strip_marker(parts[4 + 2 * i]).to_string())
        .collect();
    let (definition, examples) = split_gloss(gloss);

    Some((
        offset,
        DictSense {
            id: format!("{offset:08}-{pos}"),
            pos,
            definition,
            examples,
            lemmas,
        },
    ))
}

/// Remove an adjective marker: `galore(ip)` to `galore`.
fn strip_marker(word: &str) -> &str {
    match word.find('(') {
        Some(open) if word.ends_with(')') => &word[..open],
        _ => word,
    }
}

/// Split a gloss into its definition and quoted examples.
pub fn split_gloss(gloss: &str) -> (String, Vec<String>) {
    let mut definitions = Vec::new();
    let mut examples = Vec::new();
    for part in gloss.split(';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if part.starts_with('"') {
            examples.push(part.trim_matches('"').to_string());
        } else {
            definitions.push(part);
        }
    }
    (definitions.join("; "), examples)
}

/// Collect per-lemma sense order from an index file.
fn load_index_file(
    path: &Path,
    offsets: &AHashMap<u64, usize>,
    order: &mut AHashMap<String, Vec<usize>>,
) -> Result<()> {
    let reader = BufReader::new(File::open(path)?);
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with("  ") || line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let synset_count: usize = parts
            .get(2)
            .and_then(|c| c.parse().ok())
            .ok_or_else(|| malformed(path, number, "missing synset count"))?;
        if parts.len() < 4 + synset_count {
            return Err(malformed(path, number, "truncated offset list"));
        }
        let positions = order.entry(parts[0].to_string()).or_default();
        for offset in &parts[parts.len() - synset_count..] {
            if let Some(&position) = offset.parse::<u64>().ok().and_then(|o| offsets.get(&o)) {
                positions.push(position);
            }
        }
    }
    Ok(())
}

fn load_exceptions(path: &Path) -> Result<AHashMap<String, Vec<String>>> {
    let reader = BufReader::new(File::open(path)?);
    let mut table: AHashMap<String, Vec<String>> = AHashMap::new();
    for line in reader.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        if let Some(inflected) = words.next() {
            table
                .entry(inflected.to_string())
                .or_default()
                .extend(words.map(str::to_string));
        }
    }
    debug!("Read {} exceptions from {}", table.len(), path.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const DATA_ADJ: &str = "  1 This software and database is being provided to you, the LICENSEE, by
  2 Princeton University under the following license.  WordNet 3.0 Copyright 2006 by Princeton University.
01148283 00 a 01 happy 0 005 = 04105068 n 0000 ! 01149494 a 0101 | enjoying or showing or marked by joy or pleasure; \"a happy smile\"; \"spent many happy days on the beach\"; \"a happy marriage\"
01148925 00 s 02 glad 0 happy 0 001 & 01148283 a 0000 | feeling happy appreciation; \"glad of the fire's warmth\"
00013887 00 a 01 galore(ip) 0 000 | in great numbers; \"apples galore\"
";

    const DATA_NOUN: &str = "07527352 00 n 03 joy 0 joyousness 0 joyfulness 0 000 | the emotion of great happiness
";

    const INDEX_ADJ: &str = "  1 license line
happy a 2 2 ! & 2 1 01148925 01148283
";

    const ADJ_EXC: &str = "happier happy\nhappiest happy\n";

    fn dictionary() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("data.adj"), DATA_ADJ).unwrap();
        fs::write(dir.path().join("data.noun"), DATA_NOUN).unwrap();
        fs::write(dir.path().join("index.adj"), INDEX_ADJ).unwrap();
        fs::write(dir.path().join("adj.exc"), ADJ_EXC).unwrap();
        dir
    }

    #[test]
    fn test_parse_data_line() {
        let (offset, sense) = parse_data_line(
            "01148925 00 s 02 glad 0 happy 0 001 & 01148283 a 0000 | feeling happy appreciation; \"glad of the fire's warmth\"",
            WordNetPos::Adjective,
        )
        .unwrap();
        assert_eq!(offset, 1148925);
        assert_eq!(sense.id, "01148925-s");
        assert_eq!(sense.pos, WordNetPos::Satellite);
        assert_eq!(sense.lemmas, vec!["glad", "happy"]);
        assert_eq!(sense.definition, "feeling happy appreciation");
        assert_eq!(sense.examples, vec!["glad of the fire's warmth"]);

        assert!(parse_data_line("garbage", WordNetPos::Noun).is_none());
        assert!(parse_data_line("00000001 00 n 05 one 0 | too few words", WordNetPos::Noun).is_none());
    }

    #[test]
    fn test_gloss_and_markers() {
        let (definition, examples) = split_gloss(" in great numbers; of a kind; \"apples galore\"");
        assert_eq!(definition, "in great numbers; of a kind");
        assert_eq!(examples, vec!["apples galore"]);
        assert_eq!(strip_marker("galore(ip)"), "galore");
        assert_eq!(strip_marker("happy"), "happy");
    }

    #[test]
    fn test_open_dictionary() {
        let dir = dictionary();
        let db = WordNetDatabase::open(dir.path()).unwrap();

        let info = db.info();
        assert_eq!(info.name, "WordNet");
        assert_eq!(info.version, "3.0");
        assert_eq!(info.senses, 4);

        let happy = db.senses("happy").unwrap();
        assert_eq!(happy.len(), 2);
        assert_eq!(happy[0].id, "01148925-s");
        assert_eq!(happy[1].examples.len(), 3);

        assert_eq!(db.senses("galore").unwrap()[0].lemmas, vec!["galore"]);
        assert_eq!(db.senses("Joy").unwrap()[0].lemmas.len(), 3);
        assert!(db.has_lemma("joy", WordNetPos::Noun));
        assert!(!db.has_lemma("joy", WordNetPos::Verb));
        assert_eq!(db.exceptions("happier", WordNetPos::Satellite), vec!["happy"]);
    }

    #[test]
    fn test_open_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(WordNetDatabase::open(dir.path().join("nope")).is_err());
        assert!(WordNetDatabase::open(dir.path()).is_err());
    }

    #[test]
    fn test_malformed_data_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("data.noun"), "not a synset\n").unwrap();
        let err = WordNetDatabase::open(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Malformed line 1"));
    }
}
