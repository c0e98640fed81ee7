//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{GhostwriterArgs, OutputFormat};
use crate::error::Result;
use crate::frequency::StemBucket;
use crate::phrase::WordSynonymResult;
use crate::span::ContextInfo;
use crate::synonym::{Sense, SynonymGroup};

/// Results that can print themselves for a terminal.
pub trait HumanOutput {
    fn print_human(&self);
}

/// Result of the `synonyms` command.
#[derive(Debug, Serialize)]
pub struct PhraseResults {
    pub phrase: String,
    pub results: Vec<WordSynonymResult>,
}

/// Result of the `lookup` command.
#[derive(Debug, Serialize)]
pub struct LookupResults {
    pub word: String,
    pub senses: Vec<Sense>,
}

/// Result of the `inflect` command.
#[derive(Debug, Serialize)]
pub struct InflectionResult {
    pub word: String,
    pub pos: String,
    pub tag: String,
    pub inflected: Option<String>,
}

/// Result of the `frequency` command.
#[derive(Debug, Serialize)]
pub struct FrequencyResults {
    pub n_total_rows: usize,
    pub n_keys: usize,
    pub duration_ms: u64,
    pub top: Vec<StemBucket>,
}

fn print_groups(groups: &[SynonymGroup]) {
    for group in groups {
        let pos = group.wordnet_pos.as_deref().unwrap_or("-");
        println!("  [{pos}] {}", group.definition);
        let words: Vec<String> = group
            .synonyms
            .iter()
            .map(|s| {
                let marker = if s.is_custom { "*" } else { "" };
                if s.inflected_form == s.base_form {
                    format!("{}{marker}", s.inflected_form)
                } else {
                    format!("{} ({}){marker}", s.inflected_form, s.base_form)
                }
            })
            .collect();
        println!("      {}", words.join(", "));
    }
}

impl HumanOutput for PhraseResults {
    fn print_human(&self) {
        if self.results.is_empty() {
            println!("No words with synonyms found in '{}'.", self.phrase);
            return;
        }
        for result in &self.results {
            println!();
            println!(
                "{} [{}-{}] {} {}",
                result.original_word,
                result.original_indices.start,
                result.original_indices.end,
                result.context_info.pos.as_str(),
                result.context_info.grammatical_form
            );
            println!("─────────────");
            print_groups(&result.synonym_groups);
        }
    }
}

impl HumanOutput for ContextInfo {
    fn print_human(&self) {
        println!("word:       {}", self.word);
        println!("lemma:      {}", self.lemma);
        println!("pos/tag:    {} {}", self.pos.as_str(), self.tag);
        println!("dependency: {}", self.dependency);
        println!("sentence:   {}", self.context_sentence);
        println!("window:     {}", self.context_words.join(" "));
    }
}

impl HumanOutput for LookupResults {
    fn print_human(&self) {
        if self.senses.is_empty() {
            println!("No senses found for '{}'.", self.word);
            return;
        }
        for (i, sense) in self.senses.iter().enumerate() {
            let pos = sense.pos().unwrap_or("-");
            let custom = if sense.is_custom() { " (custom)" } else { "" };
            println!("{}. [{pos}] {}{custom}", i + 1, sense.definition());
            let words: Vec<&str> = sense.synonyms().iter().map(|s| s.synonym.as_str()).collect();
            println!("   {}", words.join(", "));
            for example in sense.examples() {
                println!("   \"{example}\"");
            }
        }
    }
}

impl HumanOutput for InflectionResult {
    fn print_human(&self) {
        match &self.inflected {
            Some(inflected) => println!("{} {}/{} -> {inflected}", self.word, self.pos, self.tag),
            None => println!("{} has no {}/{} form", self.word, self.pos, self.tag),
        }
    }
}

impl HumanOutput for FrequencyResults {
    fn print_human(&self) {
        for bucket in &self.top {
            let forms: Vec<&str> = bucket.offsets_array.iter().map(|o| o.word.as_str()).collect();
            let mut unique = forms.clone();
            unique.sort_unstable();
            unique.dedup();
            println!("{:>5}  {:<24} {}", bucket.count, bucket.word_prefix, unique.join(", "));
        }
        println!();
        println!("Rows: {}, keys: {}", self.n_total_rows, self.n_keys);
        println!("Time: {}ms", self.duration_ms);
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &GhostwriterArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &GhostwriterArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
