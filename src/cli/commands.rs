//! Command implementations for the Ghostwriter CLI.

use std::fs;
use std::io::{self, Read};
use std::sync::Arc;
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AppConfig;
use crate::error::Result;
use crate::frequency::FrequencyInput;
use crate::server::Server;
use crate::service::ThesaurusService;

/// Execute a CLI command with an already validated configuration.
pub fn execute_command(args: GhostwriterArgs, config: AppConfig) -> Result<()> {
    match &args.command {
        Command::Serve(_) => serve(config),
        Command::Synonyms(span) => synonyms(span, &config, &args),
        Command::Context(word_span) => context(word_span, &config, &args),
        Command::Lookup(lookup_args) => lookup(lookup_args, &config, &args),
        Command::Inflect(inflect_args) => inflect(inflect_args, &config, &args),
        Command::Frequency(frequency_args) => frequency(frequency_args, &config, &args),
    }
}

/// Run the HTTP server until interrupted.
fn serve(config: AppConfig) -> Result<()> {
    let service = Arc::new(ThesaurusService::from_config(&config));
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(Server::new(service).serve())
}

fn synonyms(span: &SpanArgs, config: &AppConfig, cli_args: &GhostwriterArgs) -> Result<()> {
    let service = ThesaurusService::from_config(config);
    let results = service.synonyms_for_phrase(&span.text, span.start, span.end)?;
    let phrase: String = span
        .text
        .chars()
        .skip(span.start.max(0) as usize)
        .take((span.end - span.start).max(0) as usize)
        .collect();

    output_result(
        &format!("Synonyms for {} word(s)", results.len()),
        &PhraseResults { phrase, results },
        cli_args,
    )
}

fn context(word_span: &WordSpanArgs, config: &AppConfig, cli_args: &GhostwriterArgs) -> Result<()> {
    let service = ThesaurusService::from_config(config);
    let span = &word_span.span;
    let context = service.context(&span.text, span.start, span.end, &word_span.word())?;
    output_result("Context", &context, cli_args)
}

fn lookup(lookup_args: &LookupArgs, config: &AppConfig, cli_args: &GhostwriterArgs) -> Result<()> {
    let service = ThesaurusService::from_config(config);
    let senses = service.lookup(&lookup_args.word, lookup_args.pos.as_deref())?;
    output_result(
        &format!("{} sense(s) of '{}'", senses.len(), lookup_args.word),
        &LookupResults {
            word: lookup_args.word.clone(),
            senses,
        },
        cli_args,
    )
}

fn inflect(inflect_args: &InflectArgs, config: &AppConfig, cli_args: &GhostwriterArgs) -> Result<()> {
    let service = ThesaurusService::new(config.clone(), None, None);
    let pos = inflect_args.pos();
    let inflected = service.inflect(&inflect_args.word, pos, &inflect_args.tag);
    output_result(
        "Inflection",
        &InflectionResult {
            word: inflect_args.word.clone(),
            pos: pos.to_string(),
            tag: inflect_args.tag.clone(),
            inflected,
        },
        cli_args,
    )
}

fn frequency(frequency_args: &FrequencyArgs, config: &AppConfig, cli_args: &GhostwriterArgs) -> Result<()> {
    let text = match &frequency_args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let service = ThesaurusService::new(config.clone(), None, None);
    let start_time = Instant::now();
    let (n_total_rows, frequency) = service.word_frequency(&FrequencyInput::from(text.as_str()))?;
    let duration = start_time.elapsed();
    info!("Word frequency of {n_total_rows} rows in {:.3}s", duration.as_secs_f64());

    let n_keys = frequency.len();
    let mut top: Vec<_> = frequency.into_values().collect();
    top.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word_prefix.cmp(&b.word_prefix)));
    top.truncate(frequency_args.top);

    output_result(
        "Word frequency",
        &FrequencyResults {
            n_total_rows,
            n_keys,
            duration_ms: duration.as_millis() as u64,
            top,
        },
        cli_args,
    )
}
