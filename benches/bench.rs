//! Criterion benchmarks for Ghostwriter.
//!
//! Covers the request paths that run per keystroke in the editor:
//! - Tagging
//! - Phrase synonym resolution
//! - Inflection
//! - Word frequency

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ghostwriter::custom::CustomSynonymStore;
use ghostwriter::frequency::{FrequencyInput, FrequencyOptions, text_stemming};
use ghostwriter::inflection::InflectionEngine;
use ghostwriter::lexical::LexicalDatabase;
use ghostwriter::lexical::json::JsonThesaurus;
use ghostwriter::phrase::PhraseOrchestrator;
use ghostwriter::synonym::{ResolverOptions, SynonymResolver};
use ghostwriter::tagger::Tagger;
use ghostwriter::tagger::rules::RuleTagger;

const TEXT: &str = "Instead he was smiling at a rather severe-looking woman who was wearing square glasses exactly the shape of the markings the cat had had around its eyes.";

/// Generate rows of editor text for the frequency benchmark.
fn generate_rows(count: usize) -> String {
    let sentences = [
        "The quick brown fox jumps over the lazy dog.",
        "Happy writers write happily while the editors are editing.",
        "Dogs were running around the garden with larger sticks.",
        "She looked at the severe clouds and walked home quickly.",
    ];
    (0..count)
        .map(|i| sentences[i % sentences.len()])
        .collect::<Vec<_>>()
        .join("\n")
}

fn orchestrator() -> PhraseOrchestrator {
    let database: Arc<dyn LexicalDatabase> = Arc::new(JsonThesaurus::embedded().unwrap());
    let resolver = SynonymResolver::new(
        Arc::new(CustomSynonymStore::new()),
        Some(database),
        ResolverOptions::default(),
    );
    PhraseOrchestrator::new(Arc::new(RuleTagger::new()), resolver, InflectionEngine::new())
}

fn bench_tagging(c: &mut Criterion) {
    let tagger = RuleTagger::new();
    let mut group = c.benchmark_group("tagging");

    group.bench_function("tag_sentence", |b| {
        b.iter(|| black_box(tagger.tag(black_box(TEXT)).unwrap()))
    });

    group.finish();
}

fn bench_synonyms(c: &mut Criterion) {
    let orchestrator = orchestrator();
    let mut group = c.benchmark_group("synonyms");

    group.bench_function("resolve_phrase", |b| {
        b.iter(|| black_box(orchestrator.resolve_phrase(black_box(TEXT), 28, 55).unwrap()))
    });
    group.bench_function("resolve_word", |b| {
        b.iter(|| black_box(orchestrator.resolve_word(black_box(TEXT), 50, 55, "woman").unwrap()))
    });

    group.finish();
}

fn bench_inflection(c: &mut Criterion) {
    let engine = InflectionEngine::new();
    let words = ["write", "take", "child", "large", "look", "give chase"];
    let tags = [("VERB", "VBD"), ("VERB", "VBG"), ("NOUN", "NNS"), ("ADJ", "JJS")];
    let mut group = c.benchmark_group("inflection");

    group.throughput(Throughput::Elements((words.len() * tags.len()) as u64));
    group.bench_function("inflect_tag", |b| {
        b.iter(|| {
            for word in &words {
                for (pos, tag) in &tags {
                    black_box(engine.inflect_tag(word, pos, tag));
                }
            }
        })
    });

    group.finish();
}

fn bench_frequency(c: &mut Criterion) {
    let input = FrequencyInput::from(generate_rows(1000).as_str());
    let options = FrequencyOptions::default();
    let mut group = c.benchmark_group("frequency");
    group.sample_size(20);

    group.throughput(Throughput::Elements(1000));
    group.bench_function("text_stemming_1000_rows", |b| {
        b.iter(|| black_box(text_stemming(black_box(&input), &options).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tagging,
    bench_synonyms,
    bench_inflection,
    bench_frequency
);
criterion_main!(benches);
