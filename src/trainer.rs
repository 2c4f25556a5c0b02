use crate::consts::{DEFAULT_INPUT, DEFAULT_OUTPUT, MIN_PHRASE_LEN, TOP_N};
use crate::corpus::{generate_phrases, load_corpus, normalize, tokenize};
use crate::error::PfResult;
use crate::export::{build_dataset, write_dataset, ExportRecord};
use crate::frequency::PhraseCounter;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainStats {
    pub words: usize,
    pub phrases: usize,
    pub distinct_phrases: usize,
    pub exported: usize,
}

#[derive(Debug, Clone)]
pub struct TrainReport {
    pub stats: TrainStats,
    pub output: PathBuf,
    pub records: Vec<ExportRecord>,
}

/// Runs the in-memory part of training: normalize, tokenize, count and
/// select. Nothing touches the filesystem.
pub fn train_text(text: &str) -> (Vec<ExportRecord>, TrainStats) {
    info!("🧹 Cleaning and Tokenizing text...");
    let cleaned = normalize(text);
    let words = tokenize(&cleaned);
    info!("🧠 Training on {} words...", words.len());

    let phrases = generate_phrases(&words);
    let phrase_count = phrases.len();
    let counter = PhraseCounter::from_phrases(phrases);
    debug!(
        "Counted {} phrases ({} distinct)",
        counter.total(),
        counter.len()
    );

    let records = build_dataset(counter.most_common(TOP_N), MIN_PHRASE_LEN);

    let stats = TrainStats {
        words: words.len(),
        phrases: phrase_count,
        distinct_phrases: counter.len(),
        exported: records.len(),
    };
    (records, stats)
}

/// Trains on the corpus at `config.input` and writes the phrase dataset to
/// `config.output`.
///
/// If the corpus is missing, returns `InputNotFound` before anything is
/// written.
pub fn train(config: &TrainConfig) -> PfResult<TrainReport> {
    info!("📖 Reading {}...", config.input.display());
    let raw = load_corpus(&config.input)?;

    let (records, stats) = train_text(&raw);

    write_dataset(&config.output, &records)?;
    info!(
        "✅ SUCCESS: Trained model saved to {}",
        config.output.display()
    );
    info!("📊 Extracted {} predictive phrases.", stats.exported);

    Ok(TrainReport {
        stats,
        output: config.output.clone(),
        records,
    })
}
