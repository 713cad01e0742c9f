#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod constants;
pub use constants::{
    DEFAULT_WER_CONFIG, EQUIV_MISC, EQUIV_NUMBERS, EQUIV_SPELLING, IGNORABLES, NUMBER_CONVERSIONS,
    REPORT_SECTION_SEPARATOR_WIDTH,
};
pub mod models;
pub use models::{
    align_transcriptions, breakdown, compare_three_way, compare_three_way_full, format_diff,
    format_errors, read_transcriptions, read_transcriptions_from_path, Aggregator,
    AlignmentEngine, AlignmentResult, BreakdownKey, ConversionTable, DiffBlock, EquivalenceGroup,
    EquivalenceGroups, EquivalenceResolver, Error, ErrorBreakdown, FileFormat, FileResult,
    Hypotheses, ThreeWayComparison, ThreeWayEntry, Tokenizer, TranscriptionError,
    TranscriptionErrorType, UtterancePair, UtteranceResult, WerConfig, Winner,
};
pub mod types;
mod utils;
pub use types::{
    ErrorCount, ReferencePosition, Transcription, TranscriptionMap, UtteranceId, WerScore, Word,
    WordRef,
};
pub use utils::{format_score, sort_counts};

use std::path::Path;

/// Aligns a single reference/hypothesis pair using the built-in tables and every
/// equivalence group.
pub fn wer(reference: &str, hypothesis: &str) -> AlignmentResult {
    let resolver = EquivalenceResolver::default();

    wer_with_custom_config(reference, hypothesis, &resolver, &DEFAULT_WER_CONFIG)
}

pub fn wer_with_custom_config(
    reference: &str,
    hypothesis: &str,
    resolver: &EquivalenceResolver,
    config: &WerConfig,
) -> AlignmentResult {
    AlignmentEngine::new(resolver, config.equivalence_groups)
        .with_conversions(config.apply_conversions)
        .align(reference, hypothesis)
}

/// Aligns two transcription sets keyed by utterance id. Ids missing from either side are
/// dropped.
pub fn wer_for_transcriptions(
    references: &TranscriptionMap,
    hypotheses: &TranscriptionMap,
    resolver: &EquivalenceResolver,
    config: &WerConfig,
) -> FileResult {
    let pairs = align_transcriptions(
        references,
        hypotheses,
        config.partial_id_matching,
        config.nbest,
    );

    Aggregator::new(resolver, config).align_batch(pairs)
}

/// Reads a reference and a hypothesis transcription file and aligns them.
///
/// Formats left as `None` are guessed from each file. Read failures are returned as-is.
pub fn wer_for_files(
    reference_path: &Path,
    reference_format: Option<FileFormat>,
    hypothesis_path: &Path,
    hypothesis_format: Option<FileFormat>,
    resolver: &EquivalenceResolver,
    config: &WerConfig,
) -> Result<FileResult, Error> {
    let references = read_transcriptions_from_path(reference_path, reference_format)?;
    let hypotheses = read_transcriptions_from_path(hypothesis_path, hypothesis_format)?;

    Ok(wer_for_transcriptions(
        &references,
        &hypotheses,
        resolver,
        config,
    ))
}
