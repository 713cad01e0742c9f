pub mod aggregator;
pub use aggregator::{
    align_transcriptions, Aggregator, FileResult, Hypotheses, UtterancePair, UtteranceResult,
};

pub mod alignment_engine;
pub use alignment_engine::AlignmentEngine;

pub mod alignment_result;
pub use alignment_result::{format_errors, AlignmentResult};

pub mod config;
pub use config::WerConfig;

pub mod diff_formatter;
pub use diff_formatter::{format_diff, DiffBlock};

pub mod equivalence_resolver;
pub use equivalence_resolver::{
    ConversionTable, EquivalenceGroup, EquivalenceGroups, EquivalenceResolver,
};

pub mod error;
pub use error::Error;

pub mod error_breakdown;
pub use error_breakdown::{breakdown, BreakdownKey, ErrorBreakdown};

pub mod three_way_comparison;
pub use three_way_comparison::{
    compare_three_way, compare_three_way_full, ThreeWayComparison, ThreeWayEntry, Winner,
};

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod transcription_error;
pub use transcription_error::{TranscriptionError, TranscriptionErrorType};

pub mod transcription_reader;
pub use transcription_reader::{read_transcriptions, read_transcriptions_from_path, FileFormat};
