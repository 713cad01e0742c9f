use crate::models::{FileResult, TranscriptionErrorType};
use crate::types::{ErrorCount, Word};
use crate::utils::sort_counts;
use std::collections::HashMap;
use std::fmt;

/// What an error is tallied under: a single word, or a `(reference, hypothesis)` pair for
/// non-aggregated substitutions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BreakdownKey {
    Word(Word),
    Pair(Word, Word),
}

impl BreakdownKey {
    pub fn word(word: &str) -> Self {
        BreakdownKey::Word(word.to_string())
    }

    pub fn pair(reference_word: &str, hypothesis_word: &str) -> Self {
        BreakdownKey::Pair(reference_word.to_string(), hypothesis_word.to_string())
    }
}

impl fmt::Display for BreakdownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakdownKey::Word(word) => write!(f, "{}", word),
            BreakdownKey::Pair(reference_word, hypothesis_word) => {
                write!(f, "({}, {})", reference_word, hypothesis_word)
            }
        }
    }
}

/// Counts of every non-correct error across a `FileResult`, grouped by error type.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBreakdown {
    counts: HashMap<TranscriptionErrorType, HashMap<BreakdownKey, ErrorCount>>,
}

impl ErrorBreakdown {
    /// Insertions are keyed by the hypothesis word, deletions by the reference word.
    /// Substitutions are keyed by the reference word when `aggregate_substitutions` is set,
    /// otherwise by the `(reference, hypothesis)` pair.
    pub fn from_file_result(file_result: &FileResult, aggregate_substitutions: bool) -> Self {
        let mut counts: HashMap<TranscriptionErrorType, HashMap<BreakdownKey, ErrorCount>> =
            TranscriptionErrorType::ERRORS
                .iter()
                .map(|error_type| (*error_type, HashMap::new()))
                .collect();

        for utterance in file_result.utterances().values() {
            for error in utterance.alignment.errors() {
                let key = match (
                    error.error_type(),
                    error.reference_word(),
                    error.hypothesis_word(),
                ) {
                    (TranscriptionErrorType::Insertion, _, Some(hypothesis_word)) => {
                        BreakdownKey::word(hypothesis_word)
                    }
                    (TranscriptionErrorType::Deletion, Some(reference_word), _) => {
                        BreakdownKey::word(reference_word)
                    }
                    (TranscriptionErrorType::Substitution, Some(reference_word), _)
                        if aggregate_substitutions =>
                    {
                        BreakdownKey::word(reference_word)
                    }
                    (
                        TranscriptionErrorType::Substitution,
                        Some(reference_word),
                        Some(hypothesis_word),
                    ) => BreakdownKey::pair(reference_word, hypothesis_word),
                    _ => continue,
                };

                *counts
                    .entry(error.error_type())
                    .or_default()
                    .entry(key)
                    .or_insert(0) += 1;
            }
        }

        Self { counts }
    }

    pub fn get(
        &self,
        error_type: TranscriptionErrorType,
    ) -> Option<&HashMap<BreakdownKey, ErrorCount>> {
        self.counts.get(&error_type)
    }

    pub fn count(&self, error_type: TranscriptionErrorType, key: &BreakdownKey) -> ErrorCount {
        self.get(error_type)
            .and_then(|counts| counts.get(key))
            .copied()
            .unwrap_or(0)
    }

    pub fn word_count(&self, error_type: TranscriptionErrorType, word: &str) -> ErrorCount {
        self.count(error_type, &BreakdownKey::word(word))
    }

    pub fn total(&self, error_type: TranscriptionErrorType) -> ErrorCount {
        self.get(error_type)
            .map(|counts| counts.values().sum())
            .unwrap_or(0)
    }

    pub fn most_common(
        &self,
        error_type: TranscriptionErrorType,
    ) -> Vec<(BreakdownKey, ErrorCount)> {
        self.get(error_type).map(sort_counts).unwrap_or_default()
    }

    /// Renders a `"<type> = <total>"` header per error type, each followed by one tab-indented
    /// `"<key>: <count>"` line per key (most common first) and a blank line.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![];

        for error_type in TranscriptionErrorType::ERRORS {
            lines.push(format!("{} = {}", error_type, self.total(error_type)));

            for (key, count) in self.most_common(error_type) {
                lines.push(format!("\t{}: {}", key, count));
            }

            lines.push(String::new());
        }

        lines
    }
}

/// Tallies every non-correct error in `file_result`.
pub fn breakdown(file_result: &FileResult, aggregate_substitutions: bool) -> ErrorBreakdown {
    ErrorBreakdown::from_file_result(file_result, aggregate_substitutions)
}
