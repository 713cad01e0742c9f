use crate::constants::{DELETION_FILLER, INSERTION_FILLER, SUBSTITUTION_MARKER};
use crate::types::{ReferencePosition, Word, WordRef};
use std::fmt;

/// The classification of a single step along an alignment path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TranscriptionErrorType {
    Correct,
    Substitution,
    Insertion,
    Deletion,
}

impl TranscriptionErrorType {
    /// The error types which count toward the score, in reporting order.
    pub const ERRORS: [TranscriptionErrorType; 3] = [
        TranscriptionErrorType::Substitution,
        TranscriptionErrorType::Insertion,
        TranscriptionErrorType::Deletion,
    ];

    pub fn is_error(self) -> bool {
        self != TranscriptionErrorType::Correct
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TranscriptionErrorType::Correct => "correct",
            TranscriptionErrorType::Substitution => "substitution",
            TranscriptionErrorType::Insertion => "insertion",
            TranscriptionErrorType::Deletion => "deletion",
        }
    }
}

impl fmt::Display for TranscriptionErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of an alignment path: what happened to a reference and/or hypothesis word.
///
/// Instances are created by the alignment engine and never mutated afterward. Equality and
/// hashing are structural, so two alignment paths can be compared directly.
///
/// `position` indexes into the preprocessed reference. For insertions it is the reference
/// index the inserted word precedes, so consecutive insertions share a position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranscriptionError {
    error_type: TranscriptionErrorType,
    position: ReferencePosition,
    reference_word: Option<Word>,
    hypothesis_word: Option<Word>,
}

impl TranscriptionError {
    pub fn correct(
        position: ReferencePosition,
        reference_word: &WordRef,
        hypothesis_word: &WordRef,
    ) -> Self {
        Self {
            error_type: TranscriptionErrorType::Correct,
            position,
            reference_word: Some(reference_word.to_string()),
            hypothesis_word: Some(hypothesis_word.to_string()),
        }
    }

    pub fn substitution(
        position: ReferencePosition,
        reference_word: &WordRef,
        hypothesis_word: &WordRef,
    ) -> Self {
        Self {
            error_type: TranscriptionErrorType::Substitution,
            position,
            reference_word: Some(reference_word.to_string()),
            hypothesis_word: Some(hypothesis_word.to_string()),
        }
    }

    pub fn insertion(position: ReferencePosition, hypothesis_word: &WordRef) -> Self {
        Self {
            error_type: TranscriptionErrorType::Insertion,
            position,
            reference_word: None,
            hypothesis_word: Some(hypothesis_word.to_string()),
        }
    }

    pub fn deletion(position: ReferencePosition, reference_word: &WordRef) -> Self {
        Self {
            error_type: TranscriptionErrorType::Deletion,
            position,
            reference_word: Some(reference_word.to_string()),
            hypothesis_word: None,
        }
    }

    pub fn error_type(&self) -> TranscriptionErrorType {
        self.error_type
    }

    pub fn position(&self) -> ReferencePosition {
        self.position
    }

    pub fn reference_word(&self) -> Option<&WordRef> {
        self.reference_word.as_deref()
    }

    pub fn hypothesis_word(&self) -> Option<&WordRef> {
        self.hypothesis_word.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.error_type.is_error()
    }

    /// Renders the step as a `(reference, hypothesis)` pair of equal display width.
    ///
    /// - Correct: both words, padded to the wider one.
    /// - Substitution: both words wrapped in `#`, padded to the wider one.
    /// - Insertion: a `+` filler on the reference side.
    /// - Deletion: a `-` filler on the hypothesis side.
    pub fn to_text(&self) -> (String, String) {
        let reference = self.reference_word().unwrap_or("");
        let hypothesis = self.hypothesis_word().unwrap_or("");
        let width = reference.chars().count().max(hypothesis.chars().count());

        match self.error_type {
            TranscriptionErrorType::Correct => (
                format!("{:<width$}", reference, width = width),
                format!("{:<width$}", hypothesis, width = width),
            ),
            TranscriptionErrorType::Substitution => (
                format!(
                    "{marker}{:<width$}{marker}",
                    reference,
                    marker = SUBSTITUTION_MARKER,
                    width = width
                ),
                format!(
                    "{marker}{:<width$}{marker}",
                    hypothesis,
                    marker = SUBSTITUTION_MARKER,
                    width = width
                ),
            ),
            TranscriptionErrorType::Insertion => (
                INSERTION_FILLER.to_string().repeat(hypothesis.chars().count()),
                hypothesis.to_string(),
            ),
            TranscriptionErrorType::Deletion => (
                reference.to_string(),
                DELETION_FILLER.to_string().repeat(reference.chars().count()),
            ),
        }
    }
}

impl fmt::Display for TranscriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}({},{})",
            self.position,
            self.error_type,
            self.reference_word().unwrap_or("None"),
            self.hypothesis_word().unwrap_or("None")
        )
    }
}
