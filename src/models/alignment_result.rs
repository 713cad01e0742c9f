use crate::constants::EMPTY_ALIGNMENT_PLACEHOLDER;
use crate::models::{TranscriptionError, TranscriptionErrorType};
use crate::types::{WerScore, WordRef};

/// The outcome of aligning one reference against one hypothesis.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentResult {
    score: WerScore,
    errors: Vec<TranscriptionError>,
}

impl AlignmentResult {
    /// Builds a result from a complete alignment path, deriving the score from it.
    ///
    /// The score is the number of non-correct steps divided by the reference length. With an
    /// empty reference there is nothing to divide by, so the score is the number of inserted
    /// words instead (or `0.0` when both sides are empty).
    pub fn from_errors(errors: Vec<TranscriptionError>) -> Self {
        let error_count = errors.iter().filter(|error| error.is_error()).count();
        let reference_len = errors
            .iter()
            .filter(|error| error.reference_word().is_some())
            .count();

        let score = if reference_len > 0 {
            error_count as WerScore / reference_len as WerScore
        } else {
            error_count as WerScore
        };

        Self { score, errors }
    }

    pub fn score(&self) -> WerScore {
        self.score
    }

    /// The ordered alignment path, from the first word to the last.
    pub fn errors(&self) -> &[TranscriptionError] {
        &self.errors
    }

    /// Number of steps which are not `correct`.
    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|error| error.is_error()).count()
    }

    pub fn count_by_type(&self, error_type: TranscriptionErrorType) -> usize {
        self.errors
            .iter()
            .filter(|error| error.error_type() == error_type)
            .count()
    }

    /// Length of the preprocessed reference this result was scored against.
    pub fn reference_len(&self) -> usize {
        self.reference_words().len()
    }

    /// Reconstructs the preprocessed reference from the path.
    pub fn reference_words(&self) -> Vec<&WordRef> {
        self.errors
            .iter()
            .filter_map(|error| error.reference_word())
            .collect()
    }

    /// Reconstructs the preprocessed (converted) hypothesis from the path.
    pub fn hypothesis_words(&self) -> Vec<&WordRef> {
        self.errors
            .iter()
            .filter_map(|error| error.hypothesis_word())
            .collect()
    }

    /// Renders the path as two equal-width lines: `(reference, hypothesis)`.
    pub fn format(&self) -> (String, String) {
        format_errors(&self.errors)
    }
}

/// Joins the textual form of each step into a reference line and a hypothesis line.
pub fn format_errors(errors: &[TranscriptionError]) -> (String, String) {
    if errors.is_empty() {
        return (
            EMPTY_ALIGNMENT_PLACEHOLDER.to_string(),
            EMPTY_ALIGNMENT_PLACEHOLDER.to_string(),
        );
    }

    let (reference_parts, hypothesis_parts): (Vec<String>, Vec<String>) =
        errors.iter().map(|error| error.to_text()).unzip();

    (reference_parts.join(" "), hypothesis_parts.join(" "))
}
