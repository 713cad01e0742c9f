use crate::models::FileResult;
use crate::types::UtteranceId;
use std::fmt;

/// The aligned reference and hypothesis lines of one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffBlock {
    pub utterance_id: UtteranceId,
    pub reference_line: String,
    pub hypothesis_line: String,
}

impl fmt::Display for DiffBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{id} {}\n{id} {}",
            self.reference_line,
            self.hypothesis_line,
            id = self.utterance_id
        )
    }
}

/// Renders a two-line diff per utterance, sorted by utterance id.
///
/// When `include_correct_utterances` is false, utterances with a zero score are left out.
pub fn format_diff(file_result: &FileResult, include_correct_utterances: bool) -> Vec<DiffBlock> {
    file_result
        .sorted_utterances()
        .into_iter()
        .filter(|(_, utterance)| include_correct_utterances || utterance.alignment.score() != 0.0)
        .map(|(utterance_id, utterance)| {
            let (reference_line, hypothesis_line) = utterance.alignment.format();

            DiffBlock {
                utterance_id: utterance_id.clone(),
                reference_line,
                hypothesis_line,
            }
        })
        .collect()
}
