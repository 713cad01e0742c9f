use crate::models::{FileResult, UtteranceResult};
use crate::types::UtteranceId;
use crate::utils::format_score;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Which of two hypothesis sets scored better on an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    A,
    B,
    Tie,
}

impl Winner {
    fn from_scores(score_a: f64, score_b: f64) -> Self {
        match score_a.partial_cmp(&score_b) {
            Some(Ordering::Less) => Winner::A,
            Some(Ordering::Greater) => Winner::B,
            _ => Winner::Tie,
        }
    }

    fn sign(self) -> char {
        match self {
            Winner::A => '<',
            Winner::B => '>',
            Winner::Tie => '=',
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::A => write!(f, "A"),
            Winner::B => write!(f, "B"),
            Winner::Tie => write!(f, "tie"),
        }
    }
}

/// The same utterance as aligned in both result sets.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreeWayEntry {
    pub utterance_id: UtteranceId,
    pub first: UtteranceResult,
    pub second: UtteranceResult,
    pub winner: Winner,
}

/// Utterances common to two result sets, ordered by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreeWayComparison {
    entries: Vec<ThreeWayEntry>,
}

impl ThreeWayComparison {
    fn collect(first: &FileResult, second: &FileResult, only_differences: bool) -> Self {
        let entries = first
            .sorted_utterances()
            .into_iter()
            .filter_map(|(utterance_id, first_utterance)| {
                let second_utterance = second.get(utterance_id)?;

                let differs = first_utterance.alignment.score()
                    != second_utterance.alignment.score()
                    || first_utterance.alignment.errors() != second_utterance.alignment.errors();

                if only_differences && !differs {
                    return None;
                }

                Some(ThreeWayEntry {
                    utterance_id: utterance_id.clone(),
                    first: first_utterance.clone(),
                    second: second_utterance.clone(),
                    winner: Winner::from_scores(
                        first_utterance.alignment.score(),
                        second_utterance.alignment.score(),
                    ),
                })
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[ThreeWayEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_results(&self) -> BTreeMap<&UtteranceId, &UtteranceResult> {
        self.entries
            .iter()
            .map(|entry| (&entry.utterance_id, &entry.first))
            .collect()
    }

    pub fn second_results(&self) -> BTreeMap<&UtteranceId, &UtteranceResult> {
        self.entries
            .iter()
            .map(|entry| (&entry.utterance_id, &entry.second))
            .collect()
    }

    pub fn winners(&self) -> BTreeMap<&UtteranceId, Winner> {
        self.entries
            .iter()
            .map(|entry| (&entry.utterance_id, entry.winner))
            .collect()
    }

    /// Renders one block per utterance:
    ///
    /// ```text
    /// utt-1
    /// winner: sys-a (0.00% < 50.00%)
    /// ref  :	the cat
    /// sys-a:	the cat
    /// sys-b:	the #dog#
    /// ```
    pub fn to_blocks(&self, label_a: &str, label_b: &str) -> Vec<String> {
        let width = label_a.chars().count().max(label_b.chars().count());
        let prefix = |label: &str| format!("{:<width$}:\t", label, width = width);

        self.entries
            .iter()
            .map(|entry| {
                let (reference_line, first_line) = entry.first.alignment.format();
                let (_, second_line) = entry.second.alignment.format();

                let best_answer = match entry.winner {
                    Winner::A => label_a,
                    Winner::B => label_b,
                    Winner::Tie => "both",
                };

                format!(
                    "{}\nwinner: {} ({} {} {})\n{}{}\n{}{}\n{}{}",
                    entry.utterance_id,
                    best_answer,
                    format_score(entry.first.alignment.score()),
                    entry.winner.sign(),
                    format_score(entry.second.alignment.score()),
                    prefix("ref"),
                    reference_line,
                    prefix(label_a),
                    first_line,
                    prefix(label_b),
                    second_line
                )
            })
            .collect()
    }
}

/// Utterances present in both result sets whose score or alignment differ.
pub fn compare_three_way(first: &FileResult, second: &FileResult) -> ThreeWayComparison {
    ThreeWayComparison::collect(first, second, true)
}

/// Every utterance present in both result sets.
pub fn compare_three_way_full(first: &FileResult, second: &FileResult) -> ThreeWayComparison {
    ThreeWayComparison::collect(first, second, false)
}
