use crate::models::{AlignmentEngine, AlignmentResult, EquivalenceResolver, WerConfig};
use crate::types::{Transcription, TranscriptionMap, UtteranceId, WerScore};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::collections::HashMap;

/// The hypothesis side of one utterance: a single transcription, or n-best candidates.
#[derive(Debug, Clone, PartialEq)]
pub enum Hypotheses {
    Single(Transcription),
    NBest(Vec<Transcription>),
}

/// One utterance to align.
#[derive(Debug, Clone, PartialEq)]
pub struct UtterancePair {
    pub utterance_id: UtteranceId,
    pub reference: Transcription,
    pub hypotheses: Hypotheses,
}

impl UtterancePair {
    pub fn single(utterance_id: &str, reference: &str, hypothesis: &str) -> Self {
        Self {
            utterance_id: utterance_id.to_string(),
            reference: reference.to_string(),
            hypotheses: Hypotheses::Single(hypothesis.to_string()),
        }
    }

    pub fn nbest(utterance_id: &str, reference: &str, hypotheses: &[&str]) -> Self {
        Self {
            utterance_id: utterance_id.to_string(),
            reference: reference.to_string(),
            hypotheses: Hypotheses::NBest(hypotheses.iter().map(|h| h.to_string()).collect()),
        }
    }
}

/// An aligned utterance. In n-best mode `hypothesis` is the winning candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct UtteranceResult {
    pub reference: Transcription,
    pub hypothesis: Transcription,
    pub alignment: AlignmentResult,
}

/// Per-utterance results for a whole transcription set, plus the length-weighted score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileResult {
    score: WerScore,
    utterances: HashMap<UtteranceId, UtteranceResult>,
}

impl FileResult {
    /// Wraps per-utterance results, computing the aggregate score.
    ///
    /// The aggregate is `Σ(score × reference length) / Σ reference length`, i.e. total errors
    /// over total reference words, not the mean of per-utterance scores. Utterances with an
    /// empty reference carry no weight. With no reference words at all the score is `0.0`.
    pub fn from_utterances(utterances: HashMap<UtteranceId, UtteranceResult>) -> Self {
        let (weighted_errors, total_len) =
            utterances
                .values()
                .fold((0.0, 0usize), |(weighted_errors, total_len), utterance| {
                    let reference_len = utterance.alignment.reference_len();
                    (
                        weighted_errors + utterance.alignment.score() * reference_len as WerScore,
                        total_len + reference_len,
                    )
                });

        let score = if total_len > 0 {
            weighted_errors / total_len as WerScore
        } else {
            0.0
        };

        Self { score, utterances }
    }

    pub fn score(&self) -> WerScore {
        self.score
    }

    pub fn utterances(&self) -> &HashMap<UtteranceId, UtteranceResult> {
        &self.utterances
    }

    pub fn get(&self, utterance_id: &str) -> Option<&UtteranceResult> {
        self.utterances.get(utterance_id)
    }

    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    /// Utterances ordered by id, for deterministic reporting.
    pub fn sorted_utterances(&self) -> Vec<(&UtteranceId, &UtteranceResult)> {
        let mut sorted: Vec<_> = self.utterances.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        sorted
    }
}

/// Runs the alignment engine over batches of utterances.
pub struct Aggregator<'a> {
    engine: AlignmentEngine<'a>,
}

impl<'a> Aggregator<'a> {
    pub fn new(resolver: &'a EquivalenceResolver, config: &WerConfig) -> Self {
        let engine = AlignmentEngine::new(resolver, config.equivalence_groups)
            .with_conversions(config.apply_conversions);

        Self { engine }
    }

    /// Aligns every pair (in parallel) and reduces the results into a `FileResult`.
    ///
    /// If an utterance id repeats, the last occurrence wins.
    pub fn align_batch(&self, pairs: Vec<UtterancePair>) -> FileResult {
        info!("Aligning {} utterances...", pairs.len());

        let results: Vec<(UtteranceId, UtteranceResult)> = pairs
            .into_par_iter()
            .map(|pair| {
                let utterance_result = self.align_pair(&pair);
                (pair.utterance_id, utterance_result)
            })
            .collect();

        let mut utterances = HashMap::with_capacity(results.len());
        for (utterance_id, utterance_result) in results {
            if utterances
                .insert(utterance_id.clone(), utterance_result)
                .is_some()
            {
                warn!("Duplicate utterance id {:?}; keeping the last one", utterance_id);
            }
        }

        let file_result = FileResult::from_utterances(utterances);
        info!("Aggregate WER: {:.4}", file_result.score());

        file_result
    }

    pub fn align_pair(&self, pair: &UtterancePair) -> UtteranceResult {
        match &pair.hypotheses {
            Hypotheses::Single(hypothesis) => UtteranceResult {
                reference: pair.reference.clone(),
                hypothesis: hypothesis.clone(),
                alignment: self.engine.align(&pair.reference, hypothesis),
            },
            Hypotheses::NBest(candidates) => {
                let (hypothesis, alignment) = self.select_best(&pair.reference, candidates);
                debug!(
                    "Utterance {:?}: best of {} candidates scored {:.4}",
                    pair.utterance_id,
                    candidates.len(),
                    alignment.score()
                );

                UtteranceResult {
                    reference: pair.reference.clone(),
                    hypothesis,
                    alignment,
                }
            }
        }
    }

    /// Lowest score wins; the earliest candidate wins ties. No candidates aligns against an
    /// empty hypothesis.
    fn select_best(
        &self,
        reference: &str,
        candidates: &[Transcription],
    ) -> (Transcription, AlignmentResult) {
        let mut best: Option<(Transcription, AlignmentResult)> = None;

        for candidate in candidates {
            let alignment = self.engine.align(reference, candidate);

            let is_better = match &best {
                Some((_, best_alignment)) => alignment.score() < best_alignment.score(),
                None => true,
            };

            if is_better {
                best = Some((candidate.clone(), alignment));
            }
        }

        best.unwrap_or_else(|| (String::new(), self.engine.align(reference, "")))
    }
}

/// Pairs reference and hypothesis transcriptions by utterance id, sorted by id.
///
/// Ids present on only one side are dropped. With `partial`, an unmatched reference id may
/// match the single hypothesis id which contains it (or which it contains); the shorter of the
/// two ids is kept. Ambiguous partial matches are dropped.
///
/// With `nbest`, every hypothesis transcription for the id becomes a candidate; otherwise only
/// the first one is used.
pub fn align_transcriptions(
    references: &TranscriptionMap,
    hypotheses: &TranscriptionMap,
    partial: bool,
    nbest: bool,
) -> Vec<UtterancePair> {
    let mut reference_ids: Vec<&UtteranceId> = references.keys().collect();
    reference_ids.sort();

    let mut pairs = Vec::with_capacity(reference_ids.len());

    for reference_id in reference_ids {
        let Some(reference) = references[reference_id].first() else {
            continue;
        };

        let matched = match hypotheses.get_key_value(reference_id) {
            Some(entry) => Some(entry),
            None if partial => find_partial_match(reference_id, hypotheses),
            None => None,
        };

        let Some((hypothesis_id, candidates)) = matched else {
            debug!("No hypothesis for utterance {:?}; skipping", reference_id);
            continue;
        };

        let utterance_id = if reference_id.len() <= hypothesis_id.len() {
            reference_id
        } else {
            hypothesis_id
        };

        let hypothesis_side = if nbest {
            Hypotheses::NBest(candidates.clone())
        } else {
            Hypotheses::Single(candidates.first().cloned().unwrap_or_default())
        };

        pairs.push(UtterancePair {
            utterance_id: utterance_id.clone(),
            reference: reference.clone(),
            hypotheses: hypothesis_side,
        });
    }

    pairs.sort_by(|a, b| a.utterance_id.cmp(&b.utterance_id));

    pairs
}

fn find_partial_match<'m>(
    reference_id: &str,
    hypotheses: &'m TranscriptionMap,
) -> Option<(&'m UtteranceId, &'m Vec<Transcription>)> {
    let matches: Vec<_> = hypotheses
        .iter()
        .filter(|(hypothesis_id, _)| {
            hypothesis_id.contains(reference_id) || reference_id.contains(hypothesis_id.as_str())
        })
        .collect();

    match matches.len() {
        0 => None,
        1 => Some(matches[0]),
        count => {
            warn!(
                "Utterance id {:?} partially matches {} hypothesis ids; skipping",
                reference_id, count
            );
            None
        }
    }
}
