use crate::models::{
    AlignmentResult, EquivalenceGroups, EquivalenceResolver, Tokenizer, TranscriptionError,
};
use crate::types::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Start,
    Correct,
    Substitution,
    Insertion,
    Deletion,
}

/// Computes minimum-edit word alignments between a reference and a hypothesis.
///
/// The engine only reads its resolver and tokenizer, so a single instance can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct AlignmentEngine<'a> {
    resolver: &'a EquivalenceResolver,
    tokenizer: Tokenizer,
    enabled_groups: EquivalenceGroups,
    apply_conversions: bool,
}

impl<'a> AlignmentEngine<'a> {
    pub fn new(resolver: &'a EquivalenceResolver, enabled_groups: EquivalenceGroups) -> Self {
        Self {
            resolver,
            tokenizer: Tokenizer::default(),
            enabled_groups,
            apply_conversions: true,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_conversions(mut self, apply_conversions: bool) -> Self {
        self.apply_conversions = apply_conversions;
        self
    }

    /// Lowercases and splits both texts, drops ignorables from both, then expands every
    /// hypothesis word through the conversion table. The order of these steps is fixed.
    pub fn preprocess(&self, reference: &str, hypothesis: &str) -> (Vec<Word>, Vec<Word>) {
        let reference_words = self.tokenizer.tokenize(reference);
        let hypothesis_words = self.tokenizer.tokenize(hypothesis);

        if !self.apply_conversions {
            return (reference_words, hypothesis_words);
        }

        let converted_hypothesis_words = hypothesis_words
            .iter()
            .flat_map(|word| self.resolver.convert(word))
            .collect();

        (reference_words, converted_hypothesis_words)
    }

    /// Aligns two raw transcriptions.
    pub fn align(&self, reference: &str, hypothesis: &str) -> AlignmentResult {
        let (reference_words, hypothesis_words) = self.preprocess(reference, hypothesis);

        self.align_words(&reference_words, &hypothesis_words)
    }

    /// Aligns two already preprocessed word sequences.
    ///
    /// On equal cost, a substitution is preferred over an insertion, and an insertion over a
    /// deletion. Equivalent words always align as `correct`.
    pub fn align_words(&self, reference: &[Word], hypothesis: &[Word]) -> AlignmentResult {
        if reference.is_empty() {
            let insertions = hypothesis
                .iter()
                .map(|word| TranscriptionError::insertion(0, word))
                .collect();

            return AlignmentResult::from_errors(insertions);
        }

        let cols = hypothesis.len() + 1;
        let idx = |i: usize, j: usize| i * cols + j;

        let mut costs = vec![0usize; (reference.len() + 1) * cols];
        let mut steps = vec![Step::Start; costs.len()];

        for i in 1..=reference.len() {
            costs[idx(i, 0)] = i;
            steps[idx(i, 0)] = Step::Deletion;
        }

        for j in 1..=hypothesis.len() {
            costs[idx(0, j)] = j;
            steps[idx(0, j)] = Step::Insertion;
        }

        for i in 1..=reference.len() {
            for j in 1..=hypothesis.len() {
                let cell = idx(i, j);

                if self.resolver.are_equivalent(
                    &reference[i - 1],
                    &hypothesis[j - 1],
                    self.enabled_groups,
                ) {
                    costs[cell] = costs[idx(i - 1, j - 1)];
                    steps[cell] = Step::Correct;
                    continue;
                }

                // Candidates in tie-break order. Only a strictly lower cost displaces an
                // earlier one.
                let candidates = [
                    (Step::Substitution, costs[idx(i - 1, j - 1)] + 1),
                    (Step::Insertion, costs[idx(i, j - 1)] + 1),
                    (Step::Deletion, costs[idx(i - 1, j)] + 1),
                ];

                let (best_step, best_cost) = candidates[1..]
                    .iter()
                    .fold(candidates[0], |best, &candidate| {
                        if candidate.1 < best.1 {
                            candidate
                        } else {
                            best
                        }
                    });

                costs[cell] = best_cost;
                steps[cell] = best_step;
            }
        }

        let mut path = Vec::with_capacity(reference.len() + hypothesis.len());
        let (mut i, mut j) = (reference.len(), hypothesis.len());

        while i > 0 || j > 0 {
            match steps[idx(i, j)] {
                Step::Correct => {
                    path.push(TranscriptionError::correct(
                        i - 1,
                        &reference[i - 1],
                        &hypothesis[j - 1],
                    ));
                    i -= 1;
                    j -= 1;
                }
                Step::Substitution => {
                    path.push(TranscriptionError::substitution(
                        i - 1,
                        &reference[i - 1],
                        &hypothesis[j - 1],
                    ));
                    i -= 1;
                    j -= 1;
                }
                Step::Insertion => {
                    path.push(TranscriptionError::insertion(i, &hypothesis[j - 1]));
                    j -= 1;
                }
                Step::Deletion => {
                    path.push(TranscriptionError::deletion(i - 1, &reference[i - 1]));
                    i -= 1;
                }
                Step::Start => break,
            }
        }

        path.reverse();

        AlignmentResult::from_errors(path)
    }
}
