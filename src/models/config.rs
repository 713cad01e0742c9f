use crate::models::EquivalenceGroups;

/// Settings for a single comparison run. Passed once, never mutated mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WerConfig {
    /// Which equivalence classes count as matches during alignment.
    pub equivalence_groups: EquivalenceGroups,
    /// Keep only the best-scoring of several hypotheses per utterance.
    pub nbest: bool,
    /// Allow an utterance id to match an id that contains it (or is contained by it).
    pub partial_id_matching: bool,
    /// Apply the conversion table to hypothesis words before alignment.
    pub apply_conversions: bool,
}
