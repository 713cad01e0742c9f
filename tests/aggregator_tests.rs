use test_utils::{assert_score_eq, transcription_map};
use wer_aligner::{
    align_transcriptions, wer_for_transcriptions, Aggregator, EquivalenceGroups,
    EquivalenceResolver, Hypotheses, UtterancePair, WerConfig, DEFAULT_WER_CONFIG,
};

fn exact_match_config() -> WerConfig {
    WerConfig {
        equivalence_groups: EquivalenceGroups::NONE,
        ..DEFAULT_WER_CONFIG
    }
}

#[cfg(test)]
mod aggregator_tests {
    use super::*;

    #[test]
    fn test_aggregate_is_length_weighted() {
        let resolver = EquivalenceResolver::default();
        let config = exact_match_config();
        let aggregator = Aggregator::new(&resolver, &config);

        let file_result = aggregator.align_batch(vec![
            // 4 reference words, 2 substitutions -> 0.5
            UtterancePair::single("short", "one two three four", "one too tree four"),
            // 6 reference words, all correct -> 0.0
            UtterancePair::single("long", "a b c d e f", "a b c d e f"),
        ]);

        assert_score_eq(file_result.get("short").unwrap().alignment.score(), 0.5);
        assert_score_eq(file_result.get("long").unwrap().alignment.score(), 0.0);
        assert_score_eq(file_result.score(), 0.2);
    }

    #[test]
    fn test_empty_batch_scores_zero() {
        let resolver = EquivalenceResolver::default();
        let aggregator = Aggregator::new(&resolver, &DEFAULT_WER_CONFIG);

        let file_result = aggregator.align_batch(vec![]);

        assert!(file_result.is_empty());
        assert_score_eq(file_result.score(), 0.0);
    }

    #[test]
    fn test_nbest_picks_lowest_score() {
        let resolver = EquivalenceResolver::default();
        let config = exact_match_config();
        let aggregator = Aggregator::new(&resolver, &config);

        let file_result = aggregator.align_batch(vec![UtterancePair::nbest(
            "utt",
            "book a room for two nights",
            &["look a room", "book a room for two nights", "book a room for too nights"],
        )]);

        let utterance = file_result.get("utt").unwrap();
        assert_eq!(utterance.hypothesis, "book a room for two nights");
        assert_score_eq(utterance.alignment.score(), 0.0);
    }

    #[test]
    fn test_nbest_keeps_first_on_ties() {
        let resolver = EquivalenceResolver::default();
        let config = exact_match_config();
        let aggregator = Aggregator::new(&resolver, &config);

        let file_result = aggregator.align_batch(vec![UtterancePair::nbest(
            "utt",
            "red green blue",
            &["red green glue", "red queen blue", "red green blue extra"],
        )]);

        let utterance = file_result.get("utt").unwrap();
        assert_eq!(utterance.hypothesis, "red green glue");
    }

    #[test]
    fn test_nbest_of_repeated_candidate_matches_single() {
        let resolver = EquivalenceResolver::default();
        let aggregator = Aggregator::new(&resolver, &DEFAULT_WER_CONFIG);

        let reference = "turn left at the 3rd light";
        let hypothesis = "turn left at 3rd lights";

        let single = aggregator.align_pair(&UtterancePair::single("utt", reference, hypothesis));
        let nbest = aggregator.align_pair(&UtterancePair::nbest(
            "utt",
            reference,
            &[hypothesis, hypothesis, hypothesis],
        ));

        assert_eq!(single, nbest);
    }

    #[test]
    fn test_nbest_without_candidates_aligns_empty_hypothesis() {
        let resolver = EquivalenceResolver::default();
        let aggregator = Aggregator::new(&resolver, &DEFAULT_WER_CONFIG);

        let utterance = aggregator.align_pair(&UtterancePair {
            utterance_id: "utt".to_string(),
            reference: "hello there".to_string(),
            hypotheses: Hypotheses::NBest(vec![]),
        });

        assert_eq!(utterance.hypothesis, "");
        assert_score_eq(utterance.alignment.score(), 1.0);
    }

    #[test]
    fn test_sorted_utterances() {
        let resolver = EquivalenceResolver::default();
        let aggregator = Aggregator::new(&resolver, &DEFAULT_WER_CONFIG);

        let file_result = aggregator.align_batch(vec![
            UtterancePair::single("c", "x", "x"),
            UtterancePair::single("a", "x", "y"),
            UtterancePair::single("b", "x", ""),
        ]);

        let ids: Vec<&str> = file_result
            .sorted_utterances()
            .into_iter()
            .map(|(utterance_id, _)| utterance_id.as_str())
            .collect();

        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}

#[cfg(test)]
mod align_transcriptions_tests {
    use super::*;

    #[test]
    fn test_one_sided_ids_are_dropped() {
        let references = transcription_map(&[("u1", "hello"), ("u2", "world"), ("u3", "again")]);
        let hypotheses = transcription_map(&[("u1", "hello"), ("u3", "gain"), ("u4", "extra")]);

        let pairs = align_transcriptions(&references, &hypotheses, false, false);
        let ids: Vec<&str> = pairs.iter().map(|pair| pair.utterance_id.as_str()).collect();

        assert_eq!(ids, vec!["u1", "u3"]);
        assert_eq!(pairs[1].hypotheses, Hypotheses::Single("gain".to_string()));
    }

    #[test]
    fn test_partial_ids_match_and_keep_shortest() {
        let references = transcription_map(&[("abc", "hello world")]);
        let hypotheses = transcription_map(&[("session-abc-user", "hello word")]);

        assert!(align_transcriptions(&references, &hypotheses, false, false).is_empty());

        let pairs = align_transcriptions(&references, &hypotheses, true, false);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].utterance_id, "abc");
        assert_eq!(pairs[0].reference, "hello world");
    }

    #[test]
    fn test_ambiguous_partial_ids_are_dropped() {
        let references = transcription_map(&[("abc", "hello")]);
        let hypotheses = transcription_map(&[("abc-1", "hello"), ("abc-2", "hello")]);

        assert!(align_transcriptions(&references, &hypotheses, true, false).is_empty());
    }

    #[test]
    fn test_first_transcription_used_unless_nbest() {
        let references = transcription_map(&[("u1", "good morning")]);
        let hypotheses = transcription_map(&[("u1", "good mourning"), ("u1", "good morning")]);

        let single = align_transcriptions(&references, &hypotheses, false, false);
        assert_eq!(
            single[0].hypotheses,
            Hypotheses::Single("good mourning".to_string())
        );

        let nbest = align_transcriptions(&references, &hypotheses, false, true);
        assert_eq!(
            nbest[0].hypotheses,
            Hypotheses::NBest(vec!["good mourning".to_string(), "good morning".to_string()])
        );
    }

    #[test]
    fn test_partial_coverage_shrinks_denominator() {
        let resolver = EquivalenceResolver::default();
        let config = WerConfig {
            partial_id_matching: false,
            ..exact_match_config()
        };

        let references = transcription_map(&[("u1", "one two"), ("u2", "three four five six")]);
        let hypotheses = transcription_map(&[("u1", "one too")]);

        let file_result = wer_for_transcriptions(&references, &hypotheses, &resolver, &config);

        assert_eq!(file_result.len(), 1);
        assert_score_eq(file_result.score(), 0.5);
    }
}
