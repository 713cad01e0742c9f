use wer_aligner::{
    breakdown, compare_three_way, compare_three_way_full, format_diff, format_score, Aggregator,
    BreakdownKey, EquivalenceGroups, EquivalenceResolver, FileResult, TranscriptionErrorType,
    UtterancePair, WerConfig, Winner, DEFAULT_WER_CONFIG,
};

fn exact_match_results(pairs: Vec<UtterancePair>) -> FileResult {
    let resolver = EquivalenceResolver::default();
    let config = WerConfig {
        equivalence_groups: EquivalenceGroups::NONE,
        ..DEFAULT_WER_CONFIG
    };

    Aggregator::new(&resolver, &config).align_batch(pairs)
}

fn sample_results() -> FileResult {
    exact_match_results(vec![
        UtterancePair::single("u1", "the cat sat on the mat", "a cat sit on mat"),
        UtterancePair::single("u2", "the dog", "a dog barks"),
        UtterancePair::single("u3", "all good", "all good"),
    ])
}

#[cfg(test)]
mod breakdown_tests {
    use super::*;
    use TranscriptionErrorType::{Correct, Deletion, Insertion, Substitution};

    #[test]
    fn test_aggregated_substitutions_keyed_by_reference_word() {
        let error_breakdown = breakdown(&sample_results(), true);

        assert_eq!(error_breakdown.word_count(Substitution, "the"), 2);
        assert_eq!(error_breakdown.word_count(Substitution, "sat"), 1);
        assert_eq!(error_breakdown.word_count(Deletion, "the"), 1);
        assert_eq!(error_breakdown.word_count(Insertion, "barks"), 1);
        assert_eq!(error_breakdown.total(Substitution), 3);
        assert!(error_breakdown.get(Correct).is_none());
    }

    #[test]
    fn test_substitution_pairs() {
        let error_breakdown = breakdown(&sample_results(), false);

        assert_eq!(
            error_breakdown.count(Substitution, &BreakdownKey::pair("the", "a")),
            2
        );
        assert_eq!(
            error_breakdown.count(Substitution, &BreakdownKey::pair("sat", "sit")),
            1
        );
        assert_eq!(error_breakdown.word_count(Substitution, "the"), 0);
        assert_eq!(
            BreakdownKey::pair("sat", "sit").to_string(),
            "(sat, sit)"
        );
    }

    #[test]
    fn test_most_common_order() {
        let error_breakdown = breakdown(&sample_results(), true);

        assert_eq!(
            error_breakdown.most_common(Substitution),
            vec![(BreakdownKey::word("the"), 2), (BreakdownKey::word("sat"), 1)]
        );
    }

    #[test]
    fn test_to_lines() {
        let lines = breakdown(&sample_results(), true).to_lines();

        assert_eq!(
            lines,
            vec![
                "substitution = 3",
                "\tthe: 2",
                "\tsat: 1",
                "",
                "insertion = 1",
                "\tbarks: 1",
                "",
                "deletion = 1",
                "\tthe: 1",
                "",
            ]
        );
    }

    #[test]
    fn test_error_free_results_have_zero_totals() {
        let results = exact_match_results(vec![UtterancePair::single("u", "fine", "fine")]);
        let error_breakdown = breakdown(&results, true);

        for error_type in TranscriptionErrorType::ERRORS {
            assert_eq!(error_breakdown.total(error_type), 0);
        }
    }
}

#[cfg(test)]
mod diff_formatter_tests {
    use super::*;

    #[test]
    fn test_diff_skips_correct_utterances() {
        let blocks = format_diff(&sample_results(), false);
        let ids: Vec<&str> = blocks.iter().map(|block| block.utterance_id.as_str()).collect();

        assert_eq!(ids, vec!["u1", "u2"]);
    }

    #[test]
    fn test_full_includes_correct_utterances() {
        let blocks = format_diff(&sample_results(), true);
        let ids: Vec<&str> = blocks.iter().map(|block| block.utterance_id.as_str()).collect();

        assert_eq!(ids, vec!["u1", "u2", "u3"]);
    }

    #[test]
    fn test_diff_lines_are_aligned() {
        let blocks = format_diff(&sample_results(), false);

        assert_eq!(blocks[0].reference_line, "#the# cat #sat# on the mat");
        assert_eq!(blocks[0].hypothesis_line, "#a  # cat #sit# on --- mat");
        assert_eq!(
            blocks[1].to_string(),
            "u2 #the# dog +++++\nu2 #a  # dog barks"
        );
        assert_eq!(
            blocks[0].reference_line.chars().count(),
            blocks[0].hypothesis_line.chars().count()
        );
    }

    #[test]
    fn test_empty_alignment_placeholder() {
        let results = exact_match_results(vec![UtterancePair::single("u0", "", "")]);

        assert!(format_diff(&results, false).is_empty());

        let blocks = format_diff(&results, true);
        assert_eq!(blocks[0].to_string(), "u0 ///EMPTY///\nu0 ///EMPTY///");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.5), "50.00%");
        assert_eq!(format_score(2.0 / 11.0), "18.18%");
        assert_eq!(format_score(0.0), "0.00%");
    }
}

#[cfg(test)]
mod three_way_comparison_tests {
    use super::*;

    fn system_a() -> FileResult {
        exact_match_results(vec![
            UtterancePair::single("u1", "hello world", "hello world"),
            UtterancePair::single("u2", "good morning", "good mourning"),
            UtterancePair::single("u3", "same", "sane"),
        ])
    }

    fn system_b() -> FileResult {
        exact_match_results(vec![
            UtterancePair::single("u1", "hello world", "hello word"),
            UtterancePair::single("u2", "good morning", "good mourning"),
            UtterancePair::single("u3", "same", "same"),
            UtterancePair::single("u4", "only here", "only there"),
        ])
    }

    #[test]
    fn test_only_differences_are_compared() {
        let comparison = compare_three_way(&system_a(), &system_b());
        let winners = comparison.winners();

        assert_eq!(comparison.len(), 2);
        assert_eq!(winners[&"u1".to_string()], Winner::A);
        assert_eq!(winners[&"u3".to_string()], Winner::B);
        assert!(!winners.contains_key(&"u2".to_string()));
    }

    #[test]
    fn test_full_comparison_covers_common_utterances() {
        let comparison = compare_three_way_full(&system_a(), &system_b());
        let winners: Vec<Winner> = comparison.winners().into_values().collect();

        assert_eq!(winners, vec![Winner::A, Winner::Tie, Winner::B]);
        assert_eq!(comparison.first_results().len(), 3);
        assert_eq!(comparison.second_results().len(), 3);
    }

    #[test]
    fn test_identical_results_have_no_differences() {
        assert!(compare_three_way(&system_a(), &system_a()).is_empty());
    }

    #[test]
    fn test_blocks() {
        let comparison = compare_three_way(&system_a(), &system_b());
        let blocks = comparison.to_blocks("sys-a", "sys-b");

        assert_eq!(
            blocks[0],
            "u1\nwinner: sys-a (0.00% < 50.00%)\n\
             ref  :\thello world\n\
             sys-a:\thello world\n\
             sys-b:\thello #word #"
        );
        assert_eq!(
            blocks[1],
            "u3\nwinner: sys-b (100.00% > 0.00%)\nref  :\t#same#\nsys-a:\t#sane#\nsys-b:\tsame"
        );
    }

    #[test]
    fn test_tie_block_names_both() {
        let comparison = compare_three_way_full(&system_a(), &system_b());
        let blocks = comparison.to_blocks("a", "b");

        assert!(blocks[1].starts_with("u2\nwinner: both (50.00% = 50.00%)\n"));
    }
}
