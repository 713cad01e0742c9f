use std::fs::File;
use test_utils::test_file_path;
use wer_aligner::{
    ConversionTable, EquivalenceGroup, EquivalenceGroups, EquivalenceResolver, Error,
};

#[cfg(test)]
mod equivalence_groups_tests {
    use super::*;

    #[test]
    fn test_from_names_combines_groups() {
        let groups = EquivalenceGroups::from_names(["numbers", "misc"]).unwrap();

        assert!(groups.contains(EquivalenceGroup::Numbers));
        assert!(groups.contains(EquivalenceGroup::Misc));
        assert!(!groups.contains(EquivalenceGroup::Spelling));
    }

    #[test]
    fn test_none_wins_over_everything() {
        let groups = EquivalenceGroups::from_names(["all", "spelling", "none"]).unwrap();
        assert_eq!(groups, EquivalenceGroups::NONE);
    }

    #[test]
    fn test_all_wins_over_named_groups() {
        let groups = EquivalenceGroups::from_names(["spelling", "all"]).unwrap();
        assert_eq!(groups, EquivalenceGroups::ALL);
    }

    #[test]
    fn test_unknown_group_is_config_error() {
        let result = EquivalenceGroups::from_names(["numbers", "phonetic"]);
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}

#[cfg(test)]
mod equivalence_resolver_tests {
    use super::*;

    #[test]
    fn test_identical_words_always_match() {
        let resolver = EquivalenceResolver::default();
        assert!(resolver.are_equivalent("cat", "cat", EquivalenceGroups::NONE));
    }

    #[test]
    fn test_group_selection_controls_matches() {
        let resolver = EquivalenceResolver::default();
        let spelling_only = EquivalenceGroups::NONE.with(EquivalenceGroup::Spelling);

        assert!(resolver.are_equivalent("ok", "okay", spelling_only));
        assert!(!resolver.are_equivalent("ok", "okay", EquivalenceGroups::NONE));
        assert!(!resolver.are_equivalent("five", "fifth", spelling_only));
        assert!(resolver.are_equivalent("five", "fifth", EquivalenceGroups::ALL));
    }

    #[test]
    fn test_words_must_share_a_class() {
        let resolver = EquivalenceResolver::default();

        // Both are in the numbers group, but in different classes
        assert!(!resolver.are_equivalent("four", "five", EquivalenceGroups::ALL));
        assert!(resolver.are_equivalent("st", "saint", EquivalenceGroups::ALL));
        assert!(resolver.are_equivalent("st.", "st", EquivalenceGroups::ALL));
    }

    #[test]
    fn test_equivalence_is_symmetric() {
        let resolver = EquivalenceResolver::default();
        let words = ["the", "a", "ok", "okay", "thru", "through", "ten", "tenth", "cat", "st."];
        let selections = [
            EquivalenceGroups::NONE,
            EquivalenceGroups::ALL,
            EquivalenceGroups::NONE.with(EquivalenceGroup::Numbers),
            EquivalenceGroups::NONE.with(EquivalenceGroup::Misc),
        ];

        for groups in selections {
            for word_a in words {
                for word_b in words {
                    assert_eq!(
                        resolver.are_equivalent(word_a, word_b, groups),
                        resolver.are_equivalent(word_b, word_a, groups),
                        "{} / {}",
                        word_a,
                        word_b
                    );
                }
            }
        }
    }

    #[test]
    fn test_custom_classes() {
        let mut resolver = EquivalenceResolver::new(ConversionTable::new());
        resolver.add_class(EquivalenceGroup::Misc, ["colour", "color"]);

        assert!(resolver.are_equivalent("color", "colour", EquivalenceGroups::ALL));
        assert!(!resolver.are_equivalent("the", "a", EquivalenceGroups::ALL));
    }
}

#[cfg(test)]
mod conversion_table_tests {
    use super::*;

    #[test]
    fn test_builtin_conversions() {
        let resolver = EquivalenceResolver::default();

        assert_eq!(resolver.convert("21st"), vec!["twenty", "first"]);
        assert_eq!(resolver.convert("2014"), vec!["two", "thousand", "fourteen"]);
        assert_eq!(resolver.convert("7"), vec!["seven"]);
    }

    #[test]
    fn test_unknown_word_is_unchanged() {
        let resolver = EquivalenceResolver::default();
        assert_eq!(resolver.convert("cats"), vec!["cats"]);
    }

    #[test]
    fn test_load_from_tsv() {
        let table = ConversionTable::from_path(&test_file_path("conversions.tsv")).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.convert("21"), vec!["twenty", "one"]);
        assert_eq!(table.convert("2nd"), vec!["second"]);
        assert_eq!(table.convert("3rd"), vec!["3rd"]);
    }

    #[test]
    fn test_malformed_table_is_config_error() {
        let file = File::open(test_file_path("conversions_malformed.csv")).unwrap();
        let result = ConversionTable::from_reader(file, b',');

        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_wrong_column_count_is_config_error() {
        let result = ConversionTable::from_reader("1\tone\tuno\n".as_bytes(), b'\t');
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_missing_table_is_io_error() {
        let result = ConversionTable::from_path(&test_file_path("does_not_exist.tsv"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
