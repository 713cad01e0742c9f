use std::collections::HashMap;
use std::path::PathBuf;
pub mod constants;
use constants::{SCORE_EPSILON, TEST_FILES_DIRECTORY};

/// Path to a fixture under the test files directory.
pub fn test_file_path(file_name: &str) -> PathBuf {
    PathBuf::from(TEST_FILES_DIRECTORY).join(file_name)
}

/// Builds an utterance id -> transcriptions map from `(id, text)` pairs, preserving the order
/// of repeated ids.
pub fn transcription_map(entries: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
    let mut map: HashMap<String, Vec<String>> = HashMap::new();

    for (utterance_id, text) in entries {
        map.entry(utterance_id.to_string())
            .or_default()
            .push(text.to_string());
    }

    map
}

// Helper function to compare floating point scores
pub fn assert_score_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < SCORE_EPSILON,
        "Expected score {}, got {}",
        expected,
        actual
    );
}
