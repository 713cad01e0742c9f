pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

/// Tolerance used when comparing scores.
pub const SCORE_EPSILON: f64 = 1e-9;
