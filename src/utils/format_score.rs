use crate::types::WerScore;

/// Formats a score as a percentage with two decimals (`0.5` -> `"50.00%"`).
pub fn format_score(score: WerScore) -> String {
    format!("{:.2}%", score * 100.0)
}
