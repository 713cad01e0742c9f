pub mod format_score;
pub mod sort_counts;

pub use format_score::format_score;
pub use sort_counts::sort_counts;
