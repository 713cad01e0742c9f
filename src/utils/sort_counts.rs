use crate::types::ErrorCount;
use std::collections::HashMap;
use std::hash::Hash;

/// Sorts a mapping of keys to occurrence counts.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by count in descending order (most common first).
/// - **Secondary:** If two keys have the same count, sorts by key in ascending order for
///   deterministic ordering.
///
/// ### Example:
/// ```rust
/// use std::collections::HashMap;
/// use wer_aligner::sort_counts;
///
/// let mut counts = HashMap::new();
/// counts.insert("the".to_string(), 2);
/// counts.insert("cat".to_string(), 5);
/// counts.insert("a".to_string(), 2);
///
/// let sorted = sort_counts(&counts);
/// assert_eq!(sorted, vec![
///     ("cat".to_string(), 5),
///     ("a".to_string(), 2),
///     ("the".to_string(), 2)
/// ]);
/// ```
pub fn sort_counts<K>(counts: &HashMap<K, ErrorCount>) -> Vec<(K, ErrorCount)>
where
    K: Clone + Ord + Hash,
{
    let mut sorted_counts: Vec<(K, ErrorCount)> = counts
        .iter()
        .map(|(key, count)| (key.clone(), *count))
        .collect();

    sorted_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    sorted_counts
}
