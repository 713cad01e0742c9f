use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a single case-folded word as an owned `String`. Words are the basic units
/// which get aligned; tokenization happens once, before alignment.
pub type Word = String;

/// Represents a borrowed view of a word as a `str`. This is used when ownership is not required.
pub type WordRef = str;

/// An opaque identifier for an utterance (a reference/hypothesis transcription pair).
pub type UtteranceId = String;

/// A raw, untokenized transcription line as read from a transcription file.
pub type Transcription = String;

/// Represents a mapping of utterance ids to every transcription found for that id, in file
/// order. Single-hypothesis consumers only use the first entry.
pub type TranscriptionMap = HashMap<UtteranceId, Vec<Transcription>>;

/// Index into the (preprocessed) reference word sequence.
pub type ReferencePosition = usize;

/// Word error rate, normalized by reference length. May exceed `1.0` when insertions dominate.
pub type WerScore = f64;

/// Number of occurrences of a given error key within a breakdown.
pub type ErrorCount = usize;
