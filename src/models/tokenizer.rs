use crate::constants::IGNORABLES;
use crate::types::Word;
use std::collections::HashSet;

/// Splits a raw transcription into case-folded words, dropping ignorable tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pub ignorables: HashSet<Word>,
}

impl Tokenizer {
    pub fn new<I, S>(ignorables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Word>,
    {
        Self {
            ignorables: ignorables.into_iter().map(Into::into).collect(),
        }
    }

    /// Note: Ignorables are compared after lowercasing, so they should be given in lowercase.
    pub fn tokenize(&self, text: &str) -> Vec<Word> {
        text.trim()
            .to_lowercase()
            .split_whitespace()
            .filter(|word| !self.ignorables.contains(*word))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(IGNORABLES.iter().copied())
    }
}
