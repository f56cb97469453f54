//! Core data types for the text frontend pipeline.

use serde::{Deserialize, Serialize};

/// Padding marker symbol, always id 0.
pub const PAD: &str = "*";

/// End-of-sequence marker symbol, always id 1.
pub const EOS: &str = "~";

/// Word-space symbol, always id 2.
pub const SPACE: &str = " ";

/// Separator conventions shared between the G2P backend and the codec.
///
/// The word separator delimits words in the backend's output, the phone
/// separator delimits phoneme units within a word. The syllable separator is
/// passed through to the backend unchanged (empty by default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separators {
    /// Word separator character.
    #[serde(default = "default_word_sep")]
    pub word: char,
    /// Syllable separator (may be empty).
    #[serde(default)]
    pub syllable: String,
    /// Phoneme separator character.
    #[serde(default = "default_phone_sep")]
    pub phone: char,
}

fn default_word_sep() -> char {
    '#'
}

fn default_phone_sep() -> char {
    '_'
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            word: default_word_sep(),
            syllable: String::new(),
            phone: default_phone_sep(),
        }
    }
}

/// An encoded symbol-id sequence, terminated by the eos id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    /// Symbol IDs, each a valid index into the vocabulary.
    pub ids: Vec<u32>,
}

impl Sequence {
    /// Create a new sequence from raw ids.
    pub fn new(ids: Vec<u32>) -> Self {
        Self { ids }
    }

    /// Create an empty sequence.
    pub fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    /// Get the number of ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<u32>> for Sequence {
    fn from(ids: Vec<u32>) -> Self {
        Self { ids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_default() {
        let seps = Separators::default();
        assert_eq!(seps.word, '#');
        assert_eq!(seps.phone, '_');
        assert!(seps.syllable.is_empty());
    }

    #[test]
    fn test_sequence() {
        let seq = Sequence::new(vec![3, 4, 1]);
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());

        let empty = Sequence::empty();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_sequence_serde() {
        let seq = Sequence::new(vec![5, 1]);
        let json = serde_json::to_string(&seq).unwrap();
        let back: Sequence = serde_json::from_str(&json).unwrap();
        assert_eq!(seq, back);
    }
}
