//! Configuration structures for the text frontend.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FrontendError, FrontendResult};
use crate::types::Separators;

/// Text frontend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Ordered cleaner names applied before encoding.
    #[serde(default = "default_cleaners")]
    pub cleaners: Vec<String>,

    /// Phoneme mode: route text through the G2P backend before encoding.
    #[serde(default = "default_use_phonemes")]
    pub use_phonemes: bool,

    /// Worker-count hint passed through to the G2P backend unchanged.
    #[serde(default = "default_n_jobs")]
    pub n_jobs: usize,

    /// Whether the backend should mark word stress.
    #[serde(default = "default_with_stress")]
    pub with_stress: bool,

    /// Separator conventions shared with the backend.
    #[serde(default)]
    pub separators: Separators,

    /// Symbol resource file locations.
    pub symbol_files: SymbolFiles,

    /// Punctuation characters admitted into the vocabulary.
    #[serde(default = "default_punctuations")]
    pub punctuations: String,

    /// Digit characters admitted into the vocabulary.
    #[serde(default = "default_digits")]
    pub digits: String,
}

/// Locations of the two static symbol resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolFiles {
    /// Grapheme set: one character per symbol.
    pub graphemes: PathBuf,
    /// Phoneme set: units delimited by `|`.
    pub phonemes: PathBuf,
}

fn default_cleaners() -> Vec<String> {
    vec!["basic_cleaners".to_string()]
}

fn default_use_phonemes() -> bool {
    true
}

fn default_n_jobs() -> usize {
    1
}

fn default_with_stress() -> bool {
    true
}

fn default_punctuations() -> String {
    "(),-.:;!?¡¿".to_string()
}

fn default_digits() -> String {
    "0123456789".to_string()
}

impl FrontendConfig {
    /// Create a configuration with default settings and the given symbol
    /// resource locations.
    pub fn new(symbol_files: SymbolFiles) -> Self {
        Self {
            cleaners: default_cleaners(),
            use_phonemes: default_use_phonemes(),
            n_jobs: default_n_jobs(),
            with_stress: default_with_stress(),
            separators: Separators::default(),
            symbol_files,
            punctuations: default_punctuations(),
            digits: default_digits(),
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> FrontendResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            FrontendError::config(format!("invalid config {}: {e}", path.display()))
        })
    }
}
