//! Symbol set loading and vocabulary construction.

use std::collections::HashMap;
use std::path::Path;

use frontend_core::{FrontendError, FrontendResult, Separators, EOS, PAD, SPACE};

/// The grapheme or phoneme set loaded from a symbol resource.
///
/// Graphemes are single characters; phoneme units may be multi-character
/// and are delimited by `|` in their resource file.
#[derive(Debug, Clone)]
pub struct SymbolSet {
    symbols: Vec<String>,
}

impl SymbolSet {
    /// Parse a grapheme resource: every character is a symbol.
    pub fn graphemes_from_str(contents: &str) -> FrontendResult<Self> {
        let symbols: Vec<String> = contents
            .trim_end_matches(['\n', '\r'])
            .chars()
            .map(String::from)
            .collect();
        if symbols.is_empty() {
            return Err(FrontendError::config("empty grapheme set"));
        }
        Ok(Self { symbols })
    }

    /// Parse a phoneme resource: units delimited by `|`.
    pub fn phonemes_from_str(contents: &str) -> FrontendResult<Self> {
        let trimmed = contents.trim_end_matches(['\n', '\r']);
        if trimmed.is_empty() {
            return Err(FrontendError::config("empty phoneme set"));
        }
        let symbols: Vec<String> = trimmed.split('|').map(String::from).collect();
        if symbols.iter().any(String::is_empty) {
            return Err(FrontendError::config("phoneme set contains an empty unit"));
        }
        Ok(Self { symbols })
    }

    /// Load a grapheme resource from a file.
    pub fn graphemes_from_file(path: impl AsRef<Path>) -> FrontendResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FrontendError::config(format!("cannot read grapheme set {}: {e}", path.display()))
        })?;
        Self::graphemes_from_str(&contents)
    }

    /// Load a phoneme resource from a file.
    pub fn phonemes_from_file(path: impl AsRef<Path>) -> FrontendResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FrontendError::config(format!("cannot read phoneme set {}: {e}", path.display()))
        })?;
        Self::phonemes_from_str(&contents)
    }

    /// Symbols in resource order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

/// The fixed, ordered symbol vocabulary and its id index.
///
/// Symbol order is `[pad, eos, space] + punctuations + digits + charset`;
/// the id of a symbol is its 0-based position. Immutable once built.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    symbols: Vec<String>,
    symbol_to_id: HashMap<String, u32>,
}

impl Vocabulary {
    /// Build the vocabulary for the given character set and static symbol
    /// lists, validating uniqueness and reserved-character constraints.
    pub fn build(
        charset: &SymbolSet,
        punctuations: &str,
        digits: &str,
        separators: &Separators,
    ) -> FrontendResult<Self> {
        let reserved = [
            PAD.chars().next().unwrap_or('*'),
            EOS.chars().next().unwrap_or('~'),
            ' ',
            separators.word,
            separators.phone,
        ];
        for symbol in charset.symbols() {
            if symbol.chars().any(|c| reserved.contains(&c)) {
                return Err(FrontendError::config(format!(
                    "symbol {symbol:?} contains a reserved character"
                )));
            }
        }

        let mut symbols: Vec<String> =
            vec![PAD.to_string(), EOS.to_string(), SPACE.to_string()];
        symbols.extend(punctuations.chars().map(String::from));
        symbols.extend(digits.chars().map(String::from));
        symbols.extend(charset.symbols().iter().cloned());

        let mut symbol_to_id = HashMap::with_capacity(symbols.len());
        for (id, symbol) in symbols.iter().enumerate() {
            if symbol_to_id.insert(symbol.clone(), id as u32).is_some() {
                return Err(FrontendError::config(format!(
                    "duplicate symbol {symbol:?} in vocabulary"
                )));
            }
        }

        Ok(Self {
            symbols,
            symbol_to_id,
        })
    }

    /// Number of symbols in the vocabulary.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Look up the id of a symbol.
    pub fn id(&self, symbol: &str) -> Option<u32> {
        self.symbol_to_id.get(symbol).copied()
    }

    /// Look up the symbol for an id.
    pub fn symbol(&self, id: u32) -> Option<&str> {
        self.symbols.get(id as usize).map(String::as_str)
    }

    /// Id of the padding symbol.
    pub fn pad_id(&self) -> u32 {
        0
    }

    /// Id of the end-of-sequence symbol.
    pub fn eos_id(&self) -> u32 {
        1
    }

    /// The ordered symbol list.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}
