//! # phonemizer
//!
//! Grapheme-to-phoneme adapter for the TTS text frontend.
//!
//! The external G2P backend strips punctuation from its output, so this
//! adapter records a positional punctuation mask before the backend call
//! and reattaches the punctuation afterwards. When the backend's word count
//! disagrees with the mask (it dropped or merged words), reattachment is
//! skipped and the mask is silently discarded; this lossiness is deliberate.
//!
//! # Example
//!
//! ```
//! use frontend_core::Separators;
//! use phonemizer::{EchoBackend, Phonemizer};
//!
//! let phonemizer = Phonemizer::new(
//!     Box::new(EchoBackend::default()),
//!     Separators::default(),
//!     "(),-.:;!?¡¿",
//!     true,
//! );
//! let out = phonemizer.graphemes_to_phonemes("go now.", "en-us").unwrap();
//! assert_eq!(out, "go_ _now_.");
//! ```

mod espeak;

use tracing::instrument;

use frontend_core::{FrontendResult, G2pBackend, Separators};

pub use espeak::EspeakBackend;

/// G2P adapter wrapping an external backend.
pub struct Phonemizer {
    backend: Box<dyn G2pBackend>,
    separators: Separators,
    punctuations: Vec<char>,
    with_stress: bool,
}

impl Phonemizer {
    /// Create an adapter over the given backend.
    pub fn new(
        backend: Box<dyn G2pBackend>,
        separators: Separators,
        punctuations: &str,
        with_stress: bool,
    ) -> Self {
        Self {
            backend,
            separators,
            punctuations: punctuations.chars().collect(),
            with_stress,
        }
    }

    /// Transform a grapheme string into a phoneme string, preserving
    /// punctuation positionally.
    ///
    /// `lang` is a backend locale id (for example `en-us` or `fr-fr`); it is
    /// passed through unvalidated.
    #[instrument(skip(self, text), fields(text_len = text.len(), lang = %lang))]
    pub fn graphemes_to_phonemes(&self, text: &str, lang: &str) -> FrontendResult<String> {
        // Make every punctuation char its own token boundary.
        let mut spaced = String::with_capacity(text.len() + 8);
        for c in text.chars() {
            spaced.push(c);
            if self.punctuations.contains(&c) {
                spaced.push(' ');
            }
        }

        // One mask entry per word: the punctuation suffix to reattach.
        let mask: Vec<String> = spaced
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(|word| match word.chars().last() {
                Some(last) if self.punctuations.contains(&last) => {
                    format!("{}{}", self.separators.phone, last)
                }
                _ => String::new(),
            })
            .collect();

        let phonemes = self.backend.phonemize(
            &spaced.to_lowercase(),
            lang,
            &self.separators,
            self.with_stress,
        )?;

        let words: Vec<&str> = phonemes.split(self.separators.word).collect();

        let joiner = format!("{p} {p}", p = self.separators.phone);
        if words.len() == mask.len() {
            let reattached: Vec<String> = words
                .iter()
                .zip(&mask)
                .map(|(word, suffix)| format!("{word}{suffix}"))
                .collect();
            Ok(reattached.join(&joiner))
        } else {
            // The backend dropped or merged words; reattachment would be
            // misaligned, so the mask is discarded.
            tracing::debug!(
                backend_words = words.len(),
                mask_entries = mask.len(),
                "punctuation mask length mismatch, skipping reattachment"
            );
            Ok(words.join(&joiner))
        }
    }
}

/// A stub backend for testing without an external G2P engine.
///
/// Echoes each whitespace-delimited input word back as a single phoneme
/// unit, with punctuation stripped the way a real backend would strip it;
/// words that were pure punctuation disappear from the output.
#[derive(Debug, Default)]
pub struct EchoBackend;

impl G2pBackend for EchoBackend {
    fn phonemize(
        &self,
        text: &str,
        _lang: &str,
        separators: &Separators,
        _with_stress: bool,
    ) -> FrontendResult<String> {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|word| {
                word.chars()
                    .filter(|c| c.is_alphanumeric() || *c == '\'')
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect();
        Ok(words.join(&separators.word.to_string()))
    }
}
