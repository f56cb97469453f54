//! Trait definitions for text frontend pipeline components.

use crate::error::FrontendResult;
use crate::types::{Separators, Sequence};

/// Grapheme-to-phoneme backend seam.
///
/// Implementations wrap an external G2P engine. The backend receives
/// lower-cased text and must return a single string where words are
/// delimited by `separators.word` and phonemes within a word by
/// `separators.phone`. Language codes follow the backend's own locale-id
/// convention and are not validated here; an invalid code is the backend's
/// error to raise.
pub trait G2pBackend: Send + Sync {
    /// Phonemize the given text.
    ///
    /// # Arguments
    /// * `text` - Lower-cased input text
    /// * `lang` - Backend locale id (for example `en-us` or `fr-fr`)
    /// * `separators` - Output separator conventions
    /// * `with_stress` - Whether to keep stress marks in the output
    fn phonemize(
        &self,
        text: &str,
        lang: &str,
        separators: &Separators,
        with_stress: bool,
    ) -> FrontendResult<String>;
}

/// Text sequencing trait.
///
/// Implementations convert raw text into fixed-vocabulary id sequences
/// suitable for a speech-synthesis model, and back.
pub trait TextSequencer: Send + Sync {
    /// Encode text into a symbol-id sequence terminated by the eos id.
    ///
    /// # Arguments
    /// * `text` - Raw input text
    /// * `lang` - Backend locale id, required in phoneme mode
    /// * `just_map` - Skip phonemization and map pre-phonemized input
    fn encode(&self, text: &str, lang: Option<&str>, just_map: bool) -> FrontendResult<Sequence>;

    /// Decode a sequence back to its symbolic text (lossy inverse).
    fn decode(&self, sequence: &Sequence) -> String;

    /// Get the vocabulary size.
    fn vocab_size(&self) -> usize;

    /// Get the EOS (end of sequence) symbol id.
    fn eos_id(&self) -> u32;

    /// Get the PAD symbol id.
    fn pad_id(&self) -> u32;
}
