//! # text-sequencer
//!
//! Symbol vocabulary and sequence codec for the TTS text frontend.
//!
//! [`TextFrontend`] wires the cleaning pipeline, the optional phonemizer
//! adapter, and the fixed symbol vocabulary into the encode/decode surface
//! consumed by model training and inference:
//!
//! raw text -> cleaners -> (phonemizer) -> symbol ids + eos
//!
//! Decoding is the lossy inverse: it recovers the phoneme or grapheme token
//! stream, never the original source text.
//!
//! # Example
//!
//! ```no_run
//! use frontend_core::{FrontendConfig, SymbolFiles, TextSequencer};
//! use text_sequencer::TextFrontend;
//!
//! let mut config = FrontendConfig::new(SymbolFiles {
//!     graphemes: "chars/graphemes.txt".into(),
//!     phonemes: "chars/phonemes.txt".into(),
//! });
//! config.use_phonemes = false;
//!
//! let frontend = TextFrontend::new(&config, None)?;
//! let sequence = frontend.encode("Hello, world!", None, false)?;
//! assert_eq!(*sequence.ids.last().unwrap(), frontend.eos_id());
//! # Ok::<(), frontend_core::FrontendError>(())
//! ```

mod vocab;

use tracing::instrument;

use frontend_core::{
    FrontendConfig, FrontendError, FrontendResult, G2pBackend, Separators, Sequence,
    TextSequencer, EOS, PAD,
};
use phonemizer::Phonemizer;
use text_cleaners::CleaningPipeline;

pub use vocab::{SymbolSet, Vocabulary};

/// Token mode, fixed at configuration time. Phoneme mode always carries
/// its adapter, so a configured frontend can never lack a backend.
enum Mode {
    Graphemes,
    Phonemes(Phonemizer),
}

/// The configured text frontend: cleaning, optional phonemization, and the
/// symbol-id codec. Read-only after construction, safe to share.
pub struct TextFrontend {
    pipeline: CleaningPipeline,
    vocab: Vocabulary,
    mode: Mode,
    separators: Separators,
}

impl std::fmt::Debug for TextFrontend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextFrontend").finish_non_exhaustive()
    }
}

impl TextFrontend {
    /// Configure a frontend instance.
    ///
    /// Reads the symbol resource for the selected mode, resolves the
    /// cleaner names, and builds the vocabulary. Fails fast on any
    /// configuration problem: unknown cleaner, missing or empty symbol
    /// resource, or phoneme mode without a backend.
    pub fn new(
        config: &FrontendConfig,
        backend: Option<Box<dyn G2pBackend>>,
    ) -> FrontendResult<Self> {
        let pipeline = CleaningPipeline::from_names(&config.cleaners)?;

        let charset = if config.use_phonemes {
            SymbolSet::phonemes_from_file(&config.symbol_files.phonemes)?
        } else {
            SymbolSet::graphemes_from_file(&config.symbol_files.graphemes)?
        };
        let vocab = Vocabulary::build(
            &charset,
            &config.punctuations,
            &config.digits,
            &config.separators,
        )?;

        let mode = if config.use_phonemes {
            let backend = backend.ok_or_else(|| {
                FrontendError::config("phoneme mode requires a G2P backend")
            })?;
            Mode::Phonemes(Phonemizer::new(
                backend,
                config.separators.clone(),
                &config.punctuations,
                config.with_stress,
            ))
        } else {
            Mode::Graphemes
        };

        Ok(Self {
            pipeline,
            vocab,
            mode,
            separators: config.separators.clone(),
        })
    }

    /// The underlying vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Map a token to its id, dropping pad, eos, and unknown tokens.
    fn keep_token_id(&self, token: &str) -> Option<u32> {
        if token == PAD || token == EOS {
            return None;
        }
        self.vocab.id(token)
    }
}

impl TextSequencer for TextFrontend {
    #[instrument(skip(self, text), fields(text_len = text.len(), just_map))]
    fn encode(&self, text: &str, lang: Option<&str>, just_map: bool) -> FrontendResult<Sequence> {
        let cleaned = self.pipeline.apply(text);

        let tokens: Vec<String> = match &self.mode {
            Mode::Phonemes(phonemizer) => {
                let phoneme_text = if just_map {
                    cleaned
                } else {
                    let lang = lang.ok_or_else(|| {
                        FrontendError::backend("language code required for phonemization")
                    })?;
                    phonemizer.graphemes_to_phonemes(&cleaned, lang)?
                };
                phoneme_text
                    .split(self.separators.phone)
                    .map(String::from)
                    .collect()
            }
            Mode::Graphemes => cleaned.chars().map(String::from).collect(),
        };

        let mut ids: Vec<u32> = tokens
            .iter()
            .filter_map(|token| self.keep_token_id(token))
            .collect();
        ids.push(self.vocab.eos_id());
        Ok(Sequence::new(ids))
    }

    #[instrument(skip(self, sequence), fields(num_ids = sequence.len()))]
    fn decode(&self, sequence: &Sequence) -> String {
        let symbols: Vec<&str> = sequence
            .ids
            .iter()
            .filter(|&&id| id != self.vocab.pad_id() && id != self.vocab.eos_id())
            .filter_map(|&id| self.vocab.symbol(id))
            .collect();

        match self.mode {
            Mode::Phonemes(_) => symbols.join(&self.separators.phone.to_string()),
            Mode::Graphemes => symbols.concat(),
        }
    }

    fn vocab_size(&self) -> usize {
        self.vocab.size()
    }

    fn eos_id(&self) -> u32 {
        self.vocab.eos_id()
    }

    fn pad_id(&self) -> u32 {
        self.vocab.pad_id()
    }
}
