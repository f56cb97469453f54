//! CLI command implementations.

pub mod clean;
pub mod decode;
pub mod encode;
pub mod info;
pub mod phonemize;

use anyhow::Result;
use frontend_core::{FrontendConfig, G2pBackend};
use phonemizer::EspeakBackend;
use text_sequencer::TextFrontend;

/// Build a frontend from the configuration, wiring the espeak backend when
/// phoneme mode is enabled.
pub(crate) fn build_frontend(config: &FrontendConfig) -> Result<TextFrontend> {
    let backend: Option<Box<dyn G2pBackend>> = if config.use_phonemes {
        Some(Box::new(EspeakBackend::new(config.n_jobs)))
    } else {
        None
    };
    Ok(TextFrontend::new(config, backend)?)
}
