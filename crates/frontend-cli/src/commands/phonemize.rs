//! Phonemize command implementation.

use anyhow::Result;
use frontend_core::FrontendConfig;
use phonemizer::{EspeakBackend, Phonemizer};
use text_cleaners::CleaningPipeline;

/// Run the phonemize command.
pub fn run(config: &FrontendConfig, input: &str, lang: &str) -> Result<()> {
    let pipeline = CleaningPipeline::from_names(&config.cleaners)?;
    let phonemizer = Phonemizer::new(
        Box::new(EspeakBackend::new(config.n_jobs)),
        config.separators.clone(),
        &config.punctuations,
        config.with_stress,
    );

    let cleaned = pipeline.apply(input);
    let phonemes = phonemizer.graphemes_to_phonemes(&cleaned, lang)?;

    println!("Input:    {input}");
    println!("Cleaned:  {cleaned}");
    println!("Phonemes: {phonemes}");

    Ok(())
}
