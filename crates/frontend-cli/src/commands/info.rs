//! Info command implementation.

use anyhow::Result;
use frontend_core::{FrontendConfig, TextSequencer};

use super::build_frontend;

/// Run the info command.
pub fn run(config: &FrontendConfig) -> Result<()> {
    let frontend = build_frontend(config)?;
    let vocab = frontend.vocabulary();

    println!("Mode: {}", if config.use_phonemes { "phonemes" } else { "graphemes" });
    println!("Cleaners: {:?}", config.cleaners);
    println!("Separators: word={:?} phone={:?}", config.separators.word, config.separators.phone);
    println!("Vocabulary size: {}", frontend.vocab_size());
    println!("PAD id: {}", frontend.pad_id());
    println!("EOS id: {}", frontend.eos_id());

    println!("\nSymbols:");
    for (id, symbol) in vocab.symbols().iter().enumerate() {
        println!("  {id}: {symbol:?}");
    }

    Ok(())
}
