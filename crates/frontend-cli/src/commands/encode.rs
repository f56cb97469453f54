//! Encode command implementation.

use anyhow::Result;
use frontend_core::{FrontendConfig, TextSequencer};

use super::build_frontend;

/// Run the encode command.
pub fn run(config: &FrontendConfig, input: &str, lang: Option<&str>, just_map: bool) -> Result<()> {
    let frontend = build_frontend(config)?;
    let sequence = frontend.encode(input, lang, just_map)?;

    println!("Input: {input}");
    println!("Ids: {:?}", sequence.ids);
    println!("Length: {} (eos id {})", sequence.len(), frontend.eos_id());

    Ok(())
}
