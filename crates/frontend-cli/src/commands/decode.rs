//! Decode command implementation.

use anyhow::Result;
use frontend_core::{FrontendConfig, Sequence, TextSequencer};

use super::build_frontend;

/// Run the decode command.
pub fn run(config: &FrontendConfig, ids: Vec<u32>) -> Result<()> {
    let frontend = build_frontend(config)?;
    let sequence = Sequence::new(ids);

    println!("Ids: {:?}", sequence.ids);
    println!("Text: {}", frontend.decode(&sequence));

    Ok(())
}
