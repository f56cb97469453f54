//! Clean command implementation.

use anyhow::Result;
use frontend_core::FrontendConfig;
use text_cleaners::CleaningPipeline;

/// Run the clean command.
pub fn run(config: &FrontendConfig, input: &str, cleaners: &[String]) -> Result<()> {
    let names = if cleaners.is_empty() {
        config.cleaners.as_slice()
    } else {
        cleaners
    };
    let pipeline = CleaningPipeline::from_names(names)?;

    println!("Input:   {input}");
    println!("Cleaners: {:?}", pipeline.names().collect::<Vec<_>>());
    println!("Output:  {}", pipeline.apply(input));

    Ok(())
}
