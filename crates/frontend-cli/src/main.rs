//! TTS text frontend command-line interface.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use frontend_core::{FrontendConfig, SymbolFiles};

mod commands;

/// TTS text frontend CLI
#[derive(Debug, Parser)]
#[command(name = "text-frontend")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Frontend configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the cleaning pipeline over text (dry run)
    Clean {
        /// Input text
        input: String,

        /// Cleaner names, in application order
        #[arg(long)]
        cleaners: Vec<String>,
    },

    /// Phonemize text with punctuation preservation (dry run)
    Phonemize {
        /// Input text
        input: String,

        /// Backend locale id (for example, en-us or fr-fr)
        #[arg(long, default_value = "en-us")]
        lang: String,
    },

    /// Encode text into a symbol-id sequence
    Encode {
        /// Input text
        input: String,

        /// Backend locale id, required in phoneme mode
        #[arg(long)]
        lang: Option<String>,

        /// Map pre-phonemized input without invoking the backend
        #[arg(long)]
        just_map: bool,
    },

    /// Decode a symbol-id sequence back to text
    Decode {
        /// Symbol ids
        ids: Vec<u32>,
    },

    /// Show vocabulary and configuration info
    Info,
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<FrontendConfig> {
    match path {
        Some(path) => Ok(FrontendConfig::from_file(path)?),
        None => Ok(FrontendConfig::new(SymbolFiles {
            graphemes: PathBuf::from("chars/graphemes.txt"),
            phonemes: PathBuf::from("chars/phonemes.txt"),
        })),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);
    info!(version = env!("CARGO_PKG_VERSION"), "Starting text frontend CLI");

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Clean { input, cleaners } => commands::clean::run(&config, &input, &cleaners),
        Commands::Phonemize { input, lang } => commands::phonemize::run(&config, &input, &lang),
        Commands::Encode {
            input,
            lang,
            just_map,
        } => commands::encode::run(&config, &input, lang.as_deref(), just_map),
        Commands::Decode { ids } => commands::decode::run(&config, ids),
        Commands::Info => commands::info::run(&config),
    }
}
