//! # frontend-core
//!
//! Core types, traits, and error definitions for the TTS text frontend.
//!
//! This crate provides the foundational abstractions used across all other
//! crates in the workspace, including:
//!
//! - Common data types (`Sequence`, `Separators`, fixed symbol constants)
//! - Trait definitions for pipeline components
//! - Unified error handling via `FrontendError`
//! - Configuration structures

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{FrontendConfig, SymbolFiles};
pub use error::{FrontendError, FrontendResult};
pub use traits::{G2pBackend, TextSequencer};
pub use types::{Separators, Sequence, EOS, PAD, SPACE};
