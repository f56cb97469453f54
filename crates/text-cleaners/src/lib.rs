//! # text-cleaners
//!
//! Text-cleaning pipelines for the TTS text frontend.
//!
//! A cleaner is a named pure string transformation. This crate keeps a
//! static registry of cleaner names and provides [`CleaningPipeline`], which
//! resolves an ordered list of names at configuration time and threads text
//! through the resolved functions in order.
//!
//! # Example
//!
//! ```
//! use text_cleaners::CleaningPipeline;
//!
//! let pipeline = CleaningPipeline::from_names(&["basic_cleaners".into()]).unwrap();
//! assert_eq!(pipeline.apply("  Hello   WORLD "), "hello world");
//! ```

mod cleaners;
mod num2words;

use frontend_core::{FrontendError, FrontendResult};

pub use cleaners::{basic_cleaners, english_cleaners, transliteration_cleaners};
pub use num2words::num_to_words;

/// A registered cleaner function.
pub type CleanerFn = fn(&str) -> String;

/// Static cleaner registry: name to function.
const REGISTRY: &[(&str, CleanerFn)] = &[
    ("basic_cleaners", cleaners::basic_cleaners),
    ("transliteration_cleaners", cleaners::transliteration_cleaners),
    ("english_cleaners", cleaners::english_cleaners),
];

/// Look up a cleaner function by name.
pub fn lookup(name: &str) -> Option<CleanerFn> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, f)| *f)
}

/// An ordered, pre-resolved sequence of cleaner functions.
///
/// Names are resolved against the registry once, at construction; an
/// unregistered name is a fatal configuration error. Application is pure
/// and infallible.
#[derive(Debug, Clone)]
pub struct CleaningPipeline {
    steps: Vec<(String, CleanerFn)>,
}

impl CleaningPipeline {
    /// Resolve an ordered list of cleaner names.
    pub fn from_names(names: &[String]) -> FrontendResult<Self> {
        let mut steps = Vec::with_capacity(names.len());
        for name in names {
            let f = lookup(name).ok_or_else(|| FrontendError::UnknownCleaner(name.clone()))?;
            steps.push((name.clone(), f));
        }
        Ok(Self { steps })
    }

    /// Apply every cleaner in order, threading the text through each.
    pub fn apply(&self, text: &str) -> String {
        let mut text = text.to_string();
        for (name, f) in &self.steps {
            text = f(&text);
            tracing::trace!(cleaner = %name, len = text.len(), "applied cleaner");
        }
        text
    }

    /// Names of the resolved cleaners, in application order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|(name, _)| name.as_str())
    }
}
