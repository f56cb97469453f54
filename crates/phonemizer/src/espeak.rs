//! espeak-ng subprocess backend.

use std::process::Command;

use frontend_core::{FrontendError, FrontendResult, G2pBackend, Separators};

/// IPA stress marks stripped when stress is disabled.
const STRESS_MARKS: [char; 2] = ['\u{02C8}', '\u{02CC}'];

/// G2P backend invoking the `espeak-ng` binary.
///
/// Runs `espeak-ng -q --ipa=3`, which emits IPA phonemes separated by `_`
/// within a word and whitespace between words, then remaps that output to
/// the configured separators.
#[derive(Debug)]
pub struct EspeakBackend {
    program: String,
    /// Concurrency hint from the configuration; espeak-ng is invoked as a
    /// single process, so this is carried as an opaque parameter only.
    pub n_jobs: usize,
}

impl EspeakBackend {
    /// Create a backend with the given worker-count hint.
    pub fn new(n_jobs: usize) -> Self {
        Self {
            program: "espeak-ng".to_string(),
            n_jobs,
        }
    }

    /// Override the binary name (for tests or non-standard installs).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl Default for EspeakBackend {
    fn default() -> Self {
        Self::new(1)
    }
}

impl G2pBackend for EspeakBackend {
    fn phonemize(
        &self,
        text: &str,
        lang: &str,
        separators: &Separators,
        with_stress: bool,
    ) -> FrontendResult<String> {
        let output = Command::new(&self.program)
            .args(["-q", "--ipa=3", "-v", lang])
            .arg(text)
            .output()
            .map_err(|e| {
                FrontendError::backend(format!("failed to spawn {}: {e}", self.program))
            })?;

        if !output.status.success() {
            return Err(FrontendError::backend(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let phone_sep = separators.phone.to_string();

        let words: Vec<String> = stdout
            .split_whitespace()
            .filter_map(|word| {
                let phones: Vec<String> = word
                    .split('_')
                    .map(|phone| {
                        if with_stress {
                            phone.to_string()
                        } else {
                            phone.chars().filter(|c| !STRESS_MARKS.contains(c)).collect()
                        }
                    })
                    .filter(|phone| !phone.is_empty())
                    .collect();
                if phones.is_empty() {
                    None
                } else {
                    Some(phones.join(&phone_sep))
                }
            })
            .collect();

        Ok(words.join(&separators.word.to_string()))
    }
}
