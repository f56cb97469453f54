//! Unified error types for the text frontend.

/// Main error type for frontend operations.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    /// Invalid or missing configuration (symbol resources, separators,
    /// phoneme mode without a backend).
    #[error("configuration error: {0}")]
    Config(String),

    /// A cleaner name did not resolve against the registry.
    #[error("unknown cleaner: {0}")]
    UnknownCleaner(String),

    /// The external G2P backend failed; propagated unchanged, no retry.
    #[error("g2p backend error: {0}")]
    Backend(String),

    /// I/O error reading a symbol resource or configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with FrontendError.
pub type FrontendResult<T> = Result<T, FrontendError>;

impl FrontendError {
    /// Create a configuration error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a backend error with message.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
