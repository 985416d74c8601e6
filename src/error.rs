//! Error types for sitemap-stream
//!
//! The writer has a deliberately small failure surface:
//! - Sink I/O failures abort the whole write operation; the first error is
//!   propagated and nothing further is written.
//! - Invalid options are rejected up front as configuration errors.
//!
//! Reaching the per-page capacity is *not* an error; it is the internal
//! signal that starts the next urlset page. Entries with an empty location
//! are not rejected either; validating URLs is the entry producer's
//! responsibility.

use thiserror::Error;

/// Result type alias for sitemap-stream operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sitemap-stream
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The option that caused the error (e.g., "capacity")
        key: Option<String>,
    },

    /// I/O error from an output sink
    ///
    /// The first sink error anywhere aborts the entire write. Callers must
    /// treat already-written pages as undefined output and discard them.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
