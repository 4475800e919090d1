//! Error types for epr-comms-core.
//!
//! Analysis itself is total: every analysis function returns a plain
//! report. Errors only arise while loading configuration.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A configured lexicon phrase cannot be matched.
    #[error("invalid lexicon entry {phrase:?} in {list}: {reason}")]
    InvalidLexicon {
        /// The lexicon list containing the phrase.
        list: String,
        /// The offending phrase.
        phrase: String,
        /// Why the phrase was rejected.
        reason: &'static str,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
