//! Core library for epr-comms.
//!
//! Analyzes regulatory compliance text (Extended Producer Responsibility
//! guidance in particular) and turns it into a communication strategy for
//! marketplace sellers. Used by the `epr-comms` CLI and any downstream
//! consumers.
//!
//! # Modules
//!
//! - [`analysis`] - Keyword, complexity, concept, translation and strategy analysis
//! - [`lexicon`] - Built-in EPR term lists and configurable overrides
//! - [`text`] - Sentence, word and syllable primitives
//! - [`markdown`] - Markdown-to-prose conversion for `.md` input
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use epr_comms_core::{Analyzer, ConfigLoader};
//!
//! let (config, _sources) = ConfigLoader::new()
//!     .with_user_config(true)
//!     .load()
//!     .expect("Failed to load configuration");
//! let analyzer = Analyzer::new(config.build_lexicon().expect("invalid lexicon"));
//!
//! let report = analyzer.generate_recommendations("Producers must register by March 31.");
//! println!("{}", report.implementation_priority.as_str());
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod markdown;
pub mod text;

pub use analysis::Analyzer;
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use lexicon::{Lexicon, LexiconConfig, Tier};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
