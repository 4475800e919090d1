//! Layered settings for the analyzer: log level, phrase count, input limit
//! and lexicon overrides.
//!
//! Layers, lowest precedence first:
//!
//! | Layer    | Source                                                    |
//! |----------|-----------------------------------------------------------|
//! | defaults | [`Config::default`]                                       |
//! | user     | `config.<ext>` in the platform config dir for `epr-comms` |
//! | project  | `.epr-comms.<ext>` then `epr-comms.<ext>`, nearest dir    |
//! | explicit | each `--config` file, in order                            |
//! | env      | `EPR_COMMS_*` variables                                   |
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`; several files in one
//! directory all apply, in that extension order. The project search walks
//! up from the working directory and gives up at the first repository root
//! (a directory holding `.git`) that has no settings file.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use epr_comms_core::{Analyzer, ConfigLoader};
//!
//! let (config, sources) = ConfigLoader::new()
//!     .with_project_search("notices/2025")
//!     .load()?;
//! if let Some(file) = sources.primary_file() {
//!     println!("settings from {file}");
//! }
//! let analyzer = Analyzer::new(config.build_lexicon()?);
//! # let _ = analyzer;
//! # Ok(())
//! # }
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::lexicon::{Lexicon, LexiconConfig};

/// Effective settings after every layer has been merged.
///
/// Every field may be omitted from a settings file.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Verbosity used when neither `RUST_LOG` nor `-q`/`-v` says otherwise.
    pub log_level: LogLevel,
    /// Directory for JSONL log files. No log file is written when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// How many key phrases `concepts` lists when `--top` is absent (10 if unset).
    pub top_phrases: Option<usize>,
    /// Largest document accepted, in bytes. Unset means 5 MiB.
    pub max_input_bytes: Option<usize>,
    /// Accept documents of any size, ignoring `max_input_bytes`.
    pub disable_input_limit: bool,
    /// Replacement phrase lists; a list left out keeps its built-in terms.
    pub lexicon: Option<LexiconConfig>,
}

impl Config {
    /// The lexicon the analyzer should use: built-in terms with any
    /// configured lists swapped in.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLexicon`] for a phrase that could never
    /// match.
    pub fn build_lexicon(&self) -> ConfigResult<Lexicon> {
        self.lexicon
            .as_ref()
            .map_or_else(|| Ok(Lexicon::default()), Lexicon::from_config)
    }
}

/// Default verbosity, written lowercase in settings files.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Lexicon and scoring detail.
    Debug,
    /// One line per command.
    #[default]
    Info,
    /// Only suspicious input.
    Warn,
    /// Only failures.
    Error,
}

impl LogLevel {
    /// Name accepted by `EnvFilter`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The settings files that fed a [`Config`], grouped by layer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project files from the nearest directory that had any, low to high.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// Per-user settings file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files passed with `--config`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Every file in merge order: user, then project, then explicit.
    pub fn layered(&self) -> impl DoubleEndedIterator<Item = &Utf8Path> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_files)
            .map(Utf8PathBuf::as_path)
    }

    /// The file whose values won, if any file was read.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.layered().next_back()
    }
}

const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];
const APP_NAME: &str = "epr-comms";
const ENV_PREFIX: &str = "EPR_COMMS_";
/// A directory holding this entry ends the project search.
const REPO_ROOT_MARKER: &str = ".git";

/// Collects settings files and merges them into a [`Config`].
#[derive(Debug)]
pub struct ConfigLoader {
    search_from: Option<Utf8PathBuf>,
    read_user_file: bool,
    explicit: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads the user file and nothing else until configured.
    pub const fn new() -> Self {
        Self {
            search_from: None,
            read_user_file: true,
            explicit: Vec::new(),
        }
    }

    /// Look for project settings in `dir` and its ancestors.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, dir: P) -> Self {
        self.search_from = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Turn the per-user settings file on or off.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.read_user_file = include;
        self
    }

    /// Apply `path` above every discovered file. Later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge defaults, files and environment into one [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] when a file cannot be read or
    /// parsed, or a value has the wrong type.
    #[tracing::instrument(skip(self), fields(search_from = ?self.search_from))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = ConfigSources {
            user_file: self.read_user_file.then(user_settings_file).flatten(),
            project_files: self
                .search_from
                .as_deref()
                .map(project_settings_files)
                .unwrap_or_default(),
            explicit_files: self.explicit,
        };
        tracing::debug!(files = ?sources.layered().collect::<Vec<_>>(), "merging settings");

        let figment = sources
            .layered()
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                merge_file,
            )
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            lexicon_overrides = config.lexicon.is_some(),
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

/// Settings files in the nearest directory at or above `start` that has any.
///
/// Dotfiles come first so a visible `epr-comms.<ext>` overrides them.
fn project_settings_files(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = [".", ""]
            .into_iter()
            .flat_map(|dot| EXTENSIONS.map(|ext| dir.join(format!("{dot}{APP_NAME}.{ext}"))))
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            return found;
        }
        if dir != start && dir.join(REPO_ROOT_MARKER).exists() {
            break;
        }
    }
    Vec::new()
}

fn user_settings_file() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    let dir = Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()?;
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}
