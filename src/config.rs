//! Shared config utilities for loading/saving JSON config files,
//! plus the annotator's own settings.

use crate::locale::{KeywordTable, Locale};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured locale (CLI only).
pub const LOCALE_ENV: &str = "KOKORO_ANNOTATOR_LOCALE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ── Annotator Config ───────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Selects the built-in keyword table.
    #[serde(default)]
    pub locale: Locale,
    /// Replaces the built-in table entirely when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordTable>,
}

impl AnnotatorConfig {
    /// The table the classifier should use for this config.
    pub fn keyword_table(&self) -> KeywordTable {
        match &self.keywords {
            Some(table) => table.clone(),
            None => KeywordTable::builtin(self.locale),
        }
    }
}

/// Merge the locale sources for the CLI.
///
/// Precedence: `flag` > `env` (lenient language tag) > config file > `en`.
/// A `keywords` table from the file is kept whatever the locale resolves to.
pub fn resolve_config(
    file: Option<AnnotatorConfig>,
    env: Option<&str>,
    flag: Option<Locale>,
) -> AnnotatorConfig {
    let mut config = file.unwrap_or_default();
    if let Some(code) = env.filter(|code| !code.trim().is_empty()) {
        config.locale = Locale::from_code(code);
    }
    if let Some(locale) = flag {
        config.locale = locale;
    }
    config
}

/// Load annotator config from disk, falling back to defaults.
pub fn load_config(path: &Path) -> AnnotatorConfig {
    load_json_config(path, "Annotator")
}

/// Load annotator config, failing on a missing or malformed file.
pub fn try_load_config(path: &Path) -> Result<AnnotatorConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "loaded annotator config");
    Ok(config)
}

/// Save annotator config to disk.
pub fn save_config(path: &Path, config: &AnnotatorConfig) -> Result<(), ConfigError> {
    save_json_config(path, config, "Annotator")
}

// ── Generic JSON helpers ───────────────────────────────────

/// Generic load for any Serde config type with a `Default` implementation.
/// Falls back to `T::default()` if the file is missing or unparsable.
pub fn load_json_config<T: DeserializeOwned + Default>(path: &Path, label: &str) -> T {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<T>(&content) {
            Ok(config) => {
                tracing::info!(label, path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(label, path = %path.display(), error = %e, "failed to parse config, using defaults");
                T::default()
            }
        },
        Err(_) => {
            tracing::info!(label, path = %path.display(), "no config file, using defaults");
            T::default()
        }
    }
}

/// Generic save for any Serde config type.
pub fn save_json_config<T: Serialize>(
    path: &Path,
    config: &T,
    label: &str,
) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(label, path = %path.display(), "saved config");
    Ok(())
}
