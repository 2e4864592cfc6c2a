//! Per-generator default options loaded from a JSON file
//!
//! ```json
//! { "defaults": { "password": { "length": 24, "includeSymbols": false } } }
//! ```

use keyforge_common::{Error, ErrorKind, LoggingTransformer, Result, err};
use keyforge_key::{GeneratorKind, GeneratorOptions};
use log::debug;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    defaults: BTreeMap<String, GeneratorOptions>,
}

/// Validated configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    defaults: HashMap<GeneratorKind, GeneratorOptions>,
}

impl Config {
    /// `$XDG_CONFIG_HOME/keyforge/config.json`, or the platform equivalent
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keyforge").join("config.json"))
    }

    /// Load from `path`, or from [`Self::default_path`] when `None`
    ///
    /// An explicit path must exist; a missing file at the default location
    /// yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => {
                    debug!("No platform config directory; using built-in defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !required && !path.exists() {
            debug!("No config file at {}; using built-in defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .map_err(|e| Error::with_source(ErrorKind::Io, e).context(path.display().to_string()))?;
        let config = Self::from_json(&text).map_err(|e| e.context(path.display().to_string()))?;

        LoggingTransformer::log_config_loaded(&path.display().to_string(), config.defaults.len());
        Ok(config)
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed JSON or an unknown
    /// generator id.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(text)
            .map_err(|e| Error::with_source(ErrorKind::Configuration, e))?;

        let mut defaults = HashMap::with_capacity(raw.defaults.len());
        for (id, options) in raw.defaults {
            let kind: GeneratorKind = id
                .parse()
                .map_err(|_| err!(configuration, "unknown generator '{}' in defaults", id))?;
            defaults.insert(kind, options);
        }

        Ok(Self { defaults })
    }

    /// Configured overrides for `kind`, empty if none
    #[must_use]
    pub fn options_for(&self, kind: GeneratorKind) -> GeneratorOptions {
        self.defaults.get(&kind).cloned().unwrap_or_default()
    }

    /// Number of generators with configured overrides
    #[must_use]
    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    /// Whether no overrides are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }
}
