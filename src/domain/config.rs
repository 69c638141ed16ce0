use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration for notes management.
///
/// This struct holds the settings that control where notes are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Versions")]
pub struct Config {
    /// The path of the note store file.
    ///
    /// Relative paths are resolved against the working directory.
    store: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
        }
    }
}

impl Config {
    /// The file name used for the note store when none is configured.
    pub const DEFAULT_STORE: &str = "notes.txt";

    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the path of the note store.
    #[must_use]
    pub fn store(&self) -> &Path {
        &self.store
    }

    /// Sets the path of the note store.
    pub fn set_store(&mut self, store: PathBuf) {
        self.store = store;
    }
}

fn default_store() -> PathBuf {
    PathBuf::from(Config::DEFAULT_STORE)
}

/// Errors that can occur when loading a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        /// The config file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The config file is not valid TOML, or has the wrong shape.
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        /// The config file path.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_store")]
        store: PathBuf,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { store } => Self { store },
        }
    }
}
