//! Settings file discovery and parsing.
//!
//! The updater reads a single TOML file, `directnic_ddns.toml`, found by
//! searching an ordered list of candidate directories (working directory
//! first, then `/etc`). The search list is passed in explicitly so tests
//! can inject their own directories.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Name of the settings file looked up in each candidate directory
pub const CONFIG_FILE_NAME: &str = "directnic_ddns.toml";

/// Default ordered search list: working directory, then the system dir
pub const DEFAULT_SEARCH_DIRS: &[&str] = &[".", "/etc"];

/// Parsed settings file
///
/// A single field today; read once at startup and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Provider update endpoint. The resolved address is appended to this
    /// string verbatim, so it is expected to end with a query prefix such
    /// as `?ip=`.
    #[serde(rename = "update-url")]
    pub update_url: String,
}

/// Load settings from the default search directories.
pub fn load() -> Result<Settings> {
    load_from_dirs(DEFAULT_SEARCH_DIRS)
}

/// Load settings from an explicit ordered list of candidate directories.
///
/// The first directory containing `directnic_ddns.toml` wins; later
/// directories are never consulted. A file that exists but cannot be read
/// or parsed aborts the search immediately rather than falling through to
/// the next candidate.
pub fn load_from_dirs(dirs: &[impl AsRef<Path>]) -> Result<Settings> {
    for dir in dirs {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(Error::config(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };

        let settings: Settings = toml::from_str(&raw)
            .map_err(|e| Error::config(format!("parse error in {}: {e}", path.display())))?;

        return Ok(settings);
    }

    Err(Error::ConfigNotFound)
}
