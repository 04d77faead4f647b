//! Optional TOML configuration
//!
//! ```toml
//! todo_file = "todo_list.txt"
//!
//! [currency]
//! base = "GHS"
//! as_of = "2025-06-01"
//!
//! [currency.rates]
//! GHS = 1.0
//! USD = 10.5
//! ```
//!
//! Every key is optional. Without a `[currency]` table the built-in rates are used.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::currency::{DEFAULT_BASE, RateTable};
use crate::storage::DEFAULT_TODO_FILE;

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "toolbelt.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the line-delimited to-do file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_file: Option<PathBuf>,
    /// Exchange-rate table overriding the built-in one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurrencyConfig {
    #[serde(default = "default_base")]
    pub base: String,
    /// Date the rates were published (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
    pub rates: BTreeMap<String, f64>,
}

fn default_base() -> String {
    DEFAULT_BASE.to_string()
}

impl Config {
    /// Load configuration
    ///
    /// # Arguments
    /// * `path` - Explicit config path; it must exist. When `None`,
    ///   `toolbelt.toml` in the working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => {
                if !p.exists() {
                    bail!("Config file '{}' does not exist", p.display());
                }
                p.to_path_buf()
            }
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// To-do file path, falling back to `todo_list.txt`
    pub fn todo_file(&self) -> PathBuf {
        self.todo_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TODO_FILE))
    }

    /// Validated rate table from `[currency]`, or the built-in table
    pub fn rate_table(&self) -> Result<RateTable> {
        match &self.currency {
            Some(c) => Ok(RateTable::new(&c.base, c.rates.clone(), c.as_of)?),
            None => Ok(RateTable::default()),
        }
    }
}
