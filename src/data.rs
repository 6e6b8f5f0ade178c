//! Data loading functionality for Shardforge.
//!
//! This module handles loading the two static catalog documents
//! (`fusion-data.json` and `rates.json`) from a data directory. Loading is
//! populate-once: each document is fetched and parsed at most one time per
//! [`DataService`], and concurrent first readers share a single load.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{FusionDocument, ShardDefinition};

/// File name of the shard catalog and recipe document.
pub const FUSION_DATA_FILE: &str = "fusion-data.json";

/// File name of the default direct-rate document.
pub const RATES_FILE: &str = "rates.json";

/// Failure to load or parse one of the static catalog documents.
///
/// These are hard failures: no computation is possible without the catalog.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loader and cache for the static catalog documents.
///
/// Explicitly constructed and handed to whoever needs catalog access; the
/// cache is scoped to this value, not process-global. Loaded documents are
/// immutable and safe to read concurrently.
pub struct DataService {
    data_dir: PathBuf,
    fusion: OnceCell<FusionDocument>,
    rates: OnceCell<HashMap<String, f64>>,
}

impl DataService {
    /// Creates a service that loads documents from `data_dir` on first use.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        DataService {
            data_dir: data_dir.into(),
            fusion: OnceCell::new(),
            rates: OnceCell::new(),
        }
    }

    /// Creates a service over already-parsed documents.
    ///
    /// Used where the documents are embedded in the binary (wasm) or built
    /// in memory (tests); no file access will ever occur.
    pub fn from_documents(fusion: FusionDocument, rates: HashMap<String, f64>) -> Self {
        DataService {
            data_dir: PathBuf::new(),
            fusion: OnceCell::with_value(fusion),
            rates: OnceCell::with_value(rates),
        }
    }

    /// The shard catalog and raw recipe document, loading it on first call.
    pub fn fusion_data(&self) -> Result<&FusionDocument, DataError> {
        self.fusion
            .get_or_try_init(|| load_json(&self.data_dir.join(FUSION_DATA_FILE)))
    }

    /// The default direct rates keyed by shard id, loading on first call.
    pub fn default_rates(&self) -> Result<&HashMap<String, f64>, DataError> {
        self.rates
            .get_or_try_init(|| load_json(&self.data_dir.join(RATES_FILE)))
    }

    /// Catalog definition for a shard id, or `None` if unknown.
    pub fn shard_definition(&self, id: &str) -> Result<Option<&ShardDefinition>, DataError> {
        Ok(self.fusion_data()?.shards.get(id))
    }

    /// Resolves a display name to a shard id, case-insensitively.
    pub fn shard_id_by_name(&self, name: &str) -> Result<Option<&str>, DataError> {
        let doc = self.fusion_data()?;
        Ok(doc
            .shards
            .iter()
            .find(|(_, def)| def.name.eq_ignore_ascii_case(name))
            .map(|(id, _)| id.as_str()))
    }

    /// All shards whose display name contains `query`, case-insensitively,
    /// sorted by name.
    pub fn search_shards(&self, query: &str) -> Result<Vec<(&str, &ShardDefinition)>, DataError> {
        let doc = self.fusion_data()?;
        let needle = query.to_lowercase();
        let mut matches: Vec<(&str, &ShardDefinition)> = doc
            .shards
            .iter()
            .filter(|(_, def)| def.name.to_lowercase().contains(&needle))
            .map(|(id, def)| (id.as_str(), def))
            .collect();
        matches.sort_by(|a, b| a.1.name.cmp(&b.1.name));
        Ok(matches)
    }
}
