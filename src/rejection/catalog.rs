// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/rejection/catalog.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the share rejection catalog, located in the rejection
// subdirectory. It maps raw stratum reject messages to a short label and a
// longer explanation shown next to the rejected share counters.
//
// Tree Location:
// - src/rejection/catalog.rs (reject message catalog)
// - Depends on: serde, serde_json, thiserror, crate::pool

use crate::pool::PoolDirectory;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

const LOG_TARGET: &str = "quicklink::rejection::catalog";

/// Catalog shipped with the crate
const EMBEDDED_CATALOG: &str = include_str!("../assets/share_rejection_explanations.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse share rejection catalog")]
    ParseError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Catalog entry for {reason:?} has an empty explanation")]
    EmptyExplanation { reason: String },

    #[error("Catalog entry for {reason:?} has an empty label")]
    EmptyLabel { reason: String },
}

/// Label and explanation for one reject message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub label: String,
    pub explanation: String,
}

/// Lookup table from raw reject message to [`CatalogEntry`]
#[derive(Debug, Clone, Default)]
pub struct RejectionCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl RejectionCatalog {
    /// Parse a catalog from JSON.
    ///
    /// The document is an array of objects keyed by reject message. Objects
    /// are merged in order, so a later entry replaces an earlier one.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let groups: Vec<HashMap<String, CatalogEntry>> = serde_json::from_str(json)?;

        let mut entries = HashMap::new();
        for group in groups {
            for (reason, entry) in group {
                if entry.label.trim().is_empty() {
                    return Err(CatalogError::EmptyLabel { reason });
                }
                if entry.explanation.trim().is_empty() {
                    return Err(CatalogError::EmptyExplanation { reason });
                }
                entries.insert(reason, entry);
            }
        }

        debug!(target: LOG_TARGET, "Loaded {} share rejection entries", entries.len());
        Ok(Self { entries })
    }

    /// The catalog shipped with the crate, parsed once.
    ///
    /// Falls back to an empty catalog if the embedded document is unusable.
    pub fn embedded() -> &'static RejectionCatalog {
        static CATALOG: OnceLock<RejectionCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| match RejectionCatalog::from_json(EMBEDDED_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(target: LOG_TARGET, "Embedded share rejection catalog is invalid: {}", e);
                RejectionCatalog::default()
            }
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, reason: &str) -> Option<&CatalogEntry> {
        self.entries.get(reason)
    }

    /// Short label for a reject message, or the message itself if unknown
    pub fn label<'a>(&'a self, reason: &'a str) -> &'a str {
        self.entries.get(reason).map_or(reason, |entry| entry.label.as_str())
    }

    /// Longer explanation for a reject message, `None` if unknown
    pub fn explanation(&self, reason: &str) -> Option<&str> {
        self.entries.get(reason).map(|entry| entry.explanation.as_str())
    }

    /// Explain a reject message for the pool at `host_or_url`.
    ///
    /// The pool's own explanation wins over the catalog.
    pub fn explain<'a>(&'a self, directory: &PoolDirectory, host_or_url: &str, reason: &str) -> Option<&'a str> {
        let from_pool: Option<&'a str> = directory.rejection_explanation(host_or_url, reason);
        from_pool.or_else(|| self.explanation(reason))
    }
}


// Changelog:
// - v1.0.1 (2025-07-03): Validate labels as well as explanations.
// - v1.0.0 (2025-07-02): Initial share rejection catalog.
//   - Purpose: Annotates rejected share counters with readable text.
//   - Features: Embedded JSON catalog merged in order, label() falls back to
//     the raw message, explain() prefers the pool matcher's own text.
