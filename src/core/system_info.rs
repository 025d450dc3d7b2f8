// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/system_info.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file loads a device system info document and picks the pool the
// device is mining on, located in the core subdirectory.
//
// Tree Location:
// - src/core/system_info.rs (system info loading and active pool selection)
// - Depends on: serde_json, thiserror, tokio, crate::pool

use crate::core::types::{ActivePool, PoolLabel, SystemInfo};
use crate::pool::PoolDirectory;
use log::{debug, info};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

static LOG_TARGET: &str = "quicklink::system_info";

#[derive(Error, Debug)]
pub enum SystemInfoError {
    #[error("System info file does not exist at {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("IO operation failed on {path:?}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse system info: {message}")]
    ParseError { message: String },
}

impl SystemInfo {
    /// Parse a system info JSON document
    pub fn from_json(json: &str) -> Result<Self, SystemInfoError> {
        serde_json::from_str(json).map_err(|e| SystemInfoError::ParseError { message: e.to_string() })
    }

    /// Read and parse a system info JSON file
    pub async fn load(path: &Path) -> Result<Self, SystemInfoError> {
        let contents = fs::read_to_string(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => SystemInfoError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => SystemInfoError::IoError {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let system_info = Self::from_json(&contents)?;
        info!(target: LOG_TARGET, "Loaded system info from {:?}", path);
        Ok(system_info)
    }

    /// The pool the device is currently using
    pub fn active_pool(&self) -> ActivePool<'_> {
        if self.is_using_fallback_stratum {
            ActivePool {
                label: PoolLabel::Fallback,
                url: &self.fallback_stratum_url,
                port: self.fallback_stratum_port,
                user: &self.fallback_stratum_user,
            }
        } else {
            ActivePool {
                label: PoolLabel::Primary,
                url: &self.stratum_url,
                port: self.stratum_port,
                user: &self.stratum_user,
            }
        }
    }

    /// Dashboard link for the active pool
    pub fn quick_link(&self, directory: &PoolDirectory) -> String {
        let pool = self.active_pool();
        debug!(target: LOG_TARGET, "Resolving quick link for {} pool {}", pool.label, pool.url);
        directory.resolve_quick_link(pool.url, pool.user)
    }
}


// Changelog:
// - v1.0.1 (2025-07-04): Only a missing file maps to FileNotFound.
//   - Other read failures (permissions, directories) surface as IoError.
// - v1.0.0 (2025-07-02): Initial system info loading.
//   - Purpose: Resolves the dashboard link for whichever pool the device is
//     mining on, primary or fallback.
//   - Features: Async file loading with typed errors, active_pool() and
//     quick_link() helpers.
