// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.1.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines core data structures for pool-quicklink, located in the
// core subdirectory. It includes the command-line arguments and the subset of
// the device system info payload needed to resolve the active pool's link
// and annotate rejected shares.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, serde

use clap::Parser;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Command-line arguments for the quicklink tool
#[derive(Parser, Debug, Default)]
#[command(
    name = "quicklink",
    author = "Pool Quicklink Team",
    version,
    about = "Resolve a mining pool dashboard link from a stratum endpoint and username",
    long_about = "Quicklink turns a stratum endpoint and a stratum username into a link to the\n\
                  pool's public dashboard for the payout address.\n\n\
                  SINGLE LINK: Requires a pool host or URL and a stratum username\n\
                  SYSTEM INFO: Reads a device system info JSON file and resolves the active pool\n\
                  LIST POOLS: Prints the known pool providers\n\n\
                  Examples:\n\
                    quicklink -o ocean.xyz -u bc1qexampleaddress.bitaxe\n\
                    quicklink -o public-pool.io:21496 -u bc1qexampleaddress --reason \"Above target\"\n\
                    quicklink --info system_info.json\n\
                    quicklink --list-pools"
)]
pub struct Args {
    /// Stratum host or URL of the pool
    /// Examples: ocean.xyz, pool.noderunners.network, https://example.com/
    #[arg(
        short = 'o',
        long = "pool",
        value_name = "HOST_OR_URL",
        help = "Stratum host or URL of the pool"
    )]
    pub pool: Option<String>,

    /// Stratum username, conventionally <payout-address>.<worker-name>
    #[arg(
        short = 'u',
        long = "user",
        value_name = "STRATUM_USER",
        help = "Stratum username (address[.worker])"
    )]
    pub user: Option<String>,

    /// Rejected share reasons to explain for the given pool
    #[arg(
        long = "reason",
        value_name = "REASON",
        help = "Explain a rejected share reason (repeatable)"
    )]
    pub reasons: Vec<String>,

    /// Device system info JSON file (as served by the device API)
    #[arg(
        long = "info",
        value_name = "FILE",
        help = "Resolve the active pool from a system info JSON file"
    )]
    pub info: Option<PathBuf>,

    /// Print the known pool providers and exit
    #[arg(long, default_value = "false", help = "List known pool providers")]
    pub list_pools: bool,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        let single = self.pool.is_some() || self.user.is_some();
        let modes = [single, self.info.is_some(), self.list_pools]
            .iter()
            .filter(|enabled| **enabled)
            .count();

        if modes == 0 {
            return Err("Nothing to do. Use --pool with --user, --info FILE, or --list-pools".to_string());
        }
        if modes > 1 {
            return Err("--pool/--user, --info and --list-pools cannot be combined".to_string());
        }

        if single {
            if self.pool.is_none() {
                return Err("Pool host or URL is required. Use --pool HOST_OR_URL".to_string());
            }
            if self.user.is_none() {
                return Err("Stratum username is required. Use --user ADDRESS[.WORKER]".to_string());
            }
        }

        if !self.reasons.is_empty() && !single {
            return Err("--reason can only be used together with --pool".to_string());
        }

        Ok(())
    }
}

/// Which of the device's configured pools is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolLabel {
    Primary,
    Fallback,
}

impl fmt::Display for PoolLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolLabel::Primary => write!(f, "Primary"),
            PoolLabel::Fallback => write!(f, "Fallback"),
        }
    }
}

/// The pool a device is currently mining on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePool<'a> {
    pub label: PoolLabel,
    pub url: &'a str,
    pub port: u16,
    pub user: &'a str,
}

/// Count of shares rejected for one reason, as reported by the device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedReason {
    /// Raw reject message returned by the pool
    pub message: String,

    /// Number of shares rejected with this message
    pub count: u64,
}

/// Subset of the device system info payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    /// Device hostname
    #[serde(default)]
    pub hostname: String,

    /// Primary stratum host or URL
    #[serde(rename = "stratumURL", default)]
    pub stratum_url: String,

    /// Primary stratum port
    #[serde(default)]
    pub stratum_port: u16,

    /// Primary stratum username
    #[serde(default)]
    pub stratum_user: String,

    /// Fallback stratum host or URL
    #[serde(rename = "fallbackStratumURL", default)]
    pub fallback_stratum_url: String,

    /// Fallback stratum port
    #[serde(default)]
    pub fallback_stratum_port: u16,

    /// Fallback stratum username
    #[serde(default)]
    pub fallback_stratum_user: String,

    /// Whether the device has switched to the fallback pool.
    ///
    /// Firmware sends this as a number; non-zero means fallback.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_using_fallback_stratum: bool,

    /// Total accepted shares
    #[serde(default)]
    pub shares_accepted: u64,

    /// Total rejected shares
    #[serde(default)]
    pub shares_rejected: u64,

    /// Rejected shares grouped by reject message
    #[serde(default)]
    pub shares_rejected_reasons: Vec<RejectedReason>,
}

/// Flag sent either as a JSON boolean or as a number
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Number(f64),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Number(value) => value != 0.0,
    })
}


// Changelog:
// - v1.1.1 (2025-07-04): Accept numeric isUsingFallbackStratum.
//   - Device firmware reports the flag as 0/1; booleans are still accepted.
// - v1.1.0 (2025-07-02): Added system info payload types.
//   - Added SystemInfo, ActivePool, PoolLabel and RejectedReason.
//   - Added --info and --reason arguments with validation.
// - v1.0.0 (2025-06-30): Initial argument definitions.
//   - Purpose: Defines the quicklink command line (pool, user, list-pools).
