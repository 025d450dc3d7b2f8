// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/directory.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the pool directory, located in the pool subdirectory.
// The directory holds the matchers in precedence order and dispatches each
// request to the first matcher that recognizes the stratum host.
//
// Tree Location:
// - src/pool/directory.rs (matcher table and dispatch)
// - Depends on: crate::pool::matcher

use crate::pool::matcher::PoolMatcher;
use log::debug;
use std::sync::OnceLock;

const LOG_TARGET: &str = "quicklink::pool::directory";

/// Built-in provider table, most specific first
const DEFAULT_TABLE: [PoolMatcher; 6] = [
    PoolMatcher::Ocean,
    PoolMatcher::DCentralSolo,
    PoolMatcher::Noderunners,
    PoolMatcher::SatoshiRadio,
    PoolMatcher::Solohash,
    PoolMatcher::Generic,
];

/// Ordered, immutable set of pool matchers.
///
/// The table always ends with [`PoolMatcher::Generic`], so every lookup
/// resolves to some matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolDirectory {
    matchers: Vec<PoolMatcher>,
}

impl Default for PoolDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolDirectory {
    /// Create a directory from the built-in provider table
    pub fn new() -> Self {
        Self {
            matchers: DEFAULT_TABLE.to_vec(),
        }
    }

    /// Create a directory from the given specific matchers.
    ///
    /// Generic entries in `specific` are dropped and a single generic matcher
    /// is appended, keeping the fallback last.
    pub fn with_matchers<I>(specific: I) -> Self
    where
        I: IntoIterator<Item = PoolMatcher>,
    {
        let mut matchers: Vec<PoolMatcher> = specific.into_iter().filter(|m| !m.is_generic()).collect();
        matchers.push(PoolMatcher::Generic);
        Self { matchers }
    }

    /// Process-wide directory built from the provider table on first use
    pub fn global() -> &'static PoolDirectory {
        static DIRECTORY: OnceLock<PoolDirectory> = OnceLock::new();
        DIRECTORY.get_or_init(PoolDirectory::new)
    }

    /// Matchers in precedence order
    pub fn matchers(&self) -> impl Iterator<Item = &PoolMatcher> {
        self.matchers.iter()
    }

    /// The first matcher that handles `host_or_url`
    pub fn matcher_for(&self, host_or_url: &str) -> PoolMatcher {
        let matcher = self
            .matchers
            .iter()
            .copied()
            .find(|m| m.can_handle(host_or_url))
            .unwrap_or(PoolMatcher::Generic);

        if matcher.is_generic() {
            debug!(target: LOG_TARGET, "No provider rule for '{}', using generic link", host_or_url);
        } else {
            debug!(target: LOG_TARGET, "Matched '{}' to {}", host_or_url, matcher);
        }
        matcher
    }

    /// True when a provider-specific matcher claims `host_or_url`
    pub fn is_known_pool(&self, host_or_url: &str) -> bool {
        !self.matcher_for(host_or_url).is_generic()
    }

    /// Resolve the dashboard link for a stratum host and username
    pub fn resolve_quick_link(&self, host_or_url: &str, stratum_username: &str) -> String {
        self.matcher_for(host_or_url).quick_link(host_or_url, stratum_username)
    }

    /// Provider-specific explanation for a rejected share on `host_or_url`
    pub fn rejection_explanation(&self, host_or_url: &str, reason: &str) -> Option<&'static str> {
        self.matcher_for(host_or_url).rejection_explanation(reason)
    }
}

/// Resolve a dashboard link using the process-wide directory
pub fn resolve_quick_link(host_or_url: &str, stratum_username: &str) -> String {
    PoolDirectory::global().resolve_quick_link(host_or_url, stratum_username)
}


// Changelog:
// - v1.1.0 (2025-07-02): Added shared directory and custom tables.
//   - Added PoolDirectory::global() backed by OnceLock.
//   - Added with_matchers() which always re-appends the generic matcher.
// - v1.0.0 (2025-06-30): Initial pool directory.
//   - Purpose: First-match dispatch over the provider table.
//   - Features: matcher_for, is_known_pool, resolve_quick_link.
