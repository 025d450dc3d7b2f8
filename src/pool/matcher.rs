// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/matcher.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the pool matchers, located in the pool subdirectory. Each
// matcher recognizes one pool provider by its stratum host and knows how to
// build that provider's dashboard link for a payout address. The generic
// matcher accepts every host and is always consulted last.
//
// Tree Location:
// - src/pool/matcher.rs (pool provider rules)
// - Depends on: crate::core::address, crate::pool::generic

use crate::core::address::extract_address;
use crate::pool::generic::generic_quick_link;
use std::fmt;

/// A rule that recognizes one pool and builds its dashboard link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolMatcher {
    /// OCEAN (ocean.xyz)
    Ocean,
    /// D-Central solo pool (solo.d-central.tech)
    DCentralSolo,
    /// Noderunners pool (pool.noderunners.network)
    Noderunners,
    /// Satoshi Radio pool (pool.satoshiradio.nl)
    SatoshiRadio,
    /// Solohash (solohash.co.uk)
    Solohash,
    /// Catch-all for every other host
    Generic,
}

impl PoolMatcher {
    /// Every provider-specific matcher, in dispatch order
    pub const SPECIFIC: [PoolMatcher; 5] = [
        PoolMatcher::Ocean,
        PoolMatcher::DCentralSolo,
        PoolMatcher::Noderunners,
        PoolMatcher::SatoshiRadio,
        PoolMatcher::Solohash,
    ];

    /// Host fragment a stratum host or URL must contain, `None` for the generic matcher
    pub const fn host_fragment(&self) -> Option<&'static str> {
        match self {
            PoolMatcher::Ocean => Some("ocean.xyz"),
            PoolMatcher::DCentralSolo => Some("solo.d-central.tech"),
            PoolMatcher::Noderunners => Some("noderunners.network"),
            PoolMatcher::SatoshiRadio => Some("satoshiradio.nl"),
            PoolMatcher::Solohash => Some("solohash.co.uk"),
            PoolMatcher::Generic => None,
        }
    }

    /// Dashboard URL prefix the address is appended to
    const fn link_prefix(&self) -> Option<&'static str> {
        match self {
            PoolMatcher::Ocean => Some("https://ocean.xyz/stats/"),
            PoolMatcher::DCentralSolo => Some("https://solo.d-central.tech/#/app/"),
            PoolMatcher::Noderunners => Some("https://noderunners.network/en/pool/user/"),
            PoolMatcher::SatoshiRadio => Some("https://pool.satoshiradio.nl/user/"),
            PoolMatcher::Solohash => Some("https://solohash.co.uk/user/"),
            PoolMatcher::Generic => None,
        }
    }

    /// Human-readable provider name
    pub const fn name(&self) -> &'static str {
        match self {
            PoolMatcher::Ocean => "OCEAN",
            PoolMatcher::DCentralSolo => "D-Central Solo",
            PoolMatcher::Noderunners => "Noderunners",
            PoolMatcher::SatoshiRadio => "Satoshi Radio",
            PoolMatcher::Solohash => "Solohash",
            PoolMatcher::Generic => "Generic",
        }
    }

    pub const fn is_generic(&self) -> bool {
        matches!(self, PoolMatcher::Generic)
    }

    /// Whether this matcher recognizes the stratum host or URL.
    ///
    /// Matching is a case-sensitive substring test on the raw value.
    pub fn can_handle(&self, host_or_url: &str) -> bool {
        match self.host_fragment() {
            Some(fragment) => host_or_url.contains(fragment),
            None => true,
        }
    }

    /// Build the dashboard link for the address embedded in `stratum_username`
    pub fn quick_link(&self, host_or_url: &str, stratum_username: &str) -> String {
        match self.link_prefix() {
            Some(prefix) => format!("{}{}", prefix, extract_address(stratum_username)),
            None => generic_quick_link(host_or_url, stratum_username),
        }
    }

    /// Provider-specific explanation for a rejected share.
    ///
    /// None of the known providers publish one yet.
    pub fn rejection_explanation(&self, _reason: &str) -> Option<&'static str> {
        None
    }
}

impl fmt::Display for PoolMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


// Changelog:
// - v1.1.0 (2025-07-02): Added provider names and Display.
//   - Added name() for the --list-pools output and log lines.
// - v1.0.0 (2025-06-30): Initial pool matchers.
//   - Purpose: Encodes the link rules of the known pool providers as a
//     closed set of variants plus a generic fallback.
//   - Features: can_handle, quick_link and rejection_explanation per variant.
