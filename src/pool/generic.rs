// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/generic.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file builds the fallback dashboard link for pools that have no
// dedicated template, located in the pool subdirectory.
//
// Tree Location:
// - src/pool/generic.rs (fallback link construction)
// - Depends on: crate::core::address, crate::utils::url

use crate::core::address::extract_address;
use crate::utils::url::{encode_path_segment, join_segment, normalize_base_url};
use log::debug;

const LOG_TARGET: &str = "quicklink::pool::generic";

/// Build `<host-or-url>/<encoded-address>` for an unrecognized pool.
///
/// Never fails: an unusable host still yields a best-effort link.
pub fn generic_quick_link(host_or_url: &str, stratum_username: &str) -> String {
    let base = normalize_base_url(host_or_url);
    let address = encode_path_segment(extract_address(stratum_username));
    let link = join_segment(&base, &address);
    debug!(target: LOG_TARGET, "Generic quick link for '{}': {}", host_or_url, link);
    link
}


// Changelog:
// - v1.0.0 (2025-06-30): Initial fallback link construction.
//   - Purpose: Guarantees a dashboard link for every pool host.
//   - Features: Extracts the address, defaults the scheme, trims trailing
//     slashes and percent-encodes the address before joining.
