// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/address.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file splits a stratum username into its payout address and worker
// suffix, located in the core subdirectory. No address validation happens
// here; any leading token is accepted as the address.
//
// Tree Location:
// - src/core/address.rs (stratum username parsing)
// - Depends on: std

/// Return the payout address part of a stratum username.
///
/// Everything from the first `.` onwards is a worker identifier and is dropped.
/// Usernames without a `.` are returned unchanged.
pub fn extract_address(stratum_username: &str) -> &str {
    match stratum_username.split_once('.') {
        Some((address, _worker)) => address,
        None => stratum_username,
    }
}

/// Return the worker suffix of a stratum username, if any
pub fn extract_worker(stratum_username: &str) -> Option<&str> {
    stratum_username
        .split_once('.')
        .map(|(_, worker)| worker)
        .filter(|worker| !worker.is_empty())
}


// Changelog:
// - v1.0.0 (2025-06-30): Initial stratum username parsing.
//   - Purpose: Extracts the payout address used to build pool dashboard links.
//   - Features: extract_address drops everything from the first '.', and
//     extract_worker returns the remaining worker suffix for display.
