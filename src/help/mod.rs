// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/help/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides the human-readable listings printed by the quicklink
// binary: the known pool providers and a quick usage summary.
//
// Tree Location:
// - src/help/mod.rs (help output)
// - Depends on: crate::pool

use crate::pool::{PoolDirectory, PoolMatcher};

/// Example address used in the printed link templates
const EXAMPLE_ADDRESS: &str = "<address>";

/// One row of the provider listing: name, host fragment, example link
pub fn provider_rows(directory: &PoolDirectory) -> Vec<(&'static str, &'static str, String)> {
    directory
        .matchers()
        .map(|matcher| {
            let fragment = matcher.host_fragment().unwrap_or("*");
            let example_host = matcher.host_fragment().unwrap_or("your.pool.host");
            (matcher.name(), fragment, matcher.quick_link(example_host, EXAMPLE_ADDRESS))
        })
        .collect()
}

/// Print the provider table in dispatch order
pub fn display_pool_list(directory: &PoolDirectory) {
    println!("🔗 Known pool providers (first match wins)");
    println!("==========================================");
    for (name, fragment, link) in provider_rows(directory) {
        println!("  {:<16} {:<22} {}", name, fragment, link);
    }
    println!();
    println!("Hosts are matched by substring; anything else falls back to {}.", PoolMatcher::Generic);
}

/// Display quick help summary
pub fn display_quick_help() {
    println!("🔗 Quicklink - Quick Help");
    println!("=========================");
    println!();
    println!("SINGLE LINK:");
    println!("  quicklink -o ocean.xyz -u ADDRESS.WORKER");
    println!();
    println!("SYSTEM INFO:");
    println!("  quicklink --info system_info.json");
    println!();
    println!("Use --help for detailed options or --list-pools for the provider table.");
}


// Changelog:
// - v1.0.0 (2025-06-30): Initial help module.
//   - Purpose: Prints the provider table and a short usage summary.
