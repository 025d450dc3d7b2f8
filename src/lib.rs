// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for pool-quicklink,
// located at the root of the source tree. It exports all public modules
// and types that other crates or binaries can use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, pool, rejection, utils, help

pub mod core;
pub mod help;
pub mod pool;
pub mod rejection;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::core::{SystemInfo, extract_address};
pub use crate::pool::{PoolDirectory, PoolMatcher, resolve_quick_link};
pub use crate::rejection::RejectionCatalog;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v1.1.0 (2025-07-02): Added rejection module and system info support.
//   - Re-exported RejectionCatalog and SystemInfo.
// - v1.0.0 (2025-06-30): Initial library root.
//   - Purpose: Organizes the project into core, pool, utils and help modules.
//   - Features: Re-exports PoolDirectory, PoolMatcher and resolve_quick_link,
//     and defines a common Result type.
