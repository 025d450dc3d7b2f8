// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the core functionality of
// pool-quicklink, located in the core subdirectory. It declares submodules and
// re-exports key types for use throughout the project.

pub mod address;
pub mod system_info;
pub mod types;

// Re-export the most commonly used items
pub use address::{extract_address, extract_worker};
pub use system_info::SystemInfoError;
pub use types::{ActivePool, Args, PoolLabel, RejectedReason, SystemInfo};

// Changelog:
// - v1.1.0 (2025-07-02): Added system info loading.
//   - Added system_info module and SystemInfoError export.
// - v1.0.0 (2025-06-30): Initial core module.
//   - Exports the stratum username parser and argument types.
