// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the pool link rules of
// pool-quicklink, located in the pool subdirectory. It declares submodules
// and re-exports key types for use throughout the project.
//
// Tree Location:
// - src/pool/mod.rs (pool module entry point)
// - Submodules: directory, generic, matcher

pub mod directory;
pub mod generic;
pub mod matcher;

// Re-export key types for convenience
pub use directory::{PoolDirectory, resolve_quick_link};
pub use matcher::PoolMatcher;

// Changelog:
// - v1.0.0 (2025-06-30): Initial pool module.
//   - Purpose: Organizes the provider matchers, the generic fallback and the
//     dispatching directory.
