// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/rejection/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for rejected share handling, located in
// the rejection subdirectory.
//
// Tree Location:
// - src/rejection/mod.rs (rejection module entry point)
// - Submodules: catalog, stats

pub mod catalog;
pub mod stats;

pub use catalog::{CatalogEntry, CatalogError, RejectionCatalog};
pub use stats::{AnnotatedReason, annotate, sorted_by_count};

// Changelog:
// - v1.0.0 (2025-07-02): Initial rejection module.
//   - Purpose: Groups the reject message catalog and counter ordering.
