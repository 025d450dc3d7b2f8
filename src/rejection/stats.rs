// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/rejection/stats.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file orders and annotates the per-reason rejected share counters
// reported by a device, located in the rejection subdirectory.
//
// Tree Location:
// - src/rejection/stats.rs (rejected share statistics)
// - Depends on: crate::core::types, crate::rejection::catalog

use crate::core::types::RejectedReason;
use crate::pool::PoolDirectory;
use crate::rejection::catalog::RejectionCatalog;

/// References to `reasons` ordered by count, most frequent first.
///
/// Reasons with equal counts keep their reported order.
fn most_frequent_first(reasons: &[RejectedReason]) -> Vec<&RejectedReason> {
    let mut ordered: Vec<&RejectedReason> = reasons.iter().collect();
    ordered.sort_by(|a, b| b.count.cmp(&a.count));
    ordered
}

/// Copy of `reasons` ordered by count, most frequent first
pub fn sorted_by_count(reasons: &[RejectedReason]) -> Vec<RejectedReason> {
    most_frequent_first(reasons).into_iter().cloned().collect()
}

/// One rejected share counter with its readable text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedReason<'a> {
    pub message: &'a str,
    pub label: &'a str,
    pub count: u64,
    pub explanation: Option<&'a str>,
}

/// Attach labels and explanations to the counters, most frequent first
pub fn annotate<'a>(
    reasons: &'a [RejectedReason],
    catalog: &'a RejectionCatalog,
    directory: &PoolDirectory,
    host_or_url: &str,
) -> Vec<AnnotatedReason<'a>> {
    most_frequent_first(reasons)
        .into_iter()
        .map(|reason| AnnotatedReason {
            message: &reason.message,
            label: catalog.label(&reason.message),
            count: reason.count,
            explanation: catalog.explain(directory, host_or_url, &reason.message),
        })
        .collect()
}

/// Sum of all per-reason counters
pub fn total_rejected(reasons: &[RejectedReason]) -> u64 {
    reasons.iter().map(|r| r.count).sum()
}


// Changelog:
// - v1.0.1 (2025-07-04): annotate() and sorted_by_count() share one ordering.
// - v1.0.0 (2025-07-02): Initial rejected share statistics.
//   - Purpose: Presents the device's rejected share counters most frequent
//     first, with catalog labels and explanations attached.
