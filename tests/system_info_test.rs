// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/system_info_test.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains tests for loading device system info files and
// annotating their rejected share counters.

#[cfg(test)]
mod tests {
    use pool_quicklink::core::{PoolLabel, SystemInfoError};
    use pool_quicklink::rejection::{annotate, sorted_by_count};
    use pool_quicklink::{PoolDirectory, RejectionCatalog, Result, SystemInfo};
    use std::path::Path;
    use tempfile::{TempDir, tempdir};
    use tokio::fs;

    const SYSTEM_INFO: &str = r#"{
        "hostname": "bitaxe-01",
        "stratumURL": "pool.noderunners.network",
        "stratumPort": 1337,
        "stratumUser": "bc1qexample.bitaxe",
        "fallbackStratumURL": "https://backup.example.com/",
        "fallbackStratumPort": 3333,
        "fallbackStratumUser": "bc1qbackup.bitaxe",
        "isUsingFallbackStratum": 0,
        "sharesAccepted": 1200,
        "sharesRejected": 9,
        "sharesRejectedReasons": [
            {"message": "Stale", "count": 2},
            {"message": "Above target", "count": 6},
            {"message": "weird pool message", "count": 1}
        ],
        "power": 14.2
    }"#;

    // Helper that propagates load errors through the crate Result type
    async fn load_boxed(path: &Path) -> Result<SystemInfo> {
        Ok(SystemInfo::load(path).await?)
    }

    // Helper function to create a temporary directory for testing
    fn create_temp_dir() -> TempDir {
        tempdir().expect("Failed to create temporary directory")
    }

    #[tokio::test]
    async fn test_load_and_resolve_primary() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("system_info.json");
        fs::write(&path, SYSTEM_INFO).await.expect("Failed to write system info");

        let info = SystemInfo::load(&path).await.expect("Failed to load system info");
        assert_eq!(info.hostname, "bitaxe-01");
        assert_eq!(info.active_pool().label, PoolLabel::Primary);
        assert_eq!(
            info.quick_link(&PoolDirectory::new()),
            "https://noderunners.network/en/pool/user/bc1qexample"
        );
    }

    #[tokio::test]
    async fn test_load_and_resolve_fallback() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("system_info.json");
        let json = SYSTEM_INFO.replace(
            r#""isUsingFallbackStratum": 0"#,
            r#""isUsingFallbackStratum": 1"#,
        );
        fs::write(&path, json).await.expect("Failed to write system info");

        let info = SystemInfo::load(&path).await.expect("Failed to load system info");
        let pool = info.active_pool();
        assert_eq!(pool.label, PoolLabel::Fallback);
        assert_eq!(pool.port, 3333);
        assert_eq!(info.quick_link(&PoolDirectory::new()), "https://backup.example.com/bc1qbackup");
    }

    #[tokio::test]
    async fn test_load_errors_convert_into_crate_result() -> Result<()> {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("system_info.json");
        fs::write(&path, SYSTEM_INFO).await?;

        let info = SystemInfo::load(&path).await?;
        assert_eq!(info.active_pool().port, 1337);

        let missing = load_boxed(&temp_dir.path().join("nope.json")).await;
        let message = missing.expect_err("missing file should fail").to_string();
        assert!(message.contains("does not exist"));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("nope.json");

        let result = SystemInfo::load(&path).await;
        assert!(matches!(result, Err(SystemInfoError::FileNotFound { .. })));
    }

    #[tokio::test]
    async fn test_unreadable_path_is_io_error() {
        let temp_dir = create_temp_dir();

        // A directory exists but cannot be read as a file
        let result = SystemInfo::load(temp_dir.path()).await;
        assert!(matches!(result, Err(SystemInfoError::IoError { .. })));
    }

    #[tokio::test]
    async fn test_corrupt_file() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("system_info.json");
        fs::write(&path, "{ \"stratumURL\": ").await.expect("Failed to write system info");

        let result = SystemInfo::load(&path).await;
        assert!(matches!(result, Err(SystemInfoError::ParseError { .. })));
    }

    #[test]
    fn test_rejected_reasons_most_frequent_first() {
        let info = SystemInfo::from_json(SYSTEM_INFO).expect("Failed to parse system info");
        let sorted = sorted_by_count(&info.shares_rejected_reasons);
        let counts: Vec<u64> = sorted.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![6, 2, 1]);

        let annotated = annotate(
            &info.shares_rejected_reasons,
            RejectionCatalog::embedded(),
            &PoolDirectory::new(),
            info.active_pool().url,
        );
        assert_eq!(annotated[0].message, "Above target");
        assert!(annotated[0].explanation.is_some());
        assert_eq!(annotated[2].label, "weird pool message");
        assert_eq!(annotated[2].explanation, None);
    }
}

// Changelog:
// - v1.0.1 (2025-07-04): Device-style numeric fallback flag and IoError case.
// - v1.0.0 (2025-07-02): Initial system info tests.
//   - Covers primary and fallback selection, file errors and rejected share
//     ordering with catalog annotations.
