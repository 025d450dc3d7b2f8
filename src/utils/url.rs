// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/url.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides the URL helpers used when building dashboard links for
// pools without a dedicated link template, located in the utils subdirectory.
//
// Tree Location:
// - src/utils/url.rs (URL helpers)
// - Depends on: urlencoding

use std::borrow::Cow;

/// Scheme applied to hosts given without one
pub const DEFAULT_SCHEME: &str = "http://";

/// True if the value already carries an http or https scheme
pub fn has_http_scheme(host_or_url: &str) -> bool {
    host_or_url.starts_with("http://") || host_or_url.starts_with("https://")
}

/// Turn a stratum host or URL into a base URL without trailing slashes.
///
/// An existing `http://` or `https://` scheme is kept, anything else gets
/// `http://` prepended.
pub fn normalize_base_url(host_or_url: &str) -> String {
    let with_scheme = if has_http_scheme(host_or_url) {
        Cow::Borrowed(host_or_url)
    } else {
        Cow::Owned(format!("{}{}", DEFAULT_SCHEME, host_or_url))
    };
    with_scheme.trim_end_matches('/').to_string()
}

/// Percent-encode a value for use as a single URL path segment
pub fn encode_path_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

/// Join a base URL and an already-encoded path segment
pub fn join_segment(base: &str, segment: &str) -> String {
    format!("{}/{}", base, segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_defaults_to_http() {
        assert_eq!(normalize_base_url("somepool.org"), "http://somepool.org");
        // Slashes of a bare scheme are trailing slashes too
        assert_eq!(normalize_base_url(""), "http:");
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        assert_eq!(normalize_base_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_base_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        assert_eq!(normalize_base_url("https://example.com/"), "https://example.com");
        assert_eq!(normalize_base_url("example.com///"), "http://example.com");
        assert_eq!(normalize_base_url("https://example.com/pool/"), "https://example.com/pool");
    }

    #[test]
    fn test_stratum_scheme_is_not_a_web_scheme() {
        assert!(!has_http_scheme("stratum+tcp://pool.example"));
        assert_eq!(
            normalize_base_url("stratum+tcp://pool.example"),
            "http://stratum+tcp://pool.example"
        );
    }

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("my@worker"), "my%40worker");
        assert_eq!(encode_path_segment("a b/c?d#e"), "a%20b%2Fc%3Fd%23e");
        assert_eq!(encode_path_segment("bc1qabc-_.~"), "bc1qabc-_.~");
    }

    #[test]
    fn test_join_segment() {
        assert_eq!(join_segment("http://somepool.org", "addr"), "http://somepool.org/addr");
    }
}

// Changelog:
// - v1.0.0 (2025-06-30): Initial URL helpers.
//   - Purpose: Normalizes unknown pool hosts into base URLs and encodes
//     payout addresses for the generic dashboard link.
//   - Features: Defaults the scheme to http://, trims trailing slashes and
//     percent-encodes path segments with urlencoding.
