// Pool Quicklink - Free and Open Source Software Statement
//
// This project, pool-quicklink, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/quicklink_test.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains integration tests for quick link resolution, located in
// the tests directory. It checks the provider templates, the generic fallback
// and the dispatch order through the public API.
//
// Tree Location:
// - tests/quicklink_test.rs (quick link integration tests)
// - Depends on: pool-quicklink

#[cfg(test)]
mod tests {
    use pool_quicklink::{PoolDirectory, PoolMatcher, extract_address, resolve_quick_link};

    const STRATUM_USER: &str = "bc1qnp980s5fpp8l94p5cvttmtdqy8rvrq74qly2yrfmzkdsntqzlc5qkc4rkq.bitaxe";
    const ADDRESS: &str = "bc1qnp980s5fpp8l94p5cvttmtdqy8rvrq74qly2yrfmzkdsntqzlc5qkc4rkq";

    #[test]
    fn test_extract_address() {
        assert_eq!(extract_address(STRATUM_USER), ADDRESS);
        assert_eq!(extract_address(ADDRESS), ADDRESS);
        assert_eq!(extract_address(""), "");
    }

    #[test]
    fn test_generic_matcher_contract() {
        let generic = PoolMatcher::Generic;
        assert!(generic.can_handle("any-url"));
        assert!(generic.can_handle(""));
        assert_eq!(generic.rejection_explanation("any"), None);
    }

    #[test]
    fn test_should_match_ocean() {
        assert_eq!(
            resolve_quick_link("ocean.xyz", STRATUM_USER),
            format!("https://ocean.xyz/stats/{}", ADDRESS)
        );
    }

    #[test]
    fn test_should_match_dcentral_solo() {
        assert_eq!(
            resolve_quick_link("solo.d-central.tech", STRATUM_USER),
            format!("https://solo.d-central.tech/#/app/{}", ADDRESS)
        );
    }

    #[test]
    fn test_should_match_noderunners() {
        assert_eq!(
            resolve_quick_link("pool.noderunners.network", STRATUM_USER),
            format!("https://noderunners.network/en/pool/user/{}", ADDRESS)
        );
    }

    #[test]
    fn test_should_match_satoshiradio() {
        let expected = format!("https://pool.satoshiradio.nl/user/{}", ADDRESS);
        assert_eq!(resolve_quick_link("satoshiradio.nl", STRATUM_USER), expected);
        assert_eq!(resolve_quick_link("pool.satoshiradio.nl", STRATUM_USER), expected);
    }

    #[test]
    fn test_should_match_solohash() {
        assert_eq!(
            resolve_quick_link("solohash.co.uk", STRATUM_USER),
            format!("https://solohash.co.uk/user/{}", ADDRESS)
        );
    }

    #[test]
    fn test_unknown_pool_falls_back_to_http() {
        assert_eq!(
            resolve_quick_link("somepool.org", STRATUM_USER),
            format!("http://somepool.org/{}", ADDRESS)
        );
    }

    #[test]
    fn test_https_is_preserved() {
        assert_eq!(
            resolve_quick_link("https://example.com", STRATUM_USER),
            format!("https://example.com/{}", ADDRESS)
        );
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        assert_eq!(
            resolve_quick_link("https://example.com/", STRATUM_USER),
            format!("https://example.com/{}", ADDRESS)
        );
    }

    #[test]
    fn test_special_characters_are_encoded_in_fallback() {
        assert_eq!(
            resolve_quick_link("custompool.org", "my@worker.name"),
            "http://custompool.org/my%40worker"
        );
    }

    #[test]
    fn test_empty_host_still_resolves() {
        let directory = PoolDirectory::new();
        assert_eq!(directory.matcher_for(""), PoolMatcher::Generic);
        assert!(!directory.resolve_quick_link("", STRATUM_USER).is_empty());
    }

    #[test]
    fn test_specific_matchers_get_first_refusal() {
        let directory = PoolDirectory::new();
        for matcher in PoolMatcher::SPECIFIC {
            let host = matcher.host_fragment().unwrap_or_default();
            assert_eq!(directory.matcher_for(host), matcher, "host {}", host);
        }
    }

    #[test]
    fn test_directory_is_usable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let user = format!("addr{}.rig", i);
                    PoolDirectory::global().resolve_quick_link("ocean.xyz", &user)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let link = handle.join().expect("thread panicked");
            assert_eq!(link, format!("https://ocean.xyz/stats/addr{}", i));
        }
    }
}

// Changelog:
// - v1.0.0 (2025-06-30): Initial quick link integration tests.
//   - Covers every provider template, the generic fallback rules and
//     concurrent use of the shared directory.
