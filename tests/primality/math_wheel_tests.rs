#![cfg(feature = "dev")]
//! Tests for the 6k±1 quick-reject filter.
//!
//! The filter is a necessary condition for primes above 3: it must never
//! reject one, and it is allowed to pass composites.

use primality::internals::algorithms::sieve::Sieve;
use primality::internals::math::wheel::passes_six_k_filter;

/// Every prime above 3 passes the filter.
#[test]
fn test_filter_never_rejects_primes_above_three() {
    let sieve = Sieve::new(100_000);
    for p in sieve.primes().filter(|&p| p > 3) {
        assert!(passes_six_k_filter(p), "prime {p} rejected by filter");
    }
}

/// 2 and 3 fail the filter; callers special-case them.
#[test]
fn test_filter_excludes_two_and_three() {
    assert!(!passes_six_k_filter(2));
    assert!(!passes_six_k_filter(3));
    assert!(passes_six_k_filter(5));
    assert!(passes_six_k_filter(7));
}

/// Composites of the form 6k±1 pass; they must be verified by trial division.
#[test]
fn test_filter_passes_some_composites() {
    for n in [25u64, 35, 49, 55, 77, 91, 121] {
        assert!(passes_six_k_filter(n), "{n} is 6k±1");
    }
}

/// Residues 0, 2, 3 and 4 modulo 6 are rejected.
#[test]
fn test_filter_rejects_other_residues() {
    for k in 1u64..1000 {
        for r in [0, 2, 3, 4] {
            assert!(!passes_six_k_filter(6 * k + r));
        }
    }
}

/// No wrapping at the edges of the domain.
#[test]
fn test_filter_at_domain_edges() {
    assert!(!passes_six_k_filter(0));
    assert!(passes_six_k_filter(1));
    // u64::MAX ≡ 3 (mod 6)
    assert!(!passes_six_k_filter(u64::MAX));
    assert!(passes_six_k_filter(u64::MAX - 2));
}
