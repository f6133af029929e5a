#![cfg(feature = "dev")]
//! Tests for the sieve of Eratosthenes.

use primality::internals::algorithms::sieve::Sieve;
use primality::internals::primitives::errors::PrimalityError;

/// Test known prime counts.
#[test]
fn test_prime_counts() {
    assert_eq!(Sieve::new(100).count(), 25);
    assert_eq!(Sieve::new(1000).count(), 168);
    assert_eq!(Sieve::new(10_000).count(), 1229);
    assert_eq!(Sieve::new(100_000).count(), 9592);
}

/// Test the reference benchmark range.
#[test]
fn test_count_between() {
    let sieve = Sieve::new(20_000);
    assert_eq!(sieve.count_between(10_000, 20_000), 1033);
    assert_eq!(sieve.count_between(1, 100), 25);
    assert_eq!(sieve.count_between(14, 16), 0);
    assert_eq!(sieve.count_between(100, 1), 0);
    // Clamped to the limit.
    assert_eq!(sieve.count_between(0, 50_000), sieve.count());
    assert_eq!(sieve.count_between(30_000, 50_000), 0);
}

/// Test the first primes in order.
#[test]
fn test_primes_iterator() {
    let sieve = Sieve::new(30);
    let primes: Vec<u64> = sieve.primes().collect();
    assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
}

/// Test tiny limits.
#[test]
fn test_tiny_limits() {
    let zero = Sieve::new(0);
    assert_eq!(zero.limit(), 0);
    assert_eq!(zero.count(), 0);
    assert_eq!(zero.is_prime(0), Some(false));

    let one = Sieve::new(1);
    assert_eq!(one.count(), 0);
    assert_eq!(one.is_prime(1), Some(false));

    let two = Sieve::new(2);
    assert_eq!(two.count(), 1);
    assert_eq!(two.is_prime(2), Some(true));
}

/// Test that queries above the limit are not answered.
#[test]
fn test_out_of_range_query() {
    let sieve = Sieve::new(50);
    assert_eq!(sieve.limit(), 50);
    assert_eq!(sieve.is_prime(47), Some(true));
    assert_eq!(sieve.is_prime(49), Some(false));
    assert_eq!(sieve.is_prime(51), None);
    assert_eq!(sieve.is_prime(u64::MAX), None);
}

/// Test that perfect squares of primes are crossed out.
#[test]
fn test_prime_squares() {
    let sieve = Sieve::new(10_000);
    for p in [2u64, 3, 5, 7, 11, 13, 97] {
        assert_eq!(sieve.is_prime(p * p), Some(false), "{p}²");
    }
}

/// Test that a limit whose table cannot be sized is rejected.
#[test]
fn test_unallocatable_limit() {
    assert_eq!(
        Sieve::try_new(usize::MAX).unwrap_err(),
        PrimalityError::InvalidLimit(usize::MAX)
    );
    assert_eq!(
        Sieve::try_new(usize::MAX - 1).unwrap_err(),
        PrimalityError::InvalidLimit(usize::MAX - 1)
    );
    assert_eq!(Sieve::try_new(100).unwrap().count(), 25);
}

/// Test that the infallible constructor panics with the error message.
#[test]
#[should_panic(expected = "Invalid sieve limit")]
fn test_unallocatable_limit_panics() {
    let _ = Sieve::new(usize::MAX);
}
