//! fastPrimality Parallel Classification Examples
//!
//! This example demonstrates features specific to `fastPrimality`:
//! - Parallel batch classification using `rayon`
//! - Sequential fallback
//! - `ndarray` integration
//! - Concurrent divisor scans for a single value

use fastPrimality::prelude::*;
use ndarray::Array1;
use std::time::Instant;

fn main() -> Result<(), PrimalityError> {
    println!("{}", "=".repeat(80));
    println!("fastPrimality Parallel Classification Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_parallel_batch()?;
    example_2_sequential_fallback()?;
    example_3_ndarray_integration()?;
    example_4_concurrent_scan()?;

    Ok(())
}

/// Example 1: Parallel Batch
/// Classifies the reference range with the default parallel execution
fn example_1_parallel_batch() -> Result<(), PrimalityError> {
    println!("Example 1: Parallel Batch");
    println!("{}", "-".repeat(80));

    let values: Vec<u32> = (10_000..=20_000).collect();

    let start = Instant::now();
    let result = Primality::new()
        .strategy(SixKFilter)
        .adapter(Batch)
        .parallel(true)
        .build()?
        .classify(&values)?;
    let duration = start.elapsed();

    println!("Classified {} values in {:?}", values.len(), duration);
    println!("Result summary:\n{}", result);

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
/// Compares every strategy and scan form with parallel execution disabled
fn example_2_sequential_fallback() -> Result<(), PrimalityError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    for strategy in Strategy::ALL {
        for mode in ScanMode::ALL {
            let start = Instant::now();
            let count = Primality::new()
                .strategy(strategy)
                .scan_mode(mode)
                .adapter(Range)
                .parallel(false)
                .build()?
                .count(10_000u32, 20_000)?;
            println!(
                "{:>14} / {:<6} {} primes in {:?}",
                strategy.name(),
                mode.name(),
                count,
                start.elapsed()
            );
        }
    }

    println!();
    Ok(())
}

/// Example 3: ndarray Integration
/// Classifies an ndarray input directly
fn example_3_ndarray_integration() -> Result<(), PrimalityError> {
    println!("Example 3: ndarray Integration");
    println!("{}", "-".repeat(80));

    let values: Array1<u64> = (1..=100).collect();
    let result = Primality::new()
        .strategy(SqrtBound)
        .adapter(Batch)
        .build()?
        .classify(&values)?;

    let primes: Vec<u64> = result.primes().collect();
    println!("{} primes in [1, 100]: {:?}", result.prime_count, primes);

    println!();
    Ok(())
}

/// Example 4: Concurrent Scan
/// Splits the divisor range of one large value across the thread pool
fn example_4_concurrent_scan() -> Result<(), PrimalityError> {
    println!("Example 4: Concurrent Scan");
    println!("{}", "-".repeat(80));

    let n = 4_294_967_291u64;
    let test = Primality::new()
        .strategy(SqrtBound)
        .adapter(Single)
        .build()?;

    let start = Instant::now();
    let prime = test.is_prime(n);
    println!("{} is prime: {} ({:?})", n, prime, start.elapsed());

    let start = Instant::now();
    let sequential = SqrtBound.is_prime(n);
    println!("Sequential check agrees: {} ({:?})", sequential == prime, start.elapsed());

    println!();
    Ok(())
}
