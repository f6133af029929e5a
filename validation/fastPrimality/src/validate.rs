use fastPrimality::prelude::*;
use serde::Serialize;
use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

const DEFAULT_LIMIT: u32 = 20_000;

/// Mismatches recorded per entry before truncation.
const MAX_REPORTED: usize = 16;

#[derive(Debug, Serialize)]
struct ValidationReport {
    limit: u32,
    reference_primes: usize,
    entries: Vec<Entry>,
}

#[derive(Debug, Serialize)]
struct Entry {
    strategy: &'static str,
    form: &'static str,
    primes: usize,
    mismatch_count: usize,
    mismatches: Vec<u32>,
}

impl Entry {
    fn agrees(&self) -> bool {
        self.mismatch_count == 0
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("validate=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let limit = match env::var("VALIDATION_LIMIT") {
        Ok(value) => value.parse()?,
        Err(_) => DEFAULT_LIMIT,
    };
    let output_dir = Path::new("output");

    let sieve = Sieve::new(limit as usize);
    let values: Vec<u32> = (0..=limit).collect();
    let expected: Vec<bool> = values
        .iter()
        .map(|&n| sieve.is_prime(n as u64).unwrap_or(false))
        .collect();
    info!(limit, primes = sieve.count(), "reference sieve ready");

    let mut entries = Vec::new();
    for strategy in Strategy::ALL {
        for mode in ScanMode::ALL {
            let flags: Vec<bool> = values
                .iter()
                .map(|&n| strategy.is_prime_with(n, mode))
                .collect();
            entries.push(compare(strategy, mode.name(), &values, &flags, &expected));
        }

        let flags: Vec<bool> = values
            .iter()
            .map(|&n| is_prime_parallel(strategy, n))
            .collect();
        entries.push(compare(strategy, "concurrent_lazy", &values, &flags, &expected));

        let batch = Primality::new()
            .strategy(strategy)
            .adapter(Batch)
            .build()?
            .classify(&values)?;
        entries.push(compare(strategy, "batch_parallel", &values, &batch.flags, &expected));
    }

    let failures = entries.iter().filter(|e| !e.agrees()).count();
    let report = ValidationReport {
        limit,
        reference_primes: sieve.count(),
        entries,
    };

    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("validation.json");
    fs::write(&output_path, serde_json::to_string_pretty(&report)?)?;
    info!(path = %output_path.display(), "report written");

    if failures > 0 {
        return Err(format!("{failures} configuration(s) disagree with the sieve").into());
    }
    Ok(())
}

fn compare(
    strategy: Strategy,
    form: &'static str,
    values: &[u32],
    flags: &[bool],
    expected: &[bool],
) -> Entry {
    let mismatches: Vec<u32> = values
        .iter()
        .zip(flags.iter().zip(expected))
        .filter(|(_, (got, want))| got != want)
        .map(|(&n, _)| n)
        .collect();

    let entry = Entry {
        strategy: strategy.name(),
        form,
        primes: flags.iter().filter(|&&p| p).count(),
        mismatch_count: mismatches.len(),
        mismatches: mismatches.into_iter().take(MAX_REPORTED).collect(),
    };

    if entry.agrees() {
        info!(strategy = entry.strategy, form, primes = entry.primes, "ok");
    } else {
        warn!(
            strategy = entry.strategy,
            form,
            mismatches = entry.mismatch_count,
            "disagrees with sieve"
        );
    }
    entry
}
