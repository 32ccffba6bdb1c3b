//! Memlru demo harness
//!
//! Hammers a shared cache with random keys from concurrent workers, then
//! prints a statistics report.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memlru::{CacheStats, Config, MemoryCache};

/// Value inserted by the workload: creation time plus a random token, so
/// each write is distinguishable from the one it overwrote.
#[derive(Debug, Clone, Serialize)]
struct Payload {
    created_at: DateTime<Utc>,
    token: u64,
}

impl Payload {
    fn generate(rng: &mut StdRng) -> Self {
        Self {
            created_at: Utc::now(),
            token: rng.gen(),
        }
    }
}

/// Final report printed as JSON once the workload completes.
#[derive(Debug, Serialize)]
struct Report {
    generated_at: DateTime<Utc>,
    capacity: usize,
    workers: usize,
    operations: u64,
    key_space: u64,
    elapsed_ms: u128,
    occupied: usize,
    hit_rate: f64,
    stats: CacheStats,
}

/// Main entry point for the demo harness.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache with the configured capacity
/// 4. Spawn workers that insert and immediately look up random keys
/// 5. Print the final statistics report
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memlru=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting memlru demo harness");

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, workers={}, operations={}, key_space={}",
        config.capacity, config.workers, config.operations, config.key_space
    );

    let cache = Arc::new(MemoryCache::new(config.capacity)?);
    info!("Cache initialized");

    // gen_range below needs a non-empty 1..key_space range
    let key_space = config.key_space.max(2);
    let workers = config.workers.max(1);
    let per_worker = config.operations / workers as u64;

    let started = Instant::now();

    let mut handles = Vec::with_capacity(workers);
    for worker in 0..workers as u64 {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move {
            let mut rng = StdRng::seed_from_u64(worker + 1);
            for i in 0..per_worker {
                // Fold the iteration counter into a bounded, skewed key
                // space so hot keys collide across workers
                let index = rng.gen_range(1..key_space);
                let key = i % index;

                cache.add_or_update(key, Payload::generate(&mut rng));
                let _ = cache.try_get(&key);
            }
        }));
    }

    for handle in handles {
        handle.await?;
    }

    let elapsed = started.elapsed();
    let stats = cache.stats();
    let occupied = cache.len();

    info!(
        "Workload complete in {:?}: inserts={}, updates={}, evictions={}, misses={}, refreshes={}, occupied={}/{}",
        elapsed,
        stats.inserts,
        stats.updates,
        stats.evictions,
        stats.misses,
        stats.refreshes,
        occupied,
        config.capacity
    );

    // At quiescence the occupancy identity must hold
    if stats.inserts - stats.evictions != occupied as u64 {
        warn!("counter identity violated: inserts - evictions != occupied");
    }

    let report = Report {
        generated_at: Utc::now(),
        capacity: config.capacity,
        workers,
        operations: per_worker * workers as u64,
        key_space,
        elapsed_ms: elapsed.as_millis(),
        occupied,
        hit_rate: stats.hit_rate(),
        stats,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
