//! TTLRU CLI
//!
//! Walkthrough demo and load generator for the TTLRU in-memory cache.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ttlru_cache::{CacheConfig, CacheError, LruCache, Sweeper};

/// TTLRU - in-memory LRU cache with TTL expiry
#[derive(Parser)]
#[command(name = "ttlru")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through eviction, expiry and fetch-through behavior
    Demo,

    /// Run a mixed read/write workload against one shared cache
    Bench {
        /// Maximum number of resident entries
        #[arg(short, long, env = "TTLRU_CAPACITY", default_value = "1000")]
        capacity: usize,
        /// Operations per thread
        #[arg(short, long, default_value = "100000")]
        ops: u64,
        /// Worker threads
        #[arg(short, long, default_value = "4")]
        threads: usize,
    },

    /// Print the configuration read from the environment
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "ttlru=debug,info"
    } else {
        "ttlru=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Demo => {
            let runtime = tokio::runtime::Runtime::new().context("Failed to start Tokio runtime")?;
            runtime.block_on(cmd_demo())
        }
        Commands::Bench { capacity, ops, threads } => cmd_bench(capacity, ops, threads),
        Commands::Config => cmd_config(),
    }
}

fn show<V: std::fmt::Debug>(key: &str, value: Option<V>) {
    match value {
        Some(v) => println!("   {} {:<8} {}", "hit ".green(), key, format!("{v:?}").bold()),
        None => println!("   {} {}", "miss".red(), key),
    }
}

/// Demonstrate cache behavior step by step
async fn cmd_demo() -> Result<()> {
    let ttl = Duration::from_secs(2);

    println!("{}", "1. Plain eviction (capacity 3)".cyan().bold());
    let cache = LruCache::with_config(CacheConfig::new(3, ttl));
    for (key, value) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
        cache.set(key, value);
    }
    for key in ["a", "b", "c", "d"] {
        show(key, cache.get(key));
    }

    println!("\n{}", "2. Reading refreshes recency (capacity 3)".cyan().bold());
    let cache = LruCache::with_config(CacheConfig::new(3, ttl));
    for (key, value) in [("a", 1), ("b", 2), ("c", 3)] {
        cache.set(key, value);
    }
    cache.get("a");
    cache.set("d", 4);
    for key in ["a", "b", "c", "d"] {
        show(key, cache.get(key));
    }
    println!("   {} {:?}", "order:".dimmed(), cache.keys());

    println!("\n{}", "3. Lazy TTL expiry (ttl 200ms)".cyan().bold());
    let cache = Arc::new(LruCache::with_config(CacheConfig::new(3, Duration::from_millis(200))));
    cache.set("session", "token");
    show("session", cache.get("session"));
    tokio::time::sleep(Duration::from_millis(250)).await;
    show("session", cache.get("session"));
    println!("   {} {} (expired entries stay resident)", "len:".dimmed(), cache.len());

    let sweeper = Sweeper::spawn(Arc::clone(&cache), Duration::from_millis(50));
    tokio::time::sleep(Duration::from_millis(120)).await;
    println!("   {} {} after background sweep", "len:".dimmed(), cache.len());
    sweeper.stop();

    println!("\n{}", "4. Fetch-through".cyan().bold());
    let cache: LruCache<String, u64> = LruCache::with_config(CacheConfig::new(3, ttl))
        .with_source_fn(|key: String| async move {
            match key.as_str() {
                "source_data" => Ok(42),
                "broken" => Err(CacheError::from_source("upstream unavailable")),
                _ => Err(CacheError::Miss),
            }
        });
    for key in ["source_data", "source_data", "unknown", "broken"] {
        match cache.get_or_fetch(&key.to_string()).await {
            Ok(value) => println!("   {} {:<12} {}", "ok  ".green(), key, value.to_string().bold()),
            Err(err) if err.is_miss() => println!("   {} {}", "miss".yellow(), key),
            Err(err) => println!("   {} {:<12} {}", "err ".red(), key, err),
        }
    }

    let stats = cache.stats();
    println!("\n{}", "Stats (fetch-through cache):".green().bold());
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

/// xorshift64; good enough to spread keys across threads
fn next_key(state: &mut u64, key_space: u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state % key_space
}

/// Run a mixed workload: one write for every two reads
fn cmd_bench(capacity: usize, ops: u64, threads: usize) -> Result<()> {
    if threads == 0 {
        bail!("--threads must be at least 1");
    }
    let config = CacheConfig::default().with_capacity(capacity);
    config.validate().context("Invalid cache configuration")?;

    println!(
        "{} capacity={} ops={} threads={}",
        "📊 Benchmarking".cyan().bold(),
        capacity,
        ops,
        threads
    );

    let cache: Arc<LruCache<u64, u64>> = Arc::new(LruCache::with_config(config));
    // Twice the capacity so roughly half the reads miss once warm
    let key_space = (capacity.max(1) as u64) * 2;
    let total = ops * threads as u64;

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("   [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    info!(capacity, ops, threads, "Starting workload");
    let start = Instant::now();
    let workers: Vec<_> = (0..threads)
        .map(|t| {
            let cache = Arc::clone(&cache);
            let pb = pb.clone();
            thread::spawn(move || {
                let mut state = 0x9E37_79B9_7F4A_7C15 ^ (t as u64 + 1);
                for i in 0..ops {
                    let key = next_key(&mut state, key_space);
                    if i % 3 == 0 {
                        cache.set(key, i);
                    } else {
                        cache.get(&key);
                    }
                    if i % 1024 == 0 {
                        pb.inc(1024.min(ops - i));
                    }
                }
            })
        })
        .collect();

    for worker in workers {
        if worker.join().is_err() {
            bail!("benchmark worker panicked");
        }
    }
    let elapsed = start.elapsed();
    pb.finish();

    let stats = cache.stats();
    let rate = total as f64 / elapsed.as_secs_f64();

    println!("\n{}", "📈 Results:".green().bold());
    println!("   Elapsed: {:?}", elapsed);
    println!("   Throughput: {:.0} ops/sec", rate);
    println!("   Hit ratio: {:.1}%", stats.hit_rate() * 100.0);
    println!("   Resident: {}/{}", stats.len, stats.capacity);

    if capacity > 0 && stats.len > capacity {
        println!("   {} resident entries exceed capacity", "❌".red());
    } else {
        println!("   {} capacity respected", "✅".green());
    }

    println!("\n{}", "Stats:".yellow().bold());
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

/// Print configuration from environment
fn cmd_config() -> Result<()> {
    let config = CacheConfig::from_env().context("Failed to read configuration from environment")?;
    config.validate().context("Invalid cache configuration")?;

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
