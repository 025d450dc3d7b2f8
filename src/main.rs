// Pool Quicklink - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.1.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Command-line entry point: resolves pool dashboard links and explains
// rejected shares.

use clap::Parser;
use pool_quicklink::{
    PoolDirectory, RejectionCatalog, Result, SystemInfo,
    core::{extract_address, extract_worker, types::Args},
    help::{display_pool_list, display_quick_help},
    rejection::{annotate, stats::total_rejected},
};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_TARGET: &str = "quicklink::main";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        eprintln!();
        display_quick_help();
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let directory = PoolDirectory::global();

    if args.list_pools {
        display_pool_list(directory);
        return Ok(());
    }

    if let Some(path) = args.info.as_deref() {
        return handle_system_info(path, directory).await;
    }

    // validate() guarantees both are present in this mode
    let (Some(pool), Some(user)) = (args.pool.as_deref(), args.user.as_deref()) else {
        return Ok(());
    };
    handle_single_link(pool, user, &args.reasons, directory);
    Ok(())
}

fn handle_single_link(pool: &str, user: &str, reasons: &[String], directory: &PoolDirectory) {
    let matcher = directory.matcher_for(pool);
    info!(target: LOG_TARGET, "Using {} rules for {}", matcher, pool);

    println!("{}", directory.resolve_quick_link(pool, user));

    if let Some(worker) = extract_worker(user) {
        info!(target: LOG_TARGET, "Address {} (worker {})", extract_address(user), worker);
    }

    let catalog = RejectionCatalog::embedded();
    for reason in reasons {
        match catalog.explain(directory, pool, reason) {
            Some(explanation) => println!("  {}: {}", catalog.label(reason), explanation),
            None => println!("  {}: no explanation available", reason),
        }
    }
}

async fn handle_system_info(path: &Path, directory: &PoolDirectory) -> Result<()> {
    let system_info = SystemInfo::load(path).await?;

    let pool = system_info.active_pool();
    if !system_info.hostname.is_empty() {
        println!("🖥️  {}", system_info.hostname);
    }
    println!("⛏️  {} pool: {}:{}", pool.label, pool.url, pool.port);
    println!("🔗 {}", system_info.quick_link(directory));

    let reasons = &system_info.shares_rejected_reasons;
    if reasons.is_empty() {
        return Ok(());
    }

    println!();
    println!("❌ Rejected shares: {}", total_rejected(reasons));
    for entry in annotate(reasons, RejectionCatalog::embedded(), directory, pool.url) {
        println!("  {:>6}  {}", entry.count, entry.label);
        if let Some(explanation) = entry.explanation {
            println!("          {}", explanation);
        }
    }
    Ok(())
}

// Changelog:
// - v1.1.1 (2025-07-04): Return the crate Result type from main.
// - v1.1.0 (2025-07-02): Added --info and --reason handling.
//   - Loads system info files and prints annotated rejected share counters.
// - v1.0.0 (2025-06-30): Initial quicklink binary.
