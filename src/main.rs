//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `bankfind_allowlist` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use bankfind_allowlist::initialization::init_logger_with;
use bankfind_allowlist::{run_allowlist, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the pipeline using the library
    match run_allowlist(config).await {
        Ok(report) => {
            if report.files_written.is_empty() {
                println!(
                    "Nothing written: {} URL{} examined, none classified as FQDN or IPv4",
                    report.unique_urls,
                    if report.unique_urls == 1 { "" } else { "s" }
                );
            } else {
                println!(
                    "✅ {} record{} -> {} non-IPs, {} IPs, {} FQDNs in {:.1}s",
                    report.total_records,
                    if report.total_records == 1 { "" } else { "s" },
                    report.non_ips,
                    report.ips,
                    report.fqdns,
                    report.elapsed_seconds
                );
                for path in &report.files_written {
                    println!("Wrote {}", path.display());
                }
            }
            if report.skipped_pages > 0 {
                println!(
                    "Warning: {} page request{} skipped (non-success status)",
                    report.skipped_pages,
                    if report.skipped_pages == 1 { "" } else { "s" }
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("bankfind_allowlist error: {:#}", e);
            process::exit(1);
        }
    }
}
