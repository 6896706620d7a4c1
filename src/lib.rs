//! bankfind_allowlist library: FDIC BankFind allowlist generation.
//!
//! This library pulls the full set of active FDIC-insured banking institutions
//! from the public BankFind API, extracts their candidate website URLs,
//! normalizes and classifies them (IPv4 literal vs public-suffix-rooted FQDN),
//! and writes three sorted, deduplicated allowlist files.
//!
//! # Example
//!
//! ```no_run
//! use bankfind_allowlist::{run_allowlist, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let report = run_allowlist(config).await?;
//! println!("{} non-IPs, {} IPs, {} FQDNs", report.non_ips, report.ips, report.fqdns);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context. The pipeline itself is strictly sequential: fetch, extract,
//! clean, classify, write.

#![warn(missing_docs)]

pub mod classify;
pub mod clean;
pub mod config;
mod error_handling;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod output;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FetchError, InitializationError, PipelineError, WriteError};
pub use run::{run_allowlist, RunReport};

// Internal run module (contains the pipeline orchestration)
mod run {
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    use log::{error, info};

    use crate::classify::ClassifiedSets;
    use crate::clean::clean_url;
    use crate::config::Config;
    use crate::error_handling::PipelineError;
    use crate::extract::extract_urls;
    use crate::fetch::{fetch_all_institutions, FetchOutcome};
    use crate::initialization::{init_client, init_extractor};
    use crate::output::write_outputs;

    /// Results of a completed allowlist run.
    ///
    /// Everything a caller might act on is surfaced here rather than only
    /// logged: record and page counts from the fetch stage, bucket sizes from
    /// classification, and the files that were actually written.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of institution records returned by the API
        pub total_records: usize,
        /// Number of pages skipped due to non-success HTTP statuses
        pub skipped_pages: usize,
        /// Number of unique URLs after extraction and cleaning
        pub unique_urls: usize,
        /// Number of non-IP URLs (hosts with a recognized FQDN)
        pub non_ips: usize,
        /// Number of IPv4 literals
        pub ips: usize,
        /// Number of distinct lower-cased FQDNs
        pub fqdns: usize,
        /// Number of URLs discarded as neither a valid FQDN nor a valid IPv4
        pub invalid: usize,
        /// Paths of the allowlist files written (empty if there was nothing to write)
        pub files_written: Vec<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the allowlist pipeline with the provided configuration.
    ///
    /// This is the main entry point for the library. It fetches every active
    /// institution from the BankFind API, extracts and cleans the candidate
    /// URLs, classifies each one, and writes the allowlist files into
    /// `config.output_dir`.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Init`] if the HTTP client cannot be constructed.
    /// - [`PipelineError::Fetch`] on any transport or JSON-decode failure
    ///   during the fetch stage. The run is fail-closed: nothing is written.
    /// - [`PipelineError::NoUrls`] if the fetch succeeded but zero URLs were
    ///   extracted.
    /// - [`PipelineError::Write`] if an allowlist file cannot be written.
    ///
    /// A run in which every URL classifies as invalid is *not* an error: the
    /// condition is logged, no files are written, and the report is returned
    /// with an empty `files_written`.
    pub async fn run_allowlist(config: Config) -> Result<RunReport, PipelineError> {
        let start_time = std::time::Instant::now();

        let client = init_client()?;
        let extractor = init_extractor();

        let FetchOutcome {
            records,
            skipped_pages,
        } = fetch_all_institutions(&client, &config.endpoint).await?;

        let raw_urls = extract_urls(&records);
        let cleaned: BTreeSet<String> = raw_urls.iter().map(|url| clean_url(url)).collect();
        if cleaned.is_empty() {
            return Err(PipelineError::NoUrls);
        }
        info!(
            "Extracted {} unique URL(s) from {} institution record(s)",
            cleaned.len(),
            records.len()
        );

        let mut sets = ClassifiedSets::default();
        for url in &cleaned {
            sets.insert(&extractor, url);
        }
        if sets.invalid > 0 {
            info!("Discarded {} URL(s) as neither FQDN nor IPv4", sets.invalid);
        }

        let files_written = if sets.is_empty() {
            error!("No content available for allowlists.");
            Vec::new()
        } else {
            write_outputs(&sets, &config.output_dir)?
        };

        Ok(RunReport {
            total_records: records.len(),
            skipped_pages,
            unique_urls: cleaned.len(),
            non_ips: sets.non_ips.len(),
            ips: sets.ips.len(),
            fqdns: sets.fqdns.len(),
            invalid: sets.invalid,
            files_written,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
