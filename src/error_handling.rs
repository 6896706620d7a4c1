//! Error type definitions.
//!
//! This module defines the error types used throughout the pipeline. The
//! fetch stage distinguishes the count call from individual page calls, and
//! the top-level [`PipelineError`] distinguishes a transport failure from a
//! genuinely empty dataset so callers can tell a retryable condition apart
//! from "the API really returned nothing".

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for the paginated fetch stage.
///
/// Any variant aborts the whole run: partial data is not considered safe to
/// publish as an allowlist. Non-success page statuses are *not* errors; they
/// are skipped and counted in [`crate::fetch::FetchOutcome::skipped_pages`].
#[derive(Error, Debug)]
pub enum FetchError {
    /// The institution count request failed or returned malformed JSON.
    #[error("institution count request failed: {0}")]
    Count(#[source] ReqwestError),

    /// A page request failed at the transport level or returned malformed JSON.
    #[error("institutions page {page} request failed: {source}")]
    Page {
        /// Zero-based page index of the failed request.
        page: u64,
        /// Underlying transport or decode error.
        #[source]
        source: ReqwestError,
    },
}

/// Error writing an allowlist file.
#[derive(Error, Debug)]
#[error("failed to write {}: {source}", path.display())]
pub struct WriteError {
    /// Path of the file that could not be written.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

/// Top-level pipeline errors.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Shared resource initialization failed.
    #[error(transparent)]
    Init(#[from] InitializationError),

    /// The fetch stage failed; nothing was written (fail-closed).
    #[error("failed to fetch institutions: {0}")]
    Fetch(#[from] FetchError),

    /// The fetch stage succeeded but yielded zero URLs.
    #[error("no URLs could be extracted from the FDIC BankFind API")]
    NoUrls,

    /// An allowlist file could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),
}
