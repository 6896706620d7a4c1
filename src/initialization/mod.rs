//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - The HTTP client (per-request timeouts are set at the call sites)
//! - The TLD extractor used for public-suffix-aware classification
//! - The logger
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the Public Suffix List extractor.
///
/// Creates a new `psl::List` instance for public-suffix-aware FQDN
/// recognition. The list is compiled into the binary, so no network or
/// filesystem access happens at lookup time.
pub fn init_extractor() -> psl::List {
    psl::List
}
