//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for the BankFind API calls.
///
/// No client-wide timeout is set: the count and page requests carry their own
/// per-request timeouts (30s and 60s respectively).
///
/// # Errors
///
/// Returns [`InitializationError::HttpClientError`] if client creation fails.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .user_agent(concat!("bankfind_allowlist/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
