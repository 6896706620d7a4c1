//! Paginated fetch of institution records from the BankFind API.
//!
//! The fetch is a single batch pull: one count request, then one request per
//! page of up to [`PAGE_SIZE`](crate::config::PAGE_SIZE) records, strictly
//! sequential. A page that answers with a non-success status is skipped and
//! counted; any transport or decode failure aborts the whole fetch so that a
//! partial dataset is never published as an allowlist.

mod models;

use log::{debug, info, warn};

use crate::config::{COUNT_TIMEOUT, PAGE_SIZE, PAGE_TIMEOUT, URL_COLUMNS};
use crate::error_handling::FetchError;

pub use models::{CountResponse, InstitutionFields, Meta, PageResponse, RecordEnvelope};

/// Result of a completed fetch.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Every institution record returned across all pages.
    pub records: Vec<InstitutionFields>,
    /// Number of pages skipped because of a non-success HTTP status.
    pub skipped_pages: usize,
}

/// Fetches every active institution record from the BankFind API.
///
/// Issues the count request (30s timeout), computes the number of pages at
/// [`PAGE_SIZE`](crate::config::PAGE_SIZE) records each, then requests the
/// pages sequentially (60s timeout each), filtered to active institutions and
/// projected to the name plus the ten URL columns.
///
/// # Errors
///
/// Returns [`FetchError::Count`] if the count request fails (including a
/// non-success status or malformed JSON) and [`FetchError::Page`] if a page
/// request fails at the transport level or returns malformed JSON. A page
/// answering with a non-success status is skipped, not an error.
pub async fn fetch_all_institutions(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<FetchOutcome, FetchError> {
    let institutions_url = format!("{}/institutions", base_url.trim_end_matches('/'));

    let total = client
        .get(&institutions_url)
        .timeout(COUNT_TIMEOUT)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(FetchError::Count)?
        .json::<CountResponse>()
        .await
        .map_err(FetchError::Count)?
        .meta
        .total;

    let num_pages = total.div_ceil(PAGE_SIZE);
    debug!("{} institution record(s) -> {} page(s)", total, num_pages);

    let fields = std::iter::once("NAME")
        .chain(URL_COLUMNS)
        .collect::<Vec<_>>()
        .join(",");

    let mut records: Vec<InstitutionFields> = Vec::new();
    let mut skipped_pages = 0usize;
    for page in 0..num_pages {
        let response = client
            .get(&institutions_url)
            .timeout(PAGE_TIMEOUT)
            .query(&[
                ("filters", "ACTIVE:1".to_string()),
                ("fields", fields.clone()),
                ("limit", PAGE_SIZE.to_string()),
                ("offset", (page * PAGE_SIZE).to_string()),
            ])
            .send()
            .await
            .map_err(|source| FetchError::Page { page, source })?;

        if !response.status().is_success() {
            warn!(
                "Skipping page {} (status {})",
                page,
                response.status().as_u16()
            );
            skipped_pages += 1;
            continue;
        }

        let body: PageResponse = response
            .json()
            .await
            .map_err(|source| FetchError::Page { page, source })?;
        records.extend(body.data.into_iter().filter_map(|entry| entry.data));
    }

    info!(
        "Fetched {} institution record(s) across {} page(s), {} skipped",
        records.len(),
        num_pages,
        skipped_pages
    );

    Ok(FetchOutcome {
        records,
        skipped_pages,
    })
}
