//! Per-record URL extraction.
//!
//! Turns raw institution records into the deduplicated set of candidate URLs.
//! A record only contributes if it has both a non-empty name and at least one
//! non-empty URL column after trimming.

use std::collections::BTreeSet;

use log::debug;

use crate::fetch::InstitutionFields;

/// An institution together with its surviving candidate URLs.
///
/// Transient: built per record, discarded after the URLs are aggregated. The
/// name is carried for debugging only and is not used downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionRecord {
    /// Trimmed institution name.
    pub name: String,
    /// Trimmed, non-empty URL column values (set semantics).
    pub raw_urls: BTreeSet<String>,
}

/// Builds an [`InstitutionRecord`] from the projected fields.
///
/// Trims the name and each of the ten URL columns and drops empty values.
/// Returns `None` if either the name or the resulting URL set is empty.
pub fn institution_record(fields: &InstitutionFields) -> Option<InstitutionRecord> {
    let name = fields.name.trim();
    let raw_urls: BTreeSet<String> = fields
        .url_columns()
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect();

    if name.is_empty() || raw_urls.is_empty() {
        return None;
    }
    Some(InstitutionRecord {
        name: name.to_string(),
        raw_urls,
    })
}

/// Aggregates every surviving URL across all records into one set.
///
/// Cross-institution deduplication happens naturally via set semantics. The
/// URLs are returned pre-cleaning; normalization is a separate stage.
pub fn extract_urls(records: &[InstitutionFields]) -> BTreeSet<String> {
    let mut urls = BTreeSet::new();
    let mut contributing = 0usize;
    for fields in records {
        if let Some(record) = institution_record(fields) {
            contributing += 1;
            urls.extend(record.raw_urls);
        }
    }
    debug!(
        "{} of {} record(s) contributed at least one URL",
        contributing,
        records.len()
    );
    urls
}
