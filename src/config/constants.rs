//! Configuration constants.

use std::time::Duration;

/// Base URL of the FDIC BankFind API.
pub const DEFAULT_ENDPOINT: &str = "https://banks.data.fdic.gov/api";

/// Maximum number of records requested per page (the API's hard limit).
pub const PAGE_SIZE: u64 = 10_000;

/// Timeout for the initial record-count request.
pub const COUNT_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for each page request.
pub const PAGE_TIMEOUT: Duration = Duration::from_secs(60);

/// The ten BankFind columns that may hold an institution website URL.
pub const URL_COLUMNS: [&str; 10] = [
    "TE01N528", "TE02N528", "TE03N528", "TE04N528", "TE05N528", "TE06N528", "TE07N528", "TE08N528",
    "TE09N528", "TE10N528",
];

/// Output file for non-IP cleaned URLs (lexicographic order).
pub const NON_IP_FILENAME: &str = "urls.txt";

/// Output file for IPv4 literals (numeric order).
pub const IP_FILENAME: &str = "ips.txt";

/// Output file for lower-cased FQDNs (lexicographic order), Pi-hole friendly.
pub const FQDN_FILENAME: &str = "urls-pihole.txt";

/// strftime-style format for the UTC timestamps in write logs.
pub const TIMESTAMP_FORMAT: &str = "%d_%b_%Y_%H_%M_%S-UTC";
