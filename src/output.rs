//! Allowlist file writer.
//!
//! Writes the three newline-joined allowlist files into the output directory,
//! overwriting any previous run. Entry order comes from the `BTreeSet`
//! iteration order of [`ClassifiedSets`]: lexicographic for URLs and FQDNs,
//! numeric for IPv4 addresses.

use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;

use crate::classify::ClassifiedSets;
use crate::config::{FQDN_FILENAME, IP_FILENAME, NON_IP_FILENAME, TIMESTAMP_FORMAT};
use crate::error_handling::WriteError;

/// Current UTC time formatted as `DD_Mon_YYYY_HH_MM_SS-UTC`.
pub fn current_datetime_str() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Writes one allowlist file: newline-joined entries, UTF-8, no trailing
/// newline. Logs the entry count, the filename, and a UTC timestamp.
fn write_allowlist<I>(
    dir: &Path,
    filename: &str,
    label: &str,
    entries: I,
) -> Result<PathBuf, WriteError>
where
    I: IntoIterator<Item = String>,
{
    let path = dir.join(filename);
    let lines: Vec<String> = entries.into_iter().collect();
    let timestamp = current_datetime_str();
    std::fs::write(&path, lines.join("\n")).map_err(|source| WriteError {
        path: path.clone(),
        source,
    })?;
    info!(
        "{} {} written to {} at {}",
        lines.len(),
        label,
        filename,
        timestamp
    );
    Ok(path)
}

/// Writes the three allowlist files from the classified sets.
///
/// - `urls.txt`: non-IP cleaned URLs, lexicographic order
/// - `ips.txt`: IPv4 literals, numeric order
/// - `urls-pihole.txt`: lower-cased FQDNs, lexicographic order
///
/// All three files are written even when one bucket is empty. The caller is
/// responsible for skipping the write entirely when there is no content at
/// all (see [`ClassifiedSets::is_empty`]).
///
/// Returns the paths written, in the order above.
pub fn write_outputs(sets: &ClassifiedSets, out_dir: &Path) -> Result<Vec<PathBuf>, WriteError> {
    let mut written = Vec::with_capacity(3);
    written.push(write_allowlist(
        out_dir,
        NON_IP_FILENAME,
        "non-IPs",
        sets.non_ips.iter().cloned(),
    )?);
    written.push(write_allowlist(
        out_dir,
        IP_FILENAME,
        "IPs",
        sets.ips.iter().map(|ip| ip.to_string()),
    )?);
    written.push(write_allowlist(
        out_dir,
        FQDN_FILENAME,
        "FQDNs",
        sets.fqdns.iter().cloned(),
    )?);
    Ok(written)
}
