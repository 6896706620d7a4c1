//! End-to-end pipeline tests: extract -> clean -> classify -> write, plus
//! full runs against a local canned API.

mod common;

use std::collections::BTreeSet;

use bankfind_allowlist::classify::ClassifiedSets;
use bankfind_allowlist::clean::clean_url;
use bankfind_allowlist::extract::extract_urls;
use bankfind_allowlist::fetch::InstitutionFields;
use bankfind_allowlist::initialization::init_extractor;
use bankfind_allowlist::output::write_outputs;
use bankfind_allowlist::{run_allowlist, Config, PipelineError};
use common::CannedResponse;

fn institution(name: &str, urls: &[&str]) -> InstitutionFields {
    let mut fields = InstitutionFields {
        name: name.to_string(),
        ..Default::default()
    };
    let mut iter = urls.iter();
    fields.te01 = iter.next().map(|s| s.to_string());
    fields.te02 = iter.next().map(|s| s.to_string());
    fields.te03 = iter.next().map(|s| s.to_string());
    assert!(iter.next().is_none(), "test helper supports up to 3 URLs");
    fields
}

#[test]
fn test_two_institution_scenario() {
    // One institution with a scheme-bearing URL and a bare IP, another with
    // the same host padded with whitespace. Each entry must appear exactly
    // once per file.
    let records = vec![
        institution("First Bank", &["https://Bank1.com/", "10.0.0.5"]),
        institution("Second Bank", &["  bank1.com  "]),
    ];

    let raw = extract_urls(&records);
    let cleaned: BTreeSet<String> = raw.iter().map(|u| clean_url(u)).collect();
    // "https://Bank1.com/" cleans to "Bank1.com"; "  bank1.com  " to "bank1.com".
    // Distinct cleaned URLs, same FQDN.
    assert_eq!(cleaned.len(), 3);

    let extractor = init_extractor();
    let mut sets = ClassifiedSets::default();
    for url in &cleaned {
        sets.insert(&extractor, url);
    }

    let dir = tempfile::tempdir().unwrap();
    write_outputs(&sets, dir.path()).unwrap();

    let urls = std::fs::read_to_string(dir.path().join("urls.txt")).unwrap();
    assert_eq!(urls, "Bank1.com\nbank1.com");
    assert_eq!(
        urls.lines().filter(|l| l.eq_ignore_ascii_case("bank1.com")).count(),
        2
    );

    let ips = std::fs::read_to_string(dir.path().join("ips.txt")).unwrap();
    assert_eq!(ips, "10.0.0.5");

    // The FQDN set collapses case: bank1.com appears exactly once
    let fqdns = std::fs::read_to_string(dir.path().join("urls-pihole.txt")).unwrap();
    assert_eq!(fqdns, "bank1.com");
}

#[test]
fn test_invalid_urls_reach_no_bucket() {
    let extractor = init_extractor();
    let mut sets = ClassifiedSets::default();
    for url in ["not a domain!!", "192.168.1.300", ""] {
        sets.insert(&extractor, &clean_url(url));
    }
    assert!(sets.is_empty());
    assert!(sets.fqdns.is_empty());
    assert_eq!(sets.invalid, 3);
}

#[tokio::test]
async fn test_run_allowlist_end_to_end() {
    let base_url = common::start(vec![
        CannedResponse::ok(
            "offset=0",
            r#"{"data":[
                {"data":{"NAME":"First Bank","TE01N528":"https://Bank1.com/","TE02N528":"10.0.0.5"}},
                {"data":{"NAME":"Second Bank","TE01N528":"  bank1.com  "}},
                {"data":{"NAME":"No URLs Bank"}},
                {"data":{"NAME":"Broken Bank","TE01N528":"not a domain!!"}}
            ]}"#,
        ),
        CannedResponse::ok("institutions", r#"{"meta":{"total":4}}"#),
    ]);

    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        endpoint: base_url,
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    let report = run_allowlist(config).await.unwrap();
    assert_eq!(report.total_records, 4);
    assert_eq!(report.skipped_pages, 0);
    assert_eq!(report.unique_urls, 4);
    assert_eq!(report.non_ips, 2);
    assert_eq!(report.ips, 1);
    assert_eq!(report.fqdns, 1);
    assert_eq!(report.invalid, 1);
    assert_eq!(report.files_written.len(), 3);

    let fqdns = std::fs::read_to_string(dir.path().join("urls-pihole.txt")).unwrap();
    assert_eq!(fqdns, "bank1.com");
    let ips = std::fs::read_to_string(dir.path().join("ips.txt")).unwrap();
    assert_eq!(ips, "10.0.0.5");
}

#[tokio::test]
async fn test_run_allowlist_no_urls_is_fatal_and_writes_nothing() {
    let base_url = common::start(vec![
        CannedResponse::ok(
            "offset=0",
            r#"{"data":[{"data":{"NAME":"Bank With No Website"}}]}"#,
        ),
        CannedResponse::ok("institutions", r#"{"meta":{"total":1}}"#),
    ]);

    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        endpoint: base_url,
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    let err = run_allowlist(config).await.unwrap_err();
    assert!(matches!(err, PipelineError::NoUrls));
    assert!(!dir.path().join("urls.txt").exists());
    assert!(!dir.path().join("ips.txt").exists());
    assert!(!dir.path().join("urls-pihole.txt").exists());
}

#[tokio::test]
async fn test_run_allowlist_all_invalid_exits_cleanly_without_files() {
    let base_url = common::start(vec![
        CannedResponse::ok(
            "offset=0",
            r#"{"data":[{"data":{"NAME":"Broken Bank","TE01N528":"not a domain!!"}}]}"#,
        ),
        CannedResponse::ok("institutions", r#"{"meta":{"total":1}}"#),
    ]);

    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        endpoint: base_url,
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    let report = run_allowlist(config).await.unwrap();
    assert_eq!(report.unique_urls, 1);
    assert_eq!(report.invalid, 1);
    assert!(report.files_written.is_empty());
    assert!(!dir.path().join("urls.txt").exists());
}

#[tokio::test]
async fn test_run_allowlist_fetch_failure_is_fail_closed() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        endpoint: format!("http://127.0.0.1:{}/api", port),
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    let err = run_allowlist(config).await.unwrap_err();
    assert!(matches!(err, PipelineError::Fetch(_)));
    assert!(!dir.path().join("urls.txt").exists());
}
