//! Minimal HTTP/1.1 server serving canned JSON responses for integration tests.
//!
//! Each incoming request is matched against a list of rules in order; the
//! first rule whose `target_contains` substring appears in the request target
//! wins. Responses close the connection so every request gets a fresh match.

// Each integration test binary compiles this module independently and not
// every binary uses every helper.
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// One canned response rule.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    /// Substring matched against the request target (path + query). An empty
    /// string matches everything, so a catch-all belongs last.
    pub target_contains: &'static str,
    /// Status line tail, e.g. "200 OK" or "500 Internal Server Error".
    pub status: &'static str,
    /// JSON body.
    pub body: String,
}

impl CannedResponse {
    pub fn ok(target_contains: &'static str, body: &str) -> Self {
        Self {
            target_contains,
            status: "200 OK",
            body: body.to_string(),
        }
    }

    pub fn error(target_contains: &'static str, status: &'static str) -> Self {
        Self {
            target_contains,
            status,
            body: String::new(),
        }
    }
}

/// Starts a server in a background thread. Returns the base URL of the fake
/// API (e.g. "http://127.0.0.1:12345/api"). The server runs until the
/// process exits.
pub fn start(responses: Vec<CannedResponse>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let responses = Arc::new(responses);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let responses = Arc::clone(&responses);
            thread::spawn(move || handle(stream, &responses));
        }
    });
    format!("http://127.0.0.1:{}/api", port)
}

fn handle(mut stream: std::net::TcpStream, responses: &[CannedResponse]) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("");

    let matched = responses
        .iter()
        .find(|canned| target.contains(canned.target_contains));
    let response = match matched {
        Some(canned) => format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            canned.status,
            canned.body.len(),
            canned.body
        ),
        None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            .to_string(),
    };
    let _ = stream.write_all(response.as_bytes());
}
