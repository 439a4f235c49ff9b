//! End-to-end `apply` runs against a scripted HTTP server.

#![allow(clippy::expect_used)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::cli_tests::shipa_action;

/// Serve one scripted `(status, body)` reply per connection, in order.
/// Returns the host URL and a handle yielding each request's
/// `"METHOD /path"` line and body.
fn serve_script(replies: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<(String, String)>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let handle = std::thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in replies {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone"));

            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("request line");
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).expect("header");
                if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = v.trim().parse().expect("length");
                }
                if line == "\r\n" || line.is_empty() {
                    break;
                }
            }
            let mut payload = vec![0u8; content_length];
            reader.read_exact(&mut payload).expect("body");

            let target = request_line
                .split_whitespace()
                .take(2)
                .collect::<Vec<_>>()
                .join(" ");
            seen.push((target, String::from_utf8_lossy(&payload).into_owned()));

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status} Scripted\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .expect("write");
            stream.flush().expect("flush");
        }
        seen
    });
    (format!("http://{addr}"), handle)
}

fn manifest(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("shipa.yaml");
    std::fs::write(&path, content).expect("write manifest");
    path.display().to_string()
}

#[test]
fn test_apply_creates_missing_app() {
    let (host, server) = serve_script(vec![
        (200, "[]"),
        (404, "app not found"),
        (201, ""),
    ]);
    let dir = TempDir::new().expect("tempdir");
    let path = manifest(&dir, "app:\n  name: billing\n  framework: dev\n");

    shipa_action()
        .env("SHIPA_HOST", &host)
        .env("SHIPA_TOKEN", "s3cret")
        .args(["apply", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("app billing: created"));

    let requests = server.join().expect("server");
    let targets: Vec<&str> = requests.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(targets, vec!["GET /plans", "GET /apps/billing", "POST /apps"]);
    let body: serde_json::Value = serde_json::from_str(&requests[2].1).expect("json body");
    assert_eq!(body["name"], "billing");
    assert_eq!(body["pool"], "dev");
}

#[test]
fn test_apply_existing_app_is_unchanged_json() {
    let (host, server) = serve_script(vec![(200, "[]"), (200, r#"{"name":"billing"}"#)]);
    let dir = TempDir::new().expect("tempdir");
    let path = manifest(&dir, "app:\n  name: billing\n  framework: dev\n");

    let output = shipa_action()
        .env("SHIPA_HOST", &host)
        .env("SHIPA_TOKEN", "s3cret")
        .args(["apply", "--json", &path])
        .output()
        .expect("run");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(report["sections"][0]["section"], "app");
    assert_eq!(report["sections"][0]["outcome"], "unchanged");
    assert_eq!(server.join().expect("server").len(), 2);
}

#[test]
fn test_apply_deploy_with_vulnerabilities_fails() {
    let (host, server) = serve_script(vec![
        (200, "[]"),
        (200, "step 1\nThere are vulnerabilities!\n"),
    ]);
    let dir = TempDir::new().expect("tempdir");
    let path = manifest(
        &dir,
        "app-deploy:\n  app: billing\n  image: registry/img:1\n  port: 8080\n",
    );

    shipa_action()
        .env("SHIPA_HOST", &host)
        .env("SHIPA_TOKEN", "s3cret")
        .args(["apply", &path])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to deploy shipa app"))
        .stderr(predicate::str::contains("found vulnerabilities"));

    let requests = server.join().expect("server");
    assert_eq!(requests[1].0, "POST /apps/billing/deploy");
    assert!(requests[1].1.contains("image=registry%2Fimg%3A1"));
    assert!(requests[1].1.contains("port-number=8080"));
}

#[test]
fn test_apply_auth_failure_stops_before_any_section() {
    let (host, server) = serve_script(vec![(401, "unauthorized")]);
    let dir = TempDir::new().expect("tempdir");
    let path = manifest(&dir, "framework:\n  name: dev\n");

    shipa_action()
        .env("SHIPA_HOST", &host)
        .env("SHIPA_TOKEN", "wrong")
        .args(["apply", &path])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("shipa client auth failed"))
        .stderr(predicate::str::contains("status: 401"));

    assert_eq!(server.join().expect("server").len(), 1);
}
