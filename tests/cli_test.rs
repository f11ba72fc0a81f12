mod common;

use std::io::Write;
use std::process::{Command, Output, Stdio};

use common::{serve_once, unreachable_url, BARE_HTML, H1_ONLY_HTML, STORY_HTML};
use serde_json::Value;

fn run_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_extract_stdin"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn extract_stdin");

    {
        let mut stdin = child.stdin.take().expect("stdin piped");
        stdin.write_all(input.as_bytes()).expect("write stdin");
    }
    child.wait_with_output().expect("wait extract_stdin")
}

fn run_url(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_extract_url"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("run extract_url")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn stdin_variant_emits_single_json_line() {
    let output = run_stdin(&[], STORY_HTML);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert_eq!(stdout.matches('\n').count(), 1);
    let value: Value = serde_json::from_str(stdout.trim_end()).expect("valid JSON");
    assert!(value["html"].as_str().is_some_and(|s| s.contains("stone breakwater")));
    assert_eq!(value["metadata"]["title"], "Quiet Harbour Reopens");
    assert!(value["metadata"]["length"].as_u64().is_some_and(|n| n > 0));
}

#[test]
fn stdin_variant_minimal_article_round_trip() {
    let output = run_stdin(&[], H1_ONLY_HTML);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["metadata"]["title"], "Title");
    assert!(value["html"].as_str().is_some_and(|s| s.contains("Some sufficiently long paragraph")));
}

#[test]
fn stdin_variant_success_keeps_stderr_clean() {
    for page in [STORY_HTML, H1_ONLY_HTML] {
        let output = run_stdin(&[], page);
        assert_eq!(output.status.code(), Some(0));
        assert!(output.stderr.is_empty(), "unexpected stderr: {}", stderr_of(&output));
    }
}

#[test]
fn stdin_variant_empty_input_exits_1() {
    let output = run_stdin(&[], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("No HTML content provided."));
}

#[test]
fn stdin_variant_bare_document_exits_1() {
    let output = run_stdin(&[], BARE_HTML);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("Failed to parse the article."));
}

#[test]
fn stdin_variant_invalid_base_url_exits_1() {
    let output = run_stdin(&["--base-url", "not-a-url"], STORY_HTML);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("Invalid URL"));
}

#[test]
fn stdin_variant_unknown_flag_exits_1() {
    let output = run_stdin(&["--no-such-flag"], STORY_HTML);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn stdin_variant_is_idempotent() {
    let first = run_stdin(&[], STORY_HTML);
    let second = run_stdin(&[], STORY_HTML);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn stdin_variant_markdown_flag_adds_key() {
    let output = run_stdin(&["--markdown"], STORY_HTML);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let value: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert!(value["markdown"].as_str().is_some_and(|s| s.contains("breakwater")));
}

#[test]
fn url_variant_without_argument_exits_1() {
    let output = run_url(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("Please provide a URL"));
}

#[test]
fn url_variant_empty_argument_exits_1() {
    let output = run_url(&[""]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Please provide a URL"), "stderr: {stderr}");
    assert!(!stderr.contains("Invalid URL"));
}

#[test]
fn url_variant_unreachable_host_exits_1() {
    let url = unreachable_url();
    let output = run_url(&[url.as_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("Error fetching the URL"));
}

#[test]
fn url_variant_fetches_and_extracts() {
    let url = serve_once("200 OK", STORY_HTML);
    let output = run_url(&[url.as_str()]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["metadata"]["siteName"], "Example Gazette");
    assert!(value["html"].as_str().is_some_and(|s| s.contains("/boats")));
}

#[test]
fn url_variant_page_without_article_exits_1() {
    let url = serve_once("200 OK", BARE_HTML);
    let output = run_url(&[url.as_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("Failed to parse the article."));
}

#[test]
fn help_exits_0() {
    let output = run_url(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
}
