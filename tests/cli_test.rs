use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_article-json");

const PROSE: &str = "The lighthouse keeper climbed the spiral stairs every evening at dusk, \
    checking the lamp, trimming the wick and polishing the great lens until it shone. \
    Ships passing the rocky headland relied on that beam to find the channel, and in forty \
    years of service the light had never once failed to appear on time.";

fn article_html() -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><title>The Lighthouse Keeper</title></head><body>\
         <nav><a href=\"/\">Home</a> <a href=\"/news\">News</a></nav>\
         <article><h1>The Lighthouse Keeper</h1><p>{PROSE}</p><p>{PROSE}</p><p>{PROSE}</p></article>\
         <footer>All rights reserved</footer></body></html>"
    )
}

fn run_in(cwd: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn binary")
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn workspace_with_article() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("article.html"), article_html()).expect("write input");
    dir
}

#[test]
fn no_argument_exits_with_status_one() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<FILE>"), "stderr: {stderr}");
    assert!(entries(dir.path()).is_empty());
}

#[test]
fn missing_input_exits_with_status_one_and_names_path() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = run_in(dir.path(), &["nowhere.html"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nowhere.html"), "stderr: {stderr}");
    assert!(entries(dir.path()).is_empty());
}

#[test]
fn unexpected_flag_exits_with_status_one() {
    let dir = workspace_with_article();

    let output = run_in(dir.path(), &["--bogus", "article.html"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--bogus"));
    assert!(output.stdout.is_empty());
    assert_eq!(entries(dir.path()), vec!["article.html"]);
}

#[test]
fn help_exits_successfully() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = run_in(dir.path(), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("FILE"));
}

#[test]
fn converts_article_and_reports_completion() {
    let dir = workspace_with_article();

    let output = run_in(dir.path(), &["article.html"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "HTML processing completed.");
    assert_eq!(
        entries(dir.path()),
        vec!["article.content.json", "article.html", "parsed-article.html"]
    );

    let json: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("article.content.json")).expect("json output"),
    )
    .expect("valid json");
    assert_eq!(json["title"], "The Lighthouse Keeper");
    let text = json["textContent"].as_str().expect("textContent string");
    assert!(text.contains("never once failed"));
    assert!(!text.contains("All rights reserved"));
    assert_eq!(json["length"].as_u64(), Some(text.chars().count() as u64));
}

#[test]
fn sidecar_equals_content_field() {
    let dir = workspace_with_article();

    let output = run_in(dir.path(), &["article.html"]);
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("article.content.json")).expect("json output"),
    )
    .expect("valid json");
    let sidecar = fs::read_to_string(dir.path().join("parsed-article.html")).expect("sidecar");
    assert_eq!(json["content"].as_str(), Some(sidecar.as_str()));
}

#[test]
fn sidecar_is_written_to_working_directory() {
    let cwd = tempfile::tempdir().expect("cwd");
    let elsewhere = tempfile::tempdir().expect("input dir");
    let input = elsewhere.path().join("foo.html");
    fs::write(&input, article_html()).expect("write input");

    let output = run_in(cwd.path(), &[input.to_str().expect("utf-8 path")]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(entries(cwd.path()), vec!["parsed-article.html"]);
    assert_eq!(entries(elsewhere.path()), vec!["foo.content.json", "foo.html"]);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = workspace_with_article();

    assert_eq!(run_in(dir.path(), &["article.html"]).status.code(), Some(0));
    let first_json = fs::read(dir.path().join("article.content.json")).expect("json");
    let first_sidecar = fs::read(dir.path().join("parsed-article.html")).expect("sidecar");

    assert_eq!(run_in(dir.path(), &["article.html"]).status.code(), Some(0));
    assert_eq!(fs::read(dir.path().join("article.content.json")).expect("json"), first_json);
    assert_eq!(fs::read(dir.path().join("parsed-article.html")).expect("sidecar"), first_sidecar);
}

#[test]
fn document_without_article_exits_with_status_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("blank.html"), "<html><body></body></html>").expect("write input");

    let output = run_in(dir.path(), &["blank.html"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("extraction failed"));
    assert_eq!(entries(dir.path()), vec!["blank.html"]);
}

#[test]
fn untitled_page_gets_heading_as_json_title() {
    let dir = tempfile::tempdir().expect("tempdir");
    let html = format!("<html><body><article><h1>Title</h1><p>{PROSE}</p></article></body></html>");
    fs::write(dir.path().join("article.html"), html).expect("write input");

    let output = run_in(dir.path(), &["article.html"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("article.content.json")).expect("json output"),
    )
    .expect("valid json");
    assert_eq!(json["title"], "Title");
    let text = json["textContent"].as_str().expect("textContent string");
    assert_eq!(json["length"].as_u64(), Some(text.chars().count() as u64));
}
