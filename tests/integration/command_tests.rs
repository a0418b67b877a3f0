//! Integration tests for command execution
//!
//! These tests run whole commands against wiremock servers and check the CSV
//! files they leave behind.

use quill_scraper::command::{execute, Command, QuotesParams, SelectParams};
use quill_scraper::config::{ClientConfig, PreviewConfig};
use quill_scraper::crawler::Fetcher;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_fetcher() -> Fetcher {
    Fetcher::new(&ClientConfig::default())
        .expect("Failed to build fetcher")
        .with_delay(Duration::ZERO)
}

fn html_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html; charset=utf-8")
}

const QUOTE_PAGE: &str = r#"<html><body>
  <div class="quote">
    <span class="text">“Simple, but not simpler.”</span>
    <span>by <small class="author">Albert Einstein</small></span>
    <div class="tags"><a class="tag">simplicity</a><a class="tag">design</a></div>
  </div>
  <div class="quote">
    <span class="text">Say "hello", then leave</span>
    <span>by <small class="author">Anonymous</small></span>
  </div>
</body></html>"#;

#[tokio::test]
async fn test_quotes_command_writes_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page/1/"))
        .respond_with(html_response(QUOTE_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page/2/"))
        .respond_with(html_response("<html><body></body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("quotes.csv");
    let params = QuotesParams::new(&mock_server.uri(), 3, &output).unwrap();

    execute(Command::Quotes(params), &test_fetcher(), &PreviewConfig::default())
        .await
        .unwrap();

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(
        csv,
        "text,author,tags\n\
         \"“Simple, but not simpler.”\",Albert Einstein,\"simplicity, design\"\n\
         \"Say \"\"hello\"\", then leave\",Anonymous,\n"
    );
}

#[tokio::test]
async fn test_quotes_command_with_nothing_found_writes_no_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page/1/"))
        .respond_with(html_response("<html><body><p>Gone</p></body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("quotes.csv");
    let params = QuotesParams::new(&mock_server.uri(), 3, &output).unwrap();

    execute(Command::Quotes(params), &test_fetcher(), &PreviewConfig::default())
        .await
        .unwrap();

    assert!(!output.exists());
}

#[tokio::test]
async fn test_select_command_writes_element_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .respond_with(html_response(
            "<html><body><h2> First </h2><p>skip</p><h2>Second</h2></body></html>",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("elements.csv");
    let params = SelectParams::new(&format!("{}/articles", mock_server.uri()), "h2")
        .unwrap()
        .with_output(&output);

    execute(Command::Select(params), &test_fetcher(), &PreviewConfig::default())
        .await
        .unwrap();

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(
        csv,
        "text,html\nFirst,<h2> First </h2>\nSecond,<h2>Second</h2>\n"
    );
}

#[tokio::test]
async fn test_select_command_without_output_writes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response("<html><body><h1>Title</h1></body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let params = SelectParams::new(&format!("{}/", mock_server.uri()), "h1").unwrap();

    execute(Command::Select(params), &test_fetcher(), &PreviewConfig::default())
        .await
        .unwrap();

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
