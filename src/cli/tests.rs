//! Tests for the CLI

use super::*;
use crate::config::ClientConfig;
use crate::types::Timestamp;
use crate::OpenSeaClient;
use clap::Parser;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OpenSeaClient {
    let config = ClientConfig::new("test-key")
        .with_base_url(server.uri())
        .with_page_delay(Duration::ZERO);
    OpenSeaClient::new(config).unwrap()
}

#[test]
fn test_parse_collections_defaults() {
    let cli = Cli::try_parse_from(["opensea-client", "collections"]).unwrap();
    match cli.command {
        Commands::Collections {
            chain,
            limit,
            include_hidden,
            max_pages,
            single_page,
            ..
        } => {
            assert_eq!(chain, "ethereum");
            assert_eq!(limit, 50);
            assert!(!include_hidden);
            assert_eq!(max_pages, 10);
            assert!(!single_page);
        }
        other => panic!("Expected Collections, got {other:?}"),
    }
    assert!(!cli.pretty);
    assert!(cli.output.is_none());
}

#[test]
fn test_parse_events_with_filters() {
    let cli = Cli::try_parse_from([
        "opensea-client",
        "events",
        "doodles-official",
        "--event-type",
        "sale",
        "--event-type",
        "transfer",
        "--after",
        "1704067200",
        "--before",
        "2024-01-02T00:00:00Z",
        "--pretty",
    ])
    .unwrap();

    match cli.command {
        Commands::Events {
            slug,
            event_types,
            after,
            before,
            ..
        } => {
            assert_eq!(slug, "doodles-official");
            assert_eq!(event_types, vec!["sale", "transfer"]);
            assert_eq!(after, Some(Timestamp::Unix(1_704_067_200)));
            assert_eq!(before.map(|t| t.unix_seconds()), Some(1_704_153_600));
        }
        other => panic!("Expected Events, got {other:?}"),
    }
    assert!(cli.pretty);
}

#[test]
fn test_parse_rejects_bad_timestamp() {
    let result = Cli::try_parse_from(["opensea-client", "events", "x", "--after", "tomorrow"]);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_invalid_chain_fails_before_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let cli = Cli::try_parse_from(["opensea-client", "collections", "--chain", "dogecoin"]).unwrap();
    let err = Runner::new(cli)
        .run_with(&client_for(&mock_server))
        .await
        .unwrap_err();

    assert!(err.is_validation());
}

#[tokio::test]
async fn test_events_written_to_output_file() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/collection/doodles-official"))
        .and(query_param("event_type", "mint"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "asset_events": [{"event_type": "mint"}, {"event_type": "mint"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tmp = tempfile::tempdir().unwrap();
    let output = tmp.path().join("events.json");
    let cli = Cli::try_parse_from([
        "opensea-client",
        "events",
        "doodles-official",
        "--event-type",
        "mint",
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();

    Runner::new(cli)
        .run_with(&client_for(&mock_server))
        .await
        .unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["items"].as_array().unwrap().len(), 2);
    assert_eq!(written["pages_fetched"], 1);
    assert_eq!(written["next_cursor"], Value::Null);
}

#[tokio::test]
async fn test_single_page_output_includes_cursor() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collections": [{"collection": "a"}],
            "next": "cursor-2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tmp = tempfile::tempdir().unwrap();
    let output = tmp.path().join("page.json");
    let cli = Cli::try_parse_from([
        "opensea-client",
        "collections",
        "--single-page",
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap();

    Runner::new(cli)
        .run_with(&client_for(&mock_server))
        .await
        .unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["items"][0]["collection"], "a");
    assert_eq!(written["next"], "cursor-2");
}
