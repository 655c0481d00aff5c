//! Catalog client tests against a mocked PokeAPI

use std::time::Duration;

use httpmock::prelude::*;
use pokemon_mcp::{CatalogClient, PokemonRef, format_types};

mod common;
use common::{bulbasaur_body, pikachu, pikachu_body};

fn client(server: &MockServer) -> CatalogClient {
    CatalogClient::new(&server.base_url(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_keeps_only_record_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon/25");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(pikachu_body());
        })
        .await;

    let found = client(&server).fetch(&PokemonRef::Number(25)).await;

    mock.assert_async().await;
    let found = found.expect("pikachu should be found");
    assert_eq!(found, pikachu());

    // extra upstream fields never make it into the record
    let json = serde_json::to_value(&found).unwrap();
    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["height", "id", "name", "types", "weight"]);
}

#[tokio::test]
async fn test_fetch_by_name_uses_lowercase_segment() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon/bulbasaur");
            then.status(200).json_body(bulbasaur_body());
        })
        .await;

    let found = client(&server)
        .fetch(&PokemonRef::from("Bulbasaur"))
        .await
        .expect("bulbasaur should be found");

    mock.assert_async().await;
    assert_eq!(found.id, 1);
    assert_eq!(format_types(&found.types), "grass, poison");
}

#[tokio::test]
async fn test_fetch_not_found_is_none() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon/missingno");
            then.status(404).body("Not Found");
        })
        .await;

    let found = client(&server).fetch(&PokemonRef::from("missingno")).await;

    mock.assert_async().await;
    assert!(found.is_none());
}

#[tokio::test]
async fn test_fetch_non_success_statuses_are_none() {
    for status in [301_u16, 400, 429, 500, 503] {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/pokemon/1");
                then.status(status).json_body(bulbasaur_body());
            })
            .await;

        let found = client(&server).fetch(&PokemonRef::Number(1)).await;
        assert!(found.is_none(), "status {status} should yield none");
    }
}

#[tokio::test]
async fn test_try_fetch_reports_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon/9999");
            then.status(404);
        })
        .await;

    let err = client(&server)
        .try_fetch(&PokemonRef::Number(9999))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_fetch_malformed_body_is_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon/25");
            then.status(200).body("<html>definitely not json</html>");
        })
        .await;

    assert!(client(&server).fetch(&PokemonRef::Number(25)).await.is_none());
}

#[tokio::test]
async fn test_fetch_missing_fields_is_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon/25");
            then.status(200).json_body(serde_json::json!({"id": 25, "name": "pikachu"}));
        })
        .await;

    assert!(client(&server).fetch(&PokemonRef::Number(25)).await.is_none());
}

#[tokio::test]
async fn test_fetch_network_failure_is_none() {
    // bind then drop to get a port nothing listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client =
        CatalogClient::new(&format!("http://127.0.0.1:{port}"), Duration::from_secs(2)).unwrap();

    assert!(client.fetch(&PokemonRef::Number(25)).await.is_none());
}

#[tokio::test]
async fn test_fetch_timeout_is_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pokemon/25");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(pikachu_body());
        })
        .await;

    let client = CatalogClient::new(&server.base_url(), Duration::from_millis(200)).unwrap();

    assert!(client.fetch(&PokemonRef::Number(25)).await.is_none());
}

#[tokio::test]
async fn test_fetch_under_base_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/pokemon/25");
            then.status(200).json_body(pikachu_body());
        })
        .await;

    let client = CatalogClient::new(&server.url("/api/v2"), Duration::from_secs(5)).unwrap();
    assert!(client.fetch(&PokemonRef::Number(25)).await.is_some());
    mock.assert_async().await;
}
