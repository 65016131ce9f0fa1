// Integration tests for `ApiClient` using wiremock.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nicconf_api::{ApiClient, ConfigPayload, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client =
        ApiClient::from_reqwest(&format!("{}/api", server.uri()), reqwest::Client::new())
            .unwrap();
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_get_ifnames_preserves_order() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/ifnames"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["eth1", "eth0", "lo"])))
        .mount(&server)
        .await;

    let ifnames = client.get_ifnames().await.unwrap();
    assert_eq!(ifnames, vec!["eth1", "eth0", "lo"]);
}

#[tokio::test]
async fn test_get_config_wrapped() {
    let (server, client) = setup().await;

    let body = json!({
        "nics": {
            "eth0": { "dhcp": true },
            "eth1": { "vlan": { "id": 10 } }
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let nics = client.get_config().await.unwrap().into_nics();
    assert_eq!(nics.len(), 2);
    assert_eq!(nics["eth0"], json!({ "dhcp": true }));
    assert_eq!(nics["eth1"]["vlan"]["id"], json!(10));
}

#[tokio::test]
async fn test_get_config_bare() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "eth0": {} })))
        .mount(&server)
        .await;

    let payload = client.get_config().await.unwrap();
    assert!(matches!(payload, ConfigPayload::Bare(_)));
}

// ── Error-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client.get_config().await.unwrap_err();
    match err {
        Error::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/api/config"), "unexpected url: {url}");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_endpoint_is_not_found() {
    let (_server, client) = setup().await;

    // Nothing mounted: wiremock answers 404.
    let err = client.get_ifnames().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_malformed_body_keeps_raw_text() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/ifnames"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.get_ifnames().await.unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "<html>oops</html>"),
        other => panic!("expected Deserialization error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport() {
    // Bind and drop a listener so the port is closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client =
        ApiClient::from_reqwest(&format!("http://127.0.0.1:{port}/api"), reqwest::Client::new())
            .unwrap();

    let err = client.get_ifnames().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.is_transient());
}
