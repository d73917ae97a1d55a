//! HTTP-level tests for the client against a mocked upstream
//!
//! Covers retry/backoff cadence, 403 classification, and cookie handling.

use std::time::{Duration, Instant};

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use visioncine_core::{ClientConfig, VisioncineClient, VisioncineError};

fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        max_retries: 3,
        backoff_base: Duration::from_millis(50),
        cookie_header: None,
    }
}

#[tokio::test]
async fn fetch_returns_body_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>movies</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = VisioncineClient::with_config(test_config(&server)).unwrap();
    let body = client.fetch("/movies").await.unwrap();

    assert_eq!(body, "<html>movies</html>");
}

#[tokio::test]
async fn fetch_retries_twice_then_succeeds() {
    let server = MockServer::start().await;

    // First two attempts fail, third succeeds
    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = VisioncineClient::with_config(test_config(&server)).unwrap();

    let start = Instant::now();
    let body = client.fetch("/movies").await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(body, "<html>ok</html>");
    // Linear backoff: 1×base before attempt 2, 2×base before attempt 3
    assert!(
        elapsed >= Duration::from_millis(150),
        "expected cumulative backoff of at least 150ms, got {:?}",
        elapsed
    );
}

#[tokio::test]
async fn fetch_propagates_error_after_final_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let client = VisioncineClient::with_config(test_config(&server)).unwrap();
    let result = client.fetch("/movies").await;

    match result {
        Err(VisioncineError::Status(500)) => {}
        other => panic!("Expected Status(500), got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn fetch_classifies_403_as_blocked() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(403))
        .expect(3)
        .mount(&server)
        .await;

    let client = VisioncineClient::with_config(test_config(&server)).unwrap();
    let result = client.fetch("/").await;

    match result {
        Err(e @ VisioncineError::Blocked) => {
            assert_eq!(e.status_code(), Some(403));
            assert!(e.hint().is_some());
        }
        other => panic!("Expected Blocked, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn fetch_classifies_other_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut config = test_config(&server);
    config.max_retries = 1;
    let client = VisioncineClient::with_config(config).unwrap();

    match client.fetch("/missing").await {
        Err(VisioncineError::Status(404)) => {}
        other => panic!("Expected Status(404), got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn cookies_set_by_a_response_are_replayed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=xyz; Path=/")
                .set_body_string("<html></html>"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movies"))
        .and(header("cookie", "session=xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>with cookie</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = VisioncineClient::with_config(test_config(&server)).unwrap();

    client.fetch("/").await.unwrap();
    let body = client.fetch("/movies").await.unwrap();

    assert_eq!(body, "<html>with cookie</html>");
}

#[tokio::test]
async fn static_cookie_header_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movies"))
        .and(header("cookie", "auth=token123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server).with_cookie_header("auth=token123");
    let client = VisioncineClient::with_config(config).unwrap();

    let body = client.fetch("/movies").await.unwrap();
    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn browser_headers_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("accept-language", "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7"))
        .and(header("upgrade-insecure-requests", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = VisioncineClient::with_config(test_config(&server)).unwrap();
    client.fetch("/").await.unwrap();
}
