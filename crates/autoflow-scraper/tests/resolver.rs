//! Integration tests for `ShortenerResolver::resolve`.
//!
//! Each test stands up a local `wiremock` server and registers its host as a
//! shortener, so no real network traffic is made.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use autoflow_scraper::{PipelineConfig, ShortenerResolver};

fn test_config() -> PipelineConfig {
    PipelineConfig {
        timeout: Duration::from_secs(2),
        max_redirects: 5,
        ..PipelineConfig::default()
    }
}

fn shortener_resolver() -> ShortenerResolver {
    ShortenerResolver::new(&test_config().with_shortener("127.0.0.1"))
        .expect("failed to build test resolver")
}

#[tokio::test]
async fn follows_redirect_chain_to_final_url() {
    let server = MockServer::start().await;
    let final_url = format!("{}/tshirt?tag=abc123&color=red", server.uri());

    Mock::given(path("/xyz"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", final_url.as_str()))
        .mount(&server)
        .await;
    Mock::given(path("/tshirt"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let resolved = shortener_resolver()
        .resolve(&format!("{}/xyz", server.uri()))
        .await;

    assert_eq!(resolved, final_url);
}

#[tokio::test]
async fn falls_back_to_get_when_head_is_rejected() {
    let server = MockServer::start().await;
    let final_url = format!("{}/product/42", server.uri());

    Mock::given(method("HEAD"))
        .and(path("/h"))
        .respond_with(ResponseTemplate::new(405))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/h"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", final_url.as_str()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let resolved = shortener_resolver()
        .resolve(&format!("{}/h", server.uri()))
        .await;

    assert_eq!(resolved, final_url);
}

#[tokio::test]
async fn non_success_destination_keeps_original_url() {
    let server = MockServer::start().await;
    let gone = format!("{}/gone", server.uri());

    Mock::given(path("/short"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", gone.as_str()))
        .mount(&server)
        .await;
    Mock::given(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let original = format!("{}/short", server.uri());
    let resolved = shortener_resolver().resolve(&original).await;

    assert_eq!(resolved, original);
}

#[tokio::test]
async fn redirect_loop_keeps_original_url() {
    let server = MockServer::start().await;
    let looping = format!("{}/loop", server.uri());

    Mock::given(path("/loop"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", looping.as_str()))
        .mount(&server)
        .await;

    let resolved = shortener_resolver().resolve(&looping).await;

    assert_eq!(resolved, looping);
}

#[tokio::test]
async fn unreachable_shortener_keeps_original_url() {
    let resolver = shortener_resolver();
    let original = "http://127.0.0.1:1/abc";

    assert_eq!(resolver.resolve(original).await, original);
}

#[tokio::test]
async fn non_shortener_host_is_never_requested() {
    let server = MockServer::start().await;

    Mock::given(path("/page"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "https://elsewhere.example/"))
        .expect(0)
        .mount(&server)
        .await;

    // Default shortener set does not include the mock server's host.
    let resolver = ShortenerResolver::new(&test_config()).expect("failed to build resolver");
    let url = format!("{}/page?tag=x", server.uri());

    assert_eq!(resolver.resolve(&url).await, url);
}
