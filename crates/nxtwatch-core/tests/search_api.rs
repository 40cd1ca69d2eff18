//! Integration tests for the search client and session using wiremock.
//!
//! A mock endpoint stands in for the video API so the full
//! submit -> fetch -> complete cycle runs without network access.

use nxtwatch_core::{
    ClientConfig, Error, SearchBranch, SearchSession, SearchStatus, VideoApi, ViewCount,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> VideoApi {
    let config = ClientConfig::new(&server.uri())
        .unwrap()
        .with_token(Some("secret-token".into()));
    VideoApi::new(config).unwrap()
}

fn videos_body(ids: &[&str]) -> serde_json::Value {
    let videos: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "channel": { "name": "iB Hubs", "profile_image_url": "https://example.com/ib.png" },
                "published_at": "Apr 19, 2019",
                "thumbnail_url": format!("https://example.com/{}.png", id),
                "view_count": "1.4K",
                "title": format!("Video {}", id)
            })
        })
        .collect();
    json!({ "total": videos.len(), "videos": videos })
}

// ============================================================================
// Client
// ============================================================================

/// Search sends the query and the bearer credential
#[tokio::test]
async fn test_search_sends_query_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos/all"))
        .and(query_param("search", "cat"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(videos_body(&["a", "b"])))
        .expect(1)
        .mount(&server)
        .await;

    let videos = api_for(&server).search("cat").await.unwrap();

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].id, "a");
    assert_eq!(videos[0].channel.name, "iB Hubs");
    assert_eq!(videos[0].thumbnail_url, "https://example.com/a.png");
    assert_eq!(videos[0].view_count, ViewCount::Label("1.4K".into()));
}

/// Empty query is still sent as `search=`
#[tokio::test]
async fn test_empty_query_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos/all"))
        .and(query_param("search", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(videos_body(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let videos = api_for(&server).search("").await.unwrap();
    assert!(videos.is_empty());
}

/// Query text with spaces and symbols is URL-encoded
#[tokio::test]
async fn test_query_is_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("search", "rock & roll"))
        .respond_with(ResponseTemplate::new(200).set_body_json(videos_body(&["r"])))
        .expect(1)
        .mount(&server)
        .await;

    let videos = api_for(&server).search("rock & roll").await.unwrap();
    assert_eq!(videos[0].id, "r");
}

/// Non-OK status maps to Error::Status
#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error_msg": "invalid token" })))
        .mount(&server)
        .await;

    let err = api_for(&server).search("cat").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

/// Malformed JSON on a 200 is a decode error
#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&server)
        .await;

    let err = api_for(&server).search("cat").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "unexpected error: {err:?}");
}

/// Unreachable server is a transport error
#[tokio::test]
async fn test_transport_failure() {
    let config = ClientConfig::new("http://127.0.0.1:1")
        .unwrap()
        .with_timeout(std::time::Duration::from_secs(5));
    let api = VideoApi::new(config).unwrap();

    let err = api.search("cat").await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "unexpected error: {err:?}");
}

/// Without a credential no Authorization header is sent
#[tokio::test]
async fn test_no_token_no_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(videos_body(&["x"])))
        .mount(&server)
        .await;

    let api = VideoApi::new(ClientConfig::new(&server.uri()).unwrap()).unwrap();
    api.search("x").await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(!received[0].headers.contains_key("authorization"));
}

// ============================================================================
// Session driven against the endpoint
// ============================================================================

/// Typing "cat" and submitting issues search=cat and lands in Success
#[tokio::test]
async fn test_submit_cycle_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("search", "cat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(videos_body(&["c1"])))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let mut session = SearchSession::new();

    session.set_draft("cat");
    let request = session.submit();
    assert_eq!(session.status(), SearchStatus::Loading);

    let outcome = api.search(&request.query).await;
    assert!(session.complete(request.ticket, outcome));
    assert_eq!(session.status(), SearchStatus::Success);
    assert_eq!(session.branch(), SearchBranch::Results);
}

/// Empty success renders no-results with a working retry
#[tokio::test]
async fn test_no_results_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("search", "nothing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(videos_body(&[])))
        .expect(2)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let mut session = SearchSession::new();

    session.set_draft("nothing");
    let request = session.submit();
    let outcome = api.search(&request.query).await;
    session.complete(request.ticket, outcome);
    assert_eq!(session.branch(), SearchBranch::NoResults);

    let retry = session.retry().unwrap();
    let outcome = api.search(&retry.query).await;
    assert!(session.complete(retry.ticket, outcome));
    assert_eq!(session.branch(), SearchBranch::NoResults);
}

/// Failure then retry replays the committed query, not the newer draft
#[tokio::test]
async fn test_failure_retry_replays_committed_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("search", "cat"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("search", "cat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(videos_body(&["c1", "c2"])))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let mut session = SearchSession::new();

    session.set_draft("cat");
    let request = session.submit();
    let outcome = api.search(&request.query).await;
    session.complete(request.ticket, outcome);
    assert_eq!(session.branch(), SearchBranch::Failure);

    session.set_draft("dog");
    let retry = session.retry().unwrap();
    assert_eq!(retry.query, "cat");

    let outcome = api.search(&retry.query).await;
    session.complete(retry.ticket, outcome);
    assert_eq!(session.branch(), SearchBranch::Results);
    assert_eq!(session.results().len(), 2);
}
