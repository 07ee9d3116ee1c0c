use std::sync::Arc;

use hacker_stories::core::action::{StoriesAction, stories_reducer};
use hacker_stories::core::fetch::FetchController;
use hacker_stories::core::state::StoriesState;
use hacker_stories::search::{
    AlgoliaClient, RequestUrl, SearchClient, SearchError, SearchResponse,
};
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Endpoint on the mock server shaped like the real one (`...?query=`)
fn endpoint(server: &MockServer) -> String {
    format!("{}/api/v1/search?query=", server.uri())
}

fn hits_body() -> serde_json::Value {
    serde_json::json!({
        "hits": [
            {
                "objectID": "1",
                "title": "Rust 2024 is out",
                "url": "https://blog.rust-lang.org",
                "author": "steveklabnik",
                "num_comments": 120,
                "points": 900
            },
            {
                "objectID": "2",
                "title": "Ask HN: learning Rust?",
                "url": null,
                "author": "someone",
                "num_comments": 42,
                "points": 77
            }
        ],
        "nbHits": 2,
        "page": 0
    })
}

/// Runs the controller against `url` and collects what it dispatched
async fn run_controller(url: &RequestUrl) -> Vec<StoriesAction> {
    let controller = FetchController::new(Arc::new(AlgoliaClient::new()));
    let mut dispatched = Vec::new();
    controller.run(url, |action| dispatched.push(action)).await;
    dispatched
}

// ============================================================================
// AlgoliaClient Tests
// ============================================================================

#[tokio::test]
async fn test_search_returns_hits_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("query", "Rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hits_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AlgoliaClient::new();
    let url = RequestUrl::compose(&endpoint(&mock_server), "Rust");

    let hits = assert_ok!(client.search(&url).await);

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].object_id, "1");
    assert_eq!(hits[0].title, "Rust 2024 is out");
    assert_eq!(hits[1].object_id, "2");
    assert_eq!(hits[1].url, "");
}

#[tokio::test]
async fn test_search_term_with_spaces_is_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("query", "rust async"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"hits": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AlgoliaClient::new();
    let url = RequestUrl::compose(&endpoint(&mock_server), "rust async");

    let hits = assert_ok!(client.search(&url).await);
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_search_non_success_status_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
        .mount(&mock_server)
        .await;

    let client = AlgoliaClient::new();
    let url = RequestUrl::compose(&endpoint(&mock_server), "Rust");

    let result = client.search(&url).await;
    assert!(matches!(result, Err(SearchError::Api { status: 503, .. })));
}

#[tokio::test]
async fn test_search_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = AlgoliaClient::new();
    let url = RequestUrl::compose(&endpoint(&mock_server), "Rust");

    let result = client.search(&url).await;
    assert!(matches!(result, Err(SearchError::Parse(_))));
}

#[tokio::test]
async fn test_search_body_without_hits_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})))
        .mount(&mock_server)
        .await;

    let client = AlgoliaClient::new();
    let url = RequestUrl::compose(&endpoint(&mock_server), "Rust");

    let result = client.search(&url).await;
    assert!(matches!(result, Err(SearchError::Parse(_))));
}

#[tokio::test]
async fn test_search_unreachable_host_is_network_error() {
    // Nothing listens on port 1
    let url = RequestUrl::compose("http://127.0.0.1:1/api/v1/search?query=", "Rust");
    let client = AlgoliaClient::new();

    let err = assert_err!(client.search(&url).await);
    assert!(matches!(err, SearchError::Network(_)));
}

// ============================================================================
// FetchController Tests
// ============================================================================

#[tokio::test]
async fn test_controller_success_loads_stories() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hits_body()))
        .mount(&mock_server)
        .await;

    let url = RequestUrl::compose(&endpoint(&mock_server), "Rust");
    let dispatched = run_controller(&url).await;

    assert_eq!(dispatched.len(), 2);
    assert_eq!(dispatched[0], StoriesAction::FetchInit);

    let state = dispatched
        .into_iter()
        .fold(StoriesState::default(), |state, action| stories_reducer(&state, action));
    assert!(!state.is_loading);
    assert!(!state.is_error);
    assert_eq!(state.data.len(), 2);
}

#[tokio::test]
async fn test_controller_failure_keeps_previous_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let url = RequestUrl::compose(&endpoint(&mock_server), "Rust");
    let dispatched = run_controller(&url).await;

    assert_eq!(
        dispatched,
        vec![StoriesAction::FetchInit, StoriesAction::FetchFailure]
    );

    // Stories from an earlier successful search
    let earlier: SearchResponse = serde_json::from_value(hits_body()).unwrap();
    let previous = StoriesState {
        data: earlier.hits,
        is_loading: false,
        is_error: false,
    };
    assert_eq!(previous.data.len(), 2);
    let state = dispatched
        .into_iter()
        .fold(previous.clone(), |state, action| stories_reducer(&state, action));
    assert!(state.is_error);
    assert!(!state.is_loading);
    assert_eq!(state.data, previous.data);
}

#[tokio::test]
async fn test_controller_malformed_body_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"hits\": 42}"))
        .mount(&mock_server)
        .await;

    let url = RequestUrl::compose(&endpoint(&mock_server), "Rust");
    let dispatched = run_controller(&url).await;

    assert_eq!(dispatched.last(), Some(&StoriesAction::FetchFailure));
}
