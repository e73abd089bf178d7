//! Integration tests for the HTTP endpoints
//!
//! Tests cover:
//! - /similar_lyrics grouping, album ordering and response shape
//! - Empty and missing queries
//! - Markup escaping in highlighted text
//! - /health

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

use lyric_matcher::server::{build_router, AppState};

fn setup_app() -> axum::Router {
    build_router(AppState::new(common::build_index()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

async fn search(query_string: &str) -> (StatusCode, Value) {
    let response = setup_app()
        .oneshot(get(&format!("/similar_lyrics{}", query_string)))
        .await
        .unwrap();
    let status = response.status();
    (status, extract_json(response.into_body()).await)
}

// =============================================================================
// /similar_lyrics
// =============================================================================

#[tokio::test]
async fn test_search_orders_albums_canonically() {
    let (status, body) = search("?query=dance").await;
    assert_eq!(status, StatusCode::OK);

    let albums: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| pair[0].as_str().unwrap())
        .collect();
    assert_eq!(albums, vec!["Fearless", "Midnights", "Basement Demos"]);
}

#[tokio::test]
async fn test_search_response_shape() {
    let (_, body) = search("?query=dance").await;

    let midnights = &body[1][1];
    assert_eq!(midnights["class"], "midnights");

    let track = &midnights["tracks"][0];
    assert_eq!(track["AlbumTitle"], "Midnights");
    assert_eq!(track["TrackTitle"], "Lantern Song");
    assert_eq!(track["AlbumYear"], 2022);
    assert_eq!(track["AlbumClass"], "midnights");
    assert_eq!(
        track["Text"],
        serde_json::json!(["We danced all night", "Still dancing, still <here>"])
    );
    assert_eq!(
        track["Lyrics"],
        "We danced all night Still dancing, still <here>"
    );
    assert_eq!(track["HighlightedText"].as_array().unwrap().len(), 2);

    let unknown = &body[2][1];
    assert_eq!(unknown["class"], "");
    assert_eq!(unknown["tracks"][0]["AlbumClass"], "");
}

#[tokio::test]
async fn test_highlighted_text_is_escaped() {
    let (_, body) = search("?query=dancing").await;
    let highlighted = body[1][1]["tracks"][0]["HighlightedText"][1]
        .as_str()
        .unwrap();

    assert!(highlighted.contains(r#"<span class="non-clickable-word">&lt;here&gt;</span>"#));
    assert!(highlighted.contains(
        r#"<span class="highlight"><a href="https://client.test/lyricmatcher?query=dancing%2C" class="clickable-word" onclick="searchWord(&#34;dancing,&#34;)">dancing,</a></span>"#
    ));
    assert!(!highlighted.contains("<here>"));
}

#[tokio::test]
async fn test_ampersand_token_is_escaped() {
    let (_, body) = search("?query=drummer").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    let highlighted = body[0][1]["tracks"][0]["HighlightedText"][0]
        .as_str()
        .unwrap();
    assert!(highlighted.contains(">&amp;</a>"));
}

#[tokio::test]
async fn test_empty_query_returns_empty_list() {
    let (status, body) = search("?query=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_missing_query_returns_empty_list() {
    let (status, body) = search("").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_punctuation_only_query_returns_empty_list() {
    let (status, body) = search("?query=%21%3F").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_no_match_returns_empty_list() {
    let (status, body) = search("?query=zeppelin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_stopword_query_matches_and_renders_inert() {
    // "the" stems to "the"; "the" is never indexed, but nothing else starts with it here
    let (_, body) = search("?query=the").await;
    assert_eq!(body, serde_json::json!([]));

    let (_, body) = search("?query=quiet").await;
    let highlighted = body[0][1]["tracks"][0]["HighlightedText"][0]
        .as_str()
        .unwrap();
    assert!(highlighted.starts_with(r#"<span class="non-clickable-word">The</span> "#));
}

#[tokio::test]
async fn test_repeated_queries_are_identical() {
    let (_, first) = search("?query=night").await;
    let (_, second) = search("?query=night").await;
    assert_eq!(first, second);
}

// =============================================================================
// /health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let response = setup_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "lyric-matcher");
    assert_eq!(body["lines"], 6);
}
