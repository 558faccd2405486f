use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use precis_textrank::DummyAnalyzer;
use precis_web::{create_app, AppState, ServerConfig};
use serde_json::Value;
use tower::ServiceExt;

const FOX: &str = "The quick brown fox jumps over the lazy dog. The dog barks.";

const ARTICLE: &str = "Rust is a systems programming language focused on safety and speed. \
    The Rust compiler checks memory safety at compile time. \
    Memory safety without garbage collection makes Rust programs fast. \
    Many companies adopt Rust for network services and command line tools. \
    The borrow checker enforces memory safety rules in the compiler. \
    Cargo is the package manager and build tool for Rust projects. \
    Rust programs compile to native code with predictable performance. \
    The community publishes thousands of crates for Rust developers. \
    Gardening is a relaxing hobby for many people in spring. \
    Compile time checks catch many bugs before Rust programs run.";

fn encode(text: &str) -> String {
    text.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}

fn textrank_app() -> Router {
    create_app(AppState::default())
}

fn dummy_app() -> (Router, Arc<DummyAnalyzer>) {
    let dummy = Arc::new(DummyAnalyzer::new());
    let app = create_app(AppState::new(dummy.clone(), ServerConfig::default()));
    (app, dummy)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_index_returns_usage() {
    let (status, body) = get(textrank_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    let body = String::from_utf8(body).unwrap();
    assert!(body.contains("/summary?text="));
    assert!(body.contains("/keywords?text="));
}

#[tokio::test]
async fn test_missing_or_empty_text_never_reaches_the_analyzer() {
    for uri in ["/summary", "/summary?text=", "/keywords", "/keywords?text="] {
        let (app, dummy) = dummy_app();
        let (status, _) = get(app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(dummy.calls(), 0, "{}", uri);
    }
}

#[tokio::test]
async fn test_summary_calls_the_analyzer() {
    let (app, dummy) = dummy_app();
    let (status, body) = get(app, &format!("/summary?text={}", encode(FOX))).await;

    assert_eq!(status, StatusCode::OK);
    let summary: String = serde_json::from_slice(&body).unwrap();
    assert_eq!(summary, "The quick brown fox jumps over the lazy dog.");
    assert_eq!(dummy.calls(), 1);
}

#[tokio::test]
async fn test_keywords_scenario() {
    let (status, body) = get(textrank_app(), &format!("/keywords?text={}", encode(FOX))).await;

    assert_eq!(status, StatusCode::OK);
    let keywords: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert!(!keywords.is_empty());
    assert!(keywords[0].contains("dog"));
}

#[tokio::test]
async fn test_keywords_are_drawn_from_the_text() {
    let uri = format!("/keywords?text={}&ratio=0.5", encode(ARTICLE));
    let (status, body) = get(textrank_app(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    let keywords: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert!(keywords.len() > 1);
    let lowered = ARTICLE.to_lowercase();
    for phrase in &keywords {
        for word in phrase.split(' ') {
            assert!(lowered.contains(word), "{} not in text", word);
        }
    }
}

#[tokio::test]
async fn test_scored_keywords_are_pairs() {
    let uri = format!("/keywords?text={}&words=2&scores=true", encode(FOX));
    let (status, body) = get(textrank_app(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    let pairs = value.as_array().unwrap();
    assert!(!pairs.is_empty());
    for pair in pairs {
        let pair = pair.as_array().unwrap();
        assert!(pair[0].is_string());
        assert!(pair[1].is_f64());
    }
}

#[tokio::test]
async fn test_summary_of_article() {
    let (status, body) = get(textrank_app(), &format!("/summary?text={}", encode(ARTICLE))).await;

    assert_eq!(status, StatusCode::OK);
    let summary: String = serde_json::from_slice(&body).unwrap();
    assert!(!summary.is_empty());
    assert!(summary.len() <= ARTICLE.len());
    for line in summary.lines() {
        assert!(ARTICLE.contains(line));
    }
}

#[tokio::test]
async fn test_two_sentences_summary_is_short() {
    let (status, body) = get(textrank_app(), &format!("/summary?text={}", encode(FOX))).await;

    assert_eq!(status, StatusCode::OK);
    let summary: String = serde_json::from_slice(&body).unwrap();
    assert!(summary.len() <= FOX.len());
}

#[tokio::test]
async fn test_single_sentence_is_a_server_error() {
    let uri = format!("/summary?text={}", encode("just one short sentence"));
    let (status, body) = get(textrank_app(), &uri).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["error"], "input must have more than one sentence");
}

#[tokio::test]
async fn test_invalid_ratio_is_a_bad_request() {
    let (app, dummy) = dummy_app();
    let (status, _) = get(app, &format!("/keywords?text={}&ratio=abc", encode(FOX))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(dummy.calls(), 0);

    let uri = format!("/summary?text={}&ratio=1.5", encode(ARTICLE));
    let (status, _) = get(textrank_app(), &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let uri = format!("/keywords?text={}&ratio=0.3", encode(ARTICLE));
    let (_, first) = get(textrank_app(), &uri).await;
    let (_, second) = get(textrank_app(), &uri).await;
    assert_eq!(first, second);

    let uri = format!("/summary?text={}", encode(ARTICLE));
    let (_, first) = get(textrank_app(), &uri).await;
    let (_, second) = get(textrank_app(), &uri).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = textrank_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
