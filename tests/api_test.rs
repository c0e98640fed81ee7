//! HTTP API tests against the router, without binding a socket.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use ghostwriter::config::AppConfig;
use ghostwriter::lexical::LexicalDatabase;
use ghostwriter::lexical::json::JsonThesaurus;
use ghostwriter::server::build_router;
use ghostwriter::service::ThesaurusService;
use serde_json::{Value, json};
use tower::ServiceExt;

const WOMAN: &str = "Instead he was smiling at a rather severe-looking woman who was wearing square glasses exactly the shape of the markings the cat had had around its eyes.";

fn router() -> Router {
    build_router(Arc::new(ThesaurusService::from_config(&AppConfig::default())))
}

async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(router(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Still alive..."));

    let (status, body) = send(router(), Method::GET, "/health-wordnet", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"]["name"], "ghostwriter-thesaurus");
}

#[tokio::test]
async fn test_phrase_synonyms() {
    let body = json!({
        "word": "rather severe-looking woman",
        "text": WOMAN,
        "start": 28,
        "end": 55
    });
    let (status, body) = send(router(), Method::POST, "/thesaurus-inflated-phrase", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["original_phrase"], "rather severe-looking woman");
    assert_eq!(body["original_indices"], json!({"start": 28, "end": 55}));
    assert_eq!(body["message"], "Found synonyms for 3 words.");

    let first = &body["results"][0];
    assert_eq!(first["original_word"], "severe");
    assert_eq!(first["original_indices"], json!({"start": 7, "end": 13}));
    assert_eq!(first["debug_info"]["token_indices"], json!({"start": 35, "end": 41}));
    assert_eq!(first["context_info"]["grammatical_form"], "JJ");
}

#[tokio::test]
async fn test_phrase_without_synonyms() {
    for (start, end) in [(8, 18), (20, 18)] {
        let body = json!({
            "word": "some phrase",
            "text": "This is some phrase.",
            "start": start,
            "end": end
        });
        let (status, body) = send(router(), Method::POST, "/thesaurus-inflated-phrase", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "original_phrase": "some phrase",
                "original_indices": {"start": start, "end": end},
                "results": [],
                "message": "No words with synonyms found in the selected phrase."
            })
        );
    }
}

#[tokio::test]
async fn test_request_validation() {
    let (status, body) = send(router(), Method::POST, "/thesaurus-inflated-phrase", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "Unprocessable Entity");

    let body = json!({"word": "fox", "text": "The quick brown fox", "start": 100, "end": 200});
    let (status, body) = send(router(), Method::POST, "/thesaurus-inflated", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("100-200"));

    let body = json!({"word": "slow", "text": "The quick brown fox", "start": 4, "end": 9});
    let (status, _) = send(router(), Method::POST, "/thesaurus-inflated", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_word_synonyms() {
    let body = json!({
        "word": "quick",
        "text": "The quick brown fox jumps over the lazy dog",
        "start": 4,
        "end": 9
    });
    let (status, body) = send(router(), Method::POST, "/thesaurus-inflated", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["original_word"], "quick");
    assert_eq!(body["context_info"]["lemma"], "quick");
    assert_eq!(body["context_info"]["tag"], "JJ");
    assert_eq!(body["context_info"]["dependency"], "amod");
    assert!(!body["synonym_groups"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_split_text() {
    let body = json!({"text": "The quick brown fox.", "start": 4, "end": 9, "word": "quick"});
    let (status, body) = send(router(), Method::POST, "/split-text", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentence"], "The quick brown fox.");
    assert_eq!(body["start_in_sentence"], 4);
    assert_eq!(body["end_in_sentence"], 9);
}

#[tokio::test]
async fn test_words_frequency() {
    let body = json!({"text": "The dog runs. Dogs are running!"});
    let (status, body) = send(router(), Method::POST, "/words-frequency", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["n_total_rows"], 1);
    assert_eq!(body["words_frequency"]["dog"]["count"], 2);
    assert!(body["duration"].is_string());

    let rows = json!({"text": [{"idxRow": 0, "text": "happy dog"}, {"idxRow": 1, "text": "sad dog"}]});
    let (status, body) = send(router(), Method::POST, "/words-frequency", Some(rows)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["n_total_rows"], 2);
    assert_eq!(body["words_frequency"]["dog"]["offsets_array"][1]["n_row"], 1);
}

#[tokio::test]
async fn test_custom_synonyms_lifecycle() {
    let router = router();

    let body = json!({"word": "happy", "synonyms": ["Joyful", "glad"]});
    let (status, body) = send(router.clone(), Method::POST, "/thesaurus-custom", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Custom entry for 'happy' added/updated successfully (in-memory).");
    assert_eq!(body["synonyms"], json!(["joyful", "glad"]));

    let (status, body) = send(router.clone(), Method::GET, "/thesaurus-custom/happy", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["synonym"][0]["words"], json!(["joyful", "glad"]));

    let (status, body) = send(router.clone(), Method::DELETE, "/thesaurus-custom/happy", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Custom entry for 'happy' deleted successfully (in-memory).");

    let (status, body) = send(router.clone(), Method::GET, "/thesaurus-custom/happy", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("No custom synonyms found for word 'happy'."));

    let (status, _) = send(router, Method::DELETE, "/thesaurus-custom/happy", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_tagger_answers_503() {
    let database: Arc<dyn LexicalDatabase> = Arc::new(JsonThesaurus::embedded().unwrap());
    let service = ThesaurusService::new(AppConfig::default(), None, Some(database));
    let router = build_router(Arc::new(service));

    let body = json!({"word": "some phrase", "text": "This is some phrase.", "start": 8, "end": 18});
    let (status, body) = send(router.clone(), Method::POST, "/thesaurus-inflated-phrase", Some(body)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["detail"], "Service Unavailable");

    // the dictionary still answers
    let (status, _) = send(router, Method::GET, "/health-wordnet", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_and_timing_headers() {
    let request = Request::builder()
        .uri("/health")
        .header("X-Request-ID", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");
    assert!(response.headers().contains_key("x-process-time"));

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = router().oneshot(request).await.unwrap();
    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}
