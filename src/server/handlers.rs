//! Request handlers.
//!
//! Handlers parse the JSON body, run the synchronous service call on the
//! blocking pool and shape the response. Failures become `{ "detail": ... }`
//! bodies with the status of the error class; server-side failures never
//! leak their internal message.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::custom::CustomEntry;
use crate::error::{GhostwriterError, Result};
use crate::frequency::FrequencyInput;
use crate::phrase::{SentenceSplit, WordSynonymResult};
use crate::service::ThesaurusService;
use crate::span::Indices;

type SharedService = State<Arc<ThesaurusService>>;

/// An error answered to the client.
#[derive(Debug)]
pub enum ApiError {
    Service(GhostwriterError),
    Body(JsonRejection),
}

impl From<GhostwriterError> for ApiError {
    fn from(error: GhostwriterError) -> Self {
        ApiError::Service(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body(rejection)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::Body(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let reason = status.canonical_reason().unwrap_or("Error").to_string();
        let detail = match &self {
            ApiError::Body(rejection) => {
                warn!("Rejected request body: {}", rejection.body_text());
                reason
            }
            ApiError::Service(e) if e.is_client_error() => {
                if status == StatusCode::UNPROCESSABLE_ENTITY {
                    reason
                } else {
                    e.to_string()
                }
            }
            ApiError::Service(e) => {
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    error!("Request failed: {e}");
                } else {
                    warn!("Request failed: {e}");
                }
                reason
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// JSON body extractor answering 422 on a missing or malformed body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Run a synchronous service call on the blocking pool.
async fn blocking<T, F>(f: F) -> std::result::Result<T, ApiError>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| GhostwriterError::other(format!("Blocking task failed: {e}")))?
        .map_err(ApiError::from)
}

/// A selection in a text.
#[derive(Clone, Debug, Deserialize)]
pub struct SpanRequest {
    pub text: String,
    pub start: i64,
    pub end: i64,
    pub word: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FrequencyRequest {
    pub text: FrequencyInput,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CustomSynonymsRequest {
    pub word: String,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PhraseResponse {
    pub success: bool,
    pub original_phrase: String,
    pub original_indices: Indices,
    pub results: Vec<WordSynonymResult>,
    pub message: String,
}

fn phrase_message(results: usize) -> String {
    if results == 0 {
        "No words with synonyms found in the selected phrase.".to_string()
    } else {
        format!("Found synonyms for {results} words.")
    }
}

pub async fn health() -> Json<&'static str> {
    Json("Still alive...")
}

pub async fn health_wordnet(State(service): SharedService) -> std::result::Result<Json<Value>, ApiError> {
    let info = service.database_info()?;
    Ok(Json(json!({ "msg": info })))
}

pub async fn words_frequency(
    State(service): SharedService,
    ApiJson(request): ApiJson<FrequencyRequest>,
) -> std::result::Result<Json<Value>, ApiError> {
    let started = Instant::now();
    let (n_total_rows, frequency) = blocking(move || service.word_frequency(&request.text)).await?;
    let duration = started.elapsed().as_secs_f64();
    debug!("words-frequency: {n_total_rows} rows, {} keys in {duration:.3}s", frequency.len());
    Ok(Json(json!({
        "words_frequency": frequency,
        "duration": format!("{duration:.3}"),
        "n_total_rows": n_total_rows,
    })))
}

pub async fn split_text(
    State(service): SharedService,
    ApiJson(request): ApiJson<SpanRequest>,
) -> std::result::Result<Json<SentenceSplit>, ApiError> {
    let split = blocking(move || {
        service.split_text(&request.text, request.start, request.end, &request.word)
    })
    .await?;
    Ok(Json(split))
}

pub async fn thesaurus_inflated(
    State(service): SharedService,
    ApiJson(request): ApiJson<SpanRequest>,
) -> std::result::Result<Json<Value>, ApiError> {
    let word = request.word.clone();
    let resolution = blocking(move || {
        service.synonyms_for_word(&request.text, request.start, request.end, &request.word)
    })
    .await?;
    let message = match resolution.synonym_groups.len() {
        0 => format!("No synonyms found for '{word}'."),
        n => format!("Found {n} synonym groups for '{word}'."),
    };
    Ok(Json(json!({
        "success": true,
        "original_word": resolution.original_word,
        "original_indices": resolution.original_indices,
        "context_info": resolution.context_info,
        "synonym_groups": resolution.synonym_groups,
        "debug_info": resolution.debug_info,
        "message": message,
    })))
}

pub async fn thesaurus_inflated_phrase(
    State(service): SharedService,
    ApiJson(request): ApiJson<SpanRequest>,
) -> std::result::Result<Json<PhraseResponse>, ApiError> {
    let SpanRequest { text, start, end, word } = request;
    let results = blocking(move || service.synonyms_for_phrase(&text, start, end)).await?;
    Ok(Json(PhraseResponse {
        success: true,
        original_phrase: word,
        original_indices: Indices::new(start, end),
        message: phrase_message(results.len()),
        results,
    }))
}

pub async fn add_custom_synonyms(
    State(service): SharedService,
    ApiJson(request): ApiJson<CustomSynonymsRequest>,
) -> std::result::Result<Json<Value>, ApiError> {
    let added = service.add_custom_synonyms(&request.word, &request.synonyms)?;
    Ok(Json(json!({
        "message": format!(
            "Custom entry for '{}' added/updated successfully (in-memory).",
            request.word
        ),
        "word": request.word,
        "synonyms": added,
    })))
}

pub async fn get_custom_synonyms(
    State(service): SharedService,
    Path(word): Path<String>,
) -> std::result::Result<Json<CustomEntry>, ApiError> {
    Ok(Json(service.custom_entry(&word)?))
}

pub async fn delete_custom_synonyms(
    State(service): SharedService,
    Path(word): Path<String>,
) -> std::result::Result<Json<Value>, ApiError> {
    service.delete_custom_entry(&word)?;
    Ok(Json(json!({
        "message": format!("Custom entry for '{word}' deleted successfully (in-memory).")
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_message() {
        assert_eq!(phrase_message(0), "No words with synonyms found in the selected phrase.");
        assert_eq!(phrase_message(3), "Found synonyms for 3 words.");
    }

    #[test]
    fn test_error_status() {
        let error = ApiError::from(GhostwriterError::invalid_range(100, 200, 29));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        let error = ApiError::from(GhostwriterError::unavailable("NLP service is unavailable"));
        assert_eq!(error.status(), StatusCode::SERVICE_UNAVAILABLE);
        let error = ApiError::from(GhostwriterError::lookup("index corrupt"));
        assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    async fn detail(error: GhostwriterError) -> String {
        let response = ApiError::from(error).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        body["detail"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_error_detail() {
        let detail_400 = detail(GhostwriterError::invalid_range(100, 200, 29)).await;
        assert!(detail_400.contains("100-200"));
        assert_eq!(detail(GhostwriterError::lookup("index corrupt")).await, "Internal Server Error");
        assert_eq!(detail(GhostwriterError::unavailable("no tagger")).await, "Service Unavailable");
        let json_error = serde_json::from_str::<Value>("{").unwrap_err();
        assert_eq!(detail(GhostwriterError::from(json_error)).await, "Unprocessable Entity");
    }
}
