//! HTTP transport for the dialogue core.
//!
//! The transport owns nothing conversational: it deserializes turn inputs
//! (substituting defaults for anything missing or malformed), calls the
//! service, and returns the turn output. The client round-trips state and
//! record between calls.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::dialog::record::{Field, VisitorRecord};
use crate::dialog::service::DialogService;
use crate::dialog::turn::{TurnInput, TurnOutput};
use crate::dialog::{ConversationState, prompts};
use crate::error::SpeechError;
use crate::speech::SpeechSynthesizer;

/// Shared state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DialogService>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub default_voice: String,
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/conversation", post(process_conversation))
        .route("/api/manual_input", post(manual_input))
        .route("/api/speech", post(synthesize))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// The turn that stands in when a request body can't be read at all:
/// defaults plus a generic apology, never an error status.
fn apology_turn() -> TurnOutput {
    TurnOutput::new(
        prompts::apology().to_string(),
        ConversationState::Greeting,
        VisitorRecord::default(),
        None,
        false,
    )
}

/// POST /api/conversation
///
/// One turn of the conversation. Missing fields default (state falls back
/// to greeting); a body that isn't JSON at all still completes the turn
/// with an apology response.
async fn process_conversation(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<TurnOutput> {
    let output = match serde_json::from_slice::<TurnInput>(&body) {
        Ok(input) => state.service.process_turn(&input).await,
        Err(e) => {
            tracing::warn!("unreadable conversation request body ({e}), answering with apology turn");
            apology_turn()
        }
    };
    Json(output)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ManualRequest {
    field: String,
    value: String,
    #[serde(alias = "user_data")]
    record: VisitorRecord,
}

/// POST /api/manual_input
///
/// Trusted typed entry for a single field, bypassing extraction and
/// confirmation.
async fn manual_input(State(state): State<AppState>, body: Bytes) -> Json<TurnOutput> {
    let output = match serde_json::from_slice::<ManualRequest>(&body) {
        Ok(request) => match Field::parse(&request.field) {
            Some(field) => state
                .service
                .manual_correct(field, &request.value, &request.record),
            None => {
                tracing::warn!(field = %request.field, "manual input for unknown field");
                apology_turn()
            }
        },
        Err(e) => {
            tracing::warn!("unreadable manual input body ({e}), answering with apology turn");
            apology_turn()
        }
    };
    Json(output)
}

#[derive(Debug, Deserialize)]
struct SpeechRequest {
    text: String,
    #[serde(default)]
    voice: Option<String>,
}

/// POST /api/speech
///
/// Synthesize the given text. Service unavailability is reported as 503,
/// other synthesis failures as 502 — never merged into the conversation.
async fn synthesize(
    State(state): State<AppState>,
    Json(request): Json<SpeechRequest>,
) -> impl IntoResponse {
    let voice = request.voice.as_deref().unwrap_or(&state.default_voice);
    match state.synthesizer.synthesize(&request.text, voice).await {
        Ok(audio) => ([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response(),
        Err(SpeechError::Unavailable) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "error": "Text-to-speech service unavailable" })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}
