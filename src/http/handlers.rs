//! Funding endpoint handlers.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::http::request::{parse_address, parse_safe_command, CommandPayload, INVALID_ADDRESS};
use crate::http::server::AppState;

fn watch_message(explorer_base: &str, tx_hash: &str) -> String {
    format!("Watch on {}/tx/{}", explorer_base, tx_hash)
}

fn bad_request(message: &str) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

/// `POST /fund/account` — send the fixed ether amount to the address in
/// `text`.
pub async fn fund_account(
    State(state): State<AppState>,
    Json(payload): Json<CommandPayload>,
) -> impl IntoResponse {
    let address = match parse_address(payload.text.trim()) {
        Some(a) => a,
        None => return bad_request(INVALID_ADDRESS),
    };

    match state.service.fund_native(address).await {
        Ok(hash) => (
            StatusCode::OK,
            Json(json!(watch_message(&state.explorer_base, &hash))),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(recipient = %address, error = %e, "Native funding failed");
            (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

/// `POST /fund/safe` — `text` is `"<address> <token-index>"`; transfers the
/// configured amount of that token to the address.
pub async fn fund_safe(
    State(state): State<AppState>,
    Json(payload): Json<CommandPayload>,
) -> impl IntoResponse {
    let (address, index) = match parse_safe_command(&payload.text, state.service.token_count()) {
        Ok(parsed) => parsed,
        Err(message) => return bad_request(message),
    };

    match state.service.fund_token(address, index).await {
        Ok(hash) => (
            StatusCode::OK,
            Json(json!(watch_message(&state.explorer_base, &hash))),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(recipient = %address, token_index = index, error = %e, "Token funding failed");
            (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
