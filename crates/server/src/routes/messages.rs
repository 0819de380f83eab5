use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use service::message::domain::{Message, NewMessage, UpdateText};

use crate::errors::Rejection;
use crate::routes::ServerState;

/// POST /messages — 200 with the created message, 400 (empty body) on any
/// rule failure (blank text, overlong text, unknown author).
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewMessage>,
) -> Result<Json<Message>, Rejection> {
    let message = state.messages.create(input).await.map_err(Rejection::bad_request)?;
    Ok(Json(message))
}

/// GET /messages — always 200; storage faults collapse to an empty list.
pub async fn get_all(State(state): State<ServerState>) -> Json<Vec<Message>> {
    let messages = match state.messages.get_all().await {
        Ok(messages) => messages,
        Err(e) => {
            warn!(error = %e, "listing messages failed, returning empty list");
            Vec::new()
        }
    };
    Json(messages)
}

/// GET /messages/:id — always 200; body is the message, or empty when there
/// is no match. Absence is not an error on this path.
pub async fn get_one(State(state): State<ServerState>, Path(id): Path<i64>) -> Response {
    match state.messages.get_by_id(id).await {
        Ok(Some(message)) => Json(message).into_response(),
        Ok(None) => StatusCode::OK.into_response(),
        Err(e) => {
            warn!(error = %e, message_id = id, "message lookup failed, returning empty body");
            StatusCode::OK.into_response()
        }
    }
}

/// DELETE /messages/:id — always 200; body is the removed message, or empty
/// when nothing matched.
pub async fn delete_one(State(state): State<ServerState>, Path(id): Path<i64>) -> Response {
    match state.messages.delete_by_id(id).await {
        Ok(Some(message)) => Json(message).into_response(),
        Ok(None) => StatusCode::OK.into_response(),
        Err(e) => {
            warn!(error = %e, message_id = id, "message delete failed, returning empty body");
            StatusCode::OK.into_response()
        }
    }
}

/// PATCH /messages/:id — 200 with the full updated message, 400 (empty body)
/// when the text is invalid or the id does not exist.
pub async fn patch_text(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateText>,
) -> Result<Json<Message>, Rejection> {
    let message =
        state.messages.update_text(id, &input.text).await.map_err(Rejection::bad_request)?;
    Ok(Json(message))
}

/// GET /accounts/:id/messages — always 200; empty list when the account has
/// no messages or does not exist.
pub async fn get_by_author(State(state): State<ServerState>, Path(id): Path<i64>) -> Json<Vec<Message>> {
    let messages = match state.messages.get_all_by_author(id).await {
        Ok(messages) => messages,
        Err(e) => {
            warn!(error = %e, author_id = id, "listing by author failed, returning empty list");
            Vec::new()
        }
    };
    Json(messages)
}
