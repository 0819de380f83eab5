use axum::{extract::State, Json};

use service::account::domain::{Account, Credentials, RegisterInput};

use crate::errors::Rejection;
use crate::routes::ServerState;

/// POST /register — 200 with the created account, 400 (empty body) when any
/// registration rule fails, duplicate usernames included.
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<Account>, Rejection> {
    let account = state.accounts.register(input).await.map_err(Rejection::bad_request)?;
    Ok(Json(account))
}

/// POST /login — 200 with the full account on a credential match, otherwise
/// 401 with an empty body.
pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<Credentials>,
) -> Result<Json<Account>, Rejection> {
    let account = state.accounts.login(input).await.map_err(Rejection::unauthorized)?;
    Ok(Json(account))
}
