use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::account::repo::seaorm::SeaOrmAccountRepository;
use service::account::AccountService;
use service::message::repo::seaorm::SeaOrmMessageRepository;
use service::message::MessageService;

pub mod accounts;
pub mod messages;

pub type Accounts = AccountService<SeaOrmAccountRepository>;
pub type Messages = MessageService<SeaOrmMessageRepository, SeaOrmAccountRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub accounts: Arc<Accounts>,
    pub messages: Arc<Messages>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route("/messages", post(messages::create).get(messages::get_all))
        .route(
            "/messages/:id",
            get(messages::get_one).delete(messages::delete_one).patch(messages::patch_text),
        )
        .route("/accounts/:id/messages", get(messages::get_by_author));

    api.with_state(state).layer(cors).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
