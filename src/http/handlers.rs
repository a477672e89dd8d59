//! Inbound route handlers.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::Instrument;

use crate::http::request::X_REQUEST_ID;
use crate::http::server::AppState;
use crate::relay::RSS_CONTENT_TYPE;

/// Body served on `/`.
pub const ROOT_MARKER: &str = "you shouldn't be here";

/// Body served on `/feed` when the fetch fails. Carries no internal detail.
pub const FETCH_FAILED_MESSAGE: &str = "unable to fetch feed";

#[derive(Debug, Serialize)]
pub struct Pong {
    pub message: &'static str,
}

pub async fn root() -> &'static str {
    ROOT_MARKER
}

pub async fn ping() -> Json<Pong> {
    Json(Pong { message: "pong" })
}

pub async fn feed(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request_id = headers
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let span = tracing::info_span!(parent: &state.span, "fetch", request_id = %request_id);

    async move {
        match state.fetcher.fetch_remote().await {
            Ok(body) => {
                ([(header::CONTENT_TYPE, RSS_CONTENT_TYPE)], body).into_response()
            }
            Err(e) => {
                tracing::error!(error = %e, "Fetching feed failed");
                (StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED_MESSAGE).into_response()
            }
        }
    }
    .instrument(span)
    .await
}
