use crate::error::Result;
use crate::model::{HealthResponse, ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(request): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>)> {
    let link = state.shortener().shorten(&request.original_url).await?;

    let response = ShortenResponse {
        short_url: link.to_url(state.base_url()),
        short_code: link.code.clone(),
        original_url: link.original_url,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let record = state.shortener().resolve(&code).await?;

    // 301 so clients and intermediaries may cache the mapping; issued
    // codes never change their target.
    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, record.original_url)],
    )
        .into_response())
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
