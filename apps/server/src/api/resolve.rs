use std::sync::Arc;

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;

use medialink_resolver::{extract_video_id, Resolution};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use crate::models::ResolveResponse;

#[derive(Deserialize)]
struct ResolveParams {
    url: Option<String>,
}

/// Resolve a video URL into direct streaming links.
///
/// Provider instability is absorbed by the chain; the only error this
/// handler returns is a 400 for missing or unusable input.
async fn resolve(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveParams>,
) -> ApiResult<Json<ResolveResponse>> {
    let url = params
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::invalid_input("url parameter is required"))?;

    let video_id = extract_video_id(url).ok_or_else(|| {
        ApiError::invalid_input("could not extract a video id from the given url")
    })?;

    tracing::info!("Resolving video '{}'", video_id);

    let response = match state.chain.resolve(&video_id).await {
        Resolution::Resolved(media) => ResolveResponse::Success(media.into()),
        Resolution::Exhausted(payload) => ResolveResponse::Info(payload.into()),
    };

    Ok(Json(response))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/resolve", get(resolve))
}
