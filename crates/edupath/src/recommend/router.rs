use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::NaiveDate;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{Path, ProfileSubmission};
use super::narrative::NarrativeGenerator;
use super::service::{RecommendationService, RecommendationServiceError};
use crate::catalog::CatalogStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendationRequest {
    pub profile: ProfileSubmission,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NarrativeRequest {
    pub profile: ProfileSubmission,
    pub path: Path,
}

/// Router builder exposing the recommendation and narration endpoints.
pub fn recommendation_router<C, N>(service: Arc<RecommendationService<C, N>>) -> Router
where
    C: CatalogStore + 'static,
    N: NarrativeGenerator + 'static,
{
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler::<C, N>))
        .route(
            "/api/v1/recommendations/narrative",
            post(narrative_handler::<C, N>),
        )
        .with_state(service)
}

pub(crate) async fn recommend_handler<C, N>(
    State(service): State<Arc<RecommendationService<C, N>>>,
    Json(request): Json<RecommendationRequest>,
) -> Response
where
    C: CatalogStore + 'static,
    N: NarrativeGenerator + 'static,
{
    let RecommendationRequest { profile, today } = request;
    let outcome = match today {
        Some(today) => service.recommend(profile, today),
        None => service.recommend_now(profile),
    };

    match outcome {
        Ok(recommendation) => (StatusCode::OK, Json(recommendation)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn narrative_handler<C, N>(
    State(service): State<Arc<RecommendationService<C, N>>>,
    Json(request): Json<NarrativeRequest>,
) -> Response
where
    C: CatalogStore + 'static,
    N: NarrativeGenerator + 'static,
{
    let NarrativeRequest { profile, path } = request;

    match service.narrate(profile, &path) {
        Ok(chunks) => {
            let body = Body::from_stream(chunks.map(Ok::<_, Infallible>));
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                body,
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: RecommendationServiceError) -> Response {
    let status = match error {
        RecommendationServiceError::Profile(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}
