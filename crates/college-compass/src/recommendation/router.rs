use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::profile::{ApplicantProfile, InstitutionTypePreference, Priority};
use super::service::{RecommendationService, RecommendationServiceError};
use crate::catalog::{CatalogError, CatalogQuery, CatalogSource};

/// Recommendation request as submitted by the form layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub marks: f64,
    pub preferred_program: String,
    pub budget_max: f64,
    #[serde(default)]
    pub prioritize_placement: bool,
    #[serde(default)]
    pub prioritize_rating: bool,
    /// Overrides the two flags when present.
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub preferred_institution_type: InstitutionTypePreference,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl RecommendationRequest {
    pub fn profile(&self) -> ApplicantProfile {
        ApplicantProfile {
            marks: self.marks,
            preferred_program: self.preferred_program.clone(),
            budget_max: self.budget_max,
            priority: self.priority.unwrap_or_else(|| {
                Priority::from_flags(self.prioritize_placement, self.prioritize_rating)
            }),
            preferred_institution_type: self.preferred_institution_type,
        }
    }
}

/// Router builder exposing the catalog and recommendation endpoints.
pub fn recommendation_router<C>(service: Arc<RecommendationService<C>>) -> Router
where
    C: CatalogSource + 'static,
{
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler::<C>))
        .route("/api/v1/colleges", get(list_colleges_handler::<C>))
        .route("/api/v1/colleges/programs", get(programs_handler::<C>))
        .route("/api/v1/colleges/:id", get(college_handler::<C>))
        .with_state(service)
}

pub(crate) async fn recommend_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    C: CatalogSource + 'static,
{
    match service.recommend(&request.profile()) {
        Ok(mut report) => {
            if let Some(limit) = request.limit {
                report.truncate(limit);
            }
            (StatusCode::OK, axum::Json(report)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_colleges_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    Query(query): Query<CatalogQuery>,
) -> Response
where
    C: CatalogSource + 'static,
{
    match service.browse(&query) {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn programs_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
) -> Response
where
    C: CatalogSource + 'static,
{
    match service.program_names() {
        Ok(names) => (StatusCode::OK, axum::Json(names)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn college_handler<C>(
    State(service): State<Arc<RecommendationService<C>>>,
    Path(id): Path<String>,
) -> Response
where
    C: CatalogSource + 'static,
{
    match service.institution(&id) {
        Ok(institution) => (StatusCode::OK, axum::Json(institution)).into_response(),
        Err(RecommendationServiceError::Catalog(CatalogError::NotFound)) => {
            let payload = json!({ "message": "College not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: RecommendationServiceError) -> Response {
    let status = match &err {
        RecommendationServiceError::InvalidProfile(_) => StatusCode::UNPROCESSABLE_ENTITY,
        RecommendationServiceError::Catalog(CatalogError::NotFound) => StatusCode::NOT_FOUND,
        RecommendationServiceError::Catalog(CatalogError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
