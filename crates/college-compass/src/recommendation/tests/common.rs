use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::catalog::{
    Catalog, CatalogError, CatalogSource, InMemoryCatalog, Institution, InstitutionId,
    InstitutionType, PlacementStats, Program,
};
use crate::recommendation::{
    recommendation_router, ApplicantProfile, InstitutionTypePreference, Priority,
    RecommendationService, WeightTable,
};

pub(super) fn bundled() -> Vec<Institution> {
    Catalog::bundled()
        .expect("bundled catalog parses")
        .into_institutions()
}

pub(super) fn profile(marks: f64, preferred_program: &str, budget_max: f64) -> ApplicantProfile {
    ApplicantProfile {
        marks,
        preferred_program: preferred_program.to_string(),
        budget_max,
        priority: Priority::Balanced,
        preferred_institution_type: InstitutionTypePreference::Any,
    }
}

pub(super) fn program(id: &str, name: &str, fees: f64, cutoff_marks: f64) -> Program {
    Program {
        id: id.to_string(),
        name: name.to_string(),
        duration: "4 years".to_string(),
        fees,
        cutoff_marks,
        seats: 60,
        specializations: Vec::new(),
    }
}

/// Minimal institution with one placement profile and the given programs.
pub(super) fn institution(
    id: &str,
    institution_type: InstitutionType,
    rating: f64,
    average_package: f64,
    placement_rate: f64,
    courses: Vec<Program>,
) -> Institution {
    Institution {
        id: InstitutionId(id.to_string()),
        name: format!("{id} Institute"),
        short_name: id.to_ascii_uppercase(),
        institution_type,
        city: "Bangalore".to_string(),
        state: "Karnataka".to_string(),
        established: 1980,
        rating,
        ranking: 50,
        affiliation: None,
        description: None,
        website: None,
        image_url: None,
        courses,
        placement: PlacementStats {
            average_package,
            highest_package: average_package * 3.0,
            placement_rate,
            top_recruiters: Vec::new(),
        },
        accreditations: Vec::new(),
        facilities: Vec::new(),
    }
}

pub(super) fn ids(results: &[crate::recommendation::RecommendationResult]) -> Vec<&str> {
    results
        .iter()
        .map(|result| result.institution.id.0.as_str())
        .collect()
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn bundled_service() -> Arc<RecommendationService<InMemoryCatalog>> {
    let catalog = Catalog::bundled().expect("bundled catalog parses");
    Arc::new(RecommendationService::new(
        Arc::new(InMemoryCatalog::new(catalog)),
        WeightTable::standard(),
    ))
}

pub(super) fn bundled_router() -> axum::Router {
    recommendation_router(bundled_service())
}

/// Source whose backing store is always down.
pub(super) struct UnavailableCatalog;

impl CatalogSource for UnavailableCatalog {
    fn snapshot(&self) -> Result<Vec<Institution>, CatalogError> {
        Err(CatalogError::Unavailable("catalog store offline".to_string()))
    }

    fn fetch(&self, _id: &str) -> Result<Option<Institution>, CatalogError> {
        Err(CatalogError::Unavailable("catalog store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}
