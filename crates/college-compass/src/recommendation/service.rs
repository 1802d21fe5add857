use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::profile::{ApplicantProfile, Priority};
use super::stats::{summarize, RecommendationStats};
use super::weights::{WeightProfile, WeightTable};
use super::{RecommendationEngine, RecommendationResult};
use crate::catalog::{self, CatalogError, CatalogQuery, CatalogSource, Institution};

/// Ranked results plus the summary and weights that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub priority: Priority,
    pub weights: WeightProfile,
    pub results: Vec<RecommendationResult>,
    /// Always describes the full ranking, even after [`RecommendationReport::truncate`].
    pub stats: RecommendationStats,
}

impl RecommendationReport {
    pub fn truncate(&mut self, limit: usize) {
        self.results.truncate(limit);
    }
}

/// Service composing a catalog source with the recommendation engine.
pub struct RecommendationService<C> {
    catalog: Arc<C>,
    engine: Arc<RecommendationEngine>,
    result_limit: Option<NonZeroUsize>,
}

impl<C> RecommendationService<C>
where
    C: CatalogSource + 'static,
{
    pub fn new(catalog: Arc<C>, weights: WeightTable) -> Self {
        Self {
            catalog,
            engine: Arc::new(RecommendationEngine::new(weights)),
            result_limit: None,
        }
    }

    /// Caps how many results callers receive. Stats still cover every match.
    pub fn with_result_limit(mut self, limit: Option<NonZeroUsize>) -> Self {
        self.result_limit = limit;
        self
    }

    pub fn result_limit(&self) -> Option<NonZeroUsize> {
        self.result_limit
    }

    /// Rank the current catalog snapshot for `profile`.
    pub fn recommend(
        &self,
        profile: &ApplicantProfile,
    ) -> Result<RecommendationReport, RecommendationServiceError> {
        validate_profile(profile)?;

        let started = Instant::now();
        let snapshot = self.catalog.snapshot()?;
        let results = self.engine.rank(profile, &snapshot);
        let stats = summarize(&results);

        info!(
            priority = profile.priority.label(),
            catalog_size = snapshot.len(),
            matches = stats.total_matches,
            eligible = stats.eligible_count,
            elapsed_us = started.elapsed().as_micros() as u64,
            "ranked catalog for applicant"
        );

        let mut report = RecommendationReport {
            priority: profile.priority,
            weights: *self.engine.weights().select(profile.priority),
            results,
            stats,
        };
        if let Some(limit) = self.result_limit {
            report.truncate(limit.get());
        }

        Ok(report)
    }

    pub fn institution(&self, id: &str) -> Result<Institution, RecommendationServiceError> {
        let institution = self.catalog.fetch(id)?.ok_or(CatalogError::NotFound)?;
        Ok(institution)
    }

    pub fn browse(
        &self,
        query: &CatalogQuery,
    ) -> Result<Vec<Institution>, RecommendationServiceError> {
        let snapshot = self.catalog.snapshot()?;
        let listing: Vec<Institution> = query.apply(&snapshot).into_iter().cloned().collect();
        debug!(returned = listing.len(), total = snapshot.len(), "catalog browse");
        Ok(listing)
    }

    pub fn program_names(&self) -> Result<Vec<String>, RecommendationServiceError> {
        let snapshot = self.catalog.snapshot()?;
        Ok(catalog::program_names(&snapshot))
    }
}

fn validate_profile(profile: &ApplicantProfile) -> Result<(), RecommendationServiceError> {
    if profile.preferred_program.trim().is_empty() {
        return Err(RecommendationServiceError::InvalidProfile(
            "preferred program must not be blank".to_string(),
        ));
    }
    if !profile.marks.is_finite() {
        return Err(RecommendationServiceError::InvalidProfile(
            "marks must be a finite number".to_string(),
        ));
    }
    if !profile.budget_max.is_finite() {
        return Err(RecommendationServiceError::InvalidProfile(
            "budget must be a finite number".to_string(),
        ));
    }
    Ok(())
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error("invalid applicant profile: {0}")]
    InvalidProfile(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
