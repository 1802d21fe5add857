//! Rule-based, explainable ranking of institutions for a single applicant.
//!
//! Each catalog entry is filtered by institution type and program match, scored on five
//! criteria normalised to 0-100, combined with a priority-dependent [`WeightProfile`],
//! classified against the best program's cutoff and annotated with plain-language
//! remarks. Results are ordered by total score, ties keeping catalog order.

pub mod course_match;
pub mod explanation;
pub mod normalizers;
pub mod profile;
mod ranker;
pub mod router;
pub mod service;
mod stats;
pub mod weights;

#[cfg(test)]
mod tests;

pub use course_match::{CourseMatcher, KeywordCourseMatcher, MATCH_THRESHOLD};
pub use profile::{ApplicantProfile, InstitutionTypePreference, Priority};
pub use router::{recommendation_router, RecommendationRequest};
pub use service::{RecommendationReport, RecommendationService, RecommendationServiceError};
pub use stats::{summarize, RecommendationStats};
pub use weights::{WeightError, WeightProfile, WeightTable};

use crate::catalog::{Institution, Program};
use serde::{Deserialize, Serialize};

/// Stateless ranker applying a weight table and course matcher to a catalog snapshot.
#[derive(Debug, Clone)]
pub struct RecommendationEngine<M = KeywordCourseMatcher> {
    weights: WeightTable,
    matcher: M,
}

impl RecommendationEngine {
    pub fn new(weights: WeightTable) -> Self {
        Self::with_matcher(weights, KeywordCourseMatcher)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(WeightTable::standard())
    }
}

impl<M: CourseMatcher> RecommendationEngine<M> {
    pub fn with_matcher(weights: WeightTable, matcher: M) -> Self {
        Self { weights, matcher }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Ranks `catalog` for `profile`. Neither input is modified; the output is built fresh.
    pub fn rank(
        &self,
        profile: &ApplicantProfile,
        catalog: &[Institution],
    ) -> Vec<RecommendationResult> {
        let weights = self.weights.select(profile.priority);

        let mut results: Vec<RecommendationResult> = catalog
            .iter()
            .filter_map(|institution| {
                ranker::score_institution(&self.matcher, profile, weights, institution)
            })
            .collect();

        ranker::sort_by_score(&mut results);
        results
    }
}

/// Ranks with the standard weight table and keyword matcher.
pub fn rank(profile: &ApplicantProfile, catalog: &[Institution]) -> Vec<RecommendationResult> {
    RecommendationEngine::default().rank(profile, catalog)
}

/// The five normalised criterion scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub eligibility: f64,
    pub placement: f64,
    pub rating: f64,
    pub affordability: f64,
    pub course_match: f64,
}

/// Where the applicant stands against the best program's cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EligibilityStatus {
    Eligible,
    Marginal,
    BelowCutoff,
}

impl EligibilityStatus {
    /// `marks_over_cutoff` is the applicant's marks minus the cutoff.
    pub fn classify(marks_over_cutoff: f64) -> Self {
        if marks_over_cutoff < -5.0 {
            EligibilityStatus::BelowCutoff
        } else if marks_over_cutoff < 0.0 {
            EligibilityStatus::Marginal
        } else {
            EligibilityStatus::Eligible
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EligibilityStatus::Eligible => "eligible",
            EligibilityStatus::Marginal => "marginal",
            EligibilityStatus::BelowCutoff => "below-cutoff",
        }
    }
}

/// One ranked institution with the evidence behind its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub institution: Institution,
    /// Best-matching program first, then the other matches in catalog order.
    pub matching_courses: Vec<Program>,
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    pub explanation: Vec<String>,
    pub eligibility_status: EligibilityStatus,
}

impl RecommendationResult {
    pub fn best_program(&self) -> Option<&Program> {
        self.matching_courses.first()
    }
}
