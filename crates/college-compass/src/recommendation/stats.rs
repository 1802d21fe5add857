use super::{EligibilityStatus, RecommendationResult};
use serde::{Deserialize, Serialize};

/// Headline numbers for a completed ranking.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationStats {
    pub total_matches: usize,
    pub eligible_count: usize,
    pub marginal_count: usize,
    pub top_score: f64,
    /// Mean institution average package, lakhs per annum.
    pub avg_placement: f64,
}

/// Summarises a ranking already sorted best-first. Empty input yields all zeros.
pub fn summarize(results: &[RecommendationResult]) -> RecommendationStats {
    let count_status = |status: EligibilityStatus| {
        results
            .iter()
            .filter(|result| result.eligibility_status == status)
            .count()
    };

    let avg_placement = if results.is_empty() {
        0.0
    } else {
        results
            .iter()
            .map(|result| result.institution.placement.average_package)
            .sum::<f64>()
            / results.len() as f64
    };

    RecommendationStats {
        total_matches: results.len(),
        eligible_count: count_status(EligibilityStatus::Eligible),
        marginal_count: count_status(EligibilityStatus::Marginal),
        top_score: results.first().map_or(0.0, |result| result.total_score),
        avg_placement,
    }
}
