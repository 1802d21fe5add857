use super::profile::Priority;
use super::ScoreBreakdown;
use serde::{Deserialize, Serialize};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Relative importance of the five criteria. Weights are non-negative and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub eligibility: f64,
    pub placement: f64,
    pub rating: f64,
    pub affordability: f64,
    pub course_match: f64,
}

impl WeightProfile {
    pub const BALANCED: Self = Self {
        eligibility: 0.30,
        placement: 0.25,
        rating: 0.20,
        affordability: 0.15,
        course_match: 0.10,
    };

    pub const PLACEMENT_PRIORITY: Self = Self {
        eligibility: 0.25,
        placement: 0.35,
        rating: 0.15,
        affordability: 0.15,
        course_match: 0.10,
    };

    pub const RATING_PRIORITY: Self = Self {
        eligibility: 0.25,
        placement: 0.20,
        rating: 0.30,
        affordability: 0.15,
        course_match: 0.10,
    };

    pub fn sum(&self) -> f64 {
        self.eligibility + self.placement + self.rating + self.affordability + self.course_match
    }

    pub fn validate(&self) -> Result<(), WeightError> {
        let weights = [
            self.eligibility,
            self.placement,
            self.rating,
            self.affordability,
            self.course_match,
        ];
        if weights.iter().any(|weight| !weight.is_finite() || *weight < 0.0) {
            return Err(WeightError::Negative);
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightError::Sum(sum));
        }
        Ok(())
    }

    /// Weighted total of a breakdown.
    pub fn apply(&self, breakdown: &ScoreBreakdown) -> f64 {
        breakdown.eligibility * self.eligibility
            + breakdown.placement * self.placement
            + breakdown.rating * self.rating
            + breakdown.affordability * self.affordability
            + breakdown.course_match * self.course_match
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightError {
    #[error("weights must be finite and non-negative")]
    Negative,
    #[error("weights must sum to 1.0 (got {0})")]
    Sum(f64),
}

/// The three weight profiles the engine chooses between, built once and shared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    balanced: WeightProfile,
    placement_priority: WeightProfile,
    rating_priority: WeightProfile,
}

impl WeightTable {
    pub fn new(
        balanced: WeightProfile,
        placement_priority: WeightProfile,
        rating_priority: WeightProfile,
    ) -> Result<Self, WeightError> {
        balanced.validate()?;
        placement_priority.validate()?;
        rating_priority.validate()?;

        Ok(Self {
            balanced,
            placement_priority,
            rating_priority,
        })
    }

    pub const fn standard() -> Self {
        Self {
            balanced: WeightProfile::BALANCED,
            placement_priority: WeightProfile::PLACEMENT_PRIORITY,
            rating_priority: WeightProfile::RATING_PRIORITY,
        }
    }

    pub fn select(&self, priority: Priority) -> &WeightProfile {
        match priority {
            Priority::Balanced => &self.balanced,
            Priority::Placement => &self.placement_priority,
            Priority::Rating => &self.rating_priority,
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}
