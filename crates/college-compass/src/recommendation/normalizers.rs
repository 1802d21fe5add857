//! Per-criterion normalisation onto a 0-100 scale.
//!
//! Thresholds are step functions on purpose and must not be smoothed.

use crate::catalog::PlacementStats;

/// Average package (lakhs per annum) treated as a perfect package score.
pub const PACKAGE_CEILING_LPA: f64 = 30.0;

const PACKAGE_SHARE: f64 = 0.6;
const RATE_SHARE: f64 = 0.4;
const MAX_RATING: f64 = 5.0;

/// Step score on how far the applicant's marks clear the program cutoff.
pub fn eligibility(student_marks: f64, course_cutoff: f64) -> f64 {
    let diff = student_marks - course_cutoff;

    if diff >= 10.0 {
        100.0
    } else if diff >= 5.0 {
        90.0
    } else if diff >= 0.0 {
        75.0
    } else if diff >= -5.0 {
        40.0
    } else {
        0.0
    }
}

/// Package quality (60%) blended with placement rate (40%).
pub fn placement(stats: &PlacementStats) -> f64 {
    let package_score = (stats.average_package / PACKAGE_CEILING_LPA * 100.0).min(100.0);
    package_score * PACKAGE_SHARE + stats.placement_rate * RATE_SHARE
}

pub fn rating(rating: f64) -> f64 {
    rating / MAX_RATING * 100.0
}

/// Step score on the fee-to-budget ratio. Non-positive inputs score zero.
pub fn affordability(fee: f64, budget: f64) -> f64 {
    if fee <= 0.0 || budget <= 0.0 {
        return 0.0;
    }

    let ratio = fee / budget;
    if ratio <= 0.5 {
        100.0
    } else if ratio <= 0.75 {
        85.0
    } else if ratio <= 1.0 {
        70.0
    } else if ratio <= 1.25 {
        40.0
    } else if ratio <= 1.5 {
        20.0
    } else {
        0.0
    }
}
