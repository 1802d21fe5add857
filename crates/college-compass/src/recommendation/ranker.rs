use super::course_match::CourseMatcher;
use super::explanation::{explain, ExplanationContext};
use super::normalizers;
use super::profile::ApplicantProfile;
use super::weights::WeightProfile;
use super::{EligibilityStatus, RecommendationResult, ScoreBreakdown};
use crate::catalog::{Institution, Program};
use std::iter;

/// Scores a single institution, or `None` when it is filtered out by type or has no
/// program matching the applicant's preference.
pub(crate) fn score_institution<M: CourseMatcher>(
    matcher: &M,
    profile: &ApplicantProfile,
    weights: &WeightProfile,
    institution: &Institution,
) -> Option<RecommendationResult> {
    if !profile
        .preferred_institution_type
        .admits(institution.institution_type)
    {
        return None;
    }

    let matches: Vec<(usize, f64)> = institution
        .courses
        .iter()
        .enumerate()
        .filter(|(_, program)| matcher.is_match(&program.name, &profile.preferred_program))
        .map(|(index, program)| {
            (
                index,
                matcher.score(&program.name, &profile.preferred_program),
            )
        })
        .collect();

    // Strictly-greater keeps the first program among equal scores.
    let (best_index, course_match) =
        matches
            .iter()
            .copied()
            .fold(None, |best: Option<(usize, f64)>, candidate| match best {
                Some((_, best_score)) if candidate.1 <= best_score => best,
                _ => Some(candidate),
            })?;
    let best = &institution.courses[best_index];

    let breakdown = ScoreBreakdown {
        eligibility: normalizers::eligibility(profile.marks, best.cutoff_marks),
        placement: normalizers::placement(&institution.placement),
        rating: normalizers::rating(institution.rating),
        affordability: normalizers::affordability(best.fees, profile.budget_max),
        course_match,
    };
    let total_score = weights.apply(&breakdown);
    let eligibility_status = EligibilityStatus::classify(profile.marks - best.cutoff_marks);

    let explanation = explain(ExplanationContext {
        institution,
        program: best,
        breakdown: &breakdown,
        profile,
    })
    .collect();

    let matching_courses: Vec<Program> = iter::once(best.clone())
        .chain(
            matches
                .iter()
                .filter(|(index, _)| *index != best_index)
                .map(|(index, _)| institution.courses[*index].clone()),
        )
        .collect();

    Some(RecommendationResult {
        institution: institution.clone(),
        matching_courses,
        total_score,
        breakdown,
        explanation,
        eligibility_status,
    })
}

/// Highest total first. Stable, so equal totals keep catalog order.
pub(crate) fn sort_by_score(results: &mut [RecommendationResult]) {
    results.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
}
