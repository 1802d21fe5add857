use super::common::*;

use crate::catalog::InstitutionType;
use crate::recommendation::{
    rank, summarize, CourseMatcher, EligibilityStatus, InstitutionTypePreference, Priority,
    RecommendationEngine, RecommendationStats, WeightTable,
};

#[test]
fn ranks_bundled_catalog_for_computer_science() {
    let catalog = bundled();
    let results = rank(&profile(92.0, "Computer Science", 300000.0), &catalog);

    // IISc offers no matching program and is dropped entirely.
    assert_eq!(ids(&results), vec!["msrit", "bmsce", "rvce", "pesu"]);
    assert_close(results[0].total_score, 79.85);
    assert_close(results[1].total_score, 79.45);
    assert_close(results[2].total_score, 76.2);
    assert_close(results[3].total_score, 70.0);

    let rvce = &results[2];
    assert_eq!(rvce.breakdown.eligibility, 75.0);
    assert_eq!(rvce.breakdown.affordability, 70.0);
    assert_eq!(rvce.breakdown.course_match, 100.0);
    assert_close(rvce.breakdown.placement, 60.8);
    assert_close(rvce.breakdown.rating, 90.0);
}

#[test]
fn best_program_leads_matching_courses() {
    let catalog = bundled();
    let mut applicant = profile(85.0, "B.Tech ECE", 250000.0);
    applicant.priority = Priority::Rating;

    let results = rank(&applicant, &catalog);
    assert_eq!(ids(&results), vec!["bmsce", "msrit", "rvce", "pesu"]);

    let bmsce = &results[0];
    let course_ids: Vec<&str> = bmsce
        .matching_courses
        .iter()
        .map(|program| program.id.as_str())
        .collect();
    // Keyword overlap on "b.tech" keeps the other programs as weaker matches.
    assert_eq!(course_ids, vec!["ece", "cs", "ise"]);
    assert_eq!(bmsce.best_program().map(|p| p.id.as_str()), Some("ece"));
    assert_close(bmsce.total_score, 81.05);
}

#[test]
fn placement_flag_wins_when_both_flags_are_set() {
    let catalog = bundled();
    let mut applicant = profile(92.0, "Computer Science", 300000.0);
    applicant.priority = Priority::from_flags(true, true);

    let results = rank(&applicant, &catalog);
    assert_eq!(applicant.priority, Priority::Placement);
    assert_close(results[0].total_score, 76.47);
    assert_close(results[3].total_score, 67.41);
}

#[test]
fn institution_type_preference_filters_before_scoring() {
    let catalog = bundled();

    let mut government = profile(92.0, "Computer Science", 300000.0);
    government.preferred_institution_type = InstitutionTypePreference::Government;
    assert!(rank(&government, &catalog).is_empty());

    let mut private = profile(92.0, "Computer Science", 300000.0);
    private.preferred_institution_type = InstitutionTypePreference::Private;
    assert_eq!(
        ids(&rank(&private, &catalog)),
        vec!["msrit", "bmsce", "rvce"]
    );
}

#[test]
fn empty_catalog_yields_empty_ranking_and_zero_stats() {
    let results = rank(&profile(92.0, "Computer Science", 300000.0), &[]);
    assert!(results.is_empty());
    assert_eq!(summarize(&results), RecommendationStats::default());
}

#[test]
fn equal_totals_keep_catalog_order() {
    let courses = vec![program("cs", "B.Tech Computer Science", 150000.0, 80.0)];
    let first = institution("alpha", InstitutionType::Private, 4.0, 9.0, 85.0, courses.clone());
    let second = institution("beta", InstitutionType::Private, 4.0, 9.0, 85.0, courses);
    let applicant = profile(90.0, "Computer Science", 300000.0);

    let forward = rank(&applicant, &[first.clone(), second.clone()]);
    assert_eq!(ids(&forward), vec!["alpha", "beta"]);

    let reversed = rank(&applicant, &[second, first]);
    assert_eq!(ids(&reversed), vec!["beta", "alpha"]);
}

#[test]
fn first_program_wins_equal_course_scores() {
    let only = institution(
        "gamma",
        InstitutionType::Deemed,
        4.1,
        7.0,
        80.0,
        vec![
            program("cs-day", "B.Tech Computer Science", 200000.0, 70.0),
            program("cs-evening", "B.E. Computer Science", 90000.0, 60.0),
        ],
    );

    let results = rank(&profile(75.0, "Computer Science", 200000.0), &[only]);
    let result = &results[0];
    assert_eq!(result.best_program().map(|p| p.id.as_str()), Some("cs-day"));
    assert_eq!(result.matching_courses.len(), 2);
    assert_eq!(result.breakdown.eligibility, 90.0);
    assert_eq!(result.breakdown.affordability, 70.0);
}

#[test]
fn classifies_marginal_and_below_cutoff_applicants() {
    let catalog = bundled();

    let results = rank(&profile(80.0, "Information Technology", 200000.0), &catalog);
    assert_eq!(ids(&results), vec!["bmsce", "rvce"]);
    assert!(results
        .iter()
        .all(|result| result.eligibility_status == EligibilityStatus::Marginal));
    assert_eq!(results[0].breakdown.course_match, 40.0);

    let stats = summarize(&results);
    assert_eq!(stats.total_matches, 2);
    assert_eq!(stats.eligible_count, 0);
    assert_eq!(stats.marginal_count, 2);
    assert_close(stats.top_score, 56.2);
    assert_close(stats.avg_placement, 10.0);

    let struggling = rank(&profile(70.0, "Computer Science", 300000.0), &catalog);
    assert_eq!(struggling.len(), 4);
    assert!(struggling
        .iter()
        .all(|result| result.eligibility_status == EligibilityStatus::BelowCutoff));
}

#[test]
fn summarizes_full_ranking() {
    let results = rank(&profile(92.0, "Computer Science", 300000.0), &bundled());
    let stats = summarize(&results);

    assert_eq!(stats.total_matches, 4);
    assert_eq!(stats.eligible_count, 4);
    assert_eq!(stats.marginal_count, 0);
    assert_close(stats.top_score, 79.85);
    assert_close(stats.avg_placement, 9.75);
}

#[test]
fn ranking_leaves_inputs_untouched() {
    let catalog = bundled();
    let snapshot = catalog.clone();
    let applicant = profile(92.0, "Computer Science", 300000.0);
    let before = applicant.clone();

    let first = rank(&applicant, &catalog);
    let second = rank(&applicant, &catalog);

    assert_eq!(catalog, snapshot);
    assert_eq!(applicant, before);
    assert_eq!(first, second);
}

struct ExactMatcher;

impl CourseMatcher for ExactMatcher {
    fn score(&self, program_name: &str, preferred_program: &str) -> f64 {
        if program_name.eq_ignore_ascii_case(preferred_program.trim()) {
            100.0
        } else {
            0.0
        }
    }
}

#[test]
fn engine_accepts_alternative_course_matchers() {
    let engine = RecommendationEngine::with_matcher(WeightTable::standard(), ExactMatcher);
    let catalog = bundled();

    let results = engine.rank(&profile(85.0, "b.tech ece", 250000.0), &catalog);
    assert_eq!(results.len(), 4);
    assert!(results
        .iter()
        .all(|result| result.matching_courses.len() == 1));

    assert!(engine
        .rank(&profile(85.0, "ECE", 250000.0), &catalog)
        .is_empty());
}

/// Accepts research programs regardless of their low similarity score.
struct ResearchOnlyMatcher;

impl CourseMatcher for ResearchOnlyMatcher {
    fn score(&self, _program_name: &str, _preferred_program: &str) -> f64 {
        20.0
    }

    fn is_match(&self, program_name: &str, _preferred_program: &str) -> bool {
        program_name.contains("Research")
    }
}

#[test]
fn ranking_defers_to_the_matcher_match_decision() {
    let engine = RecommendationEngine::with_matcher(WeightTable::standard(), ResearchOnlyMatcher);

    let results = engine.rank(&profile(96.0, "anything", 50000.0), &bundled());

    assert_eq!(ids(&results), vec!["iisc"]);
    assert_eq!(results[0].breakdown.course_match, 20.0);
    assert_eq!(results[0].matching_courses[0].id, "bsc-research");
}
