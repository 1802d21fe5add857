use super::profile::ApplicantProfile;
use super::ScoreBreakdown;
use crate::catalog::{Institution, Program};

const RUPEES_PER_LAKH: f64 = 100_000.0;
const RECRUITERS_SHOWN: usize = 3;

/// Facts a justification can draw on for one scored institution.
#[derive(Debug, Clone, Copy)]
pub struct ExplanationContext<'a> {
    pub institution: &'a Institution,
    pub program: &'a Program,
    pub breakdown: &'a ScoreBreakdown,
    pub profile: &'a ApplicantProfile,
}

type Remark = for<'a> fn(&ExplanationContext<'a>) -> Option<String>;

const REMARKS: [Remark; 5] = [
    eligibility_remark,
    placement_remark,
    rating_remark,
    affordability_remark,
    recruiters_remark,
];

/// Lazily renders the justification lines in a fixed order. Each remark may be omitted.
pub fn explain(context: ExplanationContext<'_>) -> impl Iterator<Item = String> + '_ {
    REMARKS
        .into_iter()
        .filter_map(move |remark| remark(&context))
}

fn eligibility_remark(context: &ExplanationContext<'_>) -> Option<String> {
    let marks = context.profile.marks;
    let cutoff = context.program.cutoff_marks;
    let diff = marks - cutoff;

    let remark = if diff >= 5.0 {
        format!(
            "Your marks ({marks}%) exceed the cutoff ({cutoff}%) by {} points",
            diff.round()
        )
    } else if diff >= 0.0 {
        format!("You meet the cutoff requirement of {cutoff}%")
    } else {
        format!(
            "Your marks are {} points below cutoff - admission may be challenging",
            diff.abs().round()
        )
    };
    Some(remark)
}

fn placement_remark(context: &ExplanationContext<'_>) -> Option<String> {
    let placement = &context.institution.placement;
    if context.breakdown.placement >= 80.0 {
        Some(format!(
            "Excellent placement: {} LPA average with {}% placement rate",
            placement.average_package, placement.placement_rate
        ))
    } else if context.breakdown.placement >= 60.0 {
        Some(format!(
            "Good placement record: {} LPA average package",
            placement.average_package
        ))
    } else {
        None
    }
}

fn rating_remark(context: &ExplanationContext<'_>) -> Option<String> {
    let institution = context.institution;
    if institution.rating >= 4.5 {
        Some(format!(
            "Top-rated institution ({}/5) - Rank #{}",
            institution.rating, institution.ranking
        ))
    } else if institution.rating >= 4.0 {
        Some(format!("Well-rated college ({}/5)", institution.rating))
    } else {
        None
    }
}

fn affordability_remark(context: &ExplanationContext<'_>) -> Option<String> {
    // Halves round up, so 1.25 lakh reads as 1.3.
    let fees_lakhs = (context.program.fees / RUPEES_PER_LAKH * 10.0).round() / 10.0;
    if context.breakdown.affordability >= 70.0 {
        Some(format!("Fees (₹{fees_lakhs:.1}L) are within your budget"))
    } else if context.breakdown.affordability >= 40.0 {
        Some(format!(
            "Fees (₹{fees_lakhs:.1}L) are slightly above budget but may be manageable"
        ))
    } else {
        None
    }
}

fn recruiters_remark(context: &ExplanationContext<'_>) -> Option<String> {
    let recruiters = &context.institution.placement.top_recruiters;
    if recruiters.is_empty() {
        return None;
    }

    let shown: Vec<&str> = recruiters
        .iter()
        .take(RECRUITERS_SHOWN)
        .map(String::as_str)
        .collect();
    Some(format!("Top recruiters: {}", shown.join(", ")))
}
