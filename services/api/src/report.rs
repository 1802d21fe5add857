use crate::infra::{load_catalog, parse_institution_type, parse_preference, parse_sort};
use clap::Args;
use college_compass::catalog::{CatalogQuery, CatalogSort, InMemoryCatalog, Institution, InstitutionType};
use college_compass::error::AppError;
use college_compass::recommendation::{
    ApplicantProfile, InstitutionTypePreference, Priority, RecommendationReport,
    RecommendationService, WeightTable,
};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

const RUPEES_PER_LAKH: f64 = 100_000.0;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Qualifying exam percentage (0-100)
    #[arg(long)]
    pub(crate) marks: f64,
    /// Program the applicant wants, e.g. "Computer Science"
    #[arg(long)]
    pub(crate) program: String,
    /// Maximum annual fee in rupees
    #[arg(long)]
    pub(crate) budget: f64,
    /// Weight placement outcomes more heavily
    #[arg(long)]
    pub(crate) prioritize_placement: bool,
    /// Weight institution rating more heavily (ignored with --prioritize-placement)
    #[arg(long)]
    pub(crate) prioritize_rating: bool,
    /// Restrict to one institution type: any, government, private, deemed
    #[arg(long = "type", value_parser = parse_preference, default_value = "any")]
    pub(crate) institution_type: InstitutionTypePreference,
    /// Show at most this many results
    #[arg(long)]
    pub(crate) limit: Option<NonZeroUsize>,
    /// Catalog file (.json or .csv). Defaults to the bundled catalog.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the full report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl RecommendArgs {
    fn profile(&self) -> ApplicantProfile {
        ApplicantProfile {
            marks: self.marks,
            preferred_program: self.program.clone(),
            budget_max: self.budget,
            priority: Priority::from_flags(self.prioritize_placement, self.prioritize_rating),
            preferred_institution_type: self.institution_type,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct CollegesArgs {
    /// Match against name, short name, city or program
    #[arg(long)]
    pub(crate) search: Option<String>,
    #[arg(long = "type", value_parser = parse_institution_type)]
    pub(crate) institution_type: Option<InstitutionType>,
    /// Only institutions offering a program whose name contains this text
    #[arg(long)]
    pub(crate) program: Option<String>,
    /// Cheapest program must cost at most this much per year
    #[arg(long)]
    pub(crate) max_fees: Option<f64>,
    #[arg(long)]
    pub(crate) min_placement_rate: Option<f64>,
    /// rating, placement, fees-low, fees-high or ranking
    #[arg(long, value_parser = parse_sort, default_value = "rating")]
    pub(crate) sort: CatalogSort,
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(long)]
    pub(crate) json: bool,
}

impl CollegesArgs {
    fn query(&self) -> CatalogQuery {
        CatalogQuery {
            search: self.search.clone(),
            institution_type: self.institution_type,
            program: self.program.clone(),
            max_fees: self.max_fees,
            min_placement_rate: self.min_placement_rate,
            sort: self.sort,
        }
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let service = RecommendationService::new(
        Arc::new(InMemoryCatalog::new(catalog)),
        WeightTable::standard(),
    )
    .with_result_limit(args.limit);

    let report = service.recommend(&args.profile())?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", render_recommendations(&args.profile(), &report));
    }
    Ok(())
}

pub(crate) fn run_colleges(args: CollegesArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let listing = catalog.browse(&args.query());

    if args.json {
        let rendered = serde_json::to_string_pretty(&listing).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", render_colleges(&listing));
    }
    Ok(())
}

pub(crate) fn render_recommendations(
    profile: &ApplicantProfile,
    report: &RecommendationReport,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Recommendations for {} ({}% marks, budget ₹{:.1}L, {} priority)\n",
        profile.preferred_program,
        profile.marks,
        profile.budget_max / RUPEES_PER_LAKH,
        report.priority.label()
    ));

    let stats = &report.stats;
    out.push_str(&format!(
        "{} matches, {} eligible, {} marginal, top score {:.1}, average package {:.1} LPA\n",
        stats.total_matches,
        stats.eligible_count,
        stats.marginal_count,
        stats.top_score,
        stats.avg_placement
    ));

    if report.results.is_empty() {
        out.push_str("\nNo institution offers a matching program.\n");
        return out;
    }

    for (position, result) in report.results.iter().enumerate() {
        let program = result
            .best_program()
            .map(|program| program.name.as_str())
            .unwrap_or("-");
        out.push_str(&format!(
            "\n{}. {} [{}] score {:.1} ({})\n   Program: {}\n",
            position + 1,
            result.institution.name,
            result.institution.institution_type.label(),
            result.total_score,
            result.eligibility_status.label(),
            program
        ));
        let breakdown = &result.breakdown;
        out.push_str(&format!(
            "   Breakdown: eligibility {:.1}, placement {:.1}, rating {:.1}, affordability {:.1}, course match {:.1}\n",
            breakdown.eligibility,
            breakdown.placement,
            breakdown.rating,
            breakdown.affordability,
            breakdown.course_match
        ));
        for line in &result.explanation {
            out.push_str(&format!("   - {line}\n"));
        }
    }
    out
}

pub(crate) fn render_colleges(listing: &[&Institution]) -> String {
    if listing.is_empty() {
        return "No colleges match the given filters.\n".to_string();
    }

    let mut out = String::new();
    for institution in listing {
        let fees = institution
            .fee_range()
            .map(|(low, high)| {
                format!(
                    "₹{:.1}L-₹{:.1}L",
                    low / RUPEES_PER_LAKH,
                    high / RUPEES_PER_LAKH
                )
            })
            .unwrap_or_else(|| "n/a".to_string());
        out.push_str(&format!(
            "- {} ({}, {}) rating {}/5, rank #{}, fees {}, {} LPA average, {}% placed\n",
            institution.name,
            institution.institution_type.label(),
            institution.city,
            institution.rating,
            institution.ranking,
            fees,
            institution.placement.average_package,
            institution.placement.placement_rate
        ));
    }
    out
}
