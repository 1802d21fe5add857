use super::domain::{Institution, InstitutionType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ordering applied to a browse listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogSort {
    #[default]
    Rating,
    Placement,
    FeesLow,
    FeesHigh,
    Ranking,
}

impl CatalogSort {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rating" => Some(Self::Rating),
            "placement" => Some(Self::Placement),
            "fees-low" | "fees_low" => Some(Self::FeesLow),
            "fees-high" | "fees_high" => Some(Self::FeesHigh),
            "ranking" => Some(Self::Ranking),
            _ => None,
        }
    }
}

/// Filters for listing the catalog. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, rename = "type")]
    pub institution_type: Option<InstitutionType>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub max_fees: Option<f64>,
    #[serde(default)]
    pub min_placement_rate: Option<f64>,
    #[serde(default)]
    pub sort: CatalogSort,
}

impl CatalogQuery {
    /// Filters and orders `institutions` without copying them.
    pub fn apply<'a>(&self, institutions: &'a [Institution]) -> Vec<&'a Institution> {
        apply(institutions, self)
    }
}

fn apply<'a>(institutions: &'a [Institution], query: &CatalogQuery) -> Vec<&'a Institution> {
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);
    let program = query
        .program
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty());

    let mut listing: Vec<&Institution> = institutions
        .iter()
        .filter(|institution| {
            search
                .as_deref()
                .map_or(true, |term| matches_search(institution, term))
        })
        .filter(|institution| {
            query
                .institution_type
                .map_or(true, |kind| institution.institution_type == kind)
        })
        .filter(|institution| program.map_or(true, |name| institution.offers_program_like(name)))
        .filter(|institution| {
            query.max_fees.map_or(true, |limit| {
                institution.min_fee().map_or(false, |fee| fee <= limit)
            })
        })
        .filter(|institution| match query.min_placement_rate {
            Some(rate) if rate > 0.0 => institution.placement.placement_rate >= rate,
            _ => true,
        })
        .collect();

    match query.sort {
        CatalogSort::Rating => listing.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        CatalogSort::Placement => listing.sort_by(|a, b| {
            b.placement
                .average_package
                .total_cmp(&a.placement.average_package)
        }),
        CatalogSort::FeesLow => listing.sort_by(|a, b| compare_min_fee(a, b)),
        CatalogSort::FeesHigh => listing.sort_by(|a, b| compare_min_fee(b, a)),
        CatalogSort::Ranking => listing.sort_by_key(|institution| institution.ranking),
    }

    listing
}

fn matches_search(institution: &Institution, term: &str) -> bool {
    institution.name.to_lowercase().contains(term)
        || institution.short_name.to_lowercase().contains(term)
        || institution.city.to_lowercase().contains(term)
        || institution.offers_program_like(term)
}

fn compare_min_fee(a: &Institution, b: &Institution) -> Ordering {
    let a_fee = a.min_fee().unwrap_or(f64::INFINITY);
    let b_fee = b.min_fee().unwrap_or(f64::INFINITY);
    a_fee.total_cmp(&b_fee)
}
