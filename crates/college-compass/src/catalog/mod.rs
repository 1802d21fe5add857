//! Institution catalog: the immutable snapshot the recommendation engine ranks.

mod browse;
pub mod domain;
mod importer;
mod source;

pub use browse::{CatalogQuery, CatalogSort};
pub use domain::{Institution, InstitutionId, InstitutionType, PlacementStats, Program};
pub use importer::{CatalogImportError, CatalogImporter};
pub use source::{CatalogError, CatalogSource, InMemoryCatalog};

use chrono::{Datelike, Local};
use std::collections::{BTreeSet, HashSet};

const BUNDLED_CATALOG: &str = include_str!("../../data/colleges.json");

/// Validated, ordered collection of institutions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    institutions: Vec<Institution>,
}

impl Catalog {
    pub fn new(institutions: Vec<Institution>) -> Result<Self, CatalogImportError> {
        let current_year = Local::now().year();
        let mut seen = HashSet::new();

        for institution in &institutions {
            validate_institution(institution, current_year)?;
            if !seen.insert(institution.id.0.as_str()) {
                return Err(invalid(institution, "duplicate institution id".to_string()));
            }
        }

        Ok(Self { institutions })
    }

    /// Seed catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogImportError> {
        CatalogImporter::from_json_reader(BUNDLED_CATALOG.as_bytes())
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn into_institutions(self) -> Vec<Institution> {
        self.institutions
    }

    pub fn get(&self, id: &str) -> Option<&Institution> {
        self.institutions
            .iter()
            .find(|institution| institution.id.0 == id)
    }

    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }

    pub fn program_names(&self) -> Vec<String> {
        program_names(&self.institutions)
    }

    pub fn browse(&self, query: &CatalogQuery) -> Vec<&Institution> {
        query.apply(&self.institutions)
    }
}

/// Distinct program names across `institutions`, sorted.
pub fn program_names(institutions: &[Institution]) -> Vec<String> {
    institutions
        .iter()
        .flat_map(|institution| institution.courses.iter())
        .map(|program| program.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn validate_institution(
    institution: &Institution,
    current_year: i32,
) -> Result<(), CatalogImportError> {
    if institution.id.0.trim().is_empty() {
        return Err(invalid(institution, "missing id".to_string()));
    }
    if institution.name.trim().is_empty() {
        return Err(invalid(institution, "missing name".to_string()));
    }
    if institution.courses.is_empty() {
        return Err(invalid(institution, "no programs listed".to_string()));
    }
    if !(0.0..=5.0).contains(&institution.rating) {
        return Err(invalid(
            institution,
            format!("rating {} outside 0-5", institution.rating),
        ));
    }
    if !(0.0..=100.0).contains(&institution.placement.placement_rate) {
        return Err(invalid(
            institution,
            format!(
                "placement rate {} outside 0-100",
                institution.placement.placement_rate
            ),
        ));
    }
    let placement = &institution.placement;
    if !placement.average_package.is_finite() || placement.average_package < 0.0 {
        return Err(invalid(
            institution,
            format!(
                "average package {} must be a non-negative number",
                placement.average_package
            ),
        ));
    }
    if !placement.highest_package.is_finite() || placement.highest_package < 0.0 {
        return Err(invalid(
            institution,
            format!(
                "highest package {} must be a non-negative number",
                placement.highest_package
            ),
        ));
    }
    for program in &institution.courses {
        validate_program(institution, program)?;
    }
    if institution.established > current_year {
        return Err(invalid(
            institution,
            format!("founding year {} is in the future", institution.established),
        ));
    }
    Ok(())
}

fn validate_program(
    institution: &Institution,
    program: &Program,
) -> Result<(), CatalogImportError> {
    if !program.fees.is_finite() || program.fees <= 0.0 {
        return Err(invalid(
            institution,
            format!(
                "program '{}' fee {} must be positive",
                program.id, program.fees
            ),
        ));
    }
    if !(0.0..=100.0).contains(&program.cutoff_marks) {
        return Err(invalid(
            institution,
            format!(
                "program '{}' cutoff {} outside 0-100",
                program.id, program.cutoff_marks
            ),
        ));
    }
    Ok(())
}

fn invalid(institution: &Institution, reason: String) -> CatalogImportError {
    CatalogImportError::Invalid {
        institution: institution.id.0.clone(),
        reason,
    }
}
