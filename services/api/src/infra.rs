use college_compass::catalog::{Catalog, CatalogImporter, CatalogSort, InstitutionType};
use college_compass::error::AppError;
use college_compass::recommendation::InstitutionTypePreference;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads the catalog from `path`, or the bundled seed data when no path is given.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, AppError> {
    let catalog = match path {
        Some(path) => {
            let catalog = CatalogImporter::from_path(path).map_err(|err| {
                warn!(path = %path.display(), error = %err, "catalog import failed");
                err
            })?;
            info!(path = %path.display(), institutions = catalog.len(), "catalog imported");
            catalog
        }
        None => Catalog::bundled()?,
    };
    Ok(catalog)
}

pub(crate) fn parse_preference(raw: &str) -> Result<InstitutionTypePreference, String> {
    InstitutionTypePreference::parse(raw)
        .ok_or_else(|| format!("unknown institution type '{raw}' (any, government, private, deemed)"))
}

pub(crate) fn parse_institution_type(raw: &str) -> Result<InstitutionType, String> {
    InstitutionType::parse(raw)
        .ok_or_else(|| format!("unknown institution type '{raw}' (government, private, deemed)"))
}

pub(crate) fn parse_sort(raw: &str) -> Result<CatalogSort, String> {
    CatalogSort::parse(raw).ok_or_else(|| {
        format!("unknown sort '{raw}' (rating, placement, fees-low, fees-high, ranking)")
    })
}
