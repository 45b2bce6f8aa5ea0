use chrono::NaiveDate;
use edupath::catalog::{Catalog, CatalogError, CatalogStore};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the catalog from `path`, falling back to the builtin snapshot.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    let catalog = match path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };

    info!(
        source = %path.map_or_else(|| "builtin".to_string(), |path| path.display().to_string()),
        universities = catalog.universities().len(),
        scholarships = catalog.scholarships().len(),
        "catalog loaded"
    );

    Ok(catalog)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Parse a snake_case enum value using its wire spelling.
pub(crate) fn parse_choice<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let value = serde_json::Value::String(raw.trim().to_ascii_lowercase().replace('-', "_"));
    serde_json::from_value(value).map_err(|err| format!("unrecognized value '{raw}' ({err})"))
}
