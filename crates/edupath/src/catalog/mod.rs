//! Read-only catalog of universities, scholarships, and countries.
//!
//! The catalog is loaded once at process start and shared immutably across
//! requests. The engine only ever reads it through [`CatalogStore`].

pub mod domain;

pub use domain::{
    AwardCoverage, Competitiveness, CostOfLiving, Country, LanguageRequirement, ProficiencyTier,
    Scholarship, ScholarshipAward, ScholarshipEligibility, ScholarshipId, TeachingStyle, Tuition,
    TuitionTier, University, UniversityId, VisaDifficulty, VisaProcessing, ALL_COUNTRIES,
};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

const BUILTIN_CATALOG: &str = include_str!("builtin.json");

/// Storage abstraction so the engine can run against any immutable snapshot.
pub trait CatalogStore: Send + Sync {
    fn universities(&self) -> &[University];
    fn scholarships(&self) -> &[Scholarship];
    fn country(&self, name: &str) -> Option<&Country>;
}

/// Errors raised while loading a catalog snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("university {id} has workload intensity {value}, expected 1-10")]
    WorkloadOutOfRange { id: String, value: u8 },
    #[error("university {id} has support score {value}, expected 1-10")]
    SupportOutOfRange { id: String, value: u8 },
    #[error("university {id} has acceptance rate {value}, expected 0-100")]
    AcceptanceOutOfRange { id: String, value: f32 },
    #[error("university {id} has ranking 0, expected a positive rank")]
    InvalidRanking { id: String },
}

/// In-memory catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub universities: Vec<University>,
    #[serde(default)]
    pub scholarships: Vec<Scholarship>,
    #[serde(default)]
    pub countries: Vec<Country>,
}

impl Catalog {
    pub fn new(
        universities: Vec<University>,
        scholarships: Vec<Scholarship>,
        countries: Vec<Country>,
    ) -> Self {
        Self {
            universities,
            scholarships,
            countries,
        }
    }

    /// Curated snapshot shipped with the binary for demos and local runs.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_reader(BUILTIN_CATALOG.as_bytes())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_reader(reader)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for university in &self.universities {
            let id = || university.id.0.clone();
            if university.ranking == 0 {
                return Err(CatalogError::InvalidRanking { id: id() });
            }
            if !(1..=10).contains(&university.workload_intensity) {
                return Err(CatalogError::WorkloadOutOfRange {
                    id: id(),
                    value: university.workload_intensity,
                });
            }
            if !(1..=10).contains(&university.international_support) {
                return Err(CatalogError::SupportOutOfRange {
                    id: id(),
                    value: university.international_support,
                });
            }
            if !(0.0..=100.0).contains(&university.acceptance_rate) {
                return Err(CatalogError::AcceptanceOutOfRange {
                    id: id(),
                    value: university.acceptance_rate,
                });
            }
        }
        Ok(())
    }
}

impl CatalogStore for Catalog {
    fn universities(&self) -> &[University] {
        &self.universities
    }

    fn scholarships(&self) -> &[Scholarship] {
        &self.scholarships
    }

    fn country(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|country| country.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_passes_validation() {
        let catalog = Catalog::builtin().expect("builtin catalog is valid");
        assert!(catalog.universities().len() >= 6);
        assert!(catalog.country("Germany").is_some());
    }

    #[test]
    fn loads_round_tripped_json() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let json = serde_json::to_vec(&catalog).expect("catalog serializes");
        let loaded = Catalog::from_reader(json.as_slice()).expect("catalog loads");
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let loaded = Catalog::from_reader(&b"{}"[..]).expect("empty catalog loads");
        assert!(loaded.universities().is_empty());
        assert!(loaded.scholarships().is_empty());
        assert!(loaded.country("Germany").is_none());
    }

    #[test]
    fn rejects_out_of_range_workload() {
        let mut catalog = Catalog::builtin().expect("builtin catalog");
        catalog.universities[0].workload_intensity = 11;
        let json = serde_json::to_vec(&catalog).expect("catalog serializes");
        let err = Catalog::from_reader(json.as_slice()).expect_err("workload rejected");
        assert!(matches!(
            err,
            CatalogError::WorkloadOutOfRange { value: 11, .. }
        ));
    }

    #[test]
    fn reports_malformed_json() {
        let err = Catalog::from_reader(&b"{\"universities\": 4}"[..]).expect_err("bad json");
        assert!(err.to_string().starts_with("invalid catalog data"));
    }
}
