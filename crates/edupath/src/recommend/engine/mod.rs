pub(crate) mod assembly;
mod config;
pub(crate) mod filter;
pub(crate) mod risk;
pub(crate) mod scoring;
pub(crate) mod selection;

pub use config::{MatchingConfig, TimelineOffsets};

use chrono::NaiveDate;
use tracing::debug;

use super::domain::{Path, StudentProfile};
use crate::catalog::CatalogStore;
use assembly::{assemble_path, PathInputs};
use selection::{select_diverse, ScoredCandidate};

/// Stateless engine turning a validated profile into ranked paths.
///
/// Every call is a pure function of the profile, the catalog snapshot, and the
/// reference date used for the timeline.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: MatchingConfig,
}

impl RecommendationEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn recommend<C>(&self, profile: &StudentProfile, catalog: &C, today: NaiveDate) -> Vec<Path>
    where
        C: CatalogStore + ?Sized,
    {
        let eligible = filter::eligible_candidates(profile, catalog.universities());
        debug!(
            catalog = catalog.universities().len(),
            eligible = eligible.len(),
            "filtered catalog"
        );

        let scored = eligible
            .into_iter()
            .map(|university| ScoredCandidate {
                university,
                fit: scoring::score_candidate(profile, university),
            })
            .collect();

        select_diverse(scored, &self.config)
            .into_iter()
            .enumerate()
            .map(|(slot, candidate)| {
                let risks = risk::assess(profile, candidate.university, catalog);
                assemble_path(
                    PathInputs {
                        slot,
                        university: candidate.university,
                        fit: candidate.fit,
                        risks,
                    },
                    profile,
                    catalog,
                    &self.config,
                    today,
                )
            })
            .collect()
    }
}
