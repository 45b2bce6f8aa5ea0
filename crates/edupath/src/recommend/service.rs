use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{Path, ProfileSubmission, StudentProfile};
use super::engine::{MatchingConfig, RecommendationEngine};
use super::intake::{ProfileGuard, ProfileViolation};
use super::narrative::{NarrativeGenerator, NarrativeStream};
use crate::catalog::CatalogStore;

/// Result of one recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub profile: StudentProfile,
    pub generated_on: NaiveDate,
    pub paths: Vec<Path>,
}

/// Service composing the intake guard, catalog snapshot, engine, and narrator.
pub struct RecommendationService<C, N> {
    guard: ProfileGuard,
    catalog: Arc<C>,
    narrator: Arc<N>,
    engine: Arc<RecommendationEngine>,
}

impl<C, N> RecommendationService<C, N>
where
    C: CatalogStore + 'static,
    N: NarrativeGenerator + 'static,
{
    pub fn new(catalog: Arc<C>, narrator: Arc<N>, config: MatchingConfig) -> Self {
        Self {
            guard: ProfileGuard,
            catalog,
            narrator,
            engine: Arc::new(RecommendationEngine::new(config)),
        }
    }

    /// Validate a submission and produce paths dated from `today`.
    pub fn recommend(
        &self,
        submission: ProfileSubmission,
        today: NaiveDate,
    ) -> Result<Recommendation, RecommendationServiceError> {
        let profile = self.guard.profile_from_submission(submission)?;
        let paths = self.engine.recommend(&profile, self.catalog.as_ref(), today);

        info!(
            situation = %profile.situation,
            target_country = ?profile.target_country,
            paths = paths.len(),
            "recommendations generated"
        );

        Ok(Recommendation {
            profile,
            generated_on: today,
            paths,
        })
    }

    /// Same as [`recommend`](Self::recommend), dated from the local calendar day.
    pub fn recommend_now(
        &self,
        submission: ProfileSubmission,
    ) -> Result<Recommendation, RecommendationServiceError> {
        self.recommend(submission, Local::now().date_naive())
    }

    /// Narrate a previously returned path for the submitting profile.
    pub fn narrate(
        &self,
        submission: ProfileSubmission,
        path: &Path,
    ) -> Result<NarrativeStream, RecommendationServiceError> {
        let profile = self.guard.profile_from_submission(submission)?;
        Ok(self.narrator.narrate(&profile, path))
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileViolation),
}
