//! Profile intake, matching engine, narration, and the HTTP facade over them.

pub mod domain;
pub mod engine;
pub(crate) mod intake;
pub mod narrative;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    BudgetLevel, ConfidenceLevel, EducationStage, FitBreakdown, FitScore, Milestone, Path, PathId,
    PathKind, PrimaryFear, ProfileSubmission, RiskAssessment, RiskEntry, RiskSeverity,
    StudentProfile,
};
pub use engine::{MatchingConfig, RecommendationEngine, TimelineOffsets};
pub use intake::{ProfileGuard, ProfileViolation};
pub use narrative::{NarrativeGenerator, NarrativeStream, TemplateNarrator};
pub use router::{recommendation_router, NarrativeRequest, RecommendationRequest};
pub use service::{Recommendation, RecommendationService, RecommendationServiceError};
