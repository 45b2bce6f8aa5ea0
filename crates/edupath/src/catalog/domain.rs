use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::recommend::domain::EducationStage;

/// Identifier wrapper for catalog universities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UniversityId(pub String);

/// Identifier wrapper for catalog scholarships.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScholarshipId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeachingStyle {
    LectureHeavy,
    ProjectBased,
    ResearchFocused,
    Mixed,
}

impl TeachingStyle {
    pub const fn label(self) -> &'static str {
        match self {
            TeachingStyle::LectureHeavy => "lecture-heavy",
            TeachingStyle::ProjectBased => "project-based",
            TeachingStyle::ResearchFocused => "research-focused",
            TeachingStyle::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyTier {
    Basic,
    Intermediate,
    Advanced,
    Native,
}

/// Language a program is taught in, with any accepted alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRequirement {
    pub primary: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
    pub proficiency: ProficiencyTier,
}

impl LanguageRequirement {
    pub fn primary_is_english(&self) -> bool {
        is_english(&self.primary)
    }

    pub fn offers_english_alternative(&self) -> bool {
        self.alternatives.iter().any(|language| is_english(language))
    }
}

fn is_english(language: &str) -> bool {
    language.trim().eq_ignore_ascii_case("english")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TuitionTier {
    Free,
    Low,
    Medium,
    High,
}

impl TuitionTier {
    const LOW_CEILING: u32 = 5_000;
    const MEDIUM_CEILING: u32 = 20_000;

    /// Band an annual tuition cost into a tier.
    pub const fn from_annual_cost(annual_cost: u32) -> Self {
        match annual_cost {
            0 => TuitionTier::Free,
            cost if cost <= Self::LOW_CEILING => TuitionTier::Low,
            cost if cost <= Self::MEDIUM_CEILING => TuitionTier::Medium,
            _ => TuitionTier::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuition {
    pub currency: String,
    pub annual_cost: u32,
    /// Explicit tier from the source data; derived from `annual_cost` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<TuitionTier>,
}

impl Tuition {
    pub fn banded(currency: impl Into<String>, annual_cost: u32) -> Self {
        Self {
            currency: currency.into(),
            annual_cost,
            tier: None,
        }
    }

    pub fn tier(&self) -> TuitionTier {
        self.tier
            .unwrap_or_else(|| TuitionTier::from_annual_cost(self.annual_cost))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaDifficulty {
    Easy,
    Medium,
    Hard,
}

/// Catalog record for a degree-granting institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: UniversityId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub ranking: u32,
    pub teaching_style: TeachingStyle,
    pub workload_intensity: u8,
    pub language: LanguageRequirement,
    pub tuition: Tuition,
    pub visa_difficulty: VisaDifficulty,
    pub international_support: u8,
    pub acceptance_rate: f32,
    /// Source citation per field name.
    #[serde(default)]
    pub sources: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardCoverage {
    Full,
    Partial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarshipAward {
    pub currency: String,
    pub amount: u32,
    pub coverage: AwardCoverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Competitiveness {
    Low,
    Medium,
    High,
}

/// Marker in `eligible_countries` admitting applicants from anywhere.
pub const ALL_COUNTRIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipEligibility {
    #[serde(default)]
    pub eligible_countries: Vec<String>,
    pub education_stages: Vec<EducationStage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_gpa: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_years_experience: Option<u8>,
}

impl ScholarshipEligibility {
    pub fn admits_country(&self, country: &str) -> bool {
        self.eligible_countries.is_empty()
            || self
                .eligible_countries
                .iter()
                .any(|allowed| allowed == country || allowed == ALL_COUNTRIES)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scholarship {
    pub id: ScholarshipId,
    pub name: String,
    pub provider: String,
    pub country: String,
    pub eligibility: ScholarshipEligibility,
    pub award: ScholarshipAward,
    pub deadline: NaiveDate,
    pub competitiveness: Competitiveness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostOfLiving {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisaProcessing {
    pub difficulty: VisaDifficulty,
    pub average_days: u16,
    pub success_rate: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub cost_of_living: CostOfLiving,
    pub language_barrier: u8,
    pub visa: VisaProcessing,
    pub post_study_work_months: u16,
    pub safety_score: u8,
}
