use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{Scholarship, University};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationStage {
    HighSchool,
    Bachelors,
    Masters,
    Phd,
    Bootcamp,
    Working,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryFear {
    Money,
    Visa,
    Failure,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

/// Raw profile as collected by the intake flow. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSubmission {
    #[serde(default)]
    pub situation: Option<String>,
    #[serde(default)]
    pub current_country: Option<String>,
    #[serde(default)]
    pub target_country: Option<String>,
    #[serde(default)]
    pub education_stage: Option<EducationStage>,
    #[serde(default)]
    pub budget: Option<BudgetLevel>,
    #[serde(default)]
    pub fear: Option<PrimaryFear>,
    #[serde(default)]
    pub confidence: Option<ConfidenceLevel>,
    #[serde(default)]
    pub gpa: Option<f32>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub years_experience: Option<u8>,
}

/// Validated profile consumed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub situation: String,
    pub current_country: String,
    pub target_country: Option<String>,
    pub education_stage: EducationStage,
    pub budget: BudgetLevel,
    pub fear: PrimaryFear,
    pub confidence: ConfidenceLevel,
    pub gpa: Option<f32>,
    pub age: Option<u8>,
    pub years_experience: Option<u8>,
}

/// Per-dimension fit values, each in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitBreakdown {
    pub teaching: u8,
    pub workload: u8,
    pub language: u8,
    pub cost: u8,
    pub visa: u8,
    pub support: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitScore {
    pub overall: u8,
    pub breakdown: FitBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskEntry {
    pub severity: RiskSeverity,
    pub likelihood: u8,
    pub description: String,
    pub mitigation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub financial: RiskEntry,
    pub visa: RiskEntry,
    pub academic: RiskEntry,
    pub time: RiskEntry,
}

impl RiskAssessment {
    pub fn entries(&self) -> [(&'static str, &RiskEntry); 4] {
        [
            ("financial", &self.financial),
            ("visa", &self.visa),
            ("academic", &self.academic),
            ("time", &self.time),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
}

/// Role a path plays in the selected set, by selection slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    BestFit,
    StrongAlternative,
    DiverseOption,
}

impl PathKind {
    pub const fn for_slot(slot: usize) -> Self {
        match slot {
            0 => PathKind::BestFit,
            1 => PathKind::StrongAlternative,
            _ => PathKind::DiverseOption,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PathKind::BestFit => "Best fit",
            PathKind::StrongAlternative => "Strong alternative",
            PathKind::DiverseOption => "Diverse option",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathId(pub String);

/// One assembled recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub id: PathId,
    pub kind: PathKind,
    pub name: String,
    pub description: String,
    pub fit: FitScore,
    pub risks: RiskAssessment,
    pub not_for_you_if: Vec<String>,
    pub university: University,
    pub scholarships: Vec<Scholarship>,
    pub timeline: Vec<Milestone>,
}
