use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::catalog::{
    AwardCoverage, Catalog, Competitiveness, CostOfLiving, Country, LanguageRequirement,
    ProficiencyTier, Scholarship, ScholarshipAward, ScholarshipEligibility, ScholarshipId,
    TeachingStyle, Tuition, University, UniversityId, VisaDifficulty, VisaProcessing,
};
use crate::recommend::domain::{
    BudgetLevel, ConfidenceLevel, EducationStage, FitBreakdown, FitScore, PrimaryFear,
    ProfileSubmission, StudentProfile,
};
use crate::recommend::engine::selection::ScoredCandidate;
use crate::recommend::{
    recommendation_router, MatchingConfig, RecommendationService, TemplateNarrator,
};

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date")
}

pub(super) fn english() -> LanguageRequirement {
    LanguageRequirement {
        primary: "English".to_string(),
        alternatives: Vec::new(),
        proficiency: ProficiencyTier::Advanced,
    }
}

/// Mid-table English-taught university with low tuition and an easy visa.
pub(super) fn university(id: &str, country: &str) -> University {
    University {
        id: UniversityId(id.to_string()),
        name: format!("{id} University"),
        country: country.to_string(),
        city: "Capital".to_string(),
        ranking: 50,
        teaching_style: TeachingStyle::Mixed,
        workload_intensity: 6,
        language: english(),
        tuition: Tuition::banded("EUR", 3_000),
        visa_difficulty: VisaDifficulty::Easy,
        international_support: 8,
        acceptance_rate: 40.0,
        sources: BTreeMap::new(),
    }
}

pub(super) fn country(name: &str, cost_of_living: CostOfLiving) -> Country {
    Country {
        name: name.to_string(),
        cost_of_living,
        language_barrier: 3,
        visa: VisaProcessing {
            difficulty: VisaDifficulty::Easy,
            average_days: 30,
            success_rate: 0.9,
        },
        post_study_work_months: 12,
        safety_score: 8,
    }
}

pub(super) fn scholarship(id: &str, country: &str, stages: &[EducationStage]) -> Scholarship {
    Scholarship {
        id: ScholarshipId(id.to_string()),
        name: format!("{id} award"),
        provider: "Ministry of Education".to_string(),
        country: country.to_string(),
        eligibility: ScholarshipEligibility {
            eligible_countries: Vec::new(),
            education_stages: stages.to_vec(),
            min_gpa: None,
            max_age: None,
            min_years_experience: None,
        },
        award: ScholarshipAward {
            currency: "EUR".to_string(),
            amount: 5_000,
            coverage: AwardCoverage::Partial,
        },
        deadline: NaiveDate::from_ymd_opt(2026, 12, 1).expect("valid date"),
        competitiveness: Competitiveness::Medium,
    }
}

pub(super) fn profile() -> StudentProfile {
    StudentProfile {
        situation: "general".to_string(),
        current_country: "India".to_string(),
        target_country: None,
        education_stage: EducationStage::Bachelors,
        budget: BudgetLevel::Medium,
        fear: PrimaryFear::Money,
        confidence: ConfidenceLevel::Medium,
        gpa: None,
        age: None,
        years_experience: None,
    }
}

pub(super) fn submission() -> ProfileSubmission {
    ProfileSubmission {
        situation: Some("finishing high school".to_string()),
        current_country: Some("India".to_string()),
        target_country: None,
        education_stage: Some(EducationStage::Bachelors),
        budget: Some(BudgetLevel::Medium),
        fear: Some(PrimaryFear::Money),
        confidence: Some(ConfidenceLevel::Medium),
        gpa: Some(3.4),
        age: Some(22),
        years_experience: None,
    }
}

/// Profile and catalog from the worked Germany example.
pub(super) fn germany_example() -> (StudentProfile, Catalog) {
    let profile = StudentProfile {
        target_country: Some("Germany".to_string()),
        budget: BudgetLevel::Low,
        fear: PrimaryFear::Visa,
        confidence: ConfidenceLevel::Low,
        ..profile()
    };

    let mut german = university("tu-berlin", "Germany");
    german.tuition = Tuition::banded("EUR", 0);
    german.workload_intensity = 8;
    german.visa_difficulty = VisaDifficulty::Easy;

    let mut american = university("state-u", "United States");
    american.tuition = Tuition::banded("USD", 48_000);
    american.visa_difficulty = VisaDifficulty::Hard;

    let catalog = Catalog::new(
        vec![german, american],
        Vec::new(),
        vec![
            country("Germany", CostOfLiving::Medium),
            country("United States", CostOfLiving::High),
        ],
    );

    (profile, catalog)
}

pub(super) fn scored(university: &University, overall: u8) -> ScoredCandidate<'_> {
    ScoredCandidate {
        university,
        fit: FitScore {
            overall,
            breakdown: FitBreakdown {
                teaching: overall,
                workload: overall,
                language: overall,
                cost: overall,
                visa: overall,
                support: overall,
            },
        },
    }
}

pub(super) fn builtin_catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog loads")
}

pub(super) fn build_service(catalog: Catalog) -> RecommendationService<Catalog, TemplateNarrator> {
    RecommendationService::new(
        Arc::new(catalog),
        Arc::new(TemplateNarrator),
        MatchingConfig::default(),
    )
}

pub(super) fn router_with_builtin_catalog() -> axum::Router {
    recommendation_router(Arc::new(build_service(builtin_catalog())))
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}
