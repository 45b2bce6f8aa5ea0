use std::sync::Arc;

use chrono::NaiveDate;
use edupath::catalog::{Catalog, CatalogError, TuitionTier};
use edupath::recommend::{
    BudgetLevel, ConfidenceLevel, EducationStage, MatchingConfig, PathKind, PrimaryFear,
    ProfileSubmission, RecommendationService, TemplateNarrator,
};

fn intake_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid intake date")
}

fn service() -> RecommendationService<Catalog, TemplateNarrator> {
    let catalog = Catalog::builtin().expect("builtin catalog loads");
    RecommendationService::new(
        Arc::new(catalog),
        Arc::new(TemplateNarrator),
        MatchingConfig::default(),
    )
}

fn cautious_student() -> ProfileSubmission {
    ProfileSubmission {
        situation: Some("working as a junior developer".to_string()),
        current_country: Some("India".to_string()),
        target_country: Some("Germany".to_string()),
        education_stage: Some(EducationStage::Bachelors),
        budget: Some(BudgetLevel::Low),
        fear: Some(PrimaryFear::Visa),
        confidence: Some(ConfidenceLevel::Low),
        gpa: Some(3.1),
        age: Some(23),
        years_experience: None,
    }
}

#[test]
fn targeted_low_budget_student_gets_tuition_free_german_paths() {
    let recommendation = service()
        .recommend(cautious_student(), intake_date())
        .expect("recommendation succeeds");

    assert_eq!(
        recommendation.paths.len(),
        2,
        "both German universities pass every hard constraint"
    );
    assert_eq!(recommendation.paths[0].kind, PathKind::BestFit);
    assert_eq!(recommendation.paths[1].kind, PathKind::StrongAlternative);

    for path in &recommendation.paths {
        assert_eq!(path.university.country, "Germany");
        assert_eq!(path.university.tuition.tier(), TuitionTier::Free);
        assert_eq!(path.fit.breakdown.cost, 100);
        assert!(path.fit.overall <= 100);
        assert_eq!(path.timeline.len(), 3);
        assert!(path
            .timeline
            .windows(2)
            .all(|pair| pair[0].date < pair[1].date));
        assert!(path.timeline[0].date > intake_date());
        assert!(path
            .scholarships
            .iter()
            .all(|scholarship| scholarship.country == "Germany"));
    }
}

#[test]
fn open_search_spreads_paths_across_countries() {
    let submission = ProfileSubmission {
        target_country: None,
        budget: Some(BudgetLevel::High),
        fear: Some(PrimaryFear::Failure),
        confidence: Some(ConfidenceLevel::High),
        ..cautious_student()
    };

    let recommendation = service()
        .recommend(submission, intake_date())
        .expect("recommendation succeeds");

    assert_eq!(recommendation.paths.len(), 3);
    let mut countries: Vec<&str> = recommendation
        .paths
        .iter()
        .map(|path| path.university.country.as_str())
        .collect();
    countries.sort_unstable();
    countries.dedup();
    assert!(countries.len() >= 2, "paths should not share one country");

    let ids: Vec<&str> = recommendation
        .paths
        .iter()
        .map(|path| path.id.0.as_str())
        .collect();
    let mut unique = ids.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn low_budget_never_sees_high_tuition() {
    let submission = ProfileSubmission {
        target_country: None,
        fear: Some(PrimaryFear::Money),
        confidence: Some(ConfidenceLevel::Medium),
        ..cautious_student()
    };

    let recommendation = service()
        .recommend(submission, intake_date())
        .expect("recommendation succeeds");

    assert!(!recommendation.paths.is_empty());
    assert!(recommendation
        .paths
        .iter()
        .all(|path| path.university.tuition.tier() != TuitionTier::High));
}

#[test]
fn catalog_round_trips_through_json_and_rejects_bad_scores() {
    let builtin = Catalog::builtin().expect("builtin catalog loads");
    let encoded = serde_json::to_vec(&builtin).expect("catalog serializes");
    let reloaded = Catalog::from_reader(encoded.as_slice()).expect("catalog reloads");
    assert_eq!(reloaded, builtin);

    let mut raw: serde_json::Value = serde_json::from_slice(&encoded).expect("json value");
    raw["universities"][0]["workload_intensity"] = serde_json::json!(11);
    let err = Catalog::from_reader(raw.to_string().as_bytes()).expect_err("workload rejected");
    assert!(matches!(
        err,
        CatalogError::WorkloadOutOfRange { value: 11, .. }
    ));
}
