use super::common::*;
use crate::catalog::{CatalogStore, Tuition, VisaDifficulty};
use crate::recommend::domain::{BudgetLevel, ConfidenceLevel, PrimaryFear, StudentProfile};
use crate::recommend::engine::filter::{eligible_candidates, is_eligible};

#[test]
fn target_country_requires_exact_match() {
    let profile = StudentProfile {
        target_country: Some("Germany".to_string()),
        ..profile()
    };

    assert!(is_eligible(&profile, &university("tum", "Germany")));
    assert!(!is_eligible(&profile, &university("uva", "Netherlands")));
    assert!(!is_eligible(&profile, &university("gde", "East Germany")));
    assert!(!is_eligible(&profile, &university("lc", "germany")));
}

#[test]
fn low_budget_excludes_high_tuition_only() {
    let profile = StudentProfile {
        budget: BudgetLevel::Low,
        ..profile()
    };
    let mut expensive = university("expensive", "Canada");
    expensive.tuition = Tuition::banded("CAD", 45_000);
    let mut moderate = university("moderate", "Canada");
    moderate.tuition = Tuition::banded("CAD", 15_000);

    assert!(!is_eligible(&profile, &expensive));
    assert!(is_eligible(&profile, &moderate));

    let comfortable = StudentProfile {
        budget: BudgetLevel::Medium,
        ..profile
    };
    assert!(is_eligible(&comfortable, &expensive));
}

#[test]
fn visa_fear_excludes_hard_visas() {
    let profile = StudentProfile {
        fear: PrimaryFear::Visa,
        ..profile()
    };
    let mut hard = university("hard", "United States");
    hard.visa_difficulty = VisaDifficulty::Hard;
    let mut medium = university("medium", "Canada");
    medium.visa_difficulty = VisaDifficulty::Medium;

    assert!(!is_eligible(&profile, &hard));
    assert!(is_eligible(&profile, &medium));
    assert!(is_eligible(
        &StudentProfile {
            fear: PrimaryFear::Time,
            ..profile
        },
        &hard
    ));
}

#[test]
fn low_confidence_excludes_workload_nine_and_above() {
    let profile = StudentProfile {
        confidence: ConfidenceLevel::Low,
        ..profile()
    };
    let mut intense = university("intense", "Singapore");
    intense.workload_intensity = 9;
    let mut demanding = university("demanding", "Singapore");
    demanding.workload_intensity = 8;

    assert!(!is_eligible(&profile, &intense));
    assert!(is_eligible(&profile, &demanding));
}

#[test]
fn germany_example_keeps_only_the_german_entry() {
    let (profile, catalog) = germany_example();

    let eligible = eligible_candidates(&profile, catalog.universities());

    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].country, "Germany");
}

#[test]
fn filtering_preserves_catalog_order() {
    let universities = vec![
        university("c", "Canada"),
        university("a", "Austria"),
        university("b", "Belgium"),
    ];

    let eligible = eligible_candidates(&profile(), &universities);
    let ids: Vec<&str> = eligible.iter().map(|u| u.id.0.as_str()).collect();

    assert_eq!(ids, vec!["c", "a", "b"]);
}
