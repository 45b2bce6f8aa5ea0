use crate::catalog::{CatalogStore, CostOfLiving, TuitionTier, University, VisaDifficulty};

use super::super::domain::{
    BudgetLevel, ConfidenceLevel, RiskAssessment, RiskEntry, RiskSeverity, StudentProfile,
};

const FINANCIAL_MITIGATION: [&str; 4] = [
    "Apply to every matched scholarship before the earliest deadline",
    "Build a monthly budget covering rent, insurance, and transport",
    "Check part-time work allowances for student visa holders",
    "Keep an emergency fund of at least three months of living costs",
];

const VISA_MITIGATION: [&str; 4] = [
    "Gather financial statements and admission letters early",
    "Book the visa appointment as soon as the offer arrives",
    "Review the consulate checklist for missing documents",
    "Prepare for the visa interview with practice questions",
];

const ACADEMIC_MITIGATION: [&str; 3] = [
    "Take a preparatory course or bridging module before term starts",
    "Join study groups and use tutoring services from the first week",
    "Meet your academic advisor to plan a manageable course load",
];

const TIME_MITIGATION: [&str; 3] = [
    "Work backwards from the application deadline with a weekly plan",
    "Request transcripts and recommendation letters early",
    "Leave a buffer month before the program start date",
];

pub(crate) fn assess<C>(
    profile: &StudentProfile,
    university: &University,
    catalog: &C,
) -> RiskAssessment
where
    C: CatalogStore + ?Sized,
{
    RiskAssessment {
        financial: financial_risk(profile, university, catalog),
        visa: visa_risk(university.visa_difficulty),
        academic: academic_risk(profile.confidence, university.workload_intensity),
        time: time_risk(),
    }
}

fn budget_mismatch(budget: BudgetLevel, tier: TuitionTier) -> bool {
    matches!(
        (budget, tier),
        (BudgetLevel::Low, TuitionTier::Medium) | (BudgetLevel::Medium, TuitionTier::High)
    )
}

pub(crate) fn financial_risk<C>(
    profile: &StudentProfile,
    university: &University,
    catalog: &C,
) -> RiskEntry
where
    C: CatalogStore + ?Sized,
{
    let mismatch = budget_mismatch(profile.budget, university.tuition.tier());
    let expensive_city = match catalog.country(&university.country) {
        Some(country) => country.cost_of_living == CostOfLiving::High,
        None => {
            tracing::debug!(
                country = %university.country,
                "no country record; treating cost of living as unknown"
            );
            false
        }
    };

    let severity = if mismatch || expensive_city {
        RiskSeverity::High
    } else {
        RiskSeverity::Low
    };
    let likelihood = if mismatch { 70 } else { 30 };

    let description = match (mismatch, expensive_city) {
        (true, _) => format!(
            "Tuition of {} {} per year stretches your budget",
            university.tuition.annual_cost, university.tuition.currency
        ),
        (false, true) => format!(
            "Living costs in {} are high even when tuition is manageable",
            university.country
        ),
        (false, false) => "Costs are in line with your budget".to_string(),
    };

    RiskEntry {
        severity,
        likelihood,
        description,
        mitigation: to_owned_list(&FINANCIAL_MITIGATION),
    }
}

pub(crate) fn visa_risk(difficulty: VisaDifficulty) -> RiskEntry {
    let (severity, likelihood, description) = match difficulty {
        VisaDifficulty::Easy => (
            RiskSeverity::Low,
            10,
            "Student visas are routinely approved",
        ),
        VisaDifficulty::Medium => (
            RiskSeverity::Medium,
            30,
            "Visa approval needs careful paperwork and some lead time",
        ),
        VisaDifficulty::Hard => (
            RiskSeverity::High,
            60,
            "Visa approval is uncertain and processing is slow",
        ),
    };

    RiskEntry {
        severity,
        likelihood,
        description: description.to_string(),
        mitigation: to_owned_list(&VISA_MITIGATION),
    }
}

const fn academic_threshold(confidence: ConfidenceLevel) -> u8 {
    match confidence {
        ConfidenceLevel::Low => 3,
        ConfidenceLevel::Medium => 7,
        ConfidenceLevel::High => 10,
    }
}

pub(crate) fn academic_risk(confidence: ConfidenceLevel, workload: u8) -> RiskEntry {
    let threshold = academic_threshold(confidence);

    let (severity, likelihood, description) = if workload > threshold {
        (
            RiskSeverity::High,
            60,
            format!("Workload {workload}/10 is above the {threshold}/10 you are comfortable with"),
        )
    } else {
        (
            RiskSeverity::Low,
            20,
            format!("Workload {workload}/10 fits your confidence level"),
        )
    };

    RiskEntry {
        severity,
        likelihood,
        description,
        mitigation: to_owned_list(&ACADEMIC_MITIGATION),
    }
}

pub(crate) fn time_risk() -> RiskEntry {
    RiskEntry {
        severity: RiskSeverity::Medium,
        likelihood: 40,
        description: "Applications, visas, and relocation take most of a year".to_string(),
        mitigation: to_owned_list(&TIME_MITIGATION),
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
