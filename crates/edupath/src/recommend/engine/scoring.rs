use crate::catalog::{TeachingStyle, TuitionTier, University, VisaDifficulty};

use super::super::domain::{
    BudgetLevel, ConfidenceLevel, FitBreakdown, FitScore, PrimaryFear, StudentProfile,
};

// Dimension weights in percent.
const TEACHING_WEIGHT: u32 = 20;
const WORKLOAD_WEIGHT: u32 = 15;
const LANGUAGE_WEIGHT: u32 = 15;
const COST_WEIGHT: u32 = 25;
const VISA_WEIGHT: u32 = 15;
const SUPPORT_WEIGHT: u32 = 10;

const _: () = assert!(
    TEACHING_WEIGHT + WORKLOAD_WEIGHT + LANGUAGE_WEIGHT + COST_WEIGHT + VISA_WEIGHT
        + SUPPORT_WEIGHT
        == 100
);

pub(crate) fn score_candidate(profile: &StudentProfile, university: &University) -> FitScore {
    let breakdown = FitBreakdown {
        teaching: teaching_fit(profile.confidence, university.teaching_style),
        workload: workload_fit(profile.confidence, university.workload_intensity),
        language: language_fit(university),
        cost: cost_fit(profile.budget, university.tuition.tier()),
        visa: visa_fit(profile.fear, university.visa_difficulty),
        support: support_fit(university.international_support),
    };

    FitScore {
        overall: weighted_overall(&breakdown),
        breakdown,
    }
}

/// Weighted sum rounded half up, computed in integers so it never drifts.
pub(crate) fn weighted_overall(breakdown: &FitBreakdown) -> u8 {
    let weighted = u32::from(breakdown.teaching) * TEACHING_WEIGHT
        + u32::from(breakdown.workload) * WORKLOAD_WEIGHT
        + u32::from(breakdown.language) * LANGUAGE_WEIGHT
        + u32::from(breakdown.cost) * COST_WEIGHT
        + u32::from(breakdown.visa) * VISA_WEIGHT
        + u32::from(breakdown.support) * SUPPORT_WEIGHT;

    ((weighted + 50) / 100).min(100) as u8
}

pub(crate) fn teaching_fit(confidence: ConfidenceLevel, style: TeachingStyle) -> u8 {
    match (confidence, style) {
        (ConfidenceLevel::High, TeachingStyle::ResearchFocused) => 90,
        (ConfidenceLevel::Low, TeachingStyle::LectureHeavy) => 85,
        (_, TeachingStyle::Mixed) => 80,
        _ => 70,
    }
}

/// Highest workload a student is comfortable with at each confidence level.
pub(crate) const fn tolerated_workload(confidence: ConfidenceLevel) -> u8 {
    match confidence {
        ConfidenceLevel::Low => 5,
        ConfidenceLevel::Medium => 7,
        ConfidenceLevel::High => 10,
    }
}

pub(crate) fn workload_fit(confidence: ConfidenceLevel, workload: u8) -> u8 {
    let max = i32::from(tolerated_workload(confidence));
    let workload = i32::from(workload);

    let score = if workload <= max {
        100 - 5 * (max - workload)
    } else {
        100 - 15 * (workload - max)
    };

    score.clamp(0, 100) as u8
}

pub(crate) fn language_fit(university: &University) -> u8 {
    if university.language.primary_is_english() {
        95
    } else if university.language.offers_english_alternative() {
        80
    } else {
        60
    }
}

pub(crate) fn cost_fit(budget: BudgetLevel, tier: TuitionTier) -> u8 {
    match (budget, tier) {
        (_, TuitionTier::Free) => 100,
        (BudgetLevel::Low, TuitionTier::Low) => 95,
        (BudgetLevel::Low, TuitionTier::Medium) => 50,
        (BudgetLevel::Low, TuitionTier::High) => 10,
        (BudgetLevel::Medium, TuitionTier::Low) => 100,
        (BudgetLevel::Medium, TuitionTier::Medium) => 80,
        (BudgetLevel::Medium, TuitionTier::High) => 40,
        (BudgetLevel::High, TuitionTier::Low) => 100,
        (BudgetLevel::High, TuitionTier::Medium) => 95,
        (BudgetLevel::High, TuitionTier::High) => 85,
    }
}

pub(crate) fn visa_fit(fear: PrimaryFear, difficulty: VisaDifficulty) -> u8 {
    match (fear, difficulty) {
        (_, VisaDifficulty::Easy) => 100,
        (PrimaryFear::Visa, VisaDifficulty::Medium) => 60,
        (PrimaryFear::Visa, VisaDifficulty::Hard) => 20,
        (_, VisaDifficulty::Medium) => 85,
        (_, VisaDifficulty::Hard) => 70,
    }
}

pub(crate) fn support_fit(support: u8) -> u8 {
    support.min(10) * 10
}
