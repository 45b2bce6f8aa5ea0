use crate::catalog::{TuitionTier, University, VisaDifficulty};

use super::super::domain::{BudgetLevel, ConfidenceLevel, PrimaryFear, StudentProfile};

/// Workload at or above which low-confidence students are screened out.
const LOW_CONFIDENCE_WORKLOAD_CEILING: u8 = 9;

/// Hard constraints; a candidate must satisfy every one to be scored.
pub(crate) fn is_eligible(profile: &StudentProfile, university: &University) -> bool {
    if let Some(target) = &profile.target_country {
        if university.country != *target {
            return false;
        }
    }

    if profile.budget == BudgetLevel::Low && university.tuition.tier() == TuitionTier::High {
        return false;
    }

    if profile.fear == PrimaryFear::Visa && university.visa_difficulty == VisaDifficulty::Hard {
        return false;
    }

    if profile.confidence == ConfidenceLevel::Low
        && university.workload_intensity >= LOW_CONFIDENCE_WORKLOAD_CEILING
    {
        return false;
    }

    true
}

pub(crate) fn eligible_candidates<'a>(
    profile: &StudentProfile,
    universities: &'a [University],
) -> Vec<&'a University> {
    universities
        .iter()
        .filter(|university| is_eligible(profile, university))
        .collect()
}
