use chrono::{Duration, NaiveDate};

use crate::catalog::{CatalogStore, Scholarship, ScholarshipEligibility, TuitionTier, University};

use super::super::domain::{
    FitScore, Milestone, Path, PathId, PathKind, RiskAssessment, StudentProfile,
};
use super::config::{MatchingConfig, TimelineOffsets};

const RELAXED_WORKLOAD_CEILING: u8 = 9;
const SAFE_ACCEPTANCE_RATE: f32 = 10.0;

pub(crate) struct PathInputs<'a> {
    pub slot: usize,
    pub university: &'a University,
    pub fit: FitScore,
    pub risks: RiskAssessment,
}

pub(crate) fn assemble_path<C>(
    inputs: PathInputs<'_>,
    profile: &StudentProfile,
    catalog: &C,
    config: &MatchingConfig,
    today: NaiveDate,
) -> Path
where
    C: CatalogStore + ?Sized,
{
    let PathInputs {
        slot,
        university,
        fit,
        risks,
    } = inputs;
    let kind = PathKind::for_slot(slot);

    Path {
        id: PathId(format!("path-{}-{}", slot + 1, university.id.0)),
        kind,
        name: format!("{} ({})", university.name, university.city),
        description: describe(kind, university),
        fit,
        risks,
        not_for_you_if: not_for_you_if(university),
        university: university.clone(),
        scholarships: matched_scholarships(
            profile,
            university,
            catalog.scholarships(),
            config.max_scholarships,
        ),
        timeline: timeline(today, &config.timeline),
    }
}

fn describe(kind: PathKind, university: &University) -> String {
    format!(
        "{}: a {} program in {}, {} (world rank #{}), taught in {}.",
        kind.label(),
        university.teaching_style.label(),
        university.city,
        university.country,
        university.ranking,
        university.language.primary
    )
}

pub(crate) fn not_for_you_if(university: &University) -> Vec<String> {
    let mut reasons = Vec::new();

    if university.workload_intensity >= RELAXED_WORKLOAD_CEILING {
        reasons.push("You prefer a relaxed study environment".to_string());
    }

    if university.tuition.tier() == TuitionTier::High {
        reasons.push("You have a strict budget".to_string());
    }

    let language = &university.language;
    if !language.primary_is_english() && !language.offers_english_alternative() {
        reasons.push(format!(
            "You are not comfortable learning in {}",
            language.primary
        ));
    }

    if university.acceptance_rate < SAFE_ACCEPTANCE_RATE {
        reasons.push("You need a safer acceptance option".to_string());
    }

    reasons
}

pub(crate) fn matched_scholarships(
    profile: &StudentProfile,
    university: &University,
    scholarships: &[Scholarship],
    limit: usize,
) -> Vec<Scholarship> {
    scholarships
        .iter()
        .filter(|scholarship| scholarship.country == university.country)
        .filter(|scholarship| {
            let eligibility = &scholarship.eligibility;
            eligibility
                .education_stages
                .contains(&profile.education_stage)
                && eligibility.admits_country(&profile.current_country)
                && passes_gates(profile, eligibility)
        })
        .take(limit)
        .cloned()
        .collect()
}

/// Optional gates only bind when the profile supplies the matching value.
fn passes_gates(profile: &StudentProfile, eligibility: &ScholarshipEligibility) -> bool {
    let gpa_ok = match (eligibility.min_gpa, profile.gpa) {
        (Some(min), Some(gpa)) => gpa >= min,
        _ => true,
    };
    let age_ok = match (eligibility.max_age, profile.age) {
        (Some(max), Some(age)) => age <= max,
        _ => true,
    };
    let experience_ok = match (eligibility.min_years_experience, profile.years_experience) {
        (Some(min), Some(years)) => years >= min,
        _ => true,
    };

    gpa_ok && age_ok && experience_ok
}

/// Offset from `today`, saturating at the last representable date.
fn milestone_date(today: NaiveDate, days: i64) -> NaiveDate {
    match today.checked_add_signed(Duration::days(days)) {
        Some(date) => date,
        None => NaiveDate::MAX,
    }
}

pub(crate) fn timeline(today: NaiveDate, offsets: &TimelineOffsets) -> Vec<Milestone> {
    [
        (
            "Application Deadline",
            offsets.application_deadline_days,
            "Submit applications with transcripts, statements, and references",
        ),
        (
            "Visa Application",
            offsets.visa_application_days,
            "File the student visa application with your admission letter",
        ),
        (
            "Program Start",
            offsets.program_start_days,
            "Arrive, enrol, and attend orientation",
        ),
    ]
    .into_iter()
    .map(|(title, days, description)| Milestone {
        title: title.to_string(),
        date: milestone_date(today, days),
        description: description.to_string(),
    })
    .collect()
}
