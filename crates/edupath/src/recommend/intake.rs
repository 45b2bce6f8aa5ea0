use super::domain::{ProfileSubmission, StudentProfile};

/// Validation errors raised before a profile reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("profile is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("profile field `{field}` is out of range ({detail})")]
    OutOfRange {
        field: &'static str,
        detail: String,
    },
}

const DEFAULT_SITUATION: &str = "general";
const MAX_GPA: f32 = 4.0;

/// Guard responsible for producing `StudentProfile` instances.
#[derive(Debug, Clone, Default)]
pub struct ProfileGuard;

impl ProfileGuard {
    /// Convert an inbound submission into a validated profile.
    pub fn profile_from_submission(
        &self,
        submission: ProfileSubmission,
    ) -> Result<StudentProfile, ProfileViolation> {
        let education_stage = submission
            .education_stage
            .ok_or(ProfileViolation::MissingField("education_stage"))?;
        let budget = submission
            .budget
            .ok_or(ProfileViolation::MissingField("budget"))?;
        let fear = submission
            .fear
            .ok_or(ProfileViolation::MissingField("fear"))?;
        let confidence = submission
            .confidence
            .ok_or(ProfileViolation::MissingField("confidence"))?;

        let current_country = non_blank(submission.current_country)
            .ok_or(ProfileViolation::MissingField("current_country"))?;

        if let Some(gpa) = submission.gpa {
            if !gpa.is_finite() || !(0.0..=MAX_GPA).contains(&gpa) {
                return Err(ProfileViolation::OutOfRange {
                    field: "gpa",
                    detail: format!("{gpa} not within 0.0-{MAX_GPA:.1}"),
                });
            }
        }

        Ok(StudentProfile {
            situation: non_blank(submission.situation)
                .unwrap_or_else(|| DEFAULT_SITUATION.to_string()),
            current_country,
            target_country: non_blank(submission.target_country),
            education_stage,
            budget,
            fear,
            confidence,
            gpa: submission.gpa,
            age: submission.age,
            years_experience: submission.years_experience,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
