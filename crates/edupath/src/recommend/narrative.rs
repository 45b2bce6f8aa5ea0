//! Free-text narration for assembled paths.
//!
//! A narrator only reads the profile and path it is handed; it can decorate
//! them for display but never feeds anything back into scoring or risk.
//! Model-backed narrators plug in behind the same trait and are injected into
//! the service at startup.

use futures::stream::{self, BoxStream, StreamExt};

use super::domain::{Path, PrimaryFear, RiskSeverity, StudentProfile};

/// Lazily produced narration, one display chunk at a time.
pub type NarrativeStream = BoxStream<'static, String>;

pub trait NarrativeGenerator: Send + Sync {
    fn narrate(&self, profile: &StudentProfile, path: &Path) -> NarrativeStream;
}

/// Deterministic narrator built from fixed templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl NarrativeGenerator for TemplateNarrator {
    fn narrate(&self, profile: &StudentProfile, path: &Path) -> NarrativeStream {
        stream::iter(template_chunks(profile, path)).boxed()
    }
}

pub(crate) fn template_chunks(profile: &StudentProfile, path: &Path) -> Vec<String> {
    let university = &path.university;
    let breakdown = &path.fit.breakdown;
    let mut chunks = Vec::with_capacity(6);

    chunks.push(format!(
        "{} scores {}/100 for you. {}\n",
        university.name, path.fit.overall, path.description
    ));

    let (strongest, weakest) = strongest_and_weakest(&[
        ("teaching style", breakdown.teaching),
        ("workload", breakdown.workload),
        ("language", breakdown.language),
        ("cost", breakdown.cost),
        ("visa", breakdown.visa),
        ("student support", breakdown.support),
    ]);
    chunks.push(format!(
        "Its strongest match is {} ({}/100); the weakest is {} ({}/100).\n",
        strongest.0, strongest.1, weakest.0, weakest.1
    ));

    chunks.push(fear_note(profile.fear, path));

    let high_risks: Vec<&str> = path
        .risks
        .entries()
        .into_iter()
        .filter(|(_, entry)| entry.severity == RiskSeverity::High)
        .map(|(name, _)| name)
        .collect();
    if high_risks.is_empty() {
        chunks.push("No risk category is rated high for this path.\n".to_string());
    } else {
        chunks.push(format!(
            "Watch the {} risk{} closely.\n",
            high_risks.join(" and "),
            if high_risks.len() == 1 { "" } else { "s" }
        ));
    }

    if let Some(scholarship) = path.scholarships.first() {
        chunks.push(format!(
            "Start with the {} from {}, due {}.\n",
            scholarship.name, scholarship.provider, scholarship.deadline
        ));
    }

    if let (Some(first), Some(last)) = (path.timeline.first(), path.timeline.last()) {
        chunks.push(format!(
            "Your first milestone is the {} on {}; the program starts on {}.\n",
            first.title.to_lowercase(),
            first.date,
            last.date
        ));
    }

    chunks
}

/// Highest and lowest scoring dimensions; ties resolve to the earlier entry.
fn strongest_and_weakest<'a>(
    dimensions: &[(&'a str, u8); 6],
) -> ((&'a str, u8), (&'a str, u8)) {
    let mut strongest = dimensions[0];
    let mut weakest = dimensions[0];
    for &dimension in &dimensions[1..] {
        if dimension.1 > strongest.1 {
            strongest = dimension;
        }
        if dimension.1 < weakest.1 {
            weakest = dimension;
        }
    }
    (strongest, weakest)
}

fn fear_note(fear: PrimaryFear, path: &Path) -> String {
    match fear {
        PrimaryFear::Money => format!(
            "You worried about money: tuition is {} {} a year and {} scholarship{} matched.\n",
            path.university.tuition.annual_cost,
            path.university.tuition.currency,
            path.scholarships.len(),
            if path.scholarships.len() == 1 { "" } else { "s" }
        ),
        PrimaryFear::Visa => format!(
            "You worried about the visa: {}.\n",
            path.risks.visa.description.to_lowercase()
        ),
        PrimaryFear::Failure => format!(
            "You worried about failing: {}.\n",
            path.risks.academic.description.to_lowercase()
        ),
        PrimaryFear::Time => format!(
            "You worried about time: {}.\n",
            path.risks.time.description.to_lowercase()
        ),
    }
}
