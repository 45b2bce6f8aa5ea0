use crate::catalog::University;

use super::super::domain::FitScore;
use super::config::MatchingConfig;

/// A filtered candidate together with its fit score.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScoredCandidate<'a> {
    pub university: &'a University,
    pub fit: FitScore,
}

/// Pick up to `path_count` candidates, spreading picks across countries.
///
/// Candidates are ranked by overall score with a stable sort, so equal scores
/// keep catalog order. The first `unconstrained_slots` picks ignore country.
/// Later picks skip countries already chosen; if that leaves slots open, the
/// skipped candidates backfill them in score order.
pub(crate) fn select_diverse<'a>(
    mut candidates: Vec<ScoredCandidate<'a>>,
    config: &MatchingConfig,
) -> Vec<ScoredCandidate<'a>> {
    candidates.sort_by(|a, b| b.fit.overall.cmp(&a.fit.overall));

    let target = config.path_count;
    let mut selected: Vec<ScoredCandidate<'a>> = Vec::with_capacity(target);
    let mut deferred: Vec<ScoredCandidate<'a>> = Vec::new();

    for candidate in candidates {
        if selected.len() >= target {
            break;
        }

        let country_taken = selected
            .iter()
            .any(|chosen| chosen.university.country == candidate.university.country);

        if selected.len() < config.unconstrained_slots || !country_taken {
            selected.push(candidate);
        } else {
            deferred.push(candidate);
        }
    }

    let open_slots = target.saturating_sub(selected.len());
    selected.extend(deferred.into_iter().take(open_slots));

    selected
}
