use serde::{Deserialize, Serialize};

/// Policy dials for selection and path assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Number of paths returned when enough candidates survive filtering.
    pub path_count: usize,
    /// Leading picks taken by score alone before country diversity applies.
    pub unconstrained_slots: usize,
    pub max_scholarships: usize,
    pub timeline: TimelineOffsets,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            path_count: 3,
            unconstrained_slots: 2,
            max_scholarships: 3,
            timeline: TimelineOffsets::default(),
        }
    }
}

/// Day offsets from the reference date for each generated milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineOffsets {
    pub application_deadline_days: i64,
    pub visa_application_days: i64,
    pub program_start_days: i64,
}

impl Default for TimelineOffsets {
    fn default() -> Self {
        Self {
            application_deadline_days: 180,
            visa_application_days: 270,
            program_start_days: 365,
        }
    }
}
