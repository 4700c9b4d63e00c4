pub mod activity;
pub mod freshness;
pub mod issues;
pub mod popularity;
pub mod recommendations;

use crate::types::report::ActivityLevel;
use crate::types::repository::RepositoryRecord;
use crate::types::scoring::{Points, ScoreBreakdown, BASE_POINTS};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
    pub days_since_update: i64,
    pub activity: ActivityLevel,
}

/// Archived or disabled repositories forfeit the base award.
pub fn base_score(record: &RepositoryRecord) -> Points {
    if record.archived || record.disabled {
        0
    } else {
        BASE_POINTS
    }
}

pub fn analyze(record: &RepositoryRecord, now: DateTime<Utc>) -> Analysis {
    let days_since_update = freshness::days_since_update(record, now);
    let breakdown = ScoreBreakdown::new(
        popularity::popularity_score(record),
        freshness::freshness_score(days_since_update),
        issues::issue_management_score(record),
        base_score(record),
    );
    tracing::debug!(?breakdown, days_since_update, "computed score breakdown");

    Analysis {
        recommendations: recommendations::recommendations(record, &breakdown),
        activity: activity::activity_level(record, days_since_update),
        breakdown,
        days_since_update,
    }
}
