use crate::types::repository::RepositoryRecord;
use crate::types::scoring::Points;
use chrono::{DateTime, Utc};

/// Whole days elapsed since the last update; timestamps in the future count as 0.
pub fn days_since_update(record: &RepositoryRecord, now: DateTime<Utc>) -> i64 {
    (now - record.updated_at).num_days().max(0)
}

pub fn freshness_score(days: i64) -> Points {
    match days {
        i64::MIN..=7 => 30,
        8..=30 => 25,
        31..=90 => 15,
        91..=365 => 5,
        _ => 0,
    }
}
