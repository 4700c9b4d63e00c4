use crate::types::repository::RepositoryRecord;
use crate::types::scoring::{Points, POPULARITY_MAX};

/// Lower bound of `stars + forks` for each band, highest first.
const TIERS: [(u64, Points); 8] = [
    (10_000, 30),
    (5_000, 28),
    (1_000, 25),
    (500, 22),
    (100, 18),
    (50, 14),
    (10, 10),
    (1, 5),
];

pub fn popularity_score(record: &RepositoryRecord) -> Points {
    points_for_reach(record.stars.saturating_add(record.forks))
}

pub fn points_for_reach(reach: u64) -> Points {
    TIERS
        .iter()
        .find(|(floor, _)| reach >= *floor)
        .map(|(_, points)| (*points).min(POPULARITY_MAX))
        .unwrap_or(0)
}
