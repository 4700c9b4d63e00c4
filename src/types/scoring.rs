use serde::{Deserialize, Serialize};

pub type Points = u32;

pub const POPULARITY_MAX: Points = 30;
pub const FRESHNESS_MAX: Points = 30;
pub const ISSUE_MANAGEMENT_MAX: Points = 20;
pub const BASE_POINTS: Points = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub popularity: Points,
    pub freshness: Points,
    pub issue_management: Points,
    pub base: Points,
    pub health_score: Points,
}

impl ScoreBreakdown {
    /// Clamps each component to its band and derives the composite.
    pub fn new(
        popularity: Points,
        freshness: Points,
        issue_management: Points,
        base: Points,
    ) -> Self {
        let popularity = popularity.min(POPULARITY_MAX);
        let freshness = freshness.min(FRESHNESS_MAX);
        let issue_management = issue_management.min(ISSUE_MANAGEMENT_MAX);
        let base = base.min(BASE_POINTS);
        Self {
            popularity,
            freshness,
            issue_management,
            base,
            health_score: popularity + freshness + issue_management + base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sums_components() {
        let breakdown = ScoreBreakdown::new(18, 25, 15, 20);
        assert_eq!(breakdown.health_score, 78);
    }

    #[test]
    fn new_clamps_out_of_band_components() {
        let breakdown = ScoreBreakdown::new(500, 31, 21, 99);
        assert_eq!(breakdown.popularity, POPULARITY_MAX);
        assert_eq!(breakdown.freshness, FRESHNESS_MAX);
        assert_eq!(breakdown.issue_management, ISSUE_MANAGEMENT_MAX);
        assert_eq!(breakdown.base, BASE_POINTS);
        assert_eq!(breakdown.health_score, 100);
    }
}
