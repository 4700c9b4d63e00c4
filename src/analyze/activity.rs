use crate::types::report::ActivityLevel;
use crate::types::repository::RepositoryRecord;

/// Blends reach (forks weigh double) with recency on a 0–10 scale.
pub fn activity_level(record: &RepositoryRecord, days_since_update: i64) -> ActivityLevel {
    let reach = record.stars as f64 + record.forks as f64 * 2.0;
    let popularity = (reach / 100.0).min(10.0);
    let recency = (10.0 - days_since_update as f64 / 30.0).max(0.0);
    let combined = (popularity + recency) / 2.0;

    if combined >= 7.0 {
        ActivityLevel::High
    } else if combined >= 4.0 {
        ActivityLevel::Medium
    } else {
        ActivityLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::repository::sample_record;

    #[test]
    fn popular_and_recent_is_high() {
        let record = sample_record();
        assert_eq!(activity_level(&record, 0), ActivityLevel::High);
    }

    #[test]
    fn popular_but_stale_is_medium() {
        let record = sample_record();
        assert_eq!(activity_level(&record, 1000), ActivityLevel::Medium);
    }

    #[test]
    fn small_and_stale_is_low() {
        let mut record = sample_record();
        record.stars = 3;
        record.forks = 0;
        assert_eq!(activity_level(&record, 400), ActivityLevel::Low);
    }

    #[test]
    fn small_but_recent_is_medium() {
        let mut record = sample_record();
        record.stars = 0;
        record.forks = 0;
        assert_eq!(activity_level(&record, 0), ActivityLevel::Medium);
    }
}
