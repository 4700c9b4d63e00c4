use crate::types::repository::RepositoryRecord;
use crate::types::scoring::Points;

pub fn issue_management_score(record: &RepositoryRecord) -> Points {
    points_for_open_issues(record.open_issues)
}

pub fn points_for_open_issues(open_issues: u64) -> Points {
    match open_issues {
        0 => 20,
        1..=10 => 15,
        11..=50 => 10,
        // One point lost per started block of ten issues past fifty.
        n => {
            let penalty = (n - 50).div_ceil(10).min(10);
            10 - penalty as Points
        }
    }
}
