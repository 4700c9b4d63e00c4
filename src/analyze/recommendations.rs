use crate::types::repository::RepositoryRecord;
use crate::types::scoring::ScoreBreakdown;

pub const INACTIVE: &str =
    "Repository appears inactive: no updates in over a year. Confirm it is still maintained";
pub const STALE: &str = "Consider updating the repository - it has been inactive for a while";
pub const ISSUE_BACKLOG: &str =
    "Review and triage open issues - the backlog may indicate maintenance debt";
pub const LOW_VISIBILITY: &str =
    "Low visibility: improve the README, topics and announcements to attract users";
pub const MISSING_LICENSE: &str = "Consider adding a license for better legal clarity";
pub const ARCHIVED: &str = "Repository is archived and read-only; it receives no further updates";
pub const DISABLED: &str = "Repository is disabled; its contents are not accessible";
pub const BELOW_AVERAGE: &str =
    "Repository health is below average - review maintenance practices";
pub const HEALTHY: &str = "Repository appears healthy! Keep up the good work.";

/// Ordered advisories; at least one entry is always returned.
pub fn recommendations(record: &RepositoryRecord, breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut advice = Vec::new();

    if breakdown.freshness == 0 {
        advice.push(INACTIVE);
    } else if breakdown.freshness <= 5 {
        advice.push(STALE);
    }
    if breakdown.issue_management <= 10 {
        advice.push(ISSUE_BACKLOG);
    }
    if breakdown.popularity < 10 {
        advice.push(LOW_VISIBILITY);
    }
    if record.license.is_none() {
        advice.push(MISSING_LICENSE);
    }
    if record.archived {
        advice.push(ARCHIVED);
    }
    if record.disabled {
        advice.push(DISABLED);
    }
    if breakdown.health_score < 50 {
        advice.push(BELOW_AVERAGE);
    }
    if advice.is_empty() {
        advice.push(HEALTHY);
    }

    advice.into_iter().map(str::to_string).collect()
}
