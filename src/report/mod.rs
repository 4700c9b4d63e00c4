pub mod json;
pub mod text;

use crate::analyze::Analysis;
use crate::error::MonitorError;
use crate::types::report::{FetchMetadata, HealthGrade, HealthReport, RepositorySummary};
use crate::types::repository::RepositoryRecord;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn assemble(
    record: &RepositoryRecord,
    analysis: &Analysis,
    fetch: &FetchMetadata,
    generated_at: DateTime<Utc>,
) -> HealthReport {
    HealthReport {
        repository: RepositorySummary {
            full_name: record.full_name.clone(),
            owner: record.owner.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            language: record.language.clone(),
            default_branch: record.default_branch.clone(),
            license: record.license.clone(),
            stars: record.stars,
            forks: record.forks,
            watchers: record.watchers,
            open_issues: record.open_issues,
            size_kb: record.size_kb,
            archived: record.archived,
            disabled: record.disabled,
            created_at: record.created_at,
            updated_at: record.updated_at,
            pushed_at: record.pushed_at,
        },
        scores: analysis.breakdown,
        health_score: analysis.breakdown.health_score,
        grade: HealthGrade::from_score(analysis.breakdown.health_score),
        activity_level: analysis.activity,
        days_since_update: analysis.days_since_update,
        recommendations: analysis.recommendations.clone(),
        fetch: fetch.clone(),
        generated_at,
    }
}

pub fn render(report: &HealthReport, format: OutputFormat) -> Result<String, MonitorError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Json => json::to_json(report).map_err(MonitorError::Json),
    }
}

#[cfg(test)]
pub(crate) fn sample_report() -> HealthReport {
    use crate::analyze::analyze;
    use crate::types::repository::sample_record;

    let record = sample_record();
    let generated_at = record.updated_at + chrono::Duration::days(3);
    let analysis = analyze(&record, generated_at);
    let fetch = FetchMetadata {
        attempts: 2,
        elapsed_ms: 412,
        started_at: generated_at - chrono::Duration::seconds(1),
        finished_at: generated_at,
        rate_limit_remaining: Some(58),
    };
    assemble(&record, &analysis, &fetch, generated_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::ActivityLevel;

    #[test]
    fn assemble_copies_record_analysis_and_fetch_metadata() {
        let report = sample_report();
        assert_eq!(report.repository.full_name, "owner/awesome-project");
        assert_eq!(report.repository.stars, 1500);
        assert_eq!(report.repository.license.as_deref(), Some("Apache-2.0"));
        assert_eq!(report.health_score, report.scores.health_score);
        assert_eq!(report.health_score, 90);
        assert_eq!(report.grade, HealthGrade::Healthy);
        assert_eq!(report.activity_level, ActivityLevel::High);
        assert_eq!(report.days_since_update, 3);
        assert_eq!(report.fetch.attempts, 2);
        assert_eq!(report.fetch.elapsed_ms, 412);
        assert_eq!(
            report.recommendations,
            vec![crate::analyze::recommendations::HEALTHY.to_string()]
        );
    }

    #[test]
    fn render_dispatches_on_format() {
        let report = sample_report();
        let text = render(&report, OutputFormat::Text).expect("text should render");
        assert!(text.contains("REPOSITORY HEALTH REPORT"));
        let json = render(&report, OutputFormat::Json).expect("json should render");
        assert!(json.starts_with('{'));
    }
}
