use crate::types::report::{HealthGrade, HealthReport};
use crate::types::scoring::{BASE_POINTS, FRESHNESS_MAX, ISSUE_MANAGEMENT_MAX, POPULARITY_MAX};
use chrono::{DateTime, Utc};

const RULE_WIDTH: usize = 60;
const DESCRIPTION_LIMIT: usize = 80;

pub fn to_text(report: &HealthReport) -> String {
    let repo = &report.repository;
    let rule = "=".repeat(RULE_WIDTH);
    let mut output = String::new();

    output.push_str(&format!("{rule}\nREPOSITORY HEALTH REPORT\n{rule}\n\n"));

    output.push_str("BASIC INFORMATION\n");
    output.push_str(&format!("Repository: {}\n", repo.full_name));
    output.push_str(&format!(
        "Description: {}\n",
        truncate(
            repo.description.as_deref().unwrap_or("No description provided"),
            DESCRIPTION_LIMIT
        )
    ));
    output.push_str(&format!(
        "Primary Language: {}\n",
        repo.language.as_deref().unwrap_or("Not specified")
    ));
    output.push_str(&format!("Default Branch: {}\n", repo.default_branch));
    output.push_str(&format!(
        "License: {}\n",
        repo.license.as_deref().unwrap_or("Not specified")
    ));
    if repo.archived {
        output.push_str("Status: archived\n");
    }
    if repo.disabled {
        output.push_str("Status: disabled\n");
    }

    output.push_str("\nMETRICS\n");
    output.push_str(&format!("Stars: {}\n", group_thousands(repo.stars)));
    output.push_str(&format!("Forks: {}\n", group_thousands(repo.forks)));
    output.push_str(&format!("Watchers: {}\n", group_thousands(repo.watchers)));
    output.push_str(&format!("Open Issues: {}\n", group_thousands(repo.open_issues)));
    output.push_str(&format!("Size: {} KB\n", group_thousands(repo.size_kb)));

    output.push_str("\nACTIVITY\n");
    output.push_str(&format!("Created: {}\n", date_or_unknown(repo.created_at)));
    output.push_str(&format!(
        "Last Updated: {} ({} days ago)\n",
        repo.updated_at.format("%Y-%m-%d"),
        report.days_since_update
    ));
    output.push_str(&format!("Last Push: {}\n", date_or_unknown(repo.pushed_at)));

    output.push_str("\nHEALTH ASSESSMENT\n");
    output.push_str(&format!(
        "Overall Health Score: {}/100 [{}]\n",
        report.health_score,
        grade_label(report.grade)
    ));
    output.push_str(&format!("Activity Level: {:?}\n", report.activity_level));
    output.push_str(&format!(
        "- popularity: {}/{POPULARITY_MAX}\n- freshness: {}/{FRESHNESS_MAX}\n- issue management: {}/{ISSUE_MANAGEMENT_MAX}\n- base: {}/{BASE_POINTS}\n",
        report.scores.popularity,
        report.scores.freshness,
        report.scores.issue_management,
        report.scores.base
    ));

    output.push_str("\nRECOMMENDATIONS\n");
    for recommendation in &report.recommendations {
        output.push_str(&format!("- {recommendation}\n"));
    }

    output.push_str(&format!(
        "\nFetched in {} ms ({} attempt{}), generated {}\n",
        report.fetch.elapsed_ms,
        report.fetch.attempts,
        if report.fetch.attempts == 1 { "" } else { "s" },
        report.generated_at.to_rfc3339()
    ));
    output.push_str(&rule);
    output.push('\n');
    output
}

fn grade_label(grade: HealthGrade) -> &'static str {
    match grade {
        HealthGrade::Healthy => "healthy",
        HealthGrade::Fair => "fair",
        HealthGrade::Poor => "poor",
    }
}

fn date_or_unknown(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let head: String = text.chars().take(limit).collect();
    format!("{head}...")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
