use crate::types::scoring::{Points, ScoreBreakdown};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthGrade {
    Healthy,
    Fair,
    Poor,
}

impl HealthGrade {
    pub fn from_score(score: Points) -> Self {
        if score >= 80 {
            HealthGrade::Healthy
        } else if score >= 60 {
            HealthGrade::Fair
        } else {
            HealthGrade::Poor
        }
    }
}

/// Repository identity and raw metrics copied into the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub full_name: String,
    pub owner: String,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub default_branch: String,
    pub license: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub open_issues: u64,
    pub size_kb: u64,
    pub archived: bool,
    pub disabled: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchMetadata {
    pub attempts: u32,
    pub elapsed_ms: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub rate_limit_remaining: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub repository: RepositorySummary,
    pub scores: ScoreBreakdown,
    pub health_score: Points,
    pub grade: HealthGrade,
    pub activity_level: ActivityLevel,
    pub days_since_update: i64,
    pub recommendations: Vec<String>,
    pub fetch: FetchMetadata,
    pub generated_at: DateTime<Utc>,
}
