use crate::error::MonitorError;
use chrono::{DateTime, Utc};
use std::fmt;

/// A validated `owner/name` repository identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    pub fn parse(input: &str) -> Result<Self, MonitorError> {
        let invalid = || MonitorError::InvalidRepository(input.to_string());
        let (owner, name) = input.trim().split_once('/').ok_or_else(invalid)?;
        if !is_url_safe_segment(owner) || !is_url_safe_segment(name) {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

// Path segments are interpolated into the request URL without escaping.
fn is_url_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Repository attributes needed for scoring and reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryRecord {
    pub name: String,
    pub full_name: String,
    pub owner: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub default_branch: String,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub watchers: u64,
    pub size_kb: u64,
    pub license: Option<String>,
    pub archived: bool,
    pub disabled: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
pub(crate) fn sample_record() -> RepositoryRecord {
    use chrono::TimeZone;

    RepositoryRecord {
        name: "awesome-project".to_string(),
        full_name: "owner/awesome-project".to_string(),
        owner: "owner".to_string(),
        description: Some("An awesome test project".to_string()),
        language: Some("Rust".to_string()),
        default_branch: "main".to_string(),
        stars: 1500,
        forks: 300,
        open_issues: 10,
        watchers: 1200,
        size_kb: 2048,
        license: Some("Apache-2.0".to_string()),
        archived: false,
        disabled: false,
        created_at: Some(Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap()),
        updated_at: Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap(),
        pushed_at: Some(Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_owner_and_name() {
        let slug = RepoSlug::parse("rust-lang/rust").expect("slug should parse");
        assert_eq!(slug.owner, "rust-lang");
        assert_eq!(slug.name, "rust");
        assert_eq!(slug.to_string(), "rust-lang/rust");
    }

    #[test]
    fn parse_accepts_dots_and_underscores() {
        let slug = RepoSlug::parse("some_org/site.github.io").expect("slug should parse");
        assert_eq!(slug.name, "site.github.io");
    }

    #[test]
    fn parse_rejects_empty_segments() {
        for input in ["", "/", "owner/", "/repo", "owner"] {
            assert!(
                matches!(
                    RepoSlug::parse(input),
                    Err(MonitorError::InvalidRepository(_))
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_rejects_extra_segments_and_unsafe_characters() {
        for input in ["a/b/c", "owner/re po", "owner/..", "own?er/repo", "owner/repo#1"] {
            assert!(RepoSlug::parse(input).is_err(), "{input:?} should be rejected");
        }
    }
}
