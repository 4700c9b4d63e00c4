use crate::types::repository::RepositoryRecord;
use chrono::{DateTime, Utc};
use serde::Deserialize;

// Fields without `Option` are required; serde rejects the body when they are
// missing, null or of the wrong type.
#[derive(Debug, Deserialize)]
struct RepoPayload {
    name: String,
    full_name: String,
    owner: OwnerPayload,
    description: Option<String>,
    language: Option<String>,
    default_branch: String,
    stargazers_count: u64,
    forks_count: u64,
    open_issues_count: u64,
    watchers_count: u64,
    size: u64,
    license: Option<LicensePayload>,
    archived: bool,
    disabled: bool,
    created_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
    pushed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct OwnerPayload {
    login: String,
}

#[derive(Debug, Deserialize)]
struct LicensePayload {
    spdx_id: Option<String>,
    name: Option<String>,
}

impl LicensePayload {
    fn identifier(self) -> Option<String> {
        self.spdx_id
            .filter(|id| !id.is_empty() && id != "NOASSERTION")
            .or(self.name)
            .filter(|value| !value.trim().is_empty())
    }
}

pub fn decode_record(body: &str) -> Result<RepositoryRecord, serde_json::Error> {
    let payload: RepoPayload = serde_json::from_str(body)?;
    Ok(RepositoryRecord {
        name: payload.name,
        full_name: payload.full_name,
        owner: payload.owner.login,
        description: payload.description.filter(|text| !text.trim().is_empty()),
        language: payload.language,
        default_branch: payload.default_branch,
        stars: payload.stargazers_count,
        forks: payload.forks_count,
        open_issues: payload.open_issues_count,
        watchers: payload.watchers_count,
        size_kb: payload.size,
        license: payload.license.and_then(LicensePayload::identifier),
        archived: payload.archived,
        disabled: payload.disabled,
        created_at: payload.created_at,
        updated_at: payload.updated_at,
        pushed_at: payload.pushed_at,
    })
}
