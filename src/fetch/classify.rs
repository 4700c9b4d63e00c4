use crate::fetch::decode::decode_record;
use crate::fetch::transport::{HttpResponse, TransportError};
use crate::types::repository::RepositoryRecord;
use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    RateLimited,
    TransientNetwork,
    ServerError,
    ClientError,
    MalformedResponse,
}

impl FailureKind {
    pub fn hint(self) -> &'static str {
        match self {
            FailureKind::NotFound => "the repository does not exist or is private",
            FailureKind::RateLimited => "the API rate limit was exceeded; try again later",
            FailureKind::TransientNetwork => "check network connectivity and try again",
            FailureKind::ServerError => "the API is unavailable; try again later",
            FailureKind::ClientError => {
                "the request was rejected; check the repository name and configuration"
            }
            FailureKind::MalformedResponse => {
                "the API response did not match the expected repository schema"
            }
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::NotFound => "repository not found",
            FailureKind::RateLimited => "rate limited",
            FailureKind::TransientNetwork => "network error",
            FailureKind::ServerError => "server error",
            FailureKind::ClientError => "client error",
            FailureKind::MalformedResponse => "malformed response",
        };
        f.write_str(label)
    }
}

/// Outcome of a single request attempt.
#[derive(Debug)]
pub enum Attempt {
    Success(Box<RepositoryRecord>),
    Retryable {
        kind: FailureKind,
        detail: String,
        wait_hint: Option<Duration>,
    },
    Fatal {
        kind: FailureKind,
        detail: String,
    },
}

pub fn classify(result: Result<HttpResponse, TransportError>, now: DateTime<Utc>) -> Attempt {
    let response = match result {
        Ok(response) => response,
        Err(error) => {
            return Attempt::Retryable {
                kind: FailureKind::TransientNetwork,
                detail: error.to_string(),
                wait_hint: None,
            }
        }
    };

    match response.status {
        200..=299 => match decode_record(&response.body) {
            Ok(record) => Attempt::Success(Box::new(record)),
            Err(error) => Attempt::Fatal {
                kind: FailureKind::MalformedResponse,
                detail: error.to_string(),
            },
        },
        404 => Attempt::Fatal {
            kind: FailureKind::NotFound,
            detail: "status 404".to_string(),
        },
        429 => rate_limited(&response, now),
        403 if rate_limit_remaining(&response) == Some(0) => rate_limited(&response, now),
        500..=599 => Attempt::Retryable {
            kind: FailureKind::ServerError,
            detail: format!("status {}", response.status),
            wait_hint: None,
        },
        status => Attempt::Fatal {
            kind: FailureKind::ClientError,
            detail: format!("status {status}{}", api_message(&response)),
        },
    }
}

fn rate_limited(response: &HttpResponse, now: DateTime<Utc>) -> Attempt {
    Attempt::Retryable {
        kind: FailureKind::RateLimited,
        detail: format!("status {}{}", response.status, api_message(response)),
        wait_hint: reset_hint(response, now),
    }
}

pub fn rate_limit_remaining(response: &HttpResponse) -> Option<u64> {
    response
        .header("x-ratelimit-remaining")
        .and_then(|value| value.trim().parse().ok())
}

/// `Retry-After` (seconds) wins over `X-RateLimit-Reset` (epoch seconds).
fn reset_hint(response: &HttpResponse, now: DateTime<Utc>) -> Option<Duration> {
    if let Some(seconds) = response
        .header("retry-after")
        .and_then(|value| value.trim().parse::<u64>().ok())
    {
        return Some(Duration::from_secs(seconds));
    }
    response
        .header("x-ratelimit-reset")
        .and_then(|value| value.trim().parse::<i64>().ok())
        .map(|reset| Duration::from_secs(reset.saturating_sub(now.timestamp()).max(0) as u64))
}

fn api_message(response: &HttpResponse) -> String {
    serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|body| body.get("message")?.as_str().map(str::to_string))
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::decode::fixtures::REPO_BODY;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn kind_of(attempt: &Attempt) -> Option<(FailureKind, bool)> {
        match attempt {
            Attempt::Success(_) => None,
            Attempt::Retryable { kind, .. } => Some((*kind, true)),
            Attempt::Fatal { kind, .. } => Some((*kind, false)),
        }
    }

    #[test]
    fn success_decodes_record() {
        let attempt = classify(Ok(HttpResponse::new(200, REPO_BODY)), now());
        match attempt {
            Attempt::Success(record) => assert_eq!(record.full_name, "owner/test-repo"),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn undecodable_success_is_fatal_malformed() {
        let attempt = classify(Ok(HttpResponse::new(200, r#"{"name":"x"}"#)), now());
        assert_eq!(
            kind_of(&attempt),
            Some((FailureKind::MalformedResponse, false))
        );
    }

    #[test]
    fn not_found_is_fatal() {
        let attempt = classify(Ok(HttpResponse::new(404, "")), now());
        assert_eq!(kind_of(&attempt), Some((FailureKind::NotFound, false)));
    }

    #[test]
    fn server_errors_are_retryable() {
        for status in [500, 502, 503, 504] {
            let attempt = classify(Ok(HttpResponse::new(status, "")), now());
            assert_eq!(kind_of(&attempt), Some((FailureKind::ServerError, true)));
        }
    }

    #[test]
    fn transport_errors_are_retryable_network_failures() {
        let attempt = classify(
            Err(TransportError::Timeout(Duration::from_secs(10))),
            now(),
        );
        assert_eq!(
            kind_of(&attempt),
            Some((FailureKind::TransientNetwork, true))
        );
    }

    #[test]
    fn other_client_errors_are_fatal_with_api_message() {
        let attempt = classify(
            Ok(HttpResponse::new(422, r#"{"message":"Validation Failed"}"#)),
            now(),
        );
        match attempt {
            Attempt::Fatal { kind, detail } => {
                assert_eq!(kind, FailureKind::ClientError);
                assert_eq!(detail, "status 422: Validation Failed");
            }
            other => panic!("expected fatal, got {other:?}"),
        }
    }

    #[test]
    fn forbidden_without_exhausted_quota_is_client_error() {
        let response = HttpResponse::new(403, "").with_header("X-RateLimit-Remaining", "12");
        let attempt = classify(Ok(response), now());
        assert_eq!(kind_of(&attempt), Some((FailureKind::ClientError, false)));
    }

    #[test]
    fn forbidden_with_exhausted_quota_is_rate_limited_with_reset_hint() {
        let reset = now().timestamp() + 42;
        let response = HttpResponse::new(403, r#"{"message":"API rate limit exceeded"}"#)
            .with_header("X-RateLimit-Remaining", "0")
            .with_header("X-RateLimit-Reset", reset.to_string());
        match classify(Ok(response), now()) {
            Attempt::Retryable {
                kind, wait_hint, ..
            } => {
                assert_eq!(kind, FailureKind::RateLimited);
                assert_eq!(wait_hint, Some(Duration::from_secs(42)));
            }
            other => panic!("expected retryable, got {other:?}"),
        }
    }

    #[test]
    fn too_many_requests_prefers_retry_after() {
        let response = HttpResponse::new(429, "")
            .with_header("Retry-After", "7")
            .with_header("X-RateLimit-Reset", (now().timestamp() + 600).to_string());
        match classify(Ok(response), now()) {
            Attempt::Retryable { wait_hint, .. } => {
                assert_eq!(wait_hint, Some(Duration::from_secs(7)));
            }
            other => panic!("expected retryable, got {other:?}"),
        }
    }

    #[test]
    fn reset_in_the_past_means_no_wait() {
        let response = HttpResponse::new(429, "")
            .with_header("X-RateLimit-Reset", (now().timestamp() - 30).to_string());
        match classify(Ok(response), now()) {
            Attempt::Retryable { wait_hint, .. } => assert_eq!(wait_hint, Some(Duration::ZERO)),
            other => panic!("expected retryable, got {other:?}"),
        }
    }

    #[test]
    fn rate_limit_without_headers_has_no_hint() {
        match classify(Ok(HttpResponse::new(429, "")), now()) {
            Attempt::Retryable {
                kind, wait_hint, ..
            } => {
                assert_eq!(kind, FailureKind::RateLimited);
                assert!(wait_hint.is_none());
            }
            other => panic!("expected retryable, got {other:?}"),
        }
    }

    #[test]
    fn remaining_header_parses() {
        let response = HttpResponse::new(200, "").with_header("X-RateLimit-Remaining", "4999");
        assert_eq!(rate_limit_remaining(&response), Some(4999));
        assert_eq!(rate_limit_remaining(&HttpResponse::new(200, "")), None);
    }
}
