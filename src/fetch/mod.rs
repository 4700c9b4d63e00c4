pub mod backoff;
pub mod classify;
pub mod decode;
pub mod transport;

pub use classify::FailureKind;

use crate::types::config::FetchConfig;
use crate::types::report::FetchMetadata;
use crate::types::repository::{RepoSlug, RepositoryRecord};
use backoff::backoff_delay;
use chrono::Utc;
use classify::{classify, rate_limit_remaining, Attempt};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};
use transport::{HttpTransport, Transport, TransportError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} after {attempts} attempt(s): {detail} ({})", .kind.hint())]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub attempts: u32,
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct Fetched {
    pub record: RepositoryRecord,
    pub meta: FetchMetadata,
}

pub type FetchOutcome = Result<Fetched, FetchFailure>;

type Sleeper = Box<dyn Fn(Duration)>;

pub struct FetchClient<T: Transport> {
    transport: T,
    config: FetchConfig,
    sleep: Sleeper,
}

impl FetchClient<HttpTransport> {
    pub fn http(config: FetchConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config.user_agent)?;
        Ok(Self::new(config, transport))
    }
}

impl<T: Transport> FetchClient<T> {
    pub fn new(config: FetchConfig, transport: T) -> Self {
        Self {
            transport,
            config,
            sleep: Box::new(std::thread::sleep),
        }
    }

    #[cfg(test)]
    pub fn with_sleeper(mut self, sleep: impl Fn(Duration) + 'static) -> Self {
        self.sleep = Box::new(sleep);
        self
    }

    pub fn repository_url(&self, slug: &RepoSlug) -> String {
        format!(
            "{}/repos/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            slug.owner,
            slug.name
        )
    }

    /// Fetches one repository, retrying transient failures up to `max_retries` times.
    pub fn fetch(&self, slug: &RepoSlug) -> FetchOutcome {
        let url = self.repository_url(slug);
        let started_at = Utc::now();
        let clock = Instant::now();
        let mut remaining = None;
        let attempt_budget = self.config.max_retries.saturating_add(1);
        let mut last_failure = None;

        info!(repository = %slug, %url, "fetching repository metadata");

        for attempts in 1..=attempt_budget {
            let result = self.transport.get(&url, self.config.timeout);
            if let Ok(response) = &result {
                debug!(attempt = attempts, status = response.status, "received response");
                if let Some(left) = rate_limit_remaining(response) {
                    remaining = Some(left);
                    info!(
                        remaining = left,
                        reset = response.header("x-ratelimit-reset").unwrap_or("unknown"),
                        "rate limit status"
                    );
                }
            }

            let (kind, detail, wait_hint) = match classify(result, Utc::now()) {
                Attempt::Success(record) => {
                    let elapsed = clock.elapsed();
                    info!(
                        attempts,
                        elapsed_ms = elapsed.as_millis() as u64,
                        "fetch completed"
                    );
                    return Ok(Fetched {
                        record: *record,
                        meta: FetchMetadata {
                            attempts,
                            elapsed_ms: elapsed.as_millis() as u64,
                            started_at,
                            finished_at: Utc::now(),
                            rate_limit_remaining: remaining,
                        },
                    });
                }
                Attempt::Fatal { kind, detail } => {
                    warn!(
                        attempt = attempts,
                        %kind,
                        %detail,
                        elapsed_ms = clock.elapsed().as_millis() as u64,
                        "fetch failed without retry"
                    );
                    return Err(FetchFailure {
                        kind,
                        attempts,
                        detail,
                    });
                }
                Attempt::Retryable {
                    kind,
                    detail,
                    wait_hint,
                } => (kind, detail, wait_hint),
            };

            if attempts == attempt_budget {
                last_failure = Some(FetchFailure {
                    kind,
                    attempts,
                    detail,
                });
                break;
            }

            let retry_index = attempts - 1;
            let delay = match wait_hint {
                Some(wait) if wait > self.config.max_rate_limit_wait => {
                    warn!(
                        attempt = attempts,
                        wait_secs = wait.as_secs(),
                        elapsed_ms = clock.elapsed().as_millis() as u64,
                        "rate limit resets too far in the future to wait"
                    );
                    return Err(FetchFailure {
                        kind,
                        attempts,
                        detail: format!("{detail}; resets in {}s", wait.as_secs()),
                    });
                }
                Some(wait) => wait,
                None => backoff_delay(
                    self.config.backoff_base,
                    self.config.max_backoff,
                    retry_index,
                ),
            };

            warn!(
                attempt = attempts,
                %kind,
                %detail,
                delay_ms = delay.as_millis() as u64,
                "retrying request"
            );
            (self.sleep)(delay);
        }

        // The range always holds at least one attempt.
        let failure = last_failure.unwrap_or_else(|| FetchFailure {
            kind: FailureKind::TransientNetwork,
            attempts: 0,
            detail: "no request was attempted".to_string(),
        });
        warn!(
            attempts = failure.attempts,
            kind = %failure.kind,
            detail = %failure.detail,
            elapsed_ms = clock.elapsed().as_millis() as u64,
            "retry budget exhausted"
        );
        Err(failure)
    }
}
