use crate::fetch::transport::TransportError;
use crate::fetch::{FailureKind, FetchFailure};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("invalid repository '{0}': expected format owner/repo")]
    InvalidRepository(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error(transparent)]
    Fetch(#[from] FetchFailure),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MonitorError {
    pub fn exit_code(&self) -> i32 {
        match self {
            MonitorError::InvalidRepository(_) | MonitorError::ConfigParse(_) => {
                crate::exit_code::INVALID_INPUT
            }
            MonitorError::Fetch(failure) if failure.kind == FailureKind::NotFound => {
                crate::exit_code::NOT_FOUND
            }
            MonitorError::Fetch(_) => crate::exit_code::FETCH_FAILURE,
            MonitorError::Transport(_) | MonitorError::Io(_) | MonitorError::Json(_) => {
                crate::exit_code::RUNTIME_FAILURE
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MonitorError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_error(kind: FailureKind) -> MonitorError {
        MonitorError::Fetch(FetchFailure {
            kind,
            attempts: 1,
            detail: "status 404".to_string(),
        })
    }

    #[test]
    fn not_found_has_its_own_exit_code() {
        assert_eq!(
            fetch_error(FailureKind::NotFound).exit_code(),
            crate::exit_code::NOT_FOUND
        );
        assert_eq!(
            fetch_error(FailureKind::ServerError).exit_code(),
            crate::exit_code::FETCH_FAILURE
        );
    }

    #[test]
    fn input_problems_map_to_invalid_input() {
        let err = MonitorError::InvalidRepository("nodejs".to_string());
        assert_eq!(err.exit_code(), crate::exit_code::INVALID_INPUT);
        assert!(err.to_string().contains("owner/repo"));
    }
}
