use axum::http::StatusCode;
use thiserror::Error;

// Every failure the audit pipeline can surface. Callers branch on the kind,
// never on message text.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Please enter a valid URL")]
    InvalidUrl,

    #[error("audit report is missing both categories and audits")]
    MalformedReport,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0} is not installed or not on PATH")]
    ToolNotFound(&'static str),

    #[error("lighthouse exited with {0}")]
    ToolFailed(std::process::ExitStatus),

    #[error("lighthouse timed out after {0} seconds")]
    ToolTimeout(u64),

    #[error("no audit report was produced: {0}")]
    ReportMissing(String),

    #[error("failed to parse audit report: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AuditError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuditError::InvalidUrl => StatusCode::BAD_REQUEST,
            AuditError::ToolTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AuditError::Network(_) | AuditError::ReportMissing(_) => StatusCode::BAD_GATEWAY,
            AuditError::MalformedReport
            | AuditError::ToolNotFound(_)
            | AuditError::ToolFailed(_)
            | AuditError::Parse(_)
            | AuditError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
