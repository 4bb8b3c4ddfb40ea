use crate::config::AuditConfig;

// Shared across all handlers. The reqwest client keeps its connection pool
// for repeated PageSpeed calls.
pub struct AppState {
    pub client: reqwest::Client,
    pub config: AuditConfig,
}
