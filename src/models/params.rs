use serde::Deserialize;

// Query parameters for /loading and /audit.
#[derive(Debug, Deserialize)]
pub struct AuditParams {
    #[serde(default)]
    pub url: String,
}
