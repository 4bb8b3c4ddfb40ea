use anyhow::{bail, Context, Result};
use std::time::Duration;

// Categories requested from the audit mechanism, in display order.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["performance", "accessibility", "best-practices", "seo"];

const DEFAULT_STRATEGY: &str = "desktop";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_PORT: u16 = 3000;

// Which audit mechanism backs the /audit route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditMode {
    Pagespeed,
    Lighthouse,
}

// Built once in main from the environment and passed through AppState.
// Nothing in here is global or mutable after startup.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub mode: AuditMode,
    pub api_key: String,
    pub strategy: String,
    pub categories: Vec<String>,
    pub tool_timeout: Duration,
    pub port: u16,
}

impl AuditConfig {
    pub fn from_env() -> Result<Self> {
        let mode = match std::env::var("AUDIT_MODE")
            .unwrap_or_else(|_| "pagespeed".to_string())
            .as_str()
        {
            "pagespeed" => AuditMode::Pagespeed,
            "lighthouse" => AuditMode::Lighthouse,
            other => bail!("unknown AUDIT_MODE: {other} (expected pagespeed or lighthouse)"),
        };

        let api_key = std::env::var("PAGESPEED_API_KEY").unwrap_or_default();
        if mode == AuditMode::Pagespeed && api_key.is_empty() {
            bail!("PAGESPEED_API_KEY must be set when AUDIT_MODE=pagespeed");
        }

        let strategy =
            std::env::var("AUDIT_STRATEGY").unwrap_or_else(|_| DEFAULT_STRATEGY.to_string());

        let timeout_secs = match std::env::var("LIGHTHOUSE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("LIGHTHOUSE_TIMEOUT_SECS must be a number of seconds")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().context("PORT must be a port number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(AuditConfig {
            mode,
            api_key,
            strategy,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            tool_timeout: Duration::from_secs(timeout_secs),
            port,
        })
    }
}
