use crate::config::AuditConfig;
use crate::error::AuditError;
use crate::models::AuditReport;
use crate::utils::ReportFile;
use log::{info, warn};
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::timeout;

const CHROME_BINARIES: [&str; 3] = ["google-chrome", "chromium", "chromium-browser"];

// Startup capability check: the lighthouse CLI and a headless browser must
// both be present, otherwise the server refuses to start in lighthouse mode.
pub fn check_environment() -> Result<(), AuditError> {
    probe("lighthouse")?;
    if !CHROME_BINARIES.iter().any(|binary| probe(binary).is_ok()) {
        return Err(AuditError::ToolNotFound("chrome/chromium"));
    }
    Ok(())
}

fn probe(binary: &'static str) -> Result<(), AuditError> {
    match std::process::Command::new(binary)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AuditError::ToolNotFound(binary)),
        Err(e) => Err(AuditError::Io(e)),
    }
}

// Run the lighthouse CLI against `url`, bounded by the configured timeout,
// and parse the JSON report it writes. The report file lives behind a
// ReportFile guard and is removed on every exit path, including timeout.
pub async fn fetch_local_report(
    config: &AuditConfig,
    url: &str,
) -> Result<AuditReport, AuditError> {
    let report_file = ReportFile::new("lightscan");

    let mut child = match Command::new("lighthouse")
        .arg(url)
        .arg("--output=json")
        .arg("--output-path")
        .arg(report_file.path())
        .arg("--quiet")
        .arg("--chrome-flags=--headless --no-sandbox")
        .arg(format!("--only-categories={}", config.categories.join(",")))
        .arg("--max-wait-for-load=120000")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AuditError::ToolNotFound("lighthouse"))
        }
        Err(e) => return Err(AuditError::Io(e)),
    };

    info!("Running lighthouse against {}", url);
    let status = match timeout(config.tool_timeout, child.wait()).await {
        Ok(status) => status?,
        Err(_) => {
            warn!("❌ Lighthouse timed out for {}, killing it", url);
            let _ = child.start_kill();
            let _ = child.wait().await;
            return Err(AuditError::ToolTimeout(config.tool_timeout.as_secs()));
        }
    };

    if !status.success() {
        return Err(AuditError::ToolFailed(status));
    }

    let raw = match tokio::fs::read(report_file.path()).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AuditError::ReportMissing(format!(
                "lighthouse wrote no report for {}",
                url
            )))
        }
        Err(e) => return Err(AuditError::Io(e)),
    };

    let report = serde_json::from_slice(&raw)?;
    info!("✅ Lighthouse report parsed for {}", url);
    Ok(report)
}
