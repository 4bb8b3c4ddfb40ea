use crate::error::AuditError;

// Shallow on purpose: trim, reject empty, and (for the CLI path) require an
// explicit http/https prefix. No host or scheme parsing beyond that.
pub fn validate_url(raw: &str, require_scheme: bool) -> Result<&str, AuditError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(AuditError::InvalidUrl);
    }
    if require_scheme && !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AuditError::InvalidUrl);
    }
    Ok(url)
}
