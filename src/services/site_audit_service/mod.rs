pub mod lighthouse;
pub mod normalize;
pub mod pagespeed;

pub use lighthouse::{check_environment, fetch_local_report};
pub use normalize::{normalize, IssuePolicy, MissingCategory, NormalizeOptions};
pub use pagespeed::fetch_pagespeed_report;

use crate::config::AuditMode;
use crate::error::AuditError;
use crate::models::{AppState, NormalizedResult};
use crate::utils::validate_url;

// Full audit pipeline for one URL: validate, fetch a report via the
// configured mechanism, normalize it with that mechanism's preset.
pub async fn run_site_audit(state: &AppState, url: &str) -> Result<NormalizedResult, AuditError> {
    // only the CLI path insists on an explicit scheme
    let url = validate_url(url, state.config.mode == AuditMode::Lighthouse)?;

    let (report, options) = match state.config.mode {
        AuditMode::Pagespeed => (
            fetch_pagespeed_report(&state.client, &state.config, url).await?,
            NormalizeOptions::pagespeed(),
        ),
        AuditMode::Lighthouse => (
            fetch_local_report(&state.config, url).await?,
            NormalizeOptions::lighthouse(),
        ),
    };

    normalize(&report, &options)
}
