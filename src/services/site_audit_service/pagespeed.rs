use crate::config::AuditConfig;
use crate::error::AuditError;
use crate::models::{AuditReport, PagespeedEnvelope};
use log::info;

const PAGESPEED_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

// Fetch a lighthouse report for `url` from the hosted PageSpeed API. The
// key, strategy and category list all come from the caller's config.
pub async fn fetch_pagespeed_report(
    client: &reqwest::Client,
    config: &AuditConfig,
    url: &str,
) -> Result<AuditReport, AuditError> {
    let mut request = client.get(PAGESPEED_ENDPOINT).query(&[
        ("url", url),
        ("key", config.api_key.as_str()),
        ("strategy", config.strategy.as_str()),
    ]);
    // the API takes one category parameter per requested category
    for category in &config.categories {
        request = request.query(&[("category", category.as_str())]);
    }

    info!("Requesting PageSpeed report for {}", url);
    let body = request.send().await?.text().await?;
    let envelope: PagespeedEnvelope = serde_json::from_str(&body)?;
    unwrap_envelope(envelope)
}

// The API reports its own failures inside a 200 body, so a missing
// lighthouseResult is surfaced with the API's message attached.
fn unwrap_envelope(envelope: PagespeedEnvelope) -> Result<AuditReport, AuditError> {
    match envelope.lighthouse_result {
        Some(report) => Ok(report),
        None => {
            let message = envelope
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Unknown API error.".to_string());
            Err(AuditError::ReportMissing(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn envelope_with_report_unwraps_to_it() {
        let envelope: PagespeedEnvelope = serde_json::from_value(serde_json::json!({
            "lighthouseResult": {
                "requestedUrl": "https://example.com/",
                "categories": { "seo": { "score": 0.91 } },
                "audits": {}
            }
        }))
        .unwrap();

        let report = unwrap_envelope(envelope).unwrap();
        assert_eq!(report.requested_url.as_deref(), Some("https://example.com/"));
        let categories = report.categories.unwrap();
        assert_eq!(categories["seo"].score, Some(0.91));
    }

    #[test]
    fn envelope_without_report_carries_the_api_message() {
        let envelope: PagespeedEnvelope = serde_json::from_value(serde_json::json!({
            "error": { "message": "API key not valid." }
        }))
        .unwrap();

        let err = unwrap_envelope(envelope).unwrap_err();
        match err {
            AuditError::ReportMissing(message) => assert_eq!(message, "API key not valid."),
            other => panic!("expected ReportMissing, got {other:?}"),
        }
    }

    #[test]
    fn envelope_without_report_or_error_gets_a_generic_message() {
        let envelope: PagespeedEnvelope = serde_json::from_value(serde_json::json!({})).unwrap();
        let err = unwrap_envelope(envelope).unwrap_err();
        assert!(matches!(err, AuditError::ReportMissing(m) if m == "Unknown API error."));
    }
}
