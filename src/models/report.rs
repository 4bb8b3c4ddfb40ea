use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// pub struct for individual audit results
#[derive(Debug, Deserialize, Serialize)]
pub struct Audit {
    pub score: Option<f64>,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "displayValue")]
    pub display_value: Option<String>,
}

// reference from a category to one of its audits, in priority order
#[derive(Debug, Deserialize, Serialize)]
pub struct AuditRef {
    pub id: String,
}

// pub struct for each category score
#[derive(Debug, Deserialize, Serialize)]
pub struct Category {
    pub score: Option<f64>,
    #[serde(rename = "auditRefs", default)]
    pub audit_refs: Vec<AuditRef>,
}

// Raw lighthouse report, as written by the CLI or embedded in the PageSpeed
// response. Both top-level maps are optional so that a structurally broken
// report still deserializes and can be rejected as MalformedReport instead
// of as a parse failure.
#[derive(Debug, Deserialize, Serialize)]
pub struct AuditReport {
    #[serde(rename = "requestedUrl")]
    pub requested_url: Option<String>,
    pub categories: Option<HashMap<String, Category>>,
    pub audits: Option<HashMap<String, Audit>>,
}

// PageSpeed v5 wraps the lighthouse report in an envelope; on failure the
// envelope carries an error object instead.
#[derive(Debug, Deserialize)]
pub struct PagespeedEnvelope {
    #[serde(rename = "lighthouseResult")]
    pub lighthouse_result: Option<AuditReport>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: Option<String>,
}
