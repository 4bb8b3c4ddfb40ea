use crate::error::AuditError;
use crate::models::{Audit, AuditReport, Category, CategoryScore, IssueGroup, Metric, NormalizedResult};
use chrono::Local;
use std::collections::{BTreeSet, HashMap, HashSet};

// Category ids as the report names them, with their display labels.
pub const CATEGORIES: [(&str, &str); 4] = [
    ("performance", "Performance"),
    ("accessibility", "Accessibility"),
    ("best-practices", "Best Practices"),
    ("seo", "SEO"),
];

// Substrings matched against audit ids under the keyword policy.
const SEO_KEYWORDS: [&str; 5] = ["seo", "meta", "viewport", "robots", "title"];
const A11Y_KEYWORDS: [&str; 6] = ["accessibility", "contrast", "aria", "label", "alt", "button"];

// Categories whose failing audits become issue groups under the reference
// policy. Performance failures surface through the metrics instead.
const REFERENCE_GROUPS: [&str; 3] = ["seo", "accessibility", "best-practices"];

// Timing audits surfaced as headline metrics when the report carries them.
const METRIC_AUDITS: [(&str, &str); 6] = [
    ("first-contentful-paint", "First Contentful Paint"),
    ("largest-contentful-paint", "Largest Contentful Paint"),
    ("speed-index", "Speed Index"),
    ("total-blocking-time", "Total Blocking Time"),
    ("cumulative-layout-shift", "Cumulative Layout Shift"),
    ("interactive", "Time to Interactive"),
];

const DESCRIPTION_SNIPPET_CHARS: usize = 100;
const TIMESTAMP_FORMAT: &str = "%b %d, %Y %H:%M";

// How failing audits are assigned to issue groups.
//
// Keyword: substring-match the audit id against the fixed keyword sets; an
// audit may land in zero, one, or both of SEO and Accessibility.
//
// Reference: walk each category's own auditRefs list, so group membership
// follows the report's taxonomy exactly and ref order is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuePolicy {
    Keyword,
    Reference,
}

// What to emit for a requested category the report has no score for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingCategory {
    Zero,
    Omit,
}

#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    pub policy: IssuePolicy,
    pub missing: MissingCategory,
}

impl NormalizeOptions {
    // Preset for reports fetched from the PageSpeed API.
    pub fn pagespeed() -> Self {
        NormalizeOptions {
            policy: IssuePolicy::Keyword,
            missing: MissingCategory::Zero,
        }
    }

    // Preset for reports written by the local lighthouse CLI.
    pub fn lighthouse() -> Self {
        NormalizeOptions {
            policy: IssuePolicy::Reference,
            missing: MissingCategory::Omit,
        }
    }
}

// Turn a raw audit report into the fixed-shape result the renderer consumes:
// integer percentages for the four categories plus grouped, deduplicated
// issue strings. Fails with MalformedReport when the report carries neither
// a categories nor an audits map.
pub fn normalize(
    report: &AuditReport,
    options: &NormalizeOptions,
) -> Result<NormalizedResult, AuditError> {
    if report.categories.is_none() && report.audits.is_none() {
        return Err(AuditError::MalformedReport);
    }

    let empty_categories = HashMap::new();
    let empty_audits = HashMap::new();
    let categories = report.categories.as_ref().unwrap_or(&empty_categories);
    let audits = report.audits.as_ref().unwrap_or(&empty_audits);

    let mut scores = Vec::new();
    for (id, label) in CATEGORIES {
        match categories.get(id).and_then(|c| c.score) {
            Some(score) => scores.push(CategoryScore {
                label: label.to_string(),
                percent: to_percent(score),
            }),
            None if options.missing == MissingCategory::Zero => scores.push(CategoryScore {
                label: label.to_string(),
                percent: 0,
            }),
            None => {}
        }
    }

    let groups = match options.policy {
        IssuePolicy::Keyword => keyword_groups(audits),
        IssuePolicy::Reference => reference_groups(categories, audits),
    };

    Ok(NormalizedResult {
        scores,
        groups,
        metrics: headline_metrics(audits),
        timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
    })
}

fn to_percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}

// A candidate issue is any audit with a defined score below 1.0. Null-score
// audits are not applicable to the page and are skipped entirely.
fn failing(audit: &Audit) -> bool {
    matches!(audit.score, Some(score) if score < 1.0)
}

fn keyword_groups(audits: &HashMap<String, Audit>) -> Vec<IssueGroup> {
    let sets: [(&str, &[&str]); 2] = [("SEO", &SEO_KEYWORDS), ("Accessibility", &A11Y_KEYWORDS)];

    sets.iter()
        .map(|(label, keywords)| {
            // BTreeSet both dedups and gives a stable order; keyword matches
            // carry no priority of their own.
            let mut items = BTreeSet::new();
            for (id, audit) in audits {
                if !failing(audit) {
                    continue;
                }
                let id = id.to_lowercase();
                if keywords.iter().any(|keyword| id.contains(keyword)) {
                    items.insert(issue_line(audit));
                }
            }
            finish_group(label, items.into_iter().collect())
        })
        .collect()
}

fn issue_line(audit: &Audit) -> String {
    let description = audit.description.as_deref().unwrap_or_default();
    let snippet: String = description.chars().take(DESCRIPTION_SNIPPET_CHARS).collect();
    format!("{} — {}...", audit.title, snippet)
}

fn reference_groups(
    categories: &HashMap<String, Category>,
    audits: &HashMap<String, Audit>,
) -> Vec<IssueGroup> {
    CATEGORIES
        .iter()
        .filter(|(id, _)| REFERENCE_GROUPS.contains(id))
        .map(|(id, label)| {
            let mut seen = HashSet::new();
            let mut items = Vec::new();
            if let Some(category) = categories.get(*id) {
                // auditRefs order reflects audit priority, so keep it.
                for audit_ref in &category.audit_refs {
                    let Some(audit) = audits.get(&audit_ref.id) else {
                        continue;
                    };
                    if !failing(audit) {
                        continue;
                    }
                    if seen.insert(audit.title.clone()) {
                        items.push(audit.title.clone());
                    }
                }
            }
            finish_group(label, items)
        })
        .collect()
}

fn finish_group(label: &str, items: Vec<String>) -> IssueGroup {
    let has_issues = !items.is_empty();
    let items = if has_issues {
        items
    } else {
        vec![format!("✅ No major {} issues detected.", label)]
    };
    IssueGroup {
        label: label.to_string(),
        items,
        has_issues,
    }
}

fn headline_metrics(audits: &HashMap<String, Audit>) -> Vec<Metric> {
    METRIC_AUDITS
        .iter()
        .filter_map(|(id, label)| {
            let value = audits.get(*id)?.display_value.clone()?;
            Some(Metric {
                label: label.to_string(),
                value,
            })
        })
        .collect()
}
