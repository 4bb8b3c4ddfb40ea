use serde::Serialize;

// Integer percentage for one category, always 0-100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub label: String,
    pub percent: u32,
}

// One classification group of failing-audit strings. `has_issues` is the
// machine-readable signal; when it is false `items` holds only the display
// sentinel, never real findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueGroup {
    pub label: String,
    pub items: Vec<String>,
    pub has_issues: bool,
}

// Headline timing value straight from the report's displayValue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

// Fixed-shape output of the normalizer, handed to the page renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedResult {
    pub scores: Vec<CategoryScore>,
    pub groups: Vec<IssueGroup>,
    pub metrics: Vec<Metric>,
    pub timestamp: String,
}

impl NormalizedResult {
    pub fn score(&self, label: &str) -> Option<u32> {
        self.scores.iter().find(|s| s.label == label).map(|s| s.percent)
    }

    pub fn group(&self, label: &str) -> Option<&IssueGroup> {
        self.groups.iter().find(|g| g.label == label)
    }
}
