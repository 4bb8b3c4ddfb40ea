use crate::error::AuditError;
use crate::models::NormalizedResult;

// All pages are rendered with format! over these shells; the result shape
// coming out of the normalizer is the only contract with this module.

const STYLE: &str = "
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
    margin: 0;
    min-height: 100vh;
    background: linear-gradient(135deg, #f5f7fa 0%, #e4e9f2 100%);
    color: #2d3748;
    padding: 20px;
}
.container {
    background: white;
    padding: 2rem;
    border-radius: 12px;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    max-width: 720px;
    margin: 2rem auto;
}
h1 { color: #4a5568; }
.url { color: #2b6cb0; word-break: break-all; }
.error { color: #c53030; margin: 1rem 0; }
.timestamp { color: #718096; font-size: 0.85rem; }
form input[type=text] {
    width: 70%;
    padding: 10px;
    border: 1px solid #e2e8f0;
    border-radius: 6px;
}
form button, .cta-button {
    background: #4299e1;
    color: white;
    border: none;
    padding: 10px 22px;
    border-radius: 6px;
    cursor: pointer;
}
.scores { display: flex; flex-wrap: wrap; gap: 1rem; margin: 1.5rem 0; }
.score { flex: 1 1 120px; text-align: center; padding: 1rem; border-radius: 8px; background: #f8fafc; }
.score .value { font-size: 2rem; font-weight: bold; }
.score.good .value { color: #2f855a; }
.score.ok .value { color: #b7791f; }
.score.poor .value { color: #c53030; }
.metrics { color: #4a5568; margin: 1rem 0; }
.issues { margin: 1rem 0; }
.issues li { margin: 0.4rem 0; }
.progress { width: 100%; height: 4px; background: #e2e8f0; border-radius: 2px; overflow: hidden; position: relative; }
.progress-bar { position: absolute; height: 100%; width: 30%; background: #4299e1; animation: scan 2s ease-in-out infinite; }
@keyframes scan { 0% { left: -30%; } 100% { left: 100%; } }
";

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <div class=\"container\">\n{body}\n</div>\n</body>\n</html>"
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// Just enough escaping for a URL to survive the query-string round trip
// through /loading and /audit.
fn encode_query(url: &str) -> String {
    url.replace('%', "%25")
        .replace('&', "%26")
        .replace('+', "%2B")
        .replace('#', "%23")
        .replace('?', "%3F")
        .replace(' ', "%20")
}

pub fn landing(error: Option<&str>) -> String {
    let error_html = match error {
        Some(message) => format!("<p class=\"error\">⚠ {}</p>", escape(message)),
        None => String::new(),
    };
    let body = format!(
        "<h1>🔍 Site Audit</h1>\n\
         <p>Enter a URL to check its performance, accessibility and SEO scores.</p>\n\
         {error_html}\n\
         <form action=\"/loading\" method=\"get\">\n\
         <input type=\"text\" name=\"url\" placeholder=\"https://example.com\">\n\
         <button type=\"submit\">Audit</button>\n\
         </form>"
    );
    page("Site Audit", &body)
}

pub fn loading(url: &str) -> String {
    let body = format!(
        "<h1>Scanning <span class=\"url\">{}</span></h1>\n\
         <div class=\"progress\"><div class=\"progress-bar\"></div></div>\n\
         <p>Analyzing website performance and security...</p>\n\
         <meta http-equiv=\"refresh\" content=\"1;url=/audit?url={}\">",
        escape(url),
        encode_query(url)
    );
    page("Scanning...", &body)
}

pub fn results(url: &str, result: &NormalizedResult) -> String {
    let mut body = format!(
        "<h1>Audit results</h1>\n<p class=\"url\">{}</p>\n<div class=\"scores\">\n",
        escape(url)
    );
    for score in &result.scores {
        body.push_str(&format!(
            "<div class=\"score {}\"><div class=\"value\">{}</div><div>{}</div></div>\n",
            score_class(score.percent),
            score.percent,
            escape(&score.label)
        ));
    }
    body.push_str("</div>\n");

    if !result.metrics.is_empty() {
        body.push_str("<div class=\"metrics\">\n");
        for metric in &result.metrics {
            body.push_str(&format!(
                "<div>{}: <strong>{}</strong></div>\n",
                escape(&metric.label),
                escape(&metric.value)
            ));
        }
        body.push_str("</div>\n");
    }

    for group in &result.groups {
        body.push_str(&format!(
            "<h2>{} issues</h2>\n<ul class=\"issues\">\n",
            escape(&group.label)
        ));
        for item in &group.items {
            body.push_str(&format!("<li>{}</li>\n", escape(item)));
        }
        body.push_str("</ul>\n");
    }

    body.push_str(&format!(
        "<p class=\"timestamp\">Generated {}</p>\n<a class=\"cta-button\" href=\"/\">Audit another site</a>",
        escape(&result.timestamp)
    ));
    page("Audit results", &body)
}

pub fn error_page(url: &str, error: &AuditError) -> String {
    let body = format!(
        "<h1>Audit failed</h1>\n<p class=\"url\">{}</p>\n\
         <p class=\"error\">⚠ Error: {}</p>\n\
         <a class=\"cta-button\" href=\"/\">Try again</a>",
        escape(url),
        escape(&error.to_string())
    );
    page("Audit failed", &body)
}

fn score_class(percent: u32) -> &'static str {
    match percent {
        90..=100 => "good",
        50..=89 => "ok",
        _ => "poor",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryScore, IssueGroup, Metric};

    #[test]
    fn results_page_carries_scores_and_issues() {
        let result = NormalizedResult {
            scores: vec![CategoryScore {
                label: "SEO".to_string(),
                percent: 91,
            }],
            groups: vec![IssueGroup {
                label: "SEO".to_string(),
                items: vec!["Meta description — missing...".to_string()],
                has_issues: true,
            }],
            metrics: vec![Metric {
                label: "Speed Index".to_string(),
                value: "2.1 s".to_string(),
            }],
            timestamp: "Jan 01, 2026 12:00".to_string(),
        };
        let html = results("https://example.com", &result);
        assert!(html.contains("91"));
        assert!(html.contains("Meta description"));
        assert!(html.contains("Speed Index"));
        assert!(html.contains("Jan 01, 2026 12:00"));
    }

    #[test]
    fn user_input_is_html_escaped() {
        let html = landing(Some("<script>alert(1)</script>"));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn loading_page_forwards_to_audit_with_encoded_url() {
        let html = loading("https://example.com/a b?x=1&y=2");
        assert!(html.contains("/audit?url=https://example.com/a%20b%3Fx=1%26y=2"));
    }
}
