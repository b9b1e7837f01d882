// src/report.rs
// =============================================================================
// Turns the final visit counts into the printed report.
//
// Order: most-linked pages first; pages with the same count are listed
// by URL in descending order, so the output is the same on every run.
// =============================================================================

use std::collections::HashMap;

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub url: String,
    pub count: usize,
}

pub fn sorted_hits(pages: &HashMap<String, usize>) -> Vec<Hit> {
    let mut hits: Vec<Hit> = pages
        .iter()
        .map(|(url, count)| Hit {
            url: url.clone(),
            count: *count,
        })
        .collect();

    hits.sort_by(|a, b| (b.count, &b.url).cmp(&(a.count, &a.url)));
    hits
}

pub fn render_report(pages: &HashMap<String, usize>, base_url: &str) -> String {
    let rule = "=".repeat(29);
    let mut lines = vec![rule.clone(), format!("  REPORT for {}", base_url), rule];
    lines.extend(
        sorted_hits(pages)
            .into_iter()
            .map(|hit| format!("Found {} internal links to {}", hit.count, hit.url)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
