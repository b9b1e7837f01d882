// src/page/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Resolution rules are deliberately simple:
// - href starting with "/" -> base_url + href (plain string concatenation)
// - anything else          -> passed through unchanged
//
// The crawler decides later what to do with "mailto:", "#top", other
// hosts, etc. This module only reports what the page links to.
// =============================================================================

use scraper::{Html, Selector};

// Extracts all anchor links from HTML content, in document order
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   base_url: the crawl's base URL, exactly as the user typed it
//
// Returns: Vec<String> with one entry per <a href>
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   base_url = "https://example.com"
//   result = ["https://example.com/docs"]
//
// html5ever recovers from any input, so there is no failure case: broken
// markup simply yields whatever anchors could be recovered.
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").expect("static selector is valid");

    document
        .select(&selector)
        // The tokenizer keeps only the first of duplicated attributes,
        // so this is the element's first href
        .filter_map(|element| element.value().attr("href"))
        .map(|href| resolve_href(href, base_url))
        .collect()
}

fn resolve_href(href: &str, base_url: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", base_url, href)
    } else {
        href.to_string()
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why not Url::join()?
//    - join() would resolve "..", "./x" and "//host/path" like a browser
//    - Crawl results are defined in terms of the simple rule above, so
//      "//cdn.example.com/x" becomes base + "//cdn.example.com/x"
//
// 2. Why return "mailto:" and "#top" links at all?
//    - Counting only happens in the scheduler, after its host check
//    - Those links have no host, so they are dropped there and never
//      show up in the report
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://blog.boot.dev";

    #[test]
    fn test_absolute_and_relative_urls() {
        let html = r#"
            <html>
                <body>
                    <a href="/path/one"><span>Boot.dev</span></a>
                    <a href="https://other.com/path/one"><span>Boot.dev</span></a>
                </body>
            </html>
        "#;
        let links = extract_links(html, BASE);
        assert_eq!(
            links,
            vec!["https://blog.boot.dev/path/one", "https://other.com/path/one"]
        );
    }

    #[test]
    fn test_relative_urls_keep_document_order() {
        let html = r#"
            <a href="/path/one">one</a>
            <a href="/path/two">two</a>
        "#;
        let links = extract_links(html, BASE);
        assert_eq!(
            links,
            vec!["https://blog.boot.dev/path/one", "https://blog.boot.dev/path/two"]
        );
    }

    #[test]
    fn test_no_anchors() {
        let html = "<html><body><p>Hello!</p></body></html>";
        assert!(extract_links(html, BASE).is_empty());
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<a name="top">Top</a><a href="/x">x</a>"#;
        assert_eq!(extract_links(html, BASE), vec!["https://blog.boot.dev/x"]);
    }

    #[test]
    fn test_first_href_wins() {
        let html = r#"<a href="/first" href="/second">dup</a>"#;
        assert_eq!(extract_links(html, BASE), vec!["https://blog.boot.dev/first"]);
    }

    #[test]
    fn test_other_schemes_pass_through() {
        let html = r##"
            <a href="mailto:me@example.com">mail</a>
            <a href="#section">anchor</a>
            <a href="about.html">relative</a>
            <a href="//cdn.example.com/lib.js">scheme relative</a>
        "##;
        let links = extract_links(html, BASE);
        assert_eq!(
            links,
            vec![
                "mailto:me@example.com",
                "#section",
                "about.html",
                "https://blog.boot.dev//cdn.example.com/lib.js",
            ]
        );
    }

    #[test]
    fn test_broken_markup_is_tolerated() {
        let html = r#"<div><a href="/ok">unclosed <p><a href="/also"#;
        let links = extract_links(html, BASE);
        assert_eq!(links.first().map(String::as_str), Some("https://blog.boot.dev/ok"));
    }
}
