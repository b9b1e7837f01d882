// src/page/normalize.rs
// =============================================================================
// This module turns URLs into deduplication keys.
//
// A canonical URL is just `host + path`, taken from the text as written:
// - the scheme is dropped (http and https point at the same page)
// - the query string and fragment are dropped
// - user info ("user:pw@") is dropped
// - the host is kept as typed: no lowercasing, an explicit ":443" stays
// - the path is kept as typed: "/a/../b" is not resolved to "/b"
//
// `url::Url` is only used to check that the string is a URL at all.
// Its serialized form rewrites hosts, ports and paths, which would merge
// pages that are linked differently.
//
// Examples:
//   "https://blog.boot.dev/path?x=1#top" -> "blog.boot.dev/path"
//   "https://a.com:443/a/../b"           -> "a.com:443/a/../b"
// =============================================================================

use thiserror::Error;
use url::{ParseError, Url};

/// Returned when a string is not a URL at all.
#[derive(Debug, Error)]
#[error("cannot normalize '{input}': {source}")]
pub struct NormalizeError {
    pub input: String,
    #[source]
    pub source: ParseError,
}

// Reduces a URL string to its canonical `host + path` form
//
// Strings without a scheme (like an already-normalized key) have no host,
// so everything before the query/fragment is their path. That keeps
// normalize(normalize(u)) == normalize(u).
pub fn normalize_url(raw: &str) -> Result<String, NormalizeError> {
    match Url::parse(raw) {
        Ok(_) | Err(ParseError::RelativeUrlWithoutBase) => {
            let (host, path) = split_host_path(raw);
            Ok(format!("{}{}", host, path))
        }
        Err(source) => Err(NormalizeError {
            input: raw.to_string(),
            source,
        }),
    }
}

// Returns the host of a URL as typed, with its port if one was written
//
// "https://user@A.com:443/x" -> "A.com:443"
// Relative references ("/x", "about.html") have no host: "".
pub fn host_of(raw: &str) -> &str {
    split_host_path(raw).0
}

fn split_host_path(raw: &str) -> (&str, &str) {
    let raw = raw.trim();

    // Only "scheme://" counts as a scheme. A key such as "a.com:443/x"
    // must not lose "a.com" to it, or normalizing twice would change it.
    let rest = match raw.split_once("://") {
        Some((scheme, _)) if is_scheme(scheme) => &raw[scheme.len() + 1..],
        _ => raw,
    };

    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    let rest = &rest[..end];

    match rest.strip_prefix("//") {
        Some(after) => {
            let (authority, path) = match after.find('/') {
                Some(i) => after.split_at(i),
                None => (after, ""),
            };
            let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
            (host, path)
        }
        None => ("", rest),
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
