// src/page/mod.rs
// =============================================================================
// Everything the crawler needs to know about a single page.
//
// Submodules:
// - http: Downloads a page (GET, status and content-type checks)
// - html: Extracts the links a page points to
// - normalize: Turns a URL into the key used to count visits
//
// None of these hold shared state; the crawl module wires them together.
// =============================================================================

mod html;
mod http;
mod normalize;

pub use html::extract_links;
pub use http::{FetchError, PageFetcher};
pub use normalize::{host_of, normalize_url};
