// src/github/raw.rs
// =============================================================================
// This module builds raw.githubusercontent.com download URLs.
//
// Shape:
//   https://raw.githubusercontent.com/{owner}/{repo}/{branch}/{path}
//
// Encoding rules:
// - The branch is one opaque segment: a '/' inside it becomes %2F
// - Each file path segment is encoded individually, so "a b.js" becomes
//   "a%20b.js" while the '/' separators between segments stay literal
//
// Pure string construction; no network access, no I/O.
//
// Rust concepts:
// - The url crate's PathSegmentsMut: Per-segment percent-encoding for free
// - Iterators: path.split('/') feeds segments straight into the URL
// =============================================================================

use url::Url;

// Host that serves file bytes directly, bypassing the repository browser
const RAW_CONTENT_BASE: &str = "https://raw.githubusercontent.com";

/// Builds the direct-download URL for one file at a specific branch.
///
/// Example:
///   raw_file_url("o", "r", "main", "src/a b.js")
///     -> "https://raw.githubusercontent.com/o/r/main/src/a%20b.js"
pub fn raw_file_url(owner: &str, repo: &str, branch: &str, path: &str) -> String {
    let mut url = Url::parse(RAW_CONTENT_BASE).expect("raw content base URL is valid");
    {
        let mut segments = url
            .path_segments_mut()
            .expect("raw content base URL can be a base");
        segments.pop_if_empty().extend([owner, repo, branch]);
        // Extending with the split parts (instead of pushing the whole
        // path as one segment) keeps the path's own '/' separators
        // literal while still encoding reserved characters inside each
        // segment
        segments.extend(path.split('/'));
    }
    url.into()
}
