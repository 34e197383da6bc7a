// src/parser/github_url.rs
// =============================================================================
// This module parses GitHub repository URLs.
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - https://github.com/owner/repo/tree/<branch>
//   - https://github.com/owner/repo/blob/<branch>/path/to/file
//
// The parser is total: any string either produces a well-formed reference
// or None. It never panics and never touches the network.
//
// Rust concepts:
// - Option<T>: For "parsed or rejected" without exceptions
// - The ? operator on Option: Early return on the first rejection
// - The url crate: Robust URL parsing instead of hand-rolled string splits
// =============================================================================

use url::Url;

// A parsed reference to a GitHub repository
//
// `branch` is None when the URL did not name one explicitly; the pipeline
// resolves the repository's default branch in that case. Keeping it as an
// Option (instead of an empty string) keeps "unspecified" distinguishable
// from "empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    pub owner: String,
    pub repo: String,
    pub branch: Option<String>,
}

// Parses a GitHub repository URL into a RepoReference
//
// Parameters:
//   input: the raw string the user entered (surrounding whitespace is fine)
//
// Returns: Some(RepoReference) for a usable repository URL, None otherwise
//
// Example:
//   "https://github.com/rust-lang/rust" -> owner "rust-lang", repo "rust"
//   "https://github.com/o/r/tree/devel" -> owner "o", repo "r", branch "devel"
pub fn parse_repo_url(input: &str) -> Option<RepoReference> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Strip a trailing ".git" (and a trailing slash right after it) so
    // clone-style URLs parse the same as browser URLs
    let cleaned = strip_git_suffix(trimmed);

    // Malformed syntax is a rejection, not an error
    let parsed = Url::parse(cleaned).ok()?;

    // Only github.com is supported, matched case-insensitively as a
    // hostname suffix (so www.github.com also passes). Other forges are
    // rejected here rather than failing later with a confusing API error.
    let host = parsed.host_str()?;
    if !host.to_ascii_lowercase().ends_with("github.com") {
        return None;
    }

    // Split the path into non-empty segments:
    //   /o/r/tree/devel -> ["o", "r", "tree", "devel"]
    let segments: Vec<&str> = parsed.path_segments()?.filter(|s| !s.is_empty()).collect();

    // Need at least owner and repo
    if segments.len() < 2 {
        return None;
    }

    let owner = segments[0].to_string();
    let repo = segments[1].to_string();

    // A branch is only taken from "tree" or "blob" style URLs, and only the
    // single segment right after the marker. Branch names containing '/'
    // (like "release/1.0") are therefore captured incompletely: the URL
    // format gives no way to tell where the branch ends and the file path
    // begins. Known limitation, kept as-is.
    let branch = if segments.len() >= 4 && (segments[2] == "tree" || segments[2] == "blob") {
        Some(segments[3].to_string())
    } else {
        None
    };

    Some(RepoReference { owner, repo, branch })
}

// Removes a trailing ".git" or ".git/" suffix
//
// Only the suffix is touched; a plain trailing slash without ".git" in
// front of it is left alone (the segment split ignores it anyway).
fn strip_git_suffix(url: &str) -> &str {
    let url = match url.strip_suffix('/') {
        Some(stripped) if stripped.ends_with(".git") => stripped,
        _ => url,
    };
    url.strip_suffix(".git").unwrap_or(url)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option instead of Result?
//    - There is only one way to fail here: "this is not a repo URL"
//    - The caller doesn't need a reason, just the yes/no
//    - Result shines when different failures need different handling
//
// 2. What does .ok()? do?
//    - Url::parse returns Result<Url, ParseError>
//    - .ok() converts that to Option<Url>, dropping the error detail
//    - ? then early-returns None if parsing failed
//
// 3. What is path_segments()?
//    - Splits the URL path on '/' into an iterator of segments
//    - Returns None for URLs that cannot have a path (like mailto:)
//    - We filter out empty segments from doubled or trailing slashes
//
// 4. Why to_ascii_lowercase() for the host?
//    - Hostnames are case-insensitive by definition
//    - The url crate already lowercases registered domains, but being
//      explicit costs nothing and documents the intent
// -----------------------------------------------------------------------------
