// src/parser/mod.rs
// =============================================================================
// This module turns raw input strings into structured repository references.
//
// Currently implements:
// - Parsing https://github.com/... URLs into owner/repo/branch
// - Normalizing trailing ".git" suffixes
// - Rejecting non-GitHub hosts and incomplete paths
//
// Rejection is modeled as None rather than an error: a string that is not
// a GitHub repository URL is an expected input, not a failure.
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod github_url;

// Re-export the parser entry point and its result type
pub use github_url::{parse_repo_url, RepoReference};
