// src/github/mod.rs
// =============================================================================
// This module handles all GitHub specifics.
//
// Submodules:
// - api: The two REST calls the pipeline needs (default branch, file tree)
// - raw: Building raw.githubusercontent.com download URLs
//
// This file (mod.rs) is the module root - it exports the public API that
// the rest of the application uses.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod api;
mod raw;

// Re-export public items from submodules
pub use api::{GitHubClient, TreeEntry, TreeResponse};
pub use raw::raw_file_url;
