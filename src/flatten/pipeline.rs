// src/flatten/pipeline.rs
// =============================================================================
// The orchestrator: one URL string in, an ordered file listing out.
//
// The pipeline is a fixed sequence of phases:
//
//   ParsingUrl -> ResolvingBranch -> FetchingTree -> BuildingResult -> Completed
//
// with at most two network round-trips. The branch-resolution call is
// skipped when the URL already names a branch explicitly; the phase is
// still reported so observers see a stable sequence. Each phase
// transition goes through an observer callback, so the caller decides how
// progress is rendered. The pipeline itself never prints anything.
//
// Failure in any phase is terminal for the invocation: nothing is retried
// and no partial result is produced. A truncated tree is NOT a failure;
// it completes normally with the `truncated` flag set.
//
// Rust concepts:
// - Generic closures (FnMut): Observer callback without a trait object
// - Iterator chains: filter -> sort -> map to assemble the result
// - async/await: The two network calls suspend without blocking others
// =============================================================================

use serde::Serialize;

use crate::error::FlattenError;
use crate::github::{raw_file_url, GitHubClient};
use crate::parser::parse_repo_url;

/// One file of the flattened repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlattenedFile {
    /// Path relative to the repository root
    pub path: String,
    /// Direct download URL for the file's bytes at the chosen branch
    pub raw_url: String,
}

/// The successful result of one flatten invocation.
#[derive(Debug, Clone, Serialize)]
pub struct FlattenOutcome {
    /// All files of the repository, ascending by path (code-point order)
    pub files: Vec<FlattenedFile>,
    /// The branch the listing was taken from (explicit or resolved default)
    pub branch: String,
    /// true when GitHub reported the tree listing as incomplete; `files`
    /// still holds everything GitHub returned
    pub truncated: bool,
}

impl FlattenOutcome {
    /// Number of files in the listing.
    pub fn count(&self) -> usize {
        self.files.len()
    }

    /// The listing in its text form: one "path: raw_url" line per file,
    /// newline-joined, in ascending path order.
    pub fn to_lines(&self) -> String {
        self.files
            .iter()
            .map(|f| format!("{}: {}", f.path, f.raw_url))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Pipeline phases, reported to the observer as they are entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Parsing the input string into owner/repo/branch
    ParsingUrl,
    /// Determining the branch (a metadata call unless the URL named one)
    ResolvingBranch,
    /// Fetching the recursive tree listing
    FetchingTree,
    /// Filtering, sorting and building raw URLs; pure, cannot fail
    BuildingResult { truncated: bool },
    /// Done; the outcome holds `count` files
    Completed { count: usize },
}

/// Runs the whole pipeline for one repository URL.
///
/// `token` is forwarded to GitHub untouched when present and never stored.
/// `on_phase` is invoked once per phase, in order. Every failure is
/// terminal; the caller retries by invoking the pipeline again.
pub async fn flatten<F>(
    client: &GitHubClient,
    url: &str,
    token: Option<&str>,
    mut on_phase: F,
) -> Result<FlattenOutcome, FlattenError>
where
    F: FnMut(&Phase),
{
    on_phase(&Phase::ParsingUrl);
    let reference = parse_repo_url(url).ok_or(FlattenError::InvalidUrl)?;

    // An explicit branch from the URL wins; otherwise ask GitHub for the
    // repository's default branch
    on_phase(&Phase::ResolvingBranch);
    let branch = match reference.branch {
        Some(branch) => branch,
        None => {
            client
                .default_branch(&reference.owner, &reference.repo, token)
                .await?
        }
    };

    on_phase(&Phase::FetchingTree);
    let tree = client
        .tree(&reference.owner, &reference.repo, &branch, token)
        .await?;

    on_phase(&Phase::BuildingResult {
        truncated: tree.truncated,
    });

    // Keep only file entries; directories and submodule links are dropped
    // without error
    let mut blobs: Vec<_> = tree.tree.into_iter().filter(|e| e.is_blob()).collect();

    // Byte comparison on UTF-8 strings is code-point order, so the listing
    // comes out identical regardless of locale or input order
    blobs.sort_by(|a, b| a.path.cmp(&b.path));

    let files: Vec<FlattenedFile> = blobs
        .into_iter()
        .map(|entry| {
            let raw_url = raw_file_url(&reference.owner, &reference.repo, &branch, &entry.path);
            FlattenedFile {
                path: entry.path,
                raw_url,
            }
        })
        .collect();

    on_phase(&Phase::Completed { count: files.len() });

    Ok(FlattenOutcome {
        files,
        branch,
        truncated: tree.truncated,
    })
}
