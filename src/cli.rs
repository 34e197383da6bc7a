// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The tool does exactly one thing, so there are no subcommands: just a
// positional URL and two optional flags.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: For flags the user may leave out
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-flattener",
    version = "0.1.0",
    about = "Flattens a GitHub repository into a list of raw file URLs",
    long_about = "repo-flattener takes a GitHub repository URL and prints one line per file \
                  in the repository tree, each mapping the file path to its direct \
                  raw.githubusercontent.com download URL. Exit codes: 0 = complete listing, \
                  1 = listing truncated by GitHub, 2 = error."
)]
pub struct Cli {
    /// GitHub repository URL
    ///
    /// Accepts plain repository URLs (https://github.com/user/repo),
    /// clone URLs (.git suffix) and branch URLs (.../tree/<branch>).
    /// Without an explicit branch the repository's default branch is used.
    pub repo_url: String,

    /// Personal access token for private repositories and higher rate limits
    ///
    /// Falls back to the GITHUB_TOKEN environment variable when omitted.
    /// The token is only ever forwarded to the GitHub API, never stored.
    #[arg(long)]
    pub token: Option<String>,

    /// Output the listing as JSON instead of "path: url" lines
    #[arg(long)]
    pub json: bool,
}
