// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Pick up an access token from --token or the GITHUB_TOKEN variable
// 3. Run the flatten pipeline against the given repository URL
// 4. Print the file listing to stdout (status lines go to stderr, so the
//    listing can be piped cleanly)
// 5. Exit with proper code (0 = complete, 1 = truncated, 2 = error)
//
// Rust concepts used:
// - async/await: The pipeline awaits two network requests
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to render pipeline phases
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod error; // src/error.rs - the failure taxonomy
mod flatten; // src/flatten/ - the pipeline orchestrator
mod github; // src/github/ - GitHub API client and raw URL builder
mod parser; // src/parser/ - repository URL parsing

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use flatten::{flatten, Phase};
use github::GitHubClient;

// The #[tokio::main] attribute transforms our async main into a real main
// function by creating a tokio runtime and running our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Unexpected error: print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = complete listing printed
//   Ok(1) = listing printed but truncated by GitHub
//   Ok(2) = pipeline failed
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // --token wins; otherwise fall back to the conventional environment
    // variable. Blank values count as "no token" so unauthenticated use
    // keeps working in shells that export an empty GITHUB_TOKEN.
    let token = cli
        .token
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .filter(|t| !t.trim().is_empty());

    let client = GitHubClient::new();

    let outcome = match flatten(&client, &cli.repo_url, token.as_deref(), print_phase).await {
        Ok(outcome) => outcome,
        Err(e) => {
            // Every failure kind renders as one human-readable line, and
            // nothing reaches stdout, so a consumer never sees a stale or
            // half-built listing
            eprintln!("❌ {}", e);
            return Ok(2);
        }
    };

    if cli.json {
        // The JSON form carries the whole outcome, so consumers can see
        // the resolved branch and the truncation flag too
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if !outcome.files.is_empty() {
        println!("{}", outcome.to_lines());
    }

    if outcome.truncated {
        eprintln!(
            "⚠️  Results truncated by GitHub: the {} file(s) listed are incomplete. \
             Provide a token to raise rate limits or export the repository locally.",
            outcome.count()
        );
        Ok(1)
    } else {
        Ok(0)
    }
}

// Renders pipeline phases as status lines on stderr
fn print_phase(phase: &Phase) {
    match phase {
        // Parsing is instant; announcing it would just be noise
        Phase::ParsingUrl => {}
        Phase::ResolvingBranch => eprintln!("🔍 Retrieving repository information..."),
        Phase::FetchingTree => eprintln!("🌳 Fetching repository file tree..."),
        Phase::BuildingResult { truncated: false } => {
            eprintln!("📄 Files retrieved. Processing...")
        }
        Phase::BuildingResult { truncated: true } => {
            eprintln!("📄 Files retrieved (truncated listing). Processing...")
        }
        Phase::Completed { count } => eprintln!("✅ Completed. {} file(s).", count),
    }
}
