// src/error.rs
// =============================================================================
// The failure taxonomy for the flatten pipeline.
//
// Three kinds, kept deliberately distinct:
// - InvalidUrl: the input never made it to the network
// - Api: GitHub answered, but with a non-success status
// - Network: the request itself failed (DNS, connection refused, TLS, ...)
//
// A truncated tree listing is NOT represented here: truncation is a
// successful outcome carrying a flag, and the caller decides how to react.
//
// Rust concepts:
// - Enums with data: Each failure kind carries its own details
// - Display + Error traits: Integrates with anyhow and `?` in main
// =============================================================================

use std::error::Error;
use std::fmt;

/// Terminal failure of one flatten invocation. Nothing is retried
/// internally; a fresh invocation is the only way to try again.
#[derive(Debug)]
pub enum FlattenError {
    /// The input could not be parsed into a GitHub repository reference
    /// (empty input, malformed URL, wrong host, missing owner/repo)
    InvalidUrl,
    /// Non-2xx response from a GitHub API call. `message` holds the
    /// response body verbatim, or the HTTP reason phrase if the body was
    /// unreadable, so 401/403/404/429 stay distinguishable downstream
    Api { status: u16, message: String },
    /// Transport-level failure before any HTTP status was received
    Network(reqwest::Error),
}

impl fmt::Display for FlattenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl => write!(f, "URL is not valid"),
            Self::Api { status, message } => {
                write!(f, "GitHub API error {}: {}", status, message)
            }
            Self::Network(e) => write!(f, "Network error: {}", e),
        }
    }
}

impl Error for FlattenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            _ => None,
        }
    }
}

// Lets `?` lift transport failures from reqwest calls directly.
// Status-code failures never come through here: reqwest does not treat
// non-2xx responses as errors, the client checks them explicitly.
impl From<reqwest::Error> for FlattenError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err)
    }
}
