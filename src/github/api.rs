// src/github/api.rs
// =============================================================================
// This module wraps the two GitHub REST API calls the pipeline needs:
//
// - GET /repos/{owner}/{repo}
//     -> repository metadata; we read the `default_branch` field
// - GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1
//     -> the full recursive file tree for a branch, in one response
//
// Both calls share one request contract:
// - Accept: application/vnd.github.v3+json
// - Authorization: token <PAT>   (only when a non-empty token was supplied)
// - A User-Agent header (GitHub rejects API requests without one)
//
// A non-2xx response always surfaces as FlattenError::Api carrying the
// numeric status and the body text; it is never silently treated as
// "not found" or an empty tree. There is no pagination and no retrying:
// whatever the single tree call returns is the result, and GitHub's own
// `truncated` flag tells the caller whether that listing is complete.
//
// Rust concepts:
// - async/await: For network I/O
// - Generics with DeserializeOwned: One request helper for both endpoints
// - serde attributes: Mapping JSON field names onto Rust fields
// =============================================================================

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::error::FlattenError;

// Where the GitHub REST API lives. Tests point the client at a local mock
// server instead.
const GITHUB_API_BASE: &str = "https://api.github.com";

// GitHub's versioned JSON media type
const ACCEPT_GITHUB_JSON: &str = "application/vnd.github.v3+json";

// GitHub requires a User-Agent on API requests
const USER_AGENT: &str = concat!("repo-flattener/", env!("CARGO_PKG_VERSION"));

// Response shape of GET /repos/{owner}/{repo}
//
// The endpoint returns dozens of fields; we only care about one, and even
// that one is treated as optional so a sparse response cannot fail
// deserialization.
#[derive(Debug, Deserialize)]
struct RepoInfo {
    default_branch: Option<String>,
}

/// Response of the recursive tree endpoint.
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    /// Every node in the tree: files ("blob"), directories ("tree"),
    /// submodule links ("commit")
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
    /// true when GitHub hit its internal size limit and the listing above
    /// is incomplete
    #[serde(default)]
    pub truncated: bool,
}

/// One node of the repository tree, as GitHub reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    /// Path relative to the repository root, e.g. "src/main.rs"
    pub path: String,
    /// "blob" for files, "tree" for directories, "commit" for submodules
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Object hash; defaulted to empty when the payload omits it
    #[serde(default)]
    pub sha: String,
    /// File size in bytes; GitHub omits it for non-blob entries
    #[serde(default)]
    pub size: Option<u64>,
}

impl TreeEntry {
    /// true for entries that represent actual file contents
    pub fn is_blob(&self) -> bool {
        self.entry_type == "blob"
    }
}

// Thin client over reqwest for the two metadata calls
//
// Cloning is cheap (reqwest clients share their connection pool), and the
// client holds no mutable state, so one instance can serve any number of
// concurrent flatten invocations.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: Url,
}

impl GitHubClient {
    /// Client pointed at the real GitHub API.
    pub fn new() -> Self {
        let api_base = Url::parse(GITHUB_API_BASE).expect("GitHub API base URL is valid");
        Self::with_api_base(api_base)
    }

    /// Client pointed at an arbitrary API base. Tests use this to target
    /// a local mock server.
    pub fn with_api_base(api_base: Url) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");
        Self { http, api_base }
    }

    /// Looks up the repository's default branch.
    ///
    /// Falls back to the literal "main" if a successful response somehow
    /// lacks the `default_branch` field.
    pub async fn default_branch(
        &self,
        owner: &str,
        repo: &str,
        token: Option<&str>,
    ) -> Result<String, FlattenError> {
        let url = self.endpoint(&["repos", owner, repo], None);
        let info: RepoInfo = self.get_json(url, token).await?;
        Ok(info.default_branch.unwrap_or_else(|| "main".to_string()))
    }

    /// Fetches the full recursive tree listing for a branch.
    ///
    /// The entry list is returned exactly as GitHub sent it, together with
    /// GitHub's own truncation flag.
    pub async fn tree(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        token: Option<&str>,
    ) -> Result<TreeResponse, FlattenError> {
        let url = self.endpoint(
            &["repos", owner, repo, "git", "trees", branch],
            Some("recursive=1"),
        );
        self.get_json(url, token).await
    }

    // Builds an API URL from path segments. Going through the url crate
    // percent-encodes each segment individually, which matters for branch
    // names containing '/' or other reserved characters.
    fn endpoint(&self, segments: &[&str], query: Option<&str>) -> Url {
        let mut url = self.api_base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .expect("API base URL can be a base");
            path.pop_if_empty().extend(segments);
        }
        url.set_query(query);
        url
    }

    // Shared GET helper: sends the request with the common headers, then
    // either deserializes a 2xx body or captures a non-2xx one verbatim
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        token: Option<&str>,
    ) -> Result<T, FlattenError> {
        let mut request = self.http.get(url).header("Accept", ACCEPT_GITHUB_JSON);

        // Unauthenticated requests are allowed (at GitHub's lower rate
        // limit); an empty token counts as no token
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request = request.header("Authorization", format!("token {}", token));
        }

        // Transport failure (DNS, refused connection, ...) -> Network
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            // Keep the body for diagnostics; fall back to the reason
            // phrase when the body cannot be read
            let message = match response.text().await {
                Ok(body) => body,
                Err(_) => status.canonical_reason().unwrap_or("").to_string(),
            };
            return Err(FlattenError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let value = response.json::<T>().await?;
        Ok(value)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GitHubClient {
        let base = Url::parse(&server.uri()).unwrap();
        GitHubClient::with_api_base(base)
    }

    #[test]
    fn test_endpoint_encodes_branch_as_one_segment() {
        let client = GitHubClient::new();
        let url = client.endpoint(&["repos", "o", "r", "git", "trees", "feat/x"], Some("recursive=1"));
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/o/r/git/trees/feat%2Fx?recursive=1"
        );
    }

    #[test]
    fn test_tree_entry_is_blob() {
        let entry: TreeEntry =
            serde_json::from_str(r#"{"path":"README.md","type":"blob","sha":"abc","size":12}"#)
                .unwrap();
        assert!(entry.is_blob());
        assert_eq!(entry.size, Some(12));

        let dir: TreeEntry = serde_json::from_str(r#"{"path":"src","type":"tree"}"#).unwrap();
        assert!(!dir.is_blob());
        assert_eq!(dir.sha, "");
        assert_eq!(dir.size, None);
    }

    #[test]
    fn test_tree_response_tolerates_missing_fields() {
        // GitHub always sends `tree` and `truncated`, but neither should be
        // able to break deserialization if absent
        let resp: TreeResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.tree.is_empty());
        assert!(!resp.truncated);
    }

    #[tokio::test]
    async fn test_default_branch_reads_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets"))
            .and(header("Accept", "application/vnd.github.v3+json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"default_branch": "develop"})),
            )
            .mount(&server)
            .await;

        let branch = client_for(&server)
            .default_branch("acme", "widgets", None)
            .await
            .unwrap();
        assert_eq!(branch, "develop");
    }

    #[tokio::test]
    async fn test_default_branch_falls_back_to_main() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let branch = client_for(&server)
            .default_branch("acme", "widgets", None)
            .await
            .unwrap();
        assert_eq!(branch, "main");
    }

    #[tokio::test]
    async fn test_token_becomes_authorization_header() {
        let server = MockServer::start().await;
        // The mock only matches when the Authorization header is present
        // and correctly formatted
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets"))
            .and(header("Authorization", "token secret-pat"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"default_branch": "main"})),
            )
            .mount(&server)
            .await;

        let branch = client_for(&server)
            .default_branch("acme", "widgets", Some("secret-pat"))
            .await
            .unwrap();
        assert_eq!(branch, "main");
    }

    #[tokio::test]
    async fn test_no_token_sends_no_authorization_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"default_branch": "main"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.default_branch("acme", "widgets", None).await.unwrap();
        // An empty token must behave like no token at all
        client
            .default_branch("acme", "widgets", Some(""))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
        for request in requests {
            assert!(!request.headers.contains_key("authorization"));
        }
    }

    #[tokio::test]
    async fn test_tree_request_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets/git/trees/main"))
            .and(query_param("recursive", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "truncated": false,
                "tree": [{"path": "README.md", "type": "blob", "sha": "abc", "size": 10}]
            })))
            .mount(&server)
            .await;

        let resp = client_for(&server)
            .tree("acme", "widgets", "main", None)
            .await
            .unwrap();
        assert_eq!(resp.tree.len(), 1);
        assert_eq!(resp.tree[0].path, "README.md");
        assert!(!resp.truncated);
    }

    #[tokio::test]
    async fn test_non_success_surfaces_as_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets/git/trees/main"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .tree("acme", "widgets", "main", None)
            .await
            .unwrap_err();
        match err {
            FlattenError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rate_limit_status_is_preserved() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API rate limit exceeded"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .default_branch("acme", "widgets", None)
            .await
            .unwrap_err();
        match err {
            FlattenError::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("rate limit"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }
}
