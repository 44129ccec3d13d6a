use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

/// Characters left as-is by `encodeURIComponent`; everything else is escaped
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static HOST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(.+?):").expect("Invalid remote host regex"));

static REPO_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+/(.+?)(\.git)").expect("Invalid remote path regex"));

pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_SCHEME: &str = "http";

/// Where merge requests are created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequestSettings {
    /// Remote whose push line is scanned, e.g. `origin`
    pub remote: String,
    /// Scheme of the generated web URL
    pub scheme: String,
}

impl Default for MergeRequestSettings {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

/// Web location of a repository, scraped from a `git remote -v` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLocation {
    pub host: String,
    pub repo_path: String,
}

impl RemoteLocation {
    /// Extract host and repository path from a remote line
    ///
    /// The expected shape is `origin\tgit@{host}:{port}/{path}.git (push)`.
    /// Returns `None` when either part cannot be found.
    pub fn from_remote_line(line: &str) -> Option<Self> {
        let host = HOST_REGEX.captures(line)?.get(1)?.as_str();
        let repo_path = REPO_PATH_REGEX.captures(line)?.get(1)?.as_str();

        Some(Self {
            host: host.to_string(),
            repo_path: repo_path.to_string(),
        })
    }
}

impl MergeRequestSettings {
    /// Find the push line of the configured remote in a `git remote -v` listing
    pub fn find_push_line<'a>(&self, remotes: &'a str) -> Option<&'a str> {
        remotes
            .lines()
            .map(str::trim_end)
            .find(|line| line.ends_with("(push)") && line.starts_with(self.remote.as_str()))
    }

    /// Build the "new merge request" URL for `source` into `target`
    ///
    /// Returns `None` when the listing has no usable push line for the remote.
    pub fn new_merge_request_url(
        &self,
        remotes: &str,
        source: &str,
        target: &str,
    ) -> Option<String> {
        let line = self.find_push_line(remotes)?;
        let location = RemoteLocation::from_remote_line(line)?;

        Some(format!(
            "{}://{}/{}/merge_requests/new?merge_request[source_branch]={}&merge_request[target_branch]={}",
            self.scheme,
            location.host,
            location.repo_path,
            encode_component(source),
            encode_component(target),
        ))
    }
}

/// Percent-encode a query value the way `encodeURIComponent` does
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
