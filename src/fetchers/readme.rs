use async_trait::async_trait;
use reqwest::header::ACCEPT;
use url::Url;

use crate::fetchers::{DocumentFetcher, FetchError, FetchResult, SourceKind};

/// Media type asking the contents API for the undecoded file body.
pub const RAW_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";

/// Owner and name parsed from a repository URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryReference {
    pub owner: String,
    pub repo: String,
}

/// Parses `https://<host>/<owner>/<repo>[/...]`.
///
/// Path segments after the repository name are ignored and a trailing
/// `.git` is stripped.
pub fn parse_repository_reference(reference: &str, host: &str) -> FetchResult<RepositoryReference> {
    let malformed = || FetchError::MalformedReference(reference.to_string());

    let url = Url::parse(reference.trim()).map_err(|_| malformed())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(malformed());
    }
    if !url
        .host_str()
        .is_some_and(|h| h.eq_ignore_ascii_case(host))
    {
        return Err(malformed());
    }

    let mut segments = url
        .path_segments()
        .ok_or_else(malformed)?
        .filter(|s| !s.is_empty());
    let owner = segments.next().ok_or_else(malformed)?;
    let repo = segments.next().ok_or_else(malformed)?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if !is_repository_name(owner) || !is_repository_name(repo) {
        return Err(malformed());
    }

    Ok(RepositoryReference {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

fn is_repository_name(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Fetches a repository's readme through the hosting provider's REST API.
pub struct ReadmeFetcher {
    client: reqwest::Client,
    api_base: Url,
    host: String,
    token: Option<String>,
}

impl ReadmeFetcher {
    /// `host` is the web host repository URLs must point at; `api_base` is
    /// where the readme endpoint lives.
    pub fn new(
        client: reqwest::Client,
        api_base: Url,
        host: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            client,
            api_base,
            host: host.into(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    fn readme_endpoint(&self, repository: &RepositoryReference) -> FetchResult<Url> {
        let mut endpoint = self.api_base.clone();
        endpoint
            .path_segments_mut()
            .map_err(|_| FetchError::Build(format!("API base {} cannot be a base", self.api_base)))?
            .pop_if_empty()
            .extend(["repos", repository.owner.as_str(), repository.repo.as_str(), "readme"]);
        Ok(endpoint)
    }
}

#[async_trait]
impl DocumentFetcher for ReadmeFetcher {
    fn kind(&self) -> SourceKind {
        SourceKind::Readme
    }

    async fn fetch_text(&self, reference: &str) -> FetchResult<String> {
        let repository = parse_repository_reference(reference, &self.host)?;
        let endpoint = self.readme_endpoint(&repository)?;
        log::debug!("Fetching readme {endpoint}");

        let mut request = self.client.get(endpoint.clone()).header(ACCEPT, RAW_MEDIA_TYPE);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let res = request.send().await?;
        if !res.status().is_success() {
            return Err(FetchError::RemoteUnavailable {
                url: endpoint.to_string(),
                status: res.status(),
            });
        }
        res.text().await.map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_repo() {
        let parsed = parse_repository_reference("https://github.com/octocat/Hello-World", "github.com")
            .expect("valid reference");
        assert_eq!(
            parsed,
            RepositoryReference {
                owner: "octocat".into(),
                repo: "Hello-World".into()
            }
        );
    }

    #[test]
    fn ignores_trailing_segments_and_git_suffix() {
        let parsed =
            parse_repository_reference("https://github.com/torvalds/linux.git/tree/master", "github.com")
                .expect("valid reference");
        assert_eq!(parsed.owner, "torvalds");
        assert_eq!(parsed.repo, "linux");

        let parsed = parse_repository_reference("https://GitHub.com/user/p5.sketches/", "github.com")
            .expect("valid reference");
        assert_eq!(parsed.repo, "p5.sketches");
    }

    #[test]
    fn rejects_malformed_references() {
        for reference in [
            "not-a-url",
            "",
            "https://github.com/",
            "https://github.com/only-owner",
            "https://gitlab.com/owner/repo",
            "ftp://github.com/owner/repo",
            "https://github.com/own%20er/repo",
        ] {
            let result = parse_repository_reference(reference, "github.com");
            assert!(
                matches!(result, Err(FetchError::MalformedReference(_))),
                "{reference} should be malformed"
            );
        }
    }

    #[test]
    fn endpoint_keeps_api_base_path() {
        let fetcher = ReadmeFetcher::new(
            reqwest::Client::new(),
            Url::parse("https://ghe.example.com/api/v3").expect("valid url"),
            "ghe.example.com",
            None,
        );
        let endpoint = fetcher
            .readme_endpoint(&RepositoryReference {
                owner: "a".into(),
                repo: "b".into(),
            })
            .expect("endpoint");
        assert_eq!(endpoint.as_str(), "https://ghe.example.com/api/v3/repos/a/b/readme");
    }

    #[test]
    fn blank_token_is_ignored() {
        let fetcher = ReadmeFetcher::new(
            reqwest::Client::new(),
            Url::parse("https://api.github.com").expect("valid url"),
            "github.com",
            Some("  ".into()),
        );
        assert!(fetcher.token.is_none());
    }
}
