use reqwest::header::{HeaderMap, LINK};
use serde::Deserialize;
use url::Url;

use crate::error::SourceError;
use crate::fetcher::IssueSource;
use crate::models::{Issue, IssuePage, RepoRef};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub REST client for the "list repository issues" endpoint.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
}

#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

impl GitHubClient {
    /// `http` is expected to come from [`crate::auth::authenticate`].
    pub fn with_api_url(http: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { http, api_url }
    }

    fn issues_url(&self, repo: &RepoRef) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.api_url,
            repo.owner(),
            repo.name()
        )
    }
}

impl IssueSource for GitHubClient {
    async fn list_page(
        &self,
        repo: &RepoRef,
        page: u32,
        per_page: u32,
    ) -> Result<IssuePage, SourceError> {
        let res = self
            .http
            .get(self.issues_url(repo))
            .query(&[("per_page", per_page), ("page", page)])
            .send()
            .await?;

        let status = res.status();
        let next_page = next_page(res.headers());
        let body = res.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiMessage>(&body)
                .map(|m| m.message)
                .unwrap_or(body);
            return Err(SourceError::Status { status, message });
        }

        let issues: Vec<Issue> = serde_json::from_str(&body)?;
        Ok(IssuePage { issues, next_page })
    }
}

/// Page number of the `rel="next"` entry of a `Link` header.
fn next_page(headers: &HeaderMap) -> Option<u32> {
    let link = headers.get(LINK)?.to_str().ok()?;
    link.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;
        if !params.split(';').any(|p| p.trim() == r#"rel="next""#) {
            return None;
        }
        let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        let url = Url::parse(target).ok()?;
        let page = url
            .query_pairs()
            .find(|(k, _)| k == "page")
            .and_then(|(_, v)| v.parse::<u32>().ok())?;
        (page > 0).then_some(page)
    })
}
