use indicatif::ProgressBar;
use std::io::Write;

use crate::auth::{authenticate, Credentials};
use crate::error::Result;
use crate::fetcher::{fetch, FetchRequest};
use crate::github::{GitHubClient, DEFAULT_API_URL};
use crate::locator::locate;
use crate::models::Config;
use crate::table::{render, RenderOutcome};

/// One run of the program: locate, authenticate, fetch, render.
#[derive(Debug, Clone)]
pub struct App {
    config: Config,
    api_url: String,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_api_url(config, DEFAULT_API_URL)
    }

    pub fn with_api_url(config: Config, api_url: impl Into<String>) -> Self {
        Self {
            config,
            api_url: api_url.into(),
        }
    }

    /// Nothing is written to `out` unless every page was fetched.
    pub async fn run<W: Write>(
        &self,
        out: &mut W,
        progress: &ProgressBar,
    ) -> Result<RenderOutcome> {
        let repo = locate(&self.config.repo)?;
        tracing::debug!(repo = %repo, max_count = self.config.issues, "located repository");

        let credentials = Credentials::new(self.config.api_key.clone());
        let http = authenticate(&credentials, self.config.timeout)?;
        let client = GitHubClient::with_api_url(http, self.api_url.as_str());

        progress.set_message(format!("Fetching issues for {repo}..."));
        let request = FetchRequest::new(repo, self.config.issues);
        let issues = fetch(&client, &request, |total| {
            progress.set_message(format!(
                "Fetching issues for {}... {total} so far",
                request.repo
            ));
        })
        .await?;
        progress.finish_and_clear();

        Ok(render(out, &issues, self.config.issues)?)
    }
}
