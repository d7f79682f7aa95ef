//! Paginated issue retrieval with a count cap.

use std::future::Future;

use crate::error::{FetchError, SourceError};
use crate::models::{Issue, IssuePage, RepoRef};

/// GitHub's largest page size for the issues endpoint.
pub const PAGE_SIZE: u32 = 100;

/// Anything that can list one page of a repository's issues. `page` is 1-based.
pub trait IssueSource {
    fn list_page(
        &self,
        repo: &RepoRef,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<IssuePage, SourceError>> + Send;
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub repo: RepoRef,
    /// Negative means fetch every page.
    pub max_count: i64,
    pub page_size: u32,
}

impl FetchRequest {
    pub fn new(repo: RepoRef, max_count: i64) -> Self {
        Self {
            repo,
            max_count,
            page_size: PAGE_SIZE,
        }
    }

    /// Whether another page is wanted after `fetched` issues.
    ///
    /// The comparison is `<=`, so a bounded fetch keeps going until it holds
    /// more than `max_count` issues. The surplus is trimmed at render time.
    fn wants_more(&self, fetched: usize) -> bool {
        self.max_count < 0 || (fetched as u64) <= self.max_count as u64
    }
}

/// Pulls pages from `source` until the request is satisfied or the remote
/// runs out of pages. The first failing page aborts the whole fetch.
///
/// `on_page` sees the running total after every page.
pub async fn fetch<S, F>(
    source: &S,
    request: &FetchRequest,
    mut on_page: F,
) -> Result<Vec<Issue>, FetchError>
where
    S: IssueSource,
    F: FnMut(usize),
{
    let repo = &request.repo;
    let mut issues = Vec::new();
    let mut page = 1;

    while request.wants_more(issues.len()) {
        let batch = source
            .list_page(repo, page, request.page_size)
            .await
            .map_err(|source| FetchError {
                owner: repo.owner().to_string(),
                name: repo.name().to_string(),
                page,
                source,
            })?;

        tracing::debug!(
            repo = %repo,
            page,
            count = batch.issues.len(),
            next_page = ?batch.next_page,
            "fetched page"
        );

        issues.extend(batch.issues);
        on_page(issues.len());

        match batch.next_page {
            Some(next) if next > 0 => page = next,
            _ => break,
        }
    }

    tracing::info!(repo = %repo, total = issues.len(), last_page = page, "fetch finished");
    Ok(issues)
}
