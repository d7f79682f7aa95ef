use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// One batch of issues plus the number of the page after it, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssuePage {
    pub issues: Vec<Issue>,
    pub next_page: Option<u32>,
}
