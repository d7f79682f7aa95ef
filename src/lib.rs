//! Fetch the issues of a GitHub repository and print them as a table.

pub mod app;
pub mod auth;
pub mod cli;
pub mod error;
pub mod fetcher;
pub mod github;
pub mod locator;
pub mod models;
pub mod table;

pub use app::App;
pub use error::{Error, Result};
pub use models::{Config, Issue, IssuePage, RepoRef};
