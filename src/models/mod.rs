pub mod config;
pub mod issue;
pub mod repo;

pub use config::{Config, FileConfig};
pub use issue::{Issue, IssuePage};
pub use repo::RepoRef;
