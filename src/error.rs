use std::path::PathBuf;

use thiserror::Error;

/// Why a repository identifier was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("No repo specified")]
    MissingRepo,

    #[error("Invalid repo URL {raw:?}: {reason}")]
    InvalidUrl { raw: String, reason: url::ParseError },

    #[error("Invalid GitHub URL {raw:?}: expected a path like /owner/repo")]
    InvalidRepoPath { raw: String },
}

/// A single page request that went wrong.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
#[error("error fetching issues for {owner}/{name} (page {page}): {source}")]
pub struct FetchError {
    pub owner: String,
    pub name: String,
    pub page: u32,
    #[source]
    pub source: SourceError,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("could not load config file {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },

    #[error("API key contains characters that are not allowed in an HTTP header")]
    InvalidApiKey,

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Everything that ends a run early.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Locate(#[from] LocateError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("interrupted")]
    Interrupted,
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Locate(LocateError::MissingRepo) | Error::Output(_) => 1,
            Error::Locate(_) | Error::Config(_) => 2,
            Error::Fetch(_) => 3,
            Error::Interrupted => 130,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(Error::from(LocateError::MissingRepo).exit_code(), 1);
        assert_eq!(
            Error::from(LocateError::InvalidRepoPath { raw: "x".into() }).exit_code(),
            2
        );
        assert_eq!(
            Error::from(LocateError::InvalidUrl {
                raw: "http://[::1".into(),
                reason: url::ParseError::InvalidIpv6Address,
            })
            .exit_code(),
            2
        );
        assert_eq!(
            Error::from(ConfigError::NotFound(PathBuf::from("x"))).exit_code(),
            2
        );
        let fetch = FetchError {
            owner: "acme".into(),
            name: "widgets".into(),
            page: 2,
            source: SourceError::Status {
                status: reqwest::StatusCode::BAD_GATEWAY,
                message: "oops".into(),
            },
        };
        assert_eq!(
            fetch.to_string(),
            "error fetching issues for acme/widgets (page 2): GitHub returned 502 Bad Gateway: oops"
        );
        assert_eq!(Error::from(fetch).exit_code(), 3);
        assert_eq!(Error::Interrupted.exit_code(), 130);
    }
}
