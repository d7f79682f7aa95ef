//! Turns a repository identifier into a [`RepoRef`].
//!
//! Accepts full URLs (`https://github.com/acme/widgets`) as well as the
//! `acme/widgets` shorthand, which is read relative to `https://github.com/`.
//! Only the path matters; the host is not checked.

use url::Url;

use crate::error::LocateError;
use crate::models::RepoRef;

const SHORTHAND_BASE: &str = "https://github.com/";

pub fn locate(raw: &str) -> Result<RepoRef, LocateError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LocateError::MissingRepo);
    }

    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(SHORTHAND_BASE)
            .and_then(|base| base.join(raw))
            .map_err(|reason| invalid_url(raw, reason))?,
        Err(reason) => return Err(invalid_url(raw, reason)),
    };

    let invalid_path = || LocateError::InvalidRepoPath {
        raw: raw.to_string(),
    };

    let mut segments = url
        .path_segments()
        .ok_or_else(invalid_path)?
        .filter(|s| !s.is_empty());

    let owner = segments.next().ok_or_else(invalid_path)?;
    let name = segments.next().ok_or_else(invalid_path)?;
    let name = name.strip_suffix(".git").unwrap_or(name);

    RepoRef::new(owner, name).ok_or_else(invalid_path)
}

fn invalid_url(raw: &str, reason: url::ParseError) -> LocateError {
    LocateError::InvalidUrl {
        raw: raw.to_string(),
        reason,
    }
}
