use core::fmt;

/// Owner and name of a GitHub repository. Both parts are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    owner: String,
    name: String,
}

impl RepoRef {
    /// Returns `None` when either part is empty.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Option<Self> {
        let owner = owner.into();
        let name = name.into();
        if owner.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self { owner, name })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
