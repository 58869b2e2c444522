//! Registry record types.

use std::fmt;

use serde::Serialize;

/// Version control system used to fetch a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsKind {
    Git,
    Hg,
    Svn,
    Bzr,
}

impl VcsKind {
    /// Identifier understood by `go get`.
    pub fn as_str(&self) -> &'static str {
        match self {
            VcsKind::Git => "git",
            VcsKind::Hg => "hg",
            VcsKind::Svn => "svn",
            VcsKind::Bzr => "bzr",
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a URL path on this host to a source repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageEntry {
    /// URL path including the leading slash, e.g. `/go-utils`.
    pub path: String,

    /// Repository root URL.
    #[serde(rename = "repo")]
    pub repository_url: String,

    pub vcs: VcsKind,
}

impl PackageEntry {
    pub fn new(path: impl Into<String>, repository_url: impl Into<String>, vcs: VcsKind) -> Self {
        Self {
            path: path.into(),
            repository_url: repository_url.into(),
            vcs,
        }
    }
}
