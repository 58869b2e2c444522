//! Package registry subsystem.
//!
//! # Data Flow
//! ```text
//! Compiled-in package list (catalog.rs)
//!     → Registry (ordered, immutable)
//!     → shared via Arc with the request router
//!     → find_by_path on every package request
//! ```
//!
//! # Design Decisions
//! - Contents are fixed at startup; there is no reload path
//! - Lookup is an exact path comparison, first match wins
//! - Duplicate paths are reported at startup but not rejected

pub mod catalog;
pub mod package;

pub use package::{PackageEntry, VcsKind};

/// Ordered, read-only list of vanity packages.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<PackageEntry>,
}

impl Registry {
    /// Create a registry from an ordered list of entries.
    pub fn new(entries: Vec<PackageEntry>) -> Self {
        Self { entries }
    }

    /// The registry compiled into this binary.
    pub fn builtin() -> Self {
        Self::new(catalog::builtin_packages())
    }

    /// Find the first entry whose path equals `path` exactly.
    ///
    /// No normalization is applied: `/go-utils/` and `/go-utils` are different
    /// paths, and `/go-utils/sub` does not match `/go-utils`.
    pub fn find_by_path(&self, path: &str) -> Option<&PackageEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[PackageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths registered more than once, each reported a single time.
    ///
    /// Only the first registration of such a path is ever reachable.
    pub fn duplicate_paths(&self) -> Vec<&str> {
        let mut duplicates: Vec<&str> = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            let seen_before = self.entries[..i].iter().any(|e| e.path == entry.path);
            if seen_before && !duplicates.contains(&entry.path.as_str()) {
                duplicates.push(&entry.path);
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, repo: &str) -> PackageEntry {
        PackageEntry::new(path, repo, VcsKind::Git)
    }

    #[test]
    fn test_find_by_path_exact() {
        let registry = Registry::new(vec![
            entry("/go-utils", "https://github.com/aykhans/go-utils"),
            entry("/sarin", "https://github.com/aykhans/sarin"),
        ]);

        let found = registry.find_by_path("/sarin").unwrap();
        assert_eq!(found.repository_url, "https://github.com/aykhans/sarin");

        assert!(registry.find_by_path("/sarin/").is_none());
        assert!(registry.find_by_path("/sarin/cmd").is_none());
        assert!(registry.find_by_path("sarin").is_none());
        assert!(registry.find_by_path("/SARIN").is_none());
        assert!(registry.find_by_path("/").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let registry = Registry::new(vec![
            entry("/dup", "https://example.com/first"),
            entry("/dup", "https://example.com/second"),
            entry("/other", "https://example.com/other"),
            entry("/dup", "https://example.com/third"),
        ]);

        let found = registry.find_by_path("/dup").unwrap();
        assert_eq!(found.repository_url, "https://example.com/first");
        assert_eq!(registry.duplicate_paths(), vec!["/dup"]);
    }

    #[test]
    fn test_builtin_registry() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(registry.duplicate_paths().is_empty());

        let paths: Vec<&str> = registry.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/go-utils", "/sarin"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::default();
        assert!(registry.is_empty());
        assert!(registry.find_by_path("/go-utils").is_none());
    }
}
