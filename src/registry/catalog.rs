//! Packages served by this deployment.
//!
//! Every path must start with `/` and be unique.

use super::package::{PackageEntry, VcsKind};

pub fn builtin_packages() -> Vec<PackageEntry> {
    vec![
        PackageEntry::new(
            "/go-utils",
            "https://github.com/aykhans/go-utils",
            VcsKind::Git,
        ),
        PackageEntry::new("/sarin", "https://github.com/aykhans/sarin", VcsKind::Git),
    ]
}
