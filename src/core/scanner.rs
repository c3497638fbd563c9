//! Package discovery
//!
//! Walks the source tree and collects every directory containing a package
//! manifest, at any depth. The walk order is deterministic for a given tree,
//! which later serves as the resolver's tie-break order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::defaults::MANIFEST_FILENAME;

/// Scan a source tree for package locations
///
/// Returns every directory beneath `src_dir` that contains a manifest file.
/// Unreadable entries are skipped; an empty result is not an error here.
pub fn scan_packages(src_dir: &Path) -> Vec<PathBuf> {
    tracing::info!("Scanning for packages in {}", src_dir.display());

    let mut packages = Vec::new();
    for entry in WalkDir::new(src_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        if entry.file_type().is_dir() && entry.path().join(MANIFEST_FILENAME).is_file() {
            tracing::debug!("Found package at: {}", entry.path().display());
            packages.push(entry.path().to_path_buf());
        }
    }
    packages
}
