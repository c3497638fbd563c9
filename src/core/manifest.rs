//! Manifest reading
//!
//! Each package declares its dependencies in a `package.xml` manifest as
//! repeated `<depend>` entries. Dependency names are opaque strings at this
//! layer; classification into local vs external happens during resolution.

use std::path::Path;

use crate::config::defaults::MANIFEST_FILENAME;
use crate::error::ManifestError;

/// Read the ordered list of declared dependency names for a package
///
/// Returns the text of every `<depend>` element in document order. Fails if
/// the manifest cannot be read or is not well-formed XML. A missing manifest
/// is not reachable through the scanner path.
pub fn read_dependencies(package_path: &Path) -> Result<Vec<String>, ManifestError> {
    let manifest_path = package_path.join(MANIFEST_FILENAME);
    tracing::debug!("Parsing {}", manifest_path.display());

    let content = std::fs::read_to_string(&manifest_path).map_err(|e| ManifestError::Parse {
        path: package_path.to_path_buf(),
        error: e.to_string(),
    })?;

    let doc = roxmltree::Document::parse(&content).map_err(|e| ManifestError::Parse {
        path: package_path.to_path_buf(),
        error: e.to_string(),
    })?;

    let dependencies = doc
        .descendants()
        .filter(|node| node.has_tag_name("depend"))
        .filter_map(|node| node.text())
        .map(|text| text.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    Ok(dependencies)
}
