//! Dependency resolution
//!
//! Computes a total build order over the discovered packages such that every
//! package's local dependencies precede it, and detects circular or
//! unresolvable dependency sets.
//!
//! The algorithm is an iterative fixed point (layered Kahn-style topological
//! sort without materializing an edge graph): each round partitions the
//! pending packages, in stable discovery order, into those whose declared
//! dependencies are all satisfied and those still waiting. A round that makes
//! no progress over a non-empty pending set is a cycle. Ties among packages
//! that become ready in the same round are broken by discovery order, so the
//! output is deterministic for a given input sequence.

use std::collections::HashSet;

use crate::core::package::Package;
use crate::error::ResolverError;

/// A declared dependency name, classified once at resolution time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyRef {
    /// Names another package discovered in the same workspace
    Local(String),
    /// System or third-party name; always considered satisfied
    External(String),
}

impl DependencyRef {
    /// The declared name, regardless of classification
    pub fn name(&self) -> &str {
        match self {
            DependencyRef::Local(name) | DependencyRef::External(name) => name,
        }
    }
}

/// A package paired with its classified dependencies
#[derive(Debug, Clone)]
pub struct ResolvedPackage {
    /// The discovered package
    pub package: Package,
    /// Its dependencies, classified local vs external
    pub dependencies: Vec<DependencyRef>,
}

impl ResolvedPackage {
    /// Names of the package's local dependencies
    pub fn local_dependencies(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().filter_map(|dep| match dep {
            DependencyRef::Local(name) => Some(name.as_str()),
            DependencyRef::External(_) => None,
        })
    }
}

/// A valid build order: every package exactly once, local dependencies first
#[derive(Debug, Default)]
pub struct BuildOrder {
    packages: Vec<ResolvedPackage>,
}

impl BuildOrder {
    /// Number of packages in the order
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the order is empty
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterate packages in build order
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedPackage> {
        self.packages.iter()
    }

    /// Package at a position in the order
    pub fn get(&self, index: usize) -> Option<&ResolvedPackage> {
        self.packages.get(index)
    }

    /// Display names in build order
    pub fn names(&self) -> Vec<&str> {
        self.packages.iter().map(|p| p.package.name()).collect()
    }
}

impl<'a> IntoIterator for &'a BuildOrder {
    type Item = &'a ResolvedPackage;
    type IntoIter = std::slice::Iter<'a, ResolvedPackage>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.iter()
    }
}

/// Resolve the discovered packages into a build order
///
/// Input order is the discovery order and serves as the deterministic
/// tie-break. Fails with [`ResolverError::CircularDependency`] naming every
/// package that can never become ready; a self-dependency is caught by the
/// same condition.
pub fn resolve(packages: Vec<Package>) -> Result<BuildOrder, ResolverError> {
    tracing::info!("Resolving dependencies for {} packages", packages.len());

    let known: HashSet<String> = packages.iter().map(|p| p.name().to_string()).collect();
    let mut resolved: Vec<ResolvedPackage> = Vec::with_capacity(packages.len());
    let mut satisfied: HashSet<String> = HashSet::with_capacity(packages.len());
    let mut pending = packages;

    while !pending.is_empty() {
        let mut still_pending = Vec::new();
        let round_start = resolved.len();

        for package in pending {
            let ready = package
                .dependencies()
                .iter()
                .all(|dep| satisfied.contains(dep) || !known.contains(dep));

            if ready {
                let dependencies = package
                    .dependencies()
                    .iter()
                    .map(|dep| {
                        if known.contains(dep) {
                            DependencyRef::Local(dep.clone())
                        } else {
                            DependencyRef::External(dep.clone())
                        }
                    })
                    .collect();
                satisfied.insert(package.name().to_string());
                resolved.push(ResolvedPackage {
                    package,
                    dependencies,
                });
            } else {
                still_pending.push(package);
            }
        }

        if resolved.len() == round_start {
            let stuck: Vec<String> = still_pending
                .iter()
                .map(|p| p.name().to_string())
                .collect();
            tracing::error!("Unresolvable dependency set: {stuck:?}");
            return Err(ResolverError::CircularDependency { packages: stuck });
        }
        pending = still_pending;
    }

    tracing::info!("Dependency resolution completed");
    Ok(BuildOrder { packages: resolved })
}
