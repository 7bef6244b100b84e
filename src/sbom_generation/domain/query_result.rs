use super::{Package, PackageId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Kind of edge between two packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DependencyType {
    DependsOn,
}

/// Directed edge: `requiring` depends on `required`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDependency {
    #[serde(rename = "requiringPackageID")]
    requiring: PackageId,
    #[serde(rename = "requiredPackageID")]
    required: PackageId,
    dependency_type: DependencyType,
}

impl PackageDependency {
    pub fn depends_on(requiring: PackageId, required: PackageId) -> Self {
        Self {
            requiring,
            required,
            dependency_type: DependencyType::DependsOn,
        }
    }

    pub fn requiring(&self) -> &PackageId {
        &self.requiring
    }

    pub fn required(&self) -> &PackageId {
        &self.required
    }

    pub fn dependency_type(&self) -> DependencyType {
        self.dependency_type
    }
}

/// Packages and dependency edges reported by one probe invocation.
///
/// Packages are keyed and iterated by identifier, which gives every
/// consumer a canonical order independent of how the probe discovered them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    packages: BTreeMap<PackageId, Package>,
    #[serde(default)]
    dependencies: Vec<PackageDependency>,
}

impl QueryResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a package. The first package registered under an
    /// identifier is kept; returns false when the identifier was already taken.
    pub fn insert_package(&mut self, package: Package) -> bool {
        if self.packages.contains_key(package.id()) {
            return false;
        }
        self.packages.insert(package.id().clone(), package);
        true
    }

    /// Records an edge; an identical edge is recorded only once.
    pub fn add_dependency(&mut self, dependency: PackageDependency) {
        if !self.dependencies.contains(&dependency) {
            self.dependencies.push(dependency);
        }
    }

    pub fn contains(&self, id: &PackageId) -> bool {
        self.packages.contains_key(id)
    }

    pub fn get(&self, id: &PackageId) -> Option<&Package> {
        self.packages.get(id)
    }

    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    pub fn dependencies(&self) -> &[PackageDependency] {
        &self.dependencies
    }

    pub fn package_ids(&self) -> BTreeSet<&PackageId> {
        self.packages.keys().collect()
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }
}

/// A non-fatal problem with one package, e.g. an unreadable copyright file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeWarning {
    probe: String,
    package: String,
    message: String,
}

impl ProbeWarning {
    pub fn new(probe: &str, package: &str, message: impl Into<String>) -> Self {
        Self {
            probe: probe.to_string(),
            package: package.to_string(),
            message: message.into(),
        }
    }

    pub fn probe(&self) -> &str {
        &self.probe
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ProbeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: failed to find licenses in {}: {}",
            self.probe, self.package, self.message
        )
    }
}

/// Successful probe query: the result plus per-package warnings
#[derive(Debug, Clone, Default)]
pub struct ProbeOutcome {
    pub result: QueryResult,
    pub warnings: Vec<ProbeWarning>,
}

impl ProbeOutcome {
    pub fn new(result: QueryResult, warnings: Vec<ProbeWarning>) -> Self {
        Self { result, warnings }
    }
}
