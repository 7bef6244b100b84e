use crate::ports::outbound::{CommandRunner, HostFileReader, PackageProbe};
use crate::sbom_generation::domain::{
    LicenseField, Package, PackageDependency, PackageId, PackageUrl, ProbeOutcome, QueryResult,
};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

const NAME: &str = "npm";
const COMMAND: &str = "npm";
const LIST_ARGS: [&str; 6] = [
    "list",
    "--json",
    "--all",
    "--long",
    "--package-lock-only",
    "--unicode",
];
const LOCKFILES: [&str; 2] = ["package-lock.json", "npm-shrinkwrap.json"];

/// Output of `npm list --json --long`
#[derive(Debug, Default, Deserialize)]
struct NpmList {
    #[serde(default)]
    dependencies: BTreeMap<String, NpmDependency>,
}

#[derive(Debug, Default, Deserialize)]
struct NpmDependency {
    name: Option<String>,
    #[serde(default)]
    version: String,
    homepage: Option<String>,
    #[serde(default)]
    license: LicenseField,
    #[serde(default)]
    licenses: LicenseField,
    resolved: Option<String>,
    path: Option<String>,
    #[serde(default)]
    dependencies: BTreeMap<String, NpmDependency>,
}

/// License fields of an installed `package.json`, which are more
/// trustworthy than the lockfile's copy
#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    license: LicenseField,
    #[serde(default)]
    licenses: LicenseField,
}

/// NpmProbe adapter for the npm project in the working directory
///
/// The dependency tree comes from the lockfile via `npm list`; nested
/// dependencies become both packages and `DEPENDS_ON` edges.
pub struct NpmProbe<R, F> {
    runner: R,
    files: F,
}

impl<R, F> NpmProbe<R, F>
where
    R: CommandRunner,
    F: HostFileReader,
{
    pub fn new(runner: R, files: F) -> Self {
        Self { runner, files }
    }

    /// Replaces license fields with those of each installed `package.json`.
    /// Entries without a readable manifest keep their lockfile values.
    fn fill_from_package_json(&self, dependencies: &mut BTreeMap<String, NpmDependency>) {
        for (key, dependency) in dependencies.iter_mut() {
            if let Some(path) = dependency.path.as_deref().filter(|p| !p.is_empty()) {
                match self.read_package_json(&Path::new(path).join("package.json")) {
                    Ok(manifest) => {
                        dependency.license = manifest.license;
                        dependency.licenses = manifest.licenses;
                    }
                    Err(e) => {
                        tracing::debug!(package = %key, error = %e, "package.json not used");
                    }
                }
            }
            self.fill_from_package_json(&mut dependency.dependencies);
        }
    }

    fn read_package_json(&self, path: &Path) -> Result<PackageJson> {
        let content = self.files.read_file(path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[async_trait]
impl<R, F> PackageProbe for NpmProbe<R, F>
where
    R: CommandRunner,
    F: HostFileReader,
{
    fn name(&self) -> &str {
        NAME
    }

    fn is_available(&self) -> bool {
        let has_lockfile = LOCKFILES.iter().any(|f| self.files.exists(Path::new(f)));
        has_lockfile && self.runner.has_command(COMMAND)
    }

    async fn query(&self) -> Result<ProbeOutcome> {
        let output = self.runner.run(COMMAND, &LIST_ARGS).await?;
        let mut list: NpmList =
            serde_json::from_str(&output).context("failed to parse npm list output")?;

        self.fill_from_package_json(&mut list.dependencies);

        let mut result = QueryResult::new();
        let mut on_path = HashSet::new();
        for (key, dependency) in &list.dependencies {
            add_package(&mut result, key, dependency, &mut on_path)?;
        }
        tracing::debug!(
            packages = result.package_count(),
            edges = result.dependencies().len(),
            "npm dependency tree walked"
        );

        Ok(ProbeOutcome::new(result, Vec::new()))
    }
}

/// Registers `dependency` and walks its children.
///
/// `on_path` holds the identifiers from the root to this node; a child
/// already on it gets its edge but is not descended into again.
fn add_package(
    result: &mut QueryResult,
    key: &str,
    dependency: &NpmDependency,
    on_path: &mut HashSet<PackageId>,
) -> Result<()> {
    let full_name = dependency.name.as_deref().unwrap_or(key);
    let id = PackageId::new(full_name, &dependency.version);

    if !result.contains(&id) {
        result.insert_package(to_package(full_name, dependency)?);
    }

    if !on_path.insert(id.clone()) {
        return Ok(());
    }

    for (child_key, child) in &dependency.dependencies {
        let child_name = child.name.as_deref().unwrap_or(child_key);
        let child_id = PackageId::new(child_name, &child.version);
        result.add_dependency(PackageDependency::depends_on(id.clone(), child_id));
        add_package(result, child_key, child, on_path)?;
    }

    on_path.remove(&id);
    Ok(())
}

fn to_package(full_name: &str, dependency: &NpmDependency) -> Result<Package> {
    let (namespace, name) = split_scope(full_name);
    let version = dependency.version.as_str();
    let purl = PackageUrl::new("npm", namespace, name, version)?;

    Ok(Package::new(name, namespace, version, purl)
        .with_licenses(LicenseField::resolve(&dependency.licenses, &dependency.license))
        .with_homepage_url(dependency.homepage.clone().unwrap_or_default())
        .with_download_url(dependency.resolved.clone().unwrap_or_default())
        .with_filename(format!("{}-{}.tgz", full_name, version)))
}

/// `@scope/name` -> (`@scope`, `name`)
fn split_scope(full_name: &str) -> (Option<&str>, &str) {
    match full_name.split_once('/') {
        Some((namespace, name)) => (Some(namespace), name),
        None => (None, full_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::probes::test_support::{FakeCommandRunner, FakeFiles};

    const LIST: &str = "npm list --json --all --long --package-lock-only --unicode";

    const TREE: &str = r#"{
        "name": "my-app",
        "version": "1.0.0",
        "dependencies": {
            "debug": {
                "name": "debug",
                "version": "4.3.4",
                "license": "MIT",
                "resolved": "https://registry.npmjs.org/debug/-/debug-4.3.4.tgz",
                "path": "/app/node_modules/debug",
                "dependencies": {
                    "ms": {
                        "name": "ms",
                        "version": "2.1.2",
                        "licenses": [{ "type": "MIT", "url": "https://opensource.org/licenses/MIT" }],
                        "path": "/app/node_modules/ms"
                    }
                }
            },
            "@babel/core": {
                "version": "7.22.0",
                "homepage": "https://babel.dev/docs/en/next/babel-core",
                "license": { "type": "MIT" },
                "resolved": "https://registry.npmjs.org/@babel/core/-/core-7.22.0.tgz",
                "path": "/app/node_modules/@babel/core",
                "dependencies": {
                    "debug": { "name": "debug", "version": "4.3.4" }
                }
            }
        }
    }"#;

    fn runner(tree: &str) -> FakeCommandRunner {
        FakeCommandRunner::new().with_command("npm").respond(LIST, tree)
    }

    #[tokio::test]
    async fn test_query_tree() {
        let probe = NpmProbe::new(runner(TREE), FakeFiles::new());
        let outcome = probe.query().await.unwrap();
        let result = &outcome.result;

        assert_eq!(result.package_count(), 3);
        assert!(outcome.warnings.is_empty());

        let babel = result.get(&PackageId::new("@babel/core", "7.22.0")).unwrap();
        assert_eq!(babel.name(), "core");
        assert_eq!(babel.namespace(), Some("@babel"));
        assert_eq!(babel.filename(), "@babel/core-7.22.0.tgz");
        assert_eq!(babel.purl().to_string(), "pkg:npm/%40babel/core@7.22.0");
        assert_eq!(babel.licenses()[0].name(), "MIT");
        assert_eq!(
            babel.download_url(),
            "https://registry.npmjs.org/@babel/core/-/core-7.22.0.tgz"
        );

        let ms = result.get(&PackageId::new("ms", "2.1.2")).unwrap();
        assert_eq!(ms.licenses()[0].name(), "MIT");
        assert!(ms.download_url().is_empty());
    }

    #[tokio::test]
    async fn test_edges() {
        let probe = NpmProbe::new(runner(TREE), FakeFiles::new());
        let outcome = probe.query().await.unwrap();

        let edges: Vec<(String, String)> = outcome
            .result
            .dependencies()
            .iter()
            .map(|d| (d.requiring().to_string(), d.required().to_string()))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("babel-core-7.22.0".to_string(), "debug-4.3.4".to_string()),
                ("debug-4.3.4".to_string(), "ms-2.1.2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_first_registration_wins() {
        let probe = NpmProbe::new(runner(TREE), FakeFiles::new());
        let outcome = probe.query().await.unwrap();

        // "@babel/core" sorts first, so its bare copy of debug is registered first
        let debug = outcome.result.get(&PackageId::new("debug", "4.3.4")).unwrap();
        assert!(debug.licenses().is_empty());
    }

    #[tokio::test]
    async fn test_package_json_refreshes_licenses() {
        let files = FakeFiles::new()
            .with_file("/app/node_modules/ms/package.json", r#"{ "license": "ISC" }"#)
            .with_file("/app/node_modules/@babel/core/package.json", "not json");
        let probe = NpmProbe::new(runner(TREE), files);
        let outcome = probe.query().await.unwrap();

        let ms = outcome.result.get(&PackageId::new("ms", "2.1.2")).unwrap();
        assert_eq!(ms.licenses()[0].name(), "ISC");

        let babel = outcome.result.get(&PackageId::new("@babel/core", "7.22.0")).unwrap();
        assert_eq!(babel.licenses()[0].name(), "MIT");
    }

    #[tokio::test]
    async fn test_cycle_terminates() {
        let cyclic = r#"{
            "dependencies": {
                "a": { "version": "1.0.0", "dependencies": {
                    "b": { "version": "1.0.0", "dependencies": {
                        "a": { "version": "1.0.0", "dependencies": {
                            "b": { "version": "1.0.0" }
                        } }
                    } }
                } }
            }
        }"#;
        let probe = NpmProbe::new(runner(cyclic), FakeFiles::new());
        let outcome = probe.query().await.unwrap();

        assert_eq!(outcome.result.package_count(), 2);
        let edges: Vec<(String, String)> = outcome
            .result
            .dependencies()
            .iter()
            .map(|d| (d.requiring().to_string(), d.required().to_string()))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("a-1.0.0".to_string(), "b-1.0.0".to_string()),
                ("b-1.0.0".to_string(), "a-1.0.0".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_output_is_fatal() {
        let probe = NpmProbe::new(runner("npm ERR! missing script"), FakeFiles::new());
        let err = probe.query().await.unwrap_err();
        assert!(err.to_string().contains("failed to parse npm list output"));
    }

    #[tokio::test]
    async fn test_command_failure_is_fatal() {
        let runner = FakeCommandRunner::new().fail(LIST, "npm ERR! code ELSPROBLEMS");
        let probe = NpmProbe::new(runner, FakeFiles::new());
        assert!(probe.query().await.is_err());
    }

    #[test]
    fn test_is_available_requires_lockfile_and_command() {
        let with_lock = || FakeFiles::new().with_file("package-lock.json", "{}");

        assert!(NpmProbe::new(runner(TREE), with_lock()).is_available());
        assert!(!NpmProbe::new(runner(TREE), FakeFiles::new()).is_available());
        assert!(!NpmProbe::new(FakeCommandRunner::new(), with_lock()).is_available());

        let shrinkwrap = FakeFiles::new().with_file("npm-shrinkwrap.json", "{}");
        assert!(NpmProbe::new(runner(TREE), shrinkwrap).is_available());
    }

    #[test]
    fn test_split_scope() {
        assert_eq!(split_scope("@types/node"), (Some("@types"), "node"));
        assert_eq!(split_scope("lodash"), (None, "lodash"));
    }
}
