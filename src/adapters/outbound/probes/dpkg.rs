use super::columns::{ensure_same_length, split_rows};
use crate::adapters::outbound::system::OsRelease;
use crate::ports::outbound::{CommandRunner, HostFileReader, PackageProbe};
use crate::sbom_generation::domain::{
    License, LicenseFile, Package, PackageUrl, ProbeOutcome, ProbeWarning, QueryResult,
};
use crate::sbom_generation::policies::CopyrightLicenses;
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

const NAME: &str = "dpkg";
const QUERY_COMMAND: &str = "dpkg-query";
const APT_COMMAND: &str = "apt";
const INSTALLED: &str = "ii";

/// Argument bytes allowed per `apt info` call: a 4 KiB ARG_MAX minus the
/// command itself minus room for one more package name
const APT_ARGS_BUDGET: usize = 4096 - "apt info ".len() - 255;

/// DpkgProbe adapter for Debian system packages
///
/// Columns come from separate `dpkg-query` calls and are joined by row;
/// only packages in state `ii` (installed) are kept.
pub struct DpkgProbe<R, F> {
    runner: R,
    files: F,
}

impl<R, F> DpkgProbe<R, F>
where
    R: CommandRunner,
    F: HostFileReader,
{
    pub fn new(runner: R, files: F) -> Self {
        Self { runner, files }
    }

    async fn query_column(&self, field: &str) -> Result<Vec<String>> {
        let format = format!("${{db:Status-Abbrev}} ${{{}}}\\n", field);
        let output = self
            .runner
            .run(QUERY_COMMAND, &["-W", "-f", format.as_str()])
            .await?;
        Ok(extract_installed(&split_rows(&output)))
    }

    async fn query_versions(&self) -> Result<Vec<String>> {
        let versions = self.query_column("Version").await?;
        Ok(versions.iter().map(|v| strip_epoch(v).to_string()).collect())
    }

    /// Maps package names to their `APT-Sources:` line.
    ///
    /// Source origin is optional, so any apt failure yields an empty map.
    async fn query_apt_sources(&self, names: &[String]) -> HashMap<String, String> {
        if !self.runner.has_command(APT_COMMAND) {
            return HashMap::new();
        }

        let mut sources = HashMap::new();
        for batch in apt_batches(names) {
            let mut args = vec!["info"];
            args.extend(batch.iter().map(String::as_str));

            match self.runner.run(APT_COMMAND, &args).await {
                Ok(output) => parse_apt_sources(&output, &mut sources),
                Err(e) => {
                    tracing::debug!(error = %e, "apt info failed, source info omitted");
                    return HashMap::new();
                }
            }
        }
        sources
    }

    fn find_copyright_path(&self, name: &str) -> Option<PathBuf> {
        let path = copyright_path(name);
        if self.files.exists(&path) {
            return Some(path);
        }

        let (short_name, _arch) = name.rsplit_once(':')?;
        let path = copyright_path(short_name);
        self.files.exists(&path).then_some(path)
    }

    /// License names and the copyright file of one package; a read failure
    /// becomes a warning and leaves both empty
    fn query_licenses(
        &self,
        name: &str,
        warnings: &mut Vec<ProbeWarning>,
    ) -> (Vec<License>, Vec<LicenseFile>) {
        let Some(path) = self.find_copyright_path(name) else {
            return (Vec::new(), Vec::new());
        };

        match self.files.read_file(&path) {
            Ok(content) => {
                let licenses = CopyrightLicenses::extract(&content);
                (licenses, vec![LicenseFile::new(path, content)])
            }
            Err(e) => {
                warnings.push(ProbeWarning::new(NAME, name, e.to_string()));
                (Vec::new(), Vec::new())
            }
        }
    }
}

#[async_trait]
impl<R, F> PackageProbe for DpkgProbe<R, F>
where
    R: CommandRunner,
    F: HostFileReader,
{
    fn name(&self) -> &str {
        NAME
    }

    fn is_available(&self) -> bool {
        self.runner.has_command(QUERY_COMMAND)
    }

    async fn query(&self) -> Result<ProbeOutcome> {
        let (names, versions, architectures, homepages) = tokio::try_join!(
            self.query_column("Package"),
            self.query_versions(),
            self.query_column("Architecture"),
            self.query_column("Homepage"),
        )?;

        ensure_same_length(NAME, &names, "versions", &versions)?;
        ensure_same_length(NAME, &names, "architectures", &architectures)?;
        ensure_same_length(NAME, &names, "homepages", &homepages)?;
        tracing::debug!(packages = names.len(), "dpkg columns queried");

        let os_release = OsRelease::load(&self.files);
        let sources = self.query_apt_sources(&names).await;

        let mut result = QueryResult::new();
        let mut warnings = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let version = &versions[i];
            let arch = &architectures[i];

            let (licenses, license_files) = self.query_licenses(name, &mut warnings);
            let purl = PackageUrl::new("deb", Some(os_release.id.as_str()), name, version)?;

            let package = Package::new(name, None, version, purl)
                .with_licenses(licenses)
                .with_license_files(license_files)
                .with_homepage_url(homepages[i].as_str())
                .with_source_info(sources.get(name).cloned().unwrap_or_default())
                .with_filename(format!("{}_{}_{}.deb", name, version, arch));
            result.insert_package(package);
        }

        Ok(ProbeOutcome::new(result, warnings))
    }
}

/// Keeps the value of rows whose status is `ii`
fn extract_installed(rows: &[String]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.split_once(' '))
        .filter(|(status, _)| *status == INSTALLED)
        .map(|(_, value)| value.trim_start().to_string())
        .collect()
}

/// `1:2.3-4` -> `2.3-4`
fn strip_epoch(version: &str) -> &str {
    version.split_once(':').map_or(version, |(_, rest)| rest)
}

fn copyright_path(name: &str) -> PathBuf {
    PathBuf::from(format!("/usr/share/doc/{}/copyright", name))
}

/// Groups package names so that one `apt info` call stays under the
/// argument budget
fn apt_batches(names: &[String]) -> Vec<&[String]> {
    let mut batches = Vec::new();
    let mut start = 0;
    let mut size = 0;
    for (i, name) in names.iter().enumerate() {
        size += name.len();
        if size > APT_ARGS_BUDGET {
            batches.push(&names[start..=i]);
            start = i + 1;
            size = 0;
        }
    }
    if start < names.len() {
        batches.push(&names[start..]);
    }
    batches
}

fn parse_apt_sources(output: &str, sources: &mut HashMap<String, String>) {
    let mut current: Option<String> = None;
    for line in output.lines() {
        if let Some(name) = line.strip_prefix("Package:") {
            current = Some(name.trim().to_string());
        } else if let Some(source) = line.strip_prefix("APT-Sources:") {
            if let Some(name) = current.as_ref().filter(|n| !n.is_empty()) {
                sources.insert(name.clone(), source.trim().to_string());
            }
        }
    }
}
