use super::columns::{ensure_same_length, split_rows};
use crate::adapters::outbound::system::OsRelease;
use crate::ports::outbound::{CommandRunner, HostFileReader, PackageProbe};
use crate::sbom_generation::domain::{
    License, LicenseFile, Package, PackageUrl, ProbeOutcome, ProbeWarning, QueryResult,
};
use crate::shared::Result;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::path::Path;

const NAME: &str = "rpm";
const COMMAND: &str = "rpm";
const NONE_VALUE: &str = "(none)";

/// Concurrent `rpm -q <nvra> -L` lookups
const LICENSE_LOOKUP_CONCURRENCY: usize = 8;

/// RpmProbe adapter for RPM based system packages
pub struct RpmProbe<R, F> {
    runner: R,
    files: F,
}

struct RpmRow<'a> {
    name: &'a str,
    version: &'a str,
    release: &'a str,
    arch: &'a str,
}

impl RpmRow<'_> {
    /// `name-version-release.arch`, the form `rpm -q` accepts
    fn nvra(&self) -> String {
        format!("{}-{}-{}.{}", self.name, self.version, self.release, self.arch)
    }
}

impl<R, F> RpmProbe<R, F>
where
    R: CommandRunner,
    F: HostFileReader,
{
    pub fn new(runner: R, files: F) -> Self {
        Self { runner, files }
    }

    async fn query_column(&self, tag: &str) -> Result<Vec<String>> {
        let format = format!("%{{{}}}\\n", tag);
        let output = self
            .runner
            .run(COMMAND, &["-q", "--all", "--qf", format.as_str()])
            .await?;
        Ok(split_rows(&output)
            .into_iter()
            .map(|value| if value == NONE_VALUE { String::new() } else { value })
            .collect())
    }

    /// License files listed by `rpm -L`; paths that do not exist are skipped,
    /// lookup and read failures become warnings
    async fn query_license_files(
        &self,
        package: &str,
        nvra: &str,
    ) -> (Vec<LicenseFile>, Vec<ProbeWarning>) {
        let mut warnings = Vec::new();

        let paths = match self.runner.run(COMMAND, &["-q", nvra, "-L"]).await {
            Ok(output) => split_rows(&output),
            Err(e) => {
                warnings.push(ProbeWarning::new(NAME, package, e.to_string()));
                return (Vec::new(), warnings);
            }
        };

        let mut files = Vec::new();
        for path in paths.iter().map(|p| Path::new(p.trim())) {
            if !path.is_absolute() || !self.files.exists(path) {
                continue;
            }
            match self.files.read_file(path) {
                Ok(content) => files.push(LicenseFile::new(path, content)),
                Err(e) => warnings.push(ProbeWarning::new(NAME, package, e.to_string())),
            }
        }

        (files, warnings)
    }
}

#[async_trait]
impl<R, F> PackageProbe for RpmProbe<R, F>
where
    R: CommandRunner,
    F: HostFileReader,
{
    fn name(&self) -> &str {
        NAME
    }

    fn is_available(&self) -> bool {
        self.runner.has_command(COMMAND)
    }

    async fn query(&self) -> Result<ProbeOutcome> {
        let (names, versions, releases, architectures, licenses, urls) = tokio::try_join!(
            self.query_column("NAME"),
            self.query_column("VERSION"),
            self.query_column("RELEASE"),
            self.query_column("ARCH"),
            self.query_column("LICENSE"),
            self.query_column("URL"),
        )?;

        ensure_same_length(NAME, &names, "versions", &versions)?;
        ensure_same_length(NAME, &names, "releases", &releases)?;
        ensure_same_length(NAME, &names, "architectures", &architectures)?;
        ensure_same_length(NAME, &names, "licenses", &licenses)?;
        ensure_same_length(NAME, &names, "urls", &urls)?;
        tracing::debug!(packages = names.len(), "rpm columns queried");

        let rows: Vec<RpmRow<'_>> = (0..names.len())
            .map(|i| RpmRow {
                name: &names[i],
                version: &versions[i],
                release: &releases[i],
                arch: &architectures[i],
            })
            .collect();

        let lookups: Vec<(String, String)> = rows
            .iter()
            .map(|row| (row.name.to_string(), row.nvra()))
            .collect();
        let license_files: Vec<(Vec<LicenseFile>, Vec<ProbeWarning>)> = stream::iter(lookups)
            .map(|(name, nvra)| async move { self.query_license_files(&name, &nvra).await })
            .buffered(LICENSE_LOOKUP_CONCURRENCY)
            .collect()
            .await;

        let os_release = OsRelease::load(&self.files);

        let mut result = QueryResult::new();
        let mut warnings = Vec::new();
        for ((i, row), (files, file_warnings)) in rows.iter().enumerate().zip(license_files) {
            warnings.extend(file_warnings);

            let license_names = if licenses[i].is_empty() {
                Vec::new()
            } else {
                vec![License::new(licenses[i].as_str())]
            };
            let purl =
                PackageUrl::new("rpm", Some(os_release.id.as_str()), row.name, row.version)?;

            let package = Package::new(row.name, None, row.version, purl)
                .with_licenses(license_names)
                .with_license_files(files)
                .with_homepage_url(urls[i].as_str())
                .with_filename(format!("{}.rpm", row.nvra()));
            result.insert_package(package);
        }

        Ok(ProbeOutcome::new(result, warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::probes::test_support::{FakeCommandRunner, FakeFiles};

    fn column(tag: &str) -> String {
        format!("rpm -q --all --qf %{{{}}}\\n", tag)
    }

    fn runner() -> FakeCommandRunner {
        FakeCommandRunner::new()
            .with_command("rpm")
            .respond(&column("NAME"), "bash\ngpg-pubkey\ncurl\n")
            .respond(&column("VERSION"), "5.1.8\nfd431d51\n7.76.1\n")
            .respond(&column("RELEASE"), "6.el9\n4ae0493b\n26.el9\n")
            .respond(&column("ARCH"), "x86_64\n(none)\nx86_64\n")
            .respond(&column("LICENSE"), "GPLv3+\npubkey\nMIT\n")
            .respond(
                &column("URL"),
                "https://www.gnu.org/software/bash\n(none)\nhttps://curl.se/\n",
            )
            .respond(
                "rpm -q bash-5.1.8-6.el9.x86_64 -L",
                "/usr/share/licenses/bash/COPYING\n/usr/share/licenses/bash/NOTICE\n",
            )
            .respond("rpm -q gpg-pubkey-fd431d51-4ae0493b. -L", "(contains no files)\n")
            .fail("rpm -q curl-7.76.1-26.el9.x86_64 -L", "rpm: database error")
    }

    fn files() -> FakeFiles {
        FakeFiles::new()
            .with_file("/etc/os-release", "ID=\"rocky\"\n")
            .with_file("/usr/share/licenses/bash/COPYING", "GNU GENERAL PUBLIC LICENSE")
    }

    #[tokio::test]
    async fn test_query_packages() {
        let probe = RpmProbe::new(runner(), files());
        let outcome = probe.query().await.unwrap();

        assert_eq!(outcome.result.package_count(), 3);

        let bash = outcome.result.packages().find(|p| p.name() == "bash").unwrap();
        assert_eq!(bash.version(), "5.1.8");
        assert_eq!(bash.filename(), "bash-5.1.8-6.el9.x86_64.rpm");
        assert_eq!(bash.homepage_url(), "https://www.gnu.org/software/bash");
        assert_eq!(bash.licenses()[0].name(), "GPLv3+");
        assert_eq!(bash.purl().to_string(), "pkg:rpm/rocky/bash@5.1.8");
        assert_eq!(bash.license_files().len(), 1);
        assert_eq!(bash.license_files()[0].content(), "GNU GENERAL PUBLIC LICENSE");
    }

    #[tokio::test]
    async fn test_none_values_are_empty() {
        let probe = RpmProbe::new(runner(), files());
        let outcome = probe.query().await.unwrap();

        let pubkey = outcome.result.packages().find(|p| p.name() == "gpg-pubkey").unwrap();
        assert!(pubkey.homepage_url().is_empty());
        assert!(pubkey.license_files().is_empty());
        assert_eq!(pubkey.filename(), "gpg-pubkey-fd431d51-4ae0493b..rpm");
    }

    #[tokio::test]
    async fn test_license_lookup_failure_is_a_warning() {
        let probe = RpmProbe::new(runner(), files());
        let outcome = probe.query().await.unwrap();

        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].probe(), "rpm");
        assert_eq!(outcome.warnings[0].package(), "curl");

        let curl = outcome.result.packages().find(|p| p.name() == "curl").unwrap();
        assert_eq!(curl.licenses()[0].name(), "MIT");
        assert!(curl.license_files().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_license_file_is_a_warning() {
        let files = files().with_unreadable("/usr/share/licenses/bash/NOTICE", "permission denied");
        let probe = RpmProbe::new(runner(), files);
        let outcome = probe.query().await.unwrap();

        assert_eq!(outcome.warnings.len(), 2);
        let bash = outcome.result.packages().find(|p| p.name() == "bash").unwrap();
        assert_eq!(bash.license_files().len(), 1);
    }

    #[tokio::test]
    async fn test_column_length_mismatch_is_fatal() {
        let runner = runner().respond(&column("LICENSE"), "GPLv3+\n");
        let probe = RpmProbe::new(runner, files());

        let err = probe.query().await.unwrap_err();
        assert!(err.to_string().contains("names and licenses should be the same length"));
    }

    #[tokio::test]
    async fn test_empty_database() {
        let runner = FakeCommandRunner::new()
            .respond(&column("NAME"), "")
            .respond(&column("VERSION"), "")
            .respond(&column("RELEASE"), "")
            .respond(&column("ARCH"), "")
            .respond(&column("LICENSE"), "")
            .respond(&column("URL"), "");
        let outcome = RpmProbe::new(runner, files()).query().await.unwrap();

        assert_eq!(outcome.result.package_count(), 0);
        assert!(outcome.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_query_through_trait_object() {
        let probe: Box<dyn PackageProbe> = Box::new(RpmProbe::new(runner(), files()));
        let outcome = probe.query().await.unwrap();

        let names: Vec<&str> = outcome.result.packages().map(|p| p.name()).collect();
        assert_eq!(names, vec!["bash", "curl", "gpg-pubkey"]);
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[tokio::test]
    async fn test_license_lookups_run_once_per_package() {
        let runner = runner();
        let probe = RpmProbe::new(runner.clone(), files());
        probe.query().await.unwrap();

        let lookups: Vec<String> = runner
            .calls()
            .into_iter()
            .filter(|call| call.ends_with(" -L"))
            .collect();
        assert_eq!(lookups.len(), 3);
        assert!(lookups.contains(&"rpm -q bash-5.1.8-6.el9.x86_64 -L".to_string()));
    }

    #[test]
    fn test_is_available() {
        assert!(RpmProbe::new(runner(), FakeFiles::new()).is_available());
        assert!(!RpmProbe::new(FakeCommandRunner::new(), FakeFiles::new()).is_available());
    }
}
