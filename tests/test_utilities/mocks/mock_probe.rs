use async_trait::async_trait;
use host_sbom::prelude::*;
use host_sbom::sbom_generation::domain::{
    License, LicenseFile, PackageDependency, PackageUrl, ProbeOutcome,
};

/// Mock PackageProbe returning a canned query result
pub struct MockProbe {
    name: String,
    available: bool,
    result: QueryResult,
    warnings: Vec<ProbeWarning>,
    failure: Option<String>,
}

impl MockProbe {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            available: true,
            result: QueryResult::new(),
            warnings: Vec::new(),
            failure: None,
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Adds a package with a declared license name
    pub fn with_package(mut self, name: &str, version: &str, license: &str) -> Self {
        let purl = PackageUrl::new(&self.name, None, name, version).unwrap();
        let mut package = Package::new(name, None, version, purl);
        if !license.is_empty() {
            package = package.with_licenses(vec![License::new(license)]);
        }
        self.result.insert_package(package);
        self
    }

    /// Adds a package whose only license information is a license file
    pub fn with_licensed_file(mut self, name: &str, version: &str, path: &str, text: &str) -> Self {
        let purl = PackageUrl::new(&self.name, None, name, version).unwrap();
        let package = Package::new(name, None, version, purl)
            .with_license_files(vec![LicenseFile::new(path, text)]);
        self.result.insert_package(package);
        self
    }

    pub fn with_dependency(mut self, from: (&str, &str), to: (&str, &str)) -> Self {
        self.result.add_dependency(PackageDependency::depends_on(
            PackageId::new(from.0, from.1),
            PackageId::new(to.0, to.1),
        ));
        self
    }

    pub fn with_warning(mut self, package: &str, message: &str) -> Self {
        self.warnings
            .push(ProbeWarning::new(&self.name, package, message));
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn boxed(self) -> Box<dyn PackageProbe> {
        Box::new(self)
    }
}

#[async_trait]
impl PackageProbe for MockProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    async fn query(&self) -> Result<ProbeOutcome> {
        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }
        Ok(ProbeOutcome::new(self.result.clone(), self.warnings.clone()))
    }
}
