use super::{License, LicenseFile, PackageUrl};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a package release, derived from its name and version.
///
/// `@` is dropped and `/` becomes `-` so the value can be embedded in an
/// SPDX element id. The same name and version reported by two ecosystems
/// produce the same identifier and are treated as one logical release.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(name: &str, version: &str) -> Self {
        let id = format!("{}-{}", name, version)
            .replace('@', "")
            .replace('/', "-");
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Package value object: one installed release as reported by a probe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    id: PackageId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    version: String,
    #[serde(default)]
    licenses: Vec<License>,
    #[serde(default)]
    license_files: Vec<LicenseFile>,
    #[serde(default)]
    homepage_url: String,
    #[serde(default)]
    download_url: String,
    #[serde(default)]
    source_info: String,
    #[serde(default)]
    filename: String,
    purl: PackageUrl,
}

impl Package {
    /// Creates a package; the identifier is derived from the namespace
    /// qualified name and the version.
    pub fn new(name: &str, namespace: Option<&str>, version: &str, purl: PackageUrl) -> Self {
        let namespace = namespace.filter(|ns| !ns.is_empty()).map(str::to_string);
        let qualified = match &namespace {
            Some(ns) => format!("{}/{}", ns, name),
            None => name.to_string(),
        };

        Self {
            id: PackageId::new(&qualified, version),
            name: name.to_string(),
            namespace,
            version: version.to_string(),
            licenses: Vec::new(),
            license_files: Vec::new(),
            homepage_url: String::new(),
            download_url: String::new(),
            source_info: String::new(),
            filename: String::new(),
            purl,
        }
    }

    pub fn with_licenses(mut self, licenses: Vec<License>) -> Self {
        self.licenses = licenses;
        self
    }

    pub fn with_license_files(mut self, license_files: Vec<LicenseFile>) -> Self {
        self.license_files = license_files;
        self
    }

    pub fn with_homepage_url(mut self, url: impl Into<String>) -> Self {
        self.homepage_url = url.into();
        self
    }

    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = url.into();
        self
    }

    pub fn with_source_info(mut self, source_info: impl Into<String>) -> Self {
        self.source_info = source_info.into();
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn id(&self) -> &PackageId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn licenses(&self) -> &[License] {
        &self.licenses
    }

    pub fn license_files(&self) -> &[LicenseFile] {
        &self.license_files
    }

    pub fn homepage_url(&self) -> &str {
        &self.homepage_url
    }

    pub fn download_url(&self) -> &str {
        &self.download_url
    }

    pub fn source_info(&self) -> &str {
        &self.source_info
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn purl(&self) -> &PackageUrl {
        &self.purl
    }
}
