use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid package URL: {0}")]
pub struct PackageUrlError(#[from] packageurl::Error);

/// Ecosystem qualified package coordinate (`pkg:type/namespace/name@version`).
///
/// Serialized as its canonical string form, so an npm scope `@babel`
/// appears as `%40babel` while a multi-arch name keeps its `:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PackageUrl(packageurl::PackageUrl<'static>);

impl PackageUrl {
    /// # Errors
    /// Returns an error if `purl_type` is not a valid package URL type
    pub fn new(
        purl_type: &str,
        namespace: Option<&str>,
        name: &str,
        version: &str,
    ) -> Result<Self, PackageUrlError> {
        let mut purl = packageurl::PackageUrl::new(purl_type.to_string(), name.to_string())?;
        if let Some(namespace) = namespace.filter(|ns| !ns.is_empty()) {
            purl.with_namespace(namespace.to_string());
        }
        if !version.is_empty() {
            purl.with_version(version.to_string());
        }
        Ok(Self(purl))
    }

    pub fn purl_type(&self) -> &str {
        self.0.ty()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.0.namespace()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn version(&self) -> Option<&str> {
        self.0.version()
    }
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PackageUrl {
    type Err = PackageUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<PackageUrl> for String {
    fn from(purl: PackageUrl) -> Self {
        purl.to_string()
    }
}

impl TryFrom<String> for PackageUrl {
    type Error = PackageUrlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
