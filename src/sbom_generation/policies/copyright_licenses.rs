use crate::sbom_generation::domain::License;
use regex::Regex;
use std::sync::LazyLock;

static FORMAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Format:(.+)$").expect("regex for copyright format"));

static LICENSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^License:(.+)$").expect("regex for copyright license"));

/// CopyrightLicenses policy for reading license names out of Debian
/// copyright files.
///
/// Only machine-readable files (DEP-5, recognised by a `Format:` line)
/// name their licenses. Free-form files yield nothing here; their text is
/// still attached to the package as a license file by the caller.
pub struct CopyrightLicenses;

impl CopyrightLicenses {
    /// Returns the declared DEP-5 format URL, or None for free-form files
    pub fn detect_format(content: &str) -> Option<String> {
        FORMAT_RE
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|format| !format.is_empty())
    }

    /// Extracts the license names of a copyright file.
    ///
    /// Each `License:` value is split on ` and `, unless it contains ` or `,
    /// in which case the whole value is kept as one parenthesised
    /// expression. Names are deduplicated keeping first-seen order.
    ///
    /// # Returns
    /// License names, empty when the file is not machine-readable
    pub fn extract(content: &str) -> Vec<License> {
        if Self::detect_format(content).is_none() {
            return Vec::new();
        }

        let mut names: Vec<String> = Vec::new();
        for caps in LICENSE_RE.captures_iter(content) {
            let value = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
            if value.is_empty() {
                continue;
            }

            if value.contains(" or ") {
                push_unique(&mut names, format!("({})", value));
                continue;
            }

            for name in value.split(" and ").map(str::trim).filter(|n| !n.is_empty()) {
                push_unique(&mut names, name.to_string());
            }
        }

        names.into_iter().map(License::new).collect()
    }
}

fn push_unique(names: &mut Vec<String>, name: String) {
    if !names.contains(&name) {
        names.push(name);
    }
}
