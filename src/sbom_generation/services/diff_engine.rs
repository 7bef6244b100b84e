use crate::sbom_generation::domain::{OtherLicense, Relationship, SpdxDocument, SpdxPackage};
use std::collections::HashSet;

/// DiffEngine service reducing a document to what is new relative to a baseline
pub struct DiffEngine;

impl DiffEngine {
    /// Returns a new document holding only the novel part of `current`.
    ///
    /// A package is novel when its element id is absent from `base`. A
    /// relationship survives only when both endpoints are novel packages,
    /// which also drops every `DESCRIBES` edge since the document root is
    /// never a package. An other license survives only when a novel
    /// package declares or concludes it. Root fields are copied from
    /// `current` unchanged.
    pub fn diff(current: &SpdxDocument, base: &SpdxDocument) -> SpdxDocument {
        let base_ids: HashSet<&str> = base.packages.iter().map(|p| p.spdx_id.as_str()).collect();

        let packages: Vec<SpdxPackage> = current
            .packages
            .iter()
            .filter(|p| !base_ids.contains(p.spdx_id.as_str()))
            .cloned()
            .collect();

        let novel_ids: HashSet<&str> = packages.iter().map(|p| p.spdx_id.as_str()).collect();

        let referenced_licenses: HashSet<&str> = packages
            .iter()
            .flat_map(|p| {
                std::iter::once(p.license_declared.as_str()).chain(p.license_concluded.as_deref())
            })
            .collect();

        let relationships: Vec<Relationship> = current
            .relationships
            .iter()
            .filter(|r| {
                novel_ids.contains(r.spdx_element_id.as_str())
                    && novel_ids.contains(r.related_spdx_element.as_str())
            })
            .cloned()
            .collect();

        let other_licenses: Vec<OtherLicense> = current
            .other_licenses
            .iter()
            .filter(|l| referenced_licenses.contains(l.license_id.as_str()))
            .cloned()
            .collect();

        SpdxDocument {
            packages,
            relationships,
            other_licenses,
            ..current.clone()
        }
    }
}
