use crate::sbom_generation::domain::spdx_document::{
    package_element_id, DATA_LICENSE, DOCUMENT_ID, NOASSERTION, SPDX_VERSION,
};
use crate::sbom_generation::domain::{
    CreationInfo, DocumentMetadata, ExternalRef, InventoryReport, OtherLicense, Package,
    Relationship, RelationshipType, SpdxDocument, SpdxPackage,
};
use crate::sbom_generation::policies::LicenseDeclaration;
use std::collections::HashSet;

/// SpdxSynthesizer service turning an inventory into an SPDX graph
///
/// Pure: the same report and metadata always produce the same document.
pub struct SpdxSynthesizer;

impl SpdxSynthesizer {
    /// Synthesizes a document from an aggregated inventory
    ///
    /// Every package gets a node and a `DESCRIBES` edge from the document
    /// root; every dependency becomes a `DEPENDS_ON` edge. Edge endpoints
    /// are taken as reported and not checked against the package set.
    ///
    /// # Arguments
    /// * `report` - Aggregated inventory, results in probe order
    /// * `metadata` - Root name, namespace and creation info
    pub fn synthesize(report: &InventoryReport, metadata: &DocumentMetadata) -> SpdxDocument {
        let mut packages = Vec::new();
        let mut relationships = Vec::new();
        let mut other_licenses: Vec<OtherLicense> = Vec::new();
        let mut seen_license_ids: HashSet<String> = HashSet::new();

        for ecosystem in &report.results {
            let result = &ecosystem.query_result;

            for package in result.packages() {
                let declared = LicenseDeclaration::declare(package);
                let node = Self::package_node(package, declared.expression);

                relationships.push(Relationship::new(
                    DOCUMENT_ID,
                    node.spdx_id.clone(),
                    RelationshipType::Describes,
                ));
                packages.push(node);

                for license in declared.other_licenses {
                    if seen_license_ids.insert(license.license_id.clone()) {
                        other_licenses.push(license);
                    }
                }
            }

            for dependency in result.dependencies() {
                relationships.push(Relationship::new(
                    package_element_id(dependency.requiring()),
                    package_element_id(dependency.required()),
                    RelationshipType::DependsOn,
                ));
            }
        }

        SpdxDocument {
            spdx_version: SPDX_VERSION.to_string(),
            data_license: DATA_LICENSE.to_string(),
            spdx_id: DOCUMENT_ID.to_string(),
            name: metadata.name().to_string(),
            document_namespace: metadata.namespace().to_string(),
            creation_info: CreationInfo {
                created: metadata.created().to_string(),
                creators: metadata.creators().to_vec(),
            },
            packages,
            relationships,
            other_licenses,
        }
    }

    fn package_node(package: &Package, license_declared: String) -> SpdxPackage {
        let download_location = if package.download_url().is_empty() {
            NOASSERTION.to_string()
        } else {
            package.download_url().to_string()
        };

        SpdxPackage {
            spdx_id: package_element_id(package.id()),
            name: package.name().to_string(),
            version_info: package.version().to_string(),
            homepage: package.homepage_url().to_string(),
            download_location,
            source_info: package.source_info().to_string(),
            license_concluded: None,
            license_declared,
            external_refs: vec![ExternalRef::purl(package.purl().to_string())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::{
        EcosystemResult, License, LicenseFile, PackageDependency, PackageId, PackageUrl,
        QueryResult,
    };

    fn metadata() -> DocumentMetadata {
        DocumentMetadata::new(
            "host-sbom-generated-document".to_string(),
            "https://spdx.org/spdxdocs/host-sbom-test".to_string(),
            "2024-01-01T00:00:00Z".to_string(),
            vec!["Tool: host-sbom".to_string()],
        )
    }

    fn npm(name: &str, version: &str) -> Package {
        Package::new(name, None, version, PackageUrl::new("npm", None, name, version).unwrap())
    }

    fn report_with(result: QueryResult) -> InventoryReport {
        let mut report = InventoryReport::new("host-sbom", "0.1.0");
        report.push(EcosystemResult::new("npm", result));
        report
    }

    fn count(document: &SpdxDocument, kind: RelationshipType) -> usize {
        document
            .relationships
            .iter()
            .filter(|r| r.relationship_type == kind)
            .count()
    }

    #[test]
    fn test_dependency_pair() {
        let mut result = QueryResult::new();
        result.insert_package(npm("a", "1.0.0").with_licenses(vec![License::new("MIT")]));
        result.insert_package(npm("b", "2.0.0"));
        result.add_dependency(PackageDependency::depends_on(
            PackageId::new("a", "1.0.0"),
            PackageId::new("b", "2.0.0"),
        ));

        let document = SpdxSynthesizer::synthesize(&report_with(result), &metadata());

        assert_eq!(document.packages.len(), 2);
        assert_eq!(count(&document, RelationshipType::Describes), 2);
        assert_eq!(count(&document, RelationshipType::DependsOn), 1);

        let depends = document
            .relationships
            .iter()
            .find(|r| r.relationship_type == RelationshipType::DependsOn)
            .unwrap();
        assert_eq!(depends.spdx_element_id, "SPDXRef-Package-a-1.0.0");
        assert_eq!(depends.related_spdx_element, "SPDXRef-Package-b-2.0.0");

        assert_eq!(document.packages[0].license_declared, "MIT");
        assert_eq!(document.packages[1].license_declared, NOASSERTION);
    }

    #[test]
    fn test_root_fields() {
        let document = SpdxSynthesizer::synthesize(&report_with(QueryResult::new()), &metadata());

        assert_eq!(document.spdx_version, "SPDX-2.3");
        assert_eq!(document.data_license, "CC0-1.0");
        assert_eq!(document.spdx_id, "SPDXRef-DOCUMENT");
        assert_eq!(document.creation_info.creators, vec!["Tool: host-sbom"]);
        assert!(document.packages.is_empty());
        assert!(document.relationships.is_empty());
    }

    #[test]
    fn test_package_node_fields() {
        let mut result = QueryResult::new();
        result.insert_package(
            Package::new(
                "core",
                Some("@babel"),
                "7.22.0",
                PackageUrl::new("npm", Some("@babel"), "core", "7.22.0").unwrap(),
            )
            .with_homepage_url("https://babel.dev")
            .with_download_url("https://registry.npmjs.org/@babel/core/-/core-7.22.0.tgz"),
        );
        result.insert_package(npm("plain", "1.0.0"));

        let document = SpdxSynthesizer::synthesize(&report_with(result), &metadata());
        let babel = &document.packages[0];

        assert_eq!(babel.spdx_id, "SPDXRef-Package-babel-core-7.22.0");
        assert_eq!(babel.name, "core");
        assert_eq!(babel.homepage, "https://babel.dev");
        assert_eq!(
            babel.external_refs[0].reference_locator,
            "pkg:npm/%40babel/core@7.22.0"
        );
        assert_eq!(document.packages[1].download_location, NOASSERTION);
    }

    #[test]
    fn test_license_file_becomes_other_license_once() {
        let file = LicenseFile::new("/usr/share/doc/zlib/copyright", "zlib text");
        let mut first = QueryResult::new();
        first.insert_package(npm("zlib", "1.3").with_license_files(vec![file.clone()]));
        let mut second = QueryResult::new();
        second.insert_package(npm("zlib-dev", "1.3").with_license_files(vec![file]));

        let mut report = InventoryReport::new("host-sbom", "0.1.0");
        report.push(EcosystemResult::new("dpkg", first));
        report.push(EcosystemResult::new("rpm", second));

        let document = SpdxSynthesizer::synthesize(&report, &metadata());

        assert_eq!(document.other_licenses.len(), 1);
        let token = &document.other_licenses[0].license_id;
        assert_eq!(&document.packages[0].license_declared, token);
        assert_eq!(&document.packages[1].license_declared, token);
        assert_eq!(document.other_licenses[0].extracted_text, "zlib text");
    }

    #[test]
    fn test_results_keep_report_order() {
        let mut dpkg = QueryResult::new();
        dpkg.insert_package(npm("zz", "1"));
        let mut npm_result = QueryResult::new();
        npm_result.insert_package(npm("aa", "1"));

        let mut report = InventoryReport::new("host-sbom", "0.1.0");
        report.push(EcosystemResult::new("dpkg", dpkg));
        report.push(EcosystemResult::new("npm", npm_result));

        let document = SpdxSynthesizer::synthesize(&report, &metadata());
        let names: Vec<&str> = document.packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["zz", "aa"]);
    }

    #[test]
    fn test_synthesis_is_byte_identical() {
        let mut result = QueryResult::new();
        result.insert_package(npm("b", "1").with_license_files(vec![LicenseFile::new("/l", "t")]));
        result.insert_package(npm("a", "1").with_licenses(vec![License::new("ISC")]));
        result.add_dependency(PackageDependency::depends_on(
            PackageId::new("a", "1"),
            PackageId::new("b", "1"),
        ));
        let report = report_with(result);

        let first =
            serde_json::to_string(&SpdxSynthesizer::synthesize(&report, &metadata())).unwrap();
        let second =
            serde_json::to_string(&SpdxSynthesizer::synthesize(&report, &metadata())).unwrap();
        assert_eq!(first, second);
    }
}
