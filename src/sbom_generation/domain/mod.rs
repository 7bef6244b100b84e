pub mod document_metadata;
pub mod inventory_report;
pub mod license;
pub mod package;
pub mod package_url;
pub mod query_result;
pub mod spdx_document;

pub use document_metadata::DocumentMetadata;
pub use inventory_report::{EcosystemResult, InventoryReport};
pub use license::{License, LicenseField, LicenseFile};
pub use package::{Package, PackageId};
pub use package_url::{PackageUrl, PackageUrlError};
pub use query_result::{DependencyType, PackageDependency, ProbeOutcome, ProbeWarning, QueryResult};
pub use spdx_document::{
    CreationInfo, ExternalRef, OtherLicense, Relationship, RelationshipType, SpdxDocument,
    SpdxPackage,
};
