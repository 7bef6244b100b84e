use crate::sbom_generation::domain::DocumentMetadata;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

pub const DOCUMENT_NAME: &str = "host-sbom-generated-document";
const NAMESPACE_BASE: &str = "https://spdx.org/spdxdocs";

/// SbomGenerator service for generating document metadata
///
/// Metadata is the only non-deterministic input of synthesis, so it is
/// produced here and passed in explicitly.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates metadata with the current UTC timestamp and a unique namespace
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the document
    pub fn generate_metadata(tool_name: &str) -> DocumentMetadata {
        let created = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let namespace = format!("{}/{}-{}", NAMESPACE_BASE, tool_name, Uuid::new_v4());

        DocumentMetadata::new(
            DOCUMENT_NAME.to_string(),
            namespace,
            created,
            vec![format!("Tool: {}", tool_name)],
        )
    }

    /// Generates metadata with the default tool name (host-sbom)
    pub fn generate_default_metadata() -> DocumentMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"))
    }
}
