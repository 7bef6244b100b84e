use crate::ports::outbound::DocumentFormatter;
use crate::sbom_generation::domain::SpdxDocument;
use crate::shared::Result;

/// SpdxJsonFormatter adapter serializing a document as pretty-printed SPDX JSON
pub struct SpdxJsonFormatter;

impl SpdxJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for SpdxJsonFormatter {
    fn format_document(&self, document: &SpdxDocument) -> Result<String> {
        serde_json::to_string_pretty(document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize SPDX document: {}", e))
    }
}
