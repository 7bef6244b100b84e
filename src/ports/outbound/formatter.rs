use crate::sbom_generation::domain::{InventoryReport, SpdxDocument};
use crate::shared::Result;

/// InventoryFormatter port for rendering the aggregated inventory
/// (plain text, raw JSON)
pub trait InventoryFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format_inventory(&self, report: &InventoryReport) -> Result<String>;
}

/// DocumentFormatter port for rendering a synthesized or diffed document
pub trait DocumentFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format_document(&self, document: &SpdxDocument) -> Result<String>;
}
