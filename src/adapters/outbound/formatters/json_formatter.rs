use crate::ports::outbound::InventoryFormatter;
use crate::sbom_generation::domain::InventoryReport;
use crate::shared::Result;

/// JsonFormatter adapter serializing the inventory report as compact JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryFormatter for JsonFormatter {
    fn format_inventory(&self, report: &InventoryReport) -> Result<String> {
        serde_json::to_string(report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize inventory to JSON: {}", e))
    }
}
