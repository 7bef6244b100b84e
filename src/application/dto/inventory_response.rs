use crate::sbom_generation::domain::{InventoryReport, ProbeWarning};

/// InventoryResponse - Internal response DTO for the inventory use case
///
/// Warnings are concatenated in probe order.
#[derive(Debug, Clone)]
pub struct InventoryResponse {
    pub report: InventoryReport,
    pub warnings: Vec<ProbeWarning>,
}

impl InventoryResponse {
    pub fn new(report: InventoryReport, warnings: Vec<ProbeWarning>) -> Self {
        Self { report, warnings }
    }
}
