use super::QueryResult;
use serde::{Deserialize, Serialize};

/// Query result of one ecosystem, tagged with the probe that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemResult {
    pub package_manager: String,
    pub query_result: QueryResult,
}

impl EcosystemResult {
    pub fn new(package_manager: impl Into<String>, query_result: QueryResult) -> Self {
        Self {
            package_manager: package_manager.into(),
            query_result,
        }
    }
}

/// Aggregated inventory of one run, results in probe order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub command: String,
    pub version: String,
    pub results: Vec<EcosystemResult>,
}

impl InventoryReport {
    pub fn new(command: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            version: version.into(),
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, result: EcosystemResult) {
        self.results.push(result);
    }

    pub fn package_count(&self) -> usize {
        self.results
            .iter()
            .map(|r| r.query_result.package_count())
            .sum()
    }
}
