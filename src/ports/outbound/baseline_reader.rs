use crate::sbom_generation::domain::SpdxDocument;
use crate::shared::Result;
use std::path::Path;

/// BaselineReader port for loading a previously generated document
pub trait BaselineReader {
    /// Reads and parses an SPDX JSON baseline
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not a valid SPDX JSON document
    fn read_baseline(&self, path: &Path) -> Result<SpdxDocument>;
}
