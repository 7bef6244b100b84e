use crate::ports::outbound::{BaselineReader, HostFileReader};
use crate::sbom_generation::domain::SpdxDocument;
use crate::shared::error::SbomError;
use crate::shared::security::{read_text_file, SymlinkPolicy};
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// Implements HostFileReader for package metadata, where symbolic links
/// are followed, and BaselineReader for the user supplied baseline, where
/// they are rejected.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl HostFileReader for FileSystemReader {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        read_text_file(path, "package metadata file", SymlinkPolicy::Follow)
    }
}

impl BaselineReader for FileSystemReader {
    fn read_baseline(&self, path: &Path) -> Result<SpdxDocument> {
        if !path.exists() {
            return Err(SbomError::BaselineNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = read_text_file(path, "baseline SBOM", SymlinkPolicy::Reject).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        serde_json::from_str(&content).map_err(|e| {
            SbomError::BaselineParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
