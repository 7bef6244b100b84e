use crate::shared::Result;
use std::path::Path;

/// HostFileReader port for reading package metadata files on the host
/// (copyright files, manifests, `/etc/os-release`)
pub trait HostFileReader: Send + Sync {
    /// Whether a file or directory exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Reads a text file
    ///
    /// # Errors
    /// Returns an error if the file is missing, not a regular file, too
    /// large, or cannot be read
    fn read_file(&self, path: &Path) -> Result<String>;
}
