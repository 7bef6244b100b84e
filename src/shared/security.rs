use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any file read by the tool (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Whether a read may go through a symbolic link.
///
/// Host package metadata is full of legitimate links (Debian points
/// `/usr/share/doc/<pkg>` at a sibling package), while user supplied
/// inputs such as the diff baseline are read only from regular files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymlinkPolicy {
    Follow,
    Reject,
}

/// Validates that a path is not a symbolic link
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a regular text file after applying the symlink policy and size limit.
///
/// Invalid UTF-8 sequences are replaced rather than rejected; copyright
/// files in the wild are frequently Latin-1.
///
/// # Arguments
/// * `path` - File to read
/// * `description` - Human readable name used in error messages
/// * `symlinks` - Whether the final path component may be a symbolic link
pub fn read_text_file(path: &Path, description: &str, symlinks: SymlinkPolicy) -> Result<String> {
    if symlinks == SymlinkPolicy::Reject {
        validate_not_symlink(path, "read")?;
    }

    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    let bytes =
        fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", description, e))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
