use anyhow::bail;

use crate::shared::Result;

/// Splits command output into one row per line.
///
/// Empty output has no rows; an empty line inside the output is an empty
/// row, since column queries print one line per package even when the
/// value is blank.
pub(super) fn split_rows(output: &str) -> Vec<String> {
    let output = output.strip_suffix('\n').unwrap_or(output);
    if output.is_empty() {
        return Vec::new();
    }
    output.split('\n').map(str::to_string).collect()
}

/// Fails when an independently queried column does not line up with the names
pub(super) fn ensure_same_length(
    probe: &str,
    names: &[String],
    column: &str,
    values: &[String],
) -> Result<()> {
    if names.len() != values.len() {
        bail!(
            "{}: names and {} should be the same length ({} names, {} {})",
            probe,
            column,
            names.len(),
            values.len(),
            column
        );
    }
    Ok(())
}
