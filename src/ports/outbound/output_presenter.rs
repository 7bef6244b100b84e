use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file)
/// where the formatted report is presented.
pub trait OutputPresenter {
    /// Checks that the destination can be written before any work is done
    ///
    /// # Errors
    /// Returns an error if the destination already exists and overwriting
    /// was not requested
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    /// Presents the formatted content to the output destination
    ///
    /// # Arguments
    /// * `content` - The formatted report
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
