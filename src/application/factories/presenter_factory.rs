use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::application::dto::OutputDestination;
use crate::ports::outbound::OutputPresenter;

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified destination
    ///
    /// # Arguments
    /// * `destination` - Stdout or a file path
    /// * `force` - Whether an existing file may be overwritten
    ///
    /// # Examples
    /// ```
    /// use host_sbom::application::dto::OutputDestination;
    /// use host_sbom::application::factories::PresenterFactory;
    ///
    /// let presenter = PresenterFactory::create(OutputDestination::Stdout, false);
    /// ```
    pub fn create(destination: OutputDestination, force: bool) -> Box<dyn OutputPresenter> {
        match destination {
            OutputDestination::Stdout => Box::new(StdoutPresenter::new()),
            OutputDestination::File(path) => Box::new(FileSystemWriter::new(path, force)),
        }
    }
}
