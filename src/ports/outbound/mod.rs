/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the host (package manager commands, files, console).
pub mod baseline_reader;
pub mod command_runner;
pub mod formatter;
pub mod host_file_reader;
pub mod output_presenter;
pub mod package_probe;
pub mod progress_reporter;

pub use baseline_reader::BaselineReader;
pub use command_runner::CommandRunner;
pub use formatter::{DocumentFormatter, InventoryFormatter};
pub use host_file_reader::HostFileReader;
pub use output_presenter::OutputPresenter;
pub use package_probe::PackageProbe;
pub use progress_reporter::ProgressReporter;
