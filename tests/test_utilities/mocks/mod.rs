/// Mock implementations for testing
mod mock_probe;
mod mock_progress_reporter;

pub use mock_probe::MockProbe;
pub use mock_progress_reporter::MockProgressReporter;
