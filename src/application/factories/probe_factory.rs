use crate::adapters::outbound::filesystem::FileSystemReader;
use crate::adapters::outbound::probes::{DpkgProbe, NpmProbe, RpmProbe};
use crate::adapters::outbound::system::SystemCommandRunner;
use crate::ports::outbound::PackageProbe;

/// Factory for the probes registered on a real host
pub struct ProbeFactory;

impl ProbeFactory {
    /// Creates every supported probe, backed by real commands and files
    ///
    /// Availability is not checked here; the inventory use case skips
    /// probes whose tooling is missing.
    pub fn host_probes() -> Vec<Box<dyn PackageProbe>> {
        vec![
            Box::new(DpkgProbe::new(SystemCommandRunner::new(), FileSystemReader::new())),
            Box::new(RpmProbe::new(SystemCommandRunner::new(), FileSystemReader::new())),
            Box::new(NpmProbe::new(SystemCommandRunner::new(), FileSystemReader::new())),
        ]
    }
}
