use crate::sbom_generation::domain::ProbeOutcome;
use crate::shared::Result;
use async_trait::async_trait;

/// PackageProbe port for querying the packages of one ecosystem
///
/// # Failure model
/// - `Err` from [`query`](PackageProbe::query) is fatal and aborts the run
///   (command failure, unparsable output, column count mismatch).
/// - A package whose license cannot be resolved is still returned, and
///   the problem travels as a warning in the [`ProbeOutcome`].
#[async_trait]
pub trait PackageProbe: Send + Sync {
    /// Stable ecosystem identifier, e.g. `dpkg`
    fn name(&self) -> &str;

    /// Whether the ecosystem's tooling is present on this host.
    /// Must not fail and must not run the package manager itself.
    fn is_available(&self) -> bool;

    /// Queries the installed packages of this ecosystem
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package manager command fails
    /// - Its output cannot be parsed
    /// - Independently queried columns differ in length
    async fn query(&self) -> Result<ProbeOutcome>;
}
