use crate::application::dto::{InventoryRequest, InventoryResponse, ProbeSelection};
use crate::ports::outbound::{PackageProbe, ProgressReporter};
use crate::sbom_generation::domain::{EcosystemResult, InventoryReport};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// CollectInventoryUseCase - Runs the selected probes and aggregates their results
///
/// Probes are queried one after another; the first fatal probe error aborts
/// the run, while per-package warnings are collected in probe order.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct CollectInventoryUseCase<PR> {
    probes: Vec<Box<dyn PackageProbe>>,
    progress_reporter: PR,
}

impl<PR> CollectInventoryUseCase<PR>
where
    PR: ProgressReporter,
{
    /// Creates a new CollectInventoryUseCase with the registered probes
    pub fn new(probes: Vec<Box<dyn PackageProbe>>, progress_reporter: PR) -> Self {
        Self {
            probes,
            progress_reporter,
        }
    }

    /// Executes the inventory use case
    ///
    /// # Arguments
    /// * `request` - Probe selection plus the command line and version to record
    ///
    /// # Returns
    /// InventoryResponse with one result per queried probe and all warnings
    ///
    /// # Errors
    /// Returns an error if:
    /// - No registered probe is both selected and available (before any query)
    /// - A selected probe fails fatally
    pub async fn execute(&self, request: InventoryRequest) -> Result<InventoryResponse> {
        let selected = self.select_probes(&request.selection)?;
        let total = selected.len();

        let mut report = InventoryReport::new(request.command, request.version);
        let mut warnings = Vec::new();

        for (index, probe) in selected.into_iter().enumerate() {
            let name = probe.name();
            self.progress_reporter
                .report_progress(index, total, Some(&format!("querying {}", name)));

            let outcome = match probe.query().await {
                Ok(outcome) => outcome,
                Err(e) => {
                    self.progress_reporter
                        .report_error(&format!("❌ Failed to query {} packages", name));
                    return Err(SbomError::ProbeQueryFatal {
                        probe: name.to_string(),
                        details: format!("{:#}", e),
                    }
                    .into());
                }
            };

            tracing::debug!(
                probe = name,
                packages = outcome.result.package_count(),
                warnings = outcome.warnings.len(),
                "probe finished"
            );
            warnings.extend(outcome.warnings);
            report.push(EcosystemResult::new(name, outcome.result));
        }

        self.progress_reporter.report_progress(total, total, None);
        self.progress_reporter.report_completion(&format!(
            "✅ Collected {} package(s) from {} package manager(s)",
            report.package_count(),
            report.results.len()
        ));

        Ok(InventoryResponse::new(report, warnings))
    }

    /// Resolves the selection against the registered probes
    ///
    /// Named probes keep the requested order; unknown or unavailable names
    /// are skipped. `All` yields every available probe sorted by name.
    fn select_probes(&self, selection: &ProbeSelection) -> Result<Vec<&dyn PackageProbe>> {
        let selected: Vec<&dyn PackageProbe> = match selection {
            ProbeSelection::Named(names) => names
                .iter()
                .filter_map(|name| {
                    let probe = self.probes.iter().find(|p| p.name() == name.as_str());
                    match probe {
                        Some(probe) if probe.is_available() => Some(probe.as_ref()),
                        Some(_) => {
                            tracing::debug!(probe = name.as_str(), "skipping unavailable probe");
                            None
                        }
                        None => {
                            tracing::debug!(probe = name.as_str(), "skipping unknown probe");
                            None
                        }
                    }
                })
                .collect(),
            ProbeSelection::All => {
                let mut available: Vec<&dyn PackageProbe> = self
                    .probes
                    .iter()
                    .filter(|p| p.is_available())
                    .map(|p| p.as_ref())
                    .collect();
                available.sort_by(|a, b| a.name().cmp(b.name()));
                available
            }
        };

        if selected.is_empty() {
            let reason = match selection {
                ProbeSelection::All => {
                    "no supported package manager is available on this host".to_string()
                }
                ProbeSelection::Named(names) => format!(
                    "none of the requested tools is available ({})",
                    names.join(", ")
                ),
            };
            return Err(SbomError::NoProbesSelected {
                reason,
                known: self.known_probes(),
            }
            .into());
        }

        Ok(selected)
    }

    fn known_probes(&self) -> String {
        let mut names: Vec<&str> = self.probes.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.join(", ")
    }
}
