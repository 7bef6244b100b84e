use crate::application::dto::OutputFormat;
use crate::application::factories::{FormatterFactory, ReportFormatter};
use crate::ports::outbound::ProgressReporter;
use crate::sbom_generation::domain::{DocumentMetadata, InventoryReport, SpdxDocument};
use crate::sbom_generation::services::{DiffEngine, SpdxSynthesizer};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// GenerateReportUseCase - Renders an inventory in the requested format
///
/// `plain` and `json` render the inventory as collected. `spdx-json`
/// synthesizes an SPDX document, reduced to its novel part when a baseline
/// is given.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<PR> {
    metadata: DocumentMetadata,
    progress_reporter: PR,
}

impl<PR> GenerateReportUseCase<PR>
where
    PR: ProgressReporter,
{
    /// # Arguments
    /// * `metadata` - Root metadata for synthesized documents
    /// * `progress_reporter` - Receives the progress message
    pub fn new(metadata: DocumentMetadata, progress_reporter: PR) -> Self {
        Self {
            metadata,
            progress_reporter,
        }
    }

    /// Executes the report use case
    ///
    /// # Arguments
    /// * `report` - Aggregated inventory
    /// * `format` - Requested output format
    /// * `baseline` - Previously generated document to diff against
    /// * `colored` - Whether plain output may carry ANSI colours
    ///
    /// # Returns
    /// The rendered report
    ///
    /// # Errors
    /// Returns an error if a baseline is combined with a non `spdx-json`
    /// format, or if serialization fails
    pub fn execute(
        &self,
        report: &InventoryReport,
        format: OutputFormat,
        baseline: Option<&SpdxDocument>,
        colored: bool,
    ) -> Result<String> {
        let formatter = FormatterFactory::create(format, colored);

        match (formatter, baseline) {
            (ReportFormatter::Document(formatter), Some(base)) => {
                self.progress_reporter
                    .report("📝 Generating SPDX JSON diff against the baseline...");
                let current = SpdxSynthesizer::synthesize(report, &self.metadata);
                let diff = DiffEngine::diff(&current, base);
                tracing::debug!(
                    current = current.packages.len(),
                    base = base.packages.len(),
                    novel = diff.packages.len(),
                    "diffed against baseline"
                );
                formatter.format_document(&diff)
            }
            (ReportFormatter::Document(formatter), None) => {
                self.progress_reporter
                    .report(FormatterFactory::progress_message(format));
                let document = SpdxSynthesizer::synthesize(report, &self.metadata);
                formatter.format_document(&document)
            }
            (ReportFormatter::Inventory(_), Some(_)) => Err(SbomError::DiffFormatMismatch {
                format: format.to_string(),
            }
            .into()),
            (ReportFormatter::Inventory(formatter), None) => {
                self.progress_reporter
                    .report(FormatterFactory::progress_message(format));
                formatter.format_inventory(report)
            }
        }
    }
}
