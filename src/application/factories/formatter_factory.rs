use crate::adapters::outbound::formatters::{JsonFormatter, PlainFormatter, SpdxJsonFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::{DocumentFormatter, InventoryFormatter};

/// A formatter for one of the two report shapes
///
/// `plain` and `json` render the aggregated inventory, `spdx-json` renders
/// a synthesized (or diffed) document.
pub enum ReportFormatter {
    Inventory(Box<dyn InventoryFormatter>),
    Document(Box<dyn DocumentFormatter>),
}

/// Factory for creating report formatters
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `colored` - Whether the plain formatter may emit ANSI colours
    ///
    /// # Examples
    /// ```
    /// use host_sbom::application::dto::OutputFormat;
    /// use host_sbom::application::factories::{FormatterFactory, ReportFormatter};
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::SpdxJson, false);
    /// assert!(matches!(formatter, ReportFormatter::Document(_)));
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> ReportFormatter {
        match format {
            OutputFormat::Plain => {
                ReportFormatter::Inventory(Box::new(PlainFormatter::new(colored)))
            }
            OutputFormat::Json => ReportFormatter::Inventory(Box::new(JsonFormatter::new())),
            OutputFormat::SpdxJson => ReportFormatter::Document(Box::new(SpdxJsonFormatter::new())),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use host_sbom::application::dto::OutputFormat;
    /// use host_sbom::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::SpdxJson);
    /// assert_eq!(message, "📝 Generating SPDX JSON format output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Plain => "📝 Generating plain text output...",
            OutputFormat::Json => "📝 Generating JSON inventory output...",
            OutputFormat::SpdxJson => "📝 Generating SPDX JSON format output...",
        }
    }
}
