/// Output format enumeration for inventory reports
///
/// Shared by the CLI, the config file and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text, one block per package
    Plain,
    /// The aggregated inventory as compact JSON
    Json,
    /// SPDX 2.3 JSON document (default)
    SpdxJson,
}

impl OutputFormat {
    /// File extension used for the default output filename
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Plain => ".txt",
            OutputFormat::Json | OutputFormat::SpdxJson => ".json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            "spdx-json" => Ok(OutputFormat::SpdxJson),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'plain', 'json' or 'spdx-json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::SpdxJson => write!(f, "spdx-json"),
        }
    }
}
