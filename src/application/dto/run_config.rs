use super::{OutputFormat, ProbeSelection};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;

const DEFAULT_BASENAME: &str = "host-sbom";
const DEFAULT_DIFF_BASENAME: &str = "host-sbom_diff";

/// Where the rendered report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

/// Raw run options after merging the command line over the config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub tools: Vec<String>,
    pub format: Option<OutputFormat>,
    pub diff: Option<PathBuf>,
    pub stdout: bool,
    pub filename: Option<PathBuf>,
    pub force: bool,
    pub verbose: u8,
}

/// RunConfig - Immutable, fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub selection: ProbeSelection,
    pub format: OutputFormat,
    pub baseline: Option<PathBuf>,
    pub destination: OutputDestination,
    pub force: bool,
    pub verbose: u8,
}

impl RunConfig {
    /// Resolves raw options into a run configuration
    ///
    /// A baseline implies `spdx-json` when no format is given. Without an
    /// explicit filename the report goes to `host-sbom` (or `host-sbom_diff`)
    /// plus the extension of the format.
    ///
    /// # Errors
    /// Returns an error if a baseline is combined with any format other than `spdx-json`
    pub fn resolve(options: RunOptions) -> Result<Self> {
        let format = match (&options.diff, options.format) {
            (Some(_), Some(format)) if format != OutputFormat::SpdxJson => {
                return Err(SbomError::DiffFormatMismatch {
                    format: format.to_string(),
                }
                .into());
            }
            (_, Some(format)) => format,
            (_, None) => OutputFormat::SpdxJson,
        };

        let destination = if options.stdout {
            OutputDestination::Stdout
        } else {
            let path = options.filename.unwrap_or_else(|| {
                let basename = if options.diff.is_some() {
                    DEFAULT_DIFF_BASENAME
                } else {
                    DEFAULT_BASENAME
                };
                PathBuf::from(format!("{}{}", basename, format.extension()))
            });
            OutputDestination::File(path)
        };

        Ok(Self {
            selection: ProbeSelection::from_names(options.tools),
            format,
            baseline: options.diff,
            destination,
            force: options.force,
            verbose: options.verbose,
        })
    }

    /// Whether per-package warnings are printed in full
    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }
}
