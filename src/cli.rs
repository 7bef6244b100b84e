use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

use host_sbom::application::dto::{OutputFormat, RunOptions};
use host_sbom::config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use host_sbom::shared::Result;

/// Generate SBOMs for the packages installed on this host
#[derive(Parser, Debug)]
#[command(name = "host-sbom")]
#[command(version)]
#[command(about = "Generate SBOMs for the packages installed on this host", long_about = None)]
pub struct Args {
    /// Package managers to query, comma separated (dpkg, rpm, npm).
    /// Defaults to every one available on this host
    #[arg(long, value_delimiter = ',', value_name = "TOOLS")]
    pub tools: Vec<String>,

    /// Output format: plain, json or spdx-json (default: spdx-json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Baseline SPDX JSON document; only packages missing from it are reported
    #[arg(long, value_name = "FILE")]
    pub diff: Option<PathBuf>,

    /// Write the report to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output file (default: host-sbom.json, host-sbom.txt or host-sbom_diff.json)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub filename: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub force: bool,

    /// Print every per-package warning; repeat for more diagnostics (-vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (default: host-sbom.config.yml in the working directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Loads the config file named by `--config`, or the one discovered in `dir`
    pub fn load_config(&self, dir: &Path) -> Result<Option<ConfigFile>> {
        match &self.config {
            Some(path) => {
                let config = load_config_from_path(path)?;
                eprintln!("📖 Loaded config from: {}", path.display());
                Ok(Some(config))
            }
            None => {
                let config = discover_config(dir)?;
                if config.is_some() {
                    eprintln!(
                        "📖 Auto-discovered config file: {}",
                        dir.join(CONFIG_FILENAME).display()
                    );
                }
                Ok(config)
            }
        }
    }

    /// Merges the command line over the config file; the command line wins.
    /// Blank tool names are dropped, so `--tools ""` selects every available tool.
    ///
    /// # Errors
    /// Returns an error if the config file names an unknown format
    pub fn into_run_options(self, config: Option<ConfigFile>) -> Result<RunOptions> {
        let config = config.unwrap_or_default();

        let tools = if self.tools.is_empty() {
            config.tools.clone().unwrap_or_default()
        } else {
            self.tools
        };
        let format = match self.format {
            Some(format) => Some(format),
            None => config.output_format()?,
        };

        Ok(RunOptions {
            tools: tools
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            format,
            diff: self.diff.or(config.diff),
            stdout: self.stdout,
            filename: self.filename.or(config.filename),
            force: self.force || config.force.unwrap_or(false),
            verbose: self.verbose,
        })
    }
}
