use crate::ports::outbound::InventoryFormatter;
use crate::sbom_generation::domain::{InventoryReport, Package};
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// PlainFormatter adapter rendering the inventory for people
///
/// One block per package: `name version`, then the filename, homepage and
/// license lines, then a blank line.
pub struct PlainFormatter {
    colored: bool,
}

impl PlainFormatter {
    /// # Arguments
    /// * `colored` - Whether name and version are wrapped in ANSI colours
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn write_package(&self, out: &mut String, package: &Package) -> std::fmt::Result {
        if self.colored {
            writeln!(out, "{} {}", package.name().green(), package.version().blue())?;
        } else {
            writeln!(out, "{} {}", package.name(), package.version())?;
        }

        if !package.filename().is_empty() {
            writeln!(out, "  Filename: {}", package.filename())?;
        }
        if !package.homepage_url().is_empty() {
            writeln!(out, "  URL: {}", package.homepage_url())?;
        }

        let licenses = package
            .licenses()
            .iter()
            .map(|l| l.name())
            .collect::<Vec<_>>()
            .join("/");
        if licenses.is_empty() {
            writeln!(out, "  License: Not found")?;
        } else {
            writeln!(out, "  License: {}", licenses)?;
        }

        writeln!(out)
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl InventoryFormatter for PlainFormatter {
    fn format_inventory(&self, report: &InventoryReport) -> Result<String> {
        let mut out = String::new();
        for result in &report.results {
            for package in result.query_result.packages() {
                self.write_package(&mut out, package)
                    .map_err(|e| anyhow::anyhow!("Failed to render plain report: {}", e))?;
            }
        }
        Ok(out)
    }
}
