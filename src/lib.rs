//! host-sbom - SBOM generation for the packages installed on a host
//!
//! Inventories dpkg, rpm and npm packages, synthesizes an SPDX 2.3 document
//! and optionally reduces it to what is new relative to a baseline.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Inventory and SPDX models, license policies,
//!   synthesis and diff services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Probes, formatters, console and filesystem implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use host_sbom::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let inventory = CollectInventoryUseCase::new(
//!     ProbeFactory::host_probes(),
//!     StderrProgressReporter::new(),
//! );
//! let request = InventoryRequest::new(ProbeSelection::All, "host-sbom", "0.1.0");
//! let response = inventory.execute(request).await?;
//!
//! let document = SpdxSynthesizer::synthesize(
//!     &response.report,
//!     &SbomGenerator::generate_default_metadata(),
//! );
//! println!("{}", SpdxJsonFormatter::new().format_document(&document)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, PlainFormatter, SpdxJsonFormatter,
    };
    pub use crate::adapters::outbound::probes::{DpkgProbe, NpmProbe, RpmProbe};
    pub use crate::adapters::outbound::system::SystemCommandRunner;
    pub use crate::application::dto::{
        InventoryRequest, InventoryResponse, OutputFormat, ProbeSelection, RunConfig,
    };
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, ProbeFactory};
    pub use crate::application::use_cases::{CollectInventoryUseCase, GenerateReportUseCase};
    pub use crate::ports::outbound::{
        BaselineReader, CommandRunner, DocumentFormatter, HostFileReader, InventoryFormatter,
        OutputPresenter, PackageProbe, ProgressReporter,
    };
    pub use crate::sbom_generation::domain::{
        InventoryReport, Package, PackageId, ProbeWarning, QueryResult, SpdxDocument,
    };
    pub use crate::sbom_generation::services::{DiffEngine, SbomGenerator, SpdxSynthesizer};
    pub use crate::shared::Result;
}
