mod cli;

use cli::Args;
use host_sbom::adapters::outbound::console::StderrProgressReporter;
use host_sbom::adapters::outbound::filesystem::FileSystemReader;
use host_sbom::application::dto::{InventoryRequest, OutputDestination, RunConfig};
use host_sbom::application::factories::{PresenterFactory, ProbeFactory};
use host_sbom::application::use_cases::{CollectInventoryUseCase, GenerateReportUseCase};
use host_sbom::ports::outbound::BaselineReader;
use host_sbom::sbom_generation::domain::ProbeWarning;
use host_sbom::sbom_generation::services::SbomGenerator;
use host_sbom::shared::error::ExitCode;
use host_sbom::shared::Result;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// `RUST_LOG` wins; otherwise `-v` count maps to warn/info/debug/trace
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let command_line = std::env::args().collect::<Vec<_>>().join(" ");

    let config_file = args.load_config(Path::new("."))?;
    let config = RunConfig::resolve(args.into_run_options(config_file)?)?;
    tracing::debug!(?config, "resolved run configuration");

    // Everything that can be rejected up front is checked before probing
    let colored = config.destination == OutputDestination::Stdout;
    let presenter = PresenterFactory::create(config.destination.clone(), config.force);
    presenter.prepare()?;

    let baseline = match &config.baseline {
        Some(path) => {
            eprintln!("📖 Loading baseline SBOM from: {}", path.display());
            Some(FileSystemReader::new().read_baseline(path)?)
        }
        None => None,
    };

    let inventory = CollectInventoryUseCase::new(
        ProbeFactory::host_probes(),
        StderrProgressReporter::new(),
    );
    let request = InventoryRequest::new(
        config.selection.clone(),
        command_line,
        env!("CARGO_PKG_VERSION"),
    );
    let response = inventory.execute(request).await?;

    let report = GenerateReportUseCase::new(
        SbomGenerator::generate_default_metadata(),
        StderrProgressReporter::new(),
    );
    let output = report.execute(&response.report, config.format, baseline.as_ref(), colored)?;

    presenter.present(&output)?;
    print_warnings(&response.warnings, config.is_verbose());

    Ok(())
}

fn print_warnings(warnings: &[ProbeWarning], verbose: bool) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        eprintln!("\n⚠️  Some errors happened while querying packages:");
        for warning in warnings {
            eprintln!("   {}", warning);
        }
    } else {
        eprintln!(
            "\n⚠️  {} package(s) could not be fully resolved. Run with --verbose for details.",
            warnings.len()
        );
    }
}
