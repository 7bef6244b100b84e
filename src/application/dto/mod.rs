/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use cases and the adapters,
/// keeping the domain layer isolated.
mod inventory_request;
mod inventory_response;
mod output_format;
mod run_config;

pub use inventory_request::{InventoryRequest, ProbeSelection};
pub use inventory_response::InventoryResponse;
pub use output_format::OutputFormat;
pub use run_config::{OutputDestination, RunConfig, RunOptions};
