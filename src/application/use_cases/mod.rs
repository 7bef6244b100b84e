/// Use cases module containing application business logic orchestration
mod collect_inventory;
mod generate_report;

pub use collect_inventory::CollectInventoryUseCase;
pub use generate_report::GenerateReportUseCase;
