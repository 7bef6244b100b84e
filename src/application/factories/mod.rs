mod formatter_factory;
mod presenter_factory;
mod probe_factory;

pub use formatter_factory::{FormatterFactory, ReportFormatter};
pub use presenter_factory::PresenterFactory;
pub use probe_factory::ProbeFactory;
