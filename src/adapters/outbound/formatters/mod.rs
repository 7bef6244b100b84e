/// Formatter adapters for the supported output formats
mod json_formatter;
mod plain_formatter;
mod spdx_json_formatter;

pub use json_formatter::JsonFormatter;
pub use plain_formatter::PlainFormatter;
pub use spdx_json_formatter::SpdxJsonFormatter;
