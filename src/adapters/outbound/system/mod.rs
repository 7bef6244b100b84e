/// Host system adapters: command execution and OS identification
mod command_runner;
mod os_release;

pub use command_runner::SystemCommandRunner;
pub use os_release::{OsRelease, OS_RELEASE_PATH};
