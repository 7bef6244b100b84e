use crate::shared::Result;
use async_trait::async_trait;

/// CommandRunner port for running host commands
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Whether `program` can be found on PATH
    fn has_command(&self, program: &str) -> bool;

    /// Runs `program` with `args` and returns its standard output
    ///
    /// # Errors
    /// Returns an error if:
    /// - The program cannot be spawned
    /// - It exits with a non-zero status
    async fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}
