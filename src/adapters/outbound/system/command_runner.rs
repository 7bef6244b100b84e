use crate::ports::outbound::CommandRunner;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use tokio::process::Command;

/// SystemCommandRunner adapter running host commands through tokio
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    fn has_command(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    async fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to run {}", program))?;

        tracing::debug!(
            program,
            status = %output.status,
            stdout_bytes = output.stdout.len(),
            "command finished"
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim().lines().next().unwrap_or_default().to_string();
            if detail.is_empty() {
                anyhow::bail!("{} exited with {}", program, output.status);
            }
            anyhow::bail!("{} exited with {}: {}", program, output.status, detail);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
