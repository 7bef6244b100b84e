use crate::ports::outbound::{CommandRunner, HostFileReader};
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory CommandRunner keyed by the full command line.
/// Clones share the recorded calls.
#[derive(Default, Clone)]
pub struct FakeCommandRunner {
    available: HashSet<String>,
    responses: HashMap<String, std::result::Result<String, String>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command(mut self, program: &str) -> Self {
        self.available.insert(program.to_string());
        self
    }

    pub fn respond(mut self, command_line: &str, stdout: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), Ok(stdout.to_string()));
        self
    }

    pub fn fail(mut self, command_line: &str, message: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for FakeCommandRunner {
    fn has_command(&self, program: &str) -> bool {
        self.available.contains(program)
    }

    async fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let mut parts = vec![program];
        parts.extend_from_slice(args);
        let command_line = parts.join(" ");
        self.calls.lock().unwrap().push(command_line.clone());

        match self.responses.get(&command_line) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(message)) => anyhow::bail!("{}", message),
            None => anyhow::bail!("unexpected command: {}", command_line),
        }
    }
}

/// In-memory HostFileReader; a path can hold content or a read error
#[derive(Default)]
pub struct FakeFiles {
    files: HashMap<PathBuf, std::result::Result<String, String>>,
}

impl FakeFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), Ok(content.to_string()));
        self
    }

    pub fn with_unreadable(mut self, path: &str, message: &str) -> Self {
        self.files.insert(PathBuf::from(path), Err(message.to_string()));
        self
    }
}

impl HostFileReader for FakeFiles {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        match self.files.get(path) {
            Some(Ok(content)) => Ok(content.clone()),
            Some(Err(message)) => anyhow::bail!("{}", message),
            None => anyhow::bail!("No such file: {}", path.display()),
        }
    }
}
