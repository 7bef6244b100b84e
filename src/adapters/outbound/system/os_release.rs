use crate::ports::outbound::HostFileReader;
use std::collections::HashMap;
use std::path::Path;

pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Fields of `/etc/os-release` used as package URL namespace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    pub id: String,
}

impl OsRelease {
    /// Reads the host's os-release file; an unreadable file yields an empty id
    pub fn load(files: &dyn HostFileReader) -> Self {
        match files.read_file(Path::new(OS_RELEASE_PATH)) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                tracing::debug!(error = %e, "os-release unavailable");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Self {
        let fields: HashMap<&str, &str> = content
            .lines()
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key, value.trim_matches('"')))
            .collect();

        Self {
            id: fields.get("ID").map(|id| id.to_string()).unwrap_or_default(),
        }
    }
}
