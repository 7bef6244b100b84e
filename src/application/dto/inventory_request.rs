/// Which probes a run should query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeSelection {
    /// Every probe available on this host, sorted by name
    All,
    /// The named probes, in the given order
    Named(Vec<String>),
}

impl ProbeSelection {
    /// Builds a selection from a `--tools` style list; an empty list means all
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            ProbeSelection::All
        } else {
            ProbeSelection::Named(names)
        }
    }
}

/// InventoryRequest - Internal request DTO for the inventory use case
#[derive(Debug, Clone)]
pub struct InventoryRequest {
    /// Probes to query
    pub selection: ProbeSelection,
    /// Command line recorded in the report
    pub command: String,
    /// Tool version recorded in the report
    pub version: String,
}

impl InventoryRequest {
    pub fn new(
        selection: ProbeSelection,
        command: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            selection,
            command: command.into(),
            version: version.into(),
        }
    }
}
