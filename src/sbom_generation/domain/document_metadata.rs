/// DocumentMetadata value object: the root fields of a synthesized document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    name: String,
    namespace: String,
    created: String,
    creators: Vec<String>,
}

impl DocumentMetadata {
    pub fn new(name: String, namespace: String, created: String, creators: Vec<String>) -> Self {
        Self {
            name,
            namespace,
            created,
            creators,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    pub fn creators(&self) -> &[String] {
        &self.creators
    }
}
