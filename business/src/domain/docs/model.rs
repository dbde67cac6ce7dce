use serde::{Deserialize, Serialize};

/// A single Azure service with a link to its documentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AzureService {
    pub name: String,
    pub description: String,
    pub doc_url: String,
}

impl AzureService {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        doc_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            doc_url: doc_url.into(),
        }
    }
}

/// A named group of services, e.g. "Compute" or "Storage".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub name: String,
    pub services: Vec<AzureService>,
}

/// A piece of Azure terminology with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AzureConcept {
    pub name: String,
    pub explanation: String,
}

/// Step-by-step instructions for a common task.
///
/// `steps` is kept as a single newline-separated block, the same way it is
/// handed to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGuide {
    pub task: String,
    pub steps: String,
}

/// The complete knowledge base. Order of every list is significant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocsCatalog {
    pub categories: Vec<ServiceCategory>,
    #[serde(default)]
    pub concepts: Vec<AzureConcept>,
    #[serde(default)]
    pub tasks: Vec<TaskGuide>,
}

/// Outcome of a category lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CategoryLookup {
    /// No category was requested; lists every category name.
    Categories { categories: Vec<String> },
    /// The services of one category.
    Category {
        category: String,
        services: Vec<AzureService>,
    },
}

/// A service together with the category that owns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceInfo {
    #[serde(flatten)]
    pub service: AzureService,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptExplanation {
    pub concept: String,
    pub explanation: String,
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentationHit {
    pub service: String,
    pub category: String,
    pub description: String,
    pub documentation: String,
}

/// Case-insensitive equality used by every exact-name lookup.
pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
