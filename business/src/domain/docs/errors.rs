#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    #[error("docs.category_not_found")]
    CategoryNotFound {
        category: String,
        available: Vec<String>,
    },
    #[error("docs.service_not_found")]
    ServiceNotFound(String),
    #[error("docs.concept_not_found")]
    ConceptNotFound(String),
    #[error("docs.task_not_found")]
    TaskNotFound(String),
    #[error("docs.no_documentation")]
    NoDocumentation(String),
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
