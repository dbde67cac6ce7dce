use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::docs::model::{AzureConcept, DocsCatalog, ServiceCategory, TaskGuide};
use business::domain::docs::repository::DocsRepository;
use business::domain::errors::RepositoryError;

use crate::loader::{CatalogLoadError, load_catalog};

/// Documentation catalog read from a JSON file on every lookup, so edits to
/// the file apply to the running assistant.
pub struct JsonFileDocsRepository {
    path: PathBuf,
}

impl JsonFileDocsRepository {
    /// Fails unless the file loads and validates right now.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogLoadError> {
        let path = path.into();
        let catalog = load_catalog(&path)?;

        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            concepts = catalog.concepts.len(),
            tasks = catalog.tasks.len(),
            "Using documentation catalog file"
        );

        Ok(Self { path })
    }

    fn read(&self) -> Result<DocsCatalog, RepositoryError> {
        load_catalog(&self.path).map_err(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "Catalog file unusable");
            match err {
                CatalogLoadError::Io { .. } => RepositoryError::unavailable(),
                CatalogLoadError::Parse { .. } | CatalogLoadError::Invalid(_) => {
                    RepositoryError::corrupted()
                }
            }
        })
    }
}

#[async_trait]
impl DocsRepository for JsonFileDocsRepository {
    async fn get_categories(&self) -> Result<Vec<ServiceCategory>, RepositoryError> {
        Ok(self.read()?.categories)
    }

    async fn get_concepts(&self) -> Result<Vec<AzureConcept>, RepositoryError> {
        Ok(self.read()?.concepts)
    }

    async fn get_task_guides(&self) -> Result<Vec<TaskGuide>, RepositoryError> {
        Ok(self.read()?.tasks)
    }
}
