use async_trait::async_trait;

use business::domain::docs::model::{AzureConcept, DocsCatalog, ServiceCategory, TaskGuide};
use business::domain::docs::repository::DocsRepository;
use business::domain::errors::RepositoryError;

use crate::seed::builtin_catalog;

/// Documentation catalog held in memory for the lifetime of the process.
pub struct InMemoryDocsRepository {
    catalog: DocsCatalog,
}

impl InMemoryDocsRepository {
    pub fn new(catalog: DocsCatalog) -> Self {
        Self { catalog }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_catalog())
    }
}

#[async_trait]
impl DocsRepository for InMemoryDocsRepository {
    async fn get_categories(&self) -> Result<Vec<ServiceCategory>, RepositoryError> {
        Ok(self.catalog.categories.clone())
    }

    async fn get_concepts(&self) -> Result<Vec<AzureConcept>, RepositoryError> {
        Ok(self.catalog.concepts.clone())
    }

    async fn get_task_guides(&self) -> Result<Vec<TaskGuide>, RepositoryError> {
        Ok(self.catalog.tasks.clone())
    }
}
