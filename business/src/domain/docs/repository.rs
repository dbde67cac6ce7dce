use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{AzureConcept, ServiceCategory, TaskGuide};

/// Read-only access to the Azure documentation knowledge base.
///
/// All lists are returned in catalog order.
#[async_trait]
pub trait DocsRepository: Send + Sync {
    async fn get_categories(&self) -> Result<Vec<ServiceCategory>, RepositoryError>;
    async fn get_concepts(&self) -> Result<Vec<AzureConcept>, RepositoryError>;
    async fn get_task_guides(&self) -> Result<Vec<TaskGuide>, RepositoryError>;
}
