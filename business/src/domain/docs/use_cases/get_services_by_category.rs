use async_trait::async_trait;

use crate::domain::docs::errors::DocsError;
use crate::domain::docs::model::CategoryLookup;

pub struct GetServicesByCategoryParams {
    /// Blank means "list all categories".
    pub category: String,
}

#[async_trait]
pub trait GetServicesByCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetServicesByCategoryParams,
    ) -> Result<CategoryLookup, DocsError>;
}
