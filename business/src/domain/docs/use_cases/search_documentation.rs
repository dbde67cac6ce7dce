use async_trait::async_trait;

use crate::domain::docs::errors::DocsError;
use crate::domain::docs::model::DocumentationHit;

pub struct SearchDocumentationParams {
    pub query: String,
}

#[async_trait]
pub trait SearchDocumentationUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SearchDocumentationParams,
    ) -> Result<Vec<DocumentationHit>, DocsError>;
}
