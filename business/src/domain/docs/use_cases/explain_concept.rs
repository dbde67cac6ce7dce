use async_trait::async_trait;

use crate::domain::docs::errors::DocsError;
use crate::domain::docs::model::ConceptExplanation;

pub struct ExplainConceptParams {
    pub concept: String,
}

#[async_trait]
pub trait ExplainConceptUseCase: Send + Sync {
    async fn execute(&self, params: ExplainConceptParams)
    -> Result<ConceptExplanation, DocsError>;
}
