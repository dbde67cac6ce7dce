use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::docs::errors::DocsError;
use crate::domain::docs::model::{ConceptExplanation, same_name};
use crate::domain::docs::repository::DocsRepository;
use crate::domain::docs::use_cases::explain_concept::{
    ExplainConceptParams, ExplainConceptUseCase,
};
use crate::domain::logger::Logger;

pub struct ExplainConceptUseCaseImpl {
    pub repository: Arc<dyn DocsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExplainConceptUseCase for ExplainConceptUseCaseImpl {
    async fn execute(
        &self,
        params: ExplainConceptParams,
    ) -> Result<ConceptExplanation, DocsError> {
        self.logger
            .debug(&format!("Explaining concept: {}", params.concept));

        let concepts = self.repository.get_concepts().await?;

        concepts
            .into_iter()
            .find(|c| same_name(&c.name, &params.concept))
            .map(|c| ConceptExplanation {
                concept: c.name,
                explanation: c.explanation,
            })
            .ok_or(DocsError::ConceptNotFound(params.concept))
    }
}
