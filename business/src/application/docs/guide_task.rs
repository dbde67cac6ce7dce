use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::docs::errors::DocsError;
use crate::domain::docs::model::TaskGuide;
use crate::domain::docs::repository::DocsRepository;
use crate::domain::docs::use_cases::guide_task::{GuideTaskParams, GuideTaskUseCase};
use crate::domain::logger::Logger;

pub struct GuideTaskUseCaseImpl {
    pub repository: Arc<dyn DocsRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Loose match: either side may contain the other, ignoring case.
fn task_matches(guide_task: &str, query: &str) -> bool {
    let key = guide_task.to_lowercase();
    let query = query.to_lowercase();
    query.contains(&key) || key.contains(&query)
}

#[async_trait]
impl GuideTaskUseCase for GuideTaskUseCaseImpl {
    async fn execute(&self, params: GuideTaskParams) -> Result<TaskGuide, DocsError> {
        self.logger
            .debug(&format!("Looking up guidance for task: {}", params.task));

        let guides = self.repository.get_task_guides().await?;

        guides
            .into_iter()
            .find(|g| task_matches(&g.task, &params.task))
            .ok_or(DocsError::TaskNotFound(params.task))
    }
}
