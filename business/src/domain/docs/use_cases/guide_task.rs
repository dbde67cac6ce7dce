use async_trait::async_trait;

use crate::domain::docs::errors::DocsError;
use crate::domain::docs::model::TaskGuide;

pub struct GuideTaskParams {
    pub task: String,
}

#[async_trait]
pub trait GuideTaskUseCase: Send + Sync {
    async fn execute(&self, params: GuideTaskParams) -> Result<TaskGuide, DocsError>;
}
