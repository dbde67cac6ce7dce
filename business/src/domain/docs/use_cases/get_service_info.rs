use async_trait::async_trait;

use crate::domain::docs::errors::DocsError;
use crate::domain::docs::model::ServiceInfo;

pub struct GetServiceInfoParams {
    pub service_name: String,
}

#[async_trait]
pub trait GetServiceInfoUseCase: Send + Sync {
    async fn execute(&self, params: GetServiceInfoParams) -> Result<ServiceInfo, DocsError>;
}
