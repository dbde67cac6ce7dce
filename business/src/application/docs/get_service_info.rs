use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::docs::errors::DocsError;
use crate::domain::docs::model::{ServiceInfo, same_name};
use crate::domain::docs::repository::DocsRepository;
use crate::domain::docs::use_cases::get_service_info::{
    GetServiceInfoParams, GetServiceInfoUseCase,
};
use crate::domain::logger::Logger;

pub struct GetServiceInfoUseCaseImpl {
    pub repository: Arc<dyn DocsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetServiceInfoUseCase for GetServiceInfoUseCaseImpl {
    async fn execute(&self, params: GetServiceInfoParams) -> Result<ServiceInfo, DocsError> {
        self.logger.debug(&format!(
            "Looking up service info: {}",
            params.service_name
        ));

        let categories = self.repository.get_categories().await?;

        for category in categories {
            if let Some(service) = category
                .services
                .into_iter()
                .find(|s| same_name(&s.name, &params.service_name))
            {
                return Ok(ServiceInfo {
                    service,
                    category: category.name,
                });
            }
        }

        Err(DocsError::ServiceNotFound(params.service_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::docs::model::{AzureConcept, AzureService, ServiceCategory, TaskGuide};
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub DocsRepo {}

        #[async_trait]
        impl DocsRepository for DocsRepo {
            async fn get_categories(&self) -> Result<Vec<ServiceCategory>, RepositoryError>;
            async fn get_concepts(&self) -> Result<Vec<AzureConcept>, RepositoryError>;
            async fn get_task_guides(&self) -> Result<Vec<TaskGuide>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case() -> GetServiceInfoUseCaseImpl {
        let mut repo = MockDocsRepo::new();
        repo.expect_get_categories().returning(|| {
            Ok(vec![
                ServiceCategory {
                    name: "Compute".to_string(),
                    services: vec![AzureService::new(
                        "Azure Functions",
                        "Process events with serverless code",
                        "https://docs.microsoft.com/azure/azure-functions/",
                    )],
                },
                ServiceCategory {
                    name: "Databases".to_string(),
                    services: vec![AzureService::new(
                        "Azure Cosmos DB",
                        "Globally distributed, multi-model database",
                        "https://docs.microsoft.com/azure/cosmos-db/",
                    )],
                },
            ])
        });
        GetServiceInfoUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_service_with_its_category() {
        let result = use_case()
            .execute(GetServiceInfoParams {
                service_name: "azure cosmos db".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.service.name, "Azure Cosmos DB");
        assert_eq!(result.category, "Databases");
        assert_eq!(
            result.service.doc_url,
            "https://docs.microsoft.com/azure/cosmos-db/"
        );
    }

    #[tokio::test]
    async fn should_not_match_partial_service_names() {
        let result = use_case()
            .execute(GetServiceInfoParams {
                service_name: "Cosmos".to_string(),
            })
            .await;

        assert!(matches!(result, Err(DocsError::ServiceNotFound(name)) if name == "Cosmos"));
    }
}
