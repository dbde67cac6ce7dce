use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::docs::errors::DocsError;
use crate::domain::docs::model::DocumentationHit;
use crate::domain::docs::repository::DocsRepository;
use crate::domain::docs::use_cases::search_documentation::{
    SearchDocumentationParams, SearchDocumentationUseCase,
};
use crate::domain::logger::Logger;

pub struct SearchDocumentationUseCaseImpl {
    pub repository: Arc<dyn DocsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchDocumentationUseCase for SearchDocumentationUseCaseImpl {
    async fn execute(
        &self,
        params: SearchDocumentationParams,
    ) -> Result<Vec<DocumentationHit>, DocsError> {
        let lowered = params.query.to_lowercase();
        let needle = lowered.as_str();
        let categories = self.repository.get_categories().await?;

        let hits: Vec<DocumentationHit> = categories
            .iter()
            .flat_map(|category| {
                let category_matches = category.name.to_lowercase().contains(needle);
                category
                    .services
                    .iter()
                    .filter(move |s| {
                        category_matches
                            || s.name.to_lowercase().contains(needle)
                            || s.description.to_lowercase().contains(needle)
                    })
                    .map(move |s| DocumentationHit {
                        service: s.name.clone(),
                        category: category.name.clone(),
                        description: s.description.clone(),
                        documentation: s.doc_url.clone(),
                    })
            })
            .collect();

        self.logger.debug(&format!(
            "Documentation search for '{}' returned {} results",
            params.query,
            hits.len()
        ));

        if hits.is_empty() {
            return Err(DocsError::NoDocumentation(params.query));
        }

        Ok(hits)
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

    fn use_case() -> SearchDocumentationUseCaseImpl {
        let mut repo = MockDocsRepo::new();
        repo.expect_get_categories().returning(|| {
            Ok(vec![
                ServiceCategory {
                    name: "Storage".to_string(),
                    services: vec![
                        AzureService::new(
                            "Blob Storage",
                            "REST-based object storage for unstructured data",
                            "https://docs.microsoft.com/azure/storage/blobs/",
                        ),
                        AzureService::new(
                            "File Storage",
                            "File shares that use the standard SMB protocol",
                            "https://docs.microsoft.com/azure/storage/files/",
                        ),
                    ],
                },
                ServiceCategory {
                    name: "Databases".to_string(),
                    services: vec![AzureService::new(
                        "Azure SQL Database",
                        "Managed, intelligent SQL in the cloud",
                        "https://docs.microsoft.com/azure/azure-sql/database/",
                    )],
                },
            ])
        });
        SearchDocumentationUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_every_service_of_matching_category() {
        let hits = use_case()
            .execute(SearchDocumentationParams {
                query: "STORAGE".to_string(),
            })
            .await
            .unwrap();

        let names: Vec<&str> = hits.iter().map(|h| h.service.as_str()).collect();
        assert_eq!(names, vec!["Blob Storage", "File Storage"]);
        assert_eq!(hits[0].category, "Storage");
        assert_eq!(
            hits[0].documentation,
            "https://docs.microsoft.com/azure/storage/blobs/"
        );
    }

    #[tokio::test]
    async fn should_match_service_descriptions() {
        let hits = use_case()
            .execute(SearchDocumentationParams {
                query: "smb".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].service, "File Storage");
    }

    #[tokio::test]
    async fn should_return_error_when_nothing_matches() {
        let result = use_case()
            .execute(SearchDocumentationParams {
                query: "kubernetes".to_string(),
            })
            .await;

        assert!(matches!(result, Err(DocsError::NoDocumentation(q)) if q == "kubernetes"));
    }
}
