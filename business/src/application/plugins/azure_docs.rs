use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::docs::errors::DocsError;
use crate::domain::docs::use_cases::explain_concept::{
    ExplainConceptParams, ExplainConceptUseCase,
};
use crate::domain::docs::use_cases::get_service_info::{
    GetServiceInfoParams, GetServiceInfoUseCase,
};
use crate::domain::docs::use_cases::get_services_by_category::{
    GetServicesByCategoryParams, GetServicesByCategoryUseCase,
};
use crate::domain::docs::use_cases::guide_task::{GuideTaskParams, GuideTaskUseCase};
use crate::domain::docs::use_cases::search_documentation::{
    SearchDocumentationParams, SearchDocumentationUseCase,
};
use crate::domain::kernel::errors::KernelError;
use crate::domain::kernel::model::{
    FunctionMetadata, KernelArguments, ParameterKind, ParameterMetadata,
};
use crate::domain::kernel::plugin::Plugin;
use crate::domain::logger::Logger;

/// Name the plugin is registered under in the kernel.
pub const PLUGIN_NAME: &str = "AzureDocs";

/// Exposes the Azure documentation knowledge base to the model.
pub struct AzureDocsPlugin {
    pub get_services_by_category: Arc<dyn GetServicesByCategoryUseCase>,
    pub get_service_info: Arc<dyn GetServiceInfoUseCase>,
    pub explain_concept: Arc<dyn ExplainConceptUseCase>,
    pub guide_task: Arc<dyn GuideTaskUseCase>,
    pub search_documentation: Arc<dyn SearchDocumentationUseCase>,
    pub logger: Arc<dyn Logger>,
}

/// Message shown to the model for a lookup that found nothing.
pub fn docs_error_message(error: &DocsError) -> String {
    match error {
        DocsError::CategoryNotFound {
            category,
            available,
        } => format!(
            "Category '{}' not found. Available categories: {}",
            category,
            available.join(", ")
        ),
        DocsError::ServiceNotFound(name) => format!("Service '{}' not found.", name),
        DocsError::ConceptNotFound(concept) => {
            format!("Concept '{}' not found in the knowledge base.", concept)
        }
        DocsError::TaskNotFound(task) => format!(
            "No guidance found for task '{}'. Try asking about deploying VMs, creating storage accounts, or setting up Azure Functions.",
            task
        ),
        DocsError::NoDocumentation(query) => {
            format!("No documentation found for query '{}'.", query)
        }
        DocsError::Repository(err) => format!("Knowledge base error ({}).", err),
    }
}

fn string_argument(arguments: &KernelArguments, name: &str) -> String {
    arguments
        .get(name)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

impl AzureDocsPlugin {
    /// Lookups that find nothing are answers for the model, not failures.
    fn to_result<T: Serialize>(
        &self,
        function_name: &str,
        result: Result<T, DocsError>,
    ) -> Result<Value, KernelError> {
        let invocation_failed = |reason: String| KernelError::InvocationFailed {
            function: format!("{}-{}", PLUGIN_NAME, function_name),
            reason,
        };

        match result {
            Ok(value) => serde_json::to_value(value).map_err(|e| invocation_failed(e.to_string())),
            Err(DocsError::Repository(err)) => {
                self.logger.error(&format!(
                    "Knowledge base failure in {}: {}",
                    function_name, err
                ));
                Err(invocation_failed(err.to_string()))
            }
            Err(err) => {
                self.logger
                    .debug(&format!("{} found nothing: {}", function_name, err));
                Ok(json!({ "error": docs_error_message(&err) }))
            }
        }
    }
}

#[async_trait]
impl Plugin for AzureDocsPlugin {
    fn functions(&self) -> Vec<FunctionMetadata> {
        vec![
            FunctionMetadata::new(
                "get_services_by_category",
                "Gets a list of Azure services by category",
            )
            .with_parameter(
                ParameterMetadata::optional("category", ParameterKind::String, json!(""))
                    .with_description("Service category; leave empty to list all categories"),
            ),
            FunctionMetadata::new(
                "get_service_info",
                "Gets detailed information about a specific Azure service",
            )
            .with_parameter(
                ParameterMetadata::required("service_name", ParameterKind::String)
                    .with_description("Exact service name, e.g. Blob Storage"),
            ),
            FunctionMetadata::new("explain_concept", "Explains an Azure concept or terminology")
                .with_parameter(
                    ParameterMetadata::required("concept", ParameterKind::String)
                        .with_description("Concept name, e.g. Resource Group"),
                ),
            FunctionMetadata::new(
                "guide_task",
                "Provides step-by-step guidance for common Azure tasks",
            )
            .with_parameter(
                ParameterMetadata::required("task", ParameterKind::String)
                    .with_description("Task description, e.g. create storage account"),
            ),
            FunctionMetadata::new(
                "search_documentation",
                "Searches for Azure documentation on a given topic",
            )
            .with_parameter(
                ParameterMetadata::required("query", ParameterKind::String)
                    .with_description("Keyword matched against service names, descriptions and categories"),
            ),
        ]
    }

    async fn invoke(
        &self,
        function_name: &str,
        arguments: &KernelArguments,
    ) -> Result<Value, KernelError> {
        self.logger.info(&format!(
            "{}-{} called with {}",
            PLUGIN_NAME,
            function_name,
            Value::Object(arguments.clone())
        ));

        match function_name {
            "get_services_by_category" => {
                let result = self
                    .get_services_by_category
                    .execute(GetServicesByCategoryParams {
                        category: string_argument(arguments, "category"),
                    })
                    .await;
                self.to_result(function_name, result)
            }
            "get_service_info" => {
                let result = self
                    .get_service_info
                    .execute(GetServiceInfoParams {
                        service_name: string_argument(arguments, "service_name"),
                    })
                    .await;
                self.to_result(function_name, result)
            }
            "explain_concept" => {
                let result = self
                    .explain_concept
                    .execute(ExplainConceptParams {
                        concept: string_argument(arguments, "concept"),
                    })
                    .await;
                self.to_result(function_name, result)
            }
            "guide_task" => {
                let result = self
                    .guide_task
                    .execute(GuideTaskParams {
                        task: string_argument(arguments, "task"),
                    })
                    .await;
                self.to_result(function_name, result)
            }
            "search_documentation" => {
                let result = self
                    .search_documentation
                    .execute(SearchDocumentationParams {
                        query: string_argument(arguments, "query"),
                    })
                    .await;
                self.to_result(function_name, result.map(|results| json!({ "results": results })))
            }
            other => Err(KernelError::FunctionNotFound(format!(
                "{}-{}",
                PLUGIN_NAME, other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::docs::model::{
        AzureService, CategoryLookup, ConceptExplanation, DocumentationHit, ServiceInfo,
        TaskGuide,
    };
    use crate::domain::errors::RepositoryError;
    use crate::domain::kernel::registry::Kernel;
    use mockall::mock;

    mock! {
        pub ByCategory {}
        #[async_trait]
        impl GetServicesByCategoryUseCase for ByCategory {
            async fn execute(&self, params: GetServicesByCategoryParams) -> Result<CategoryLookup, DocsError>;
        }
    }

    mock! {
        pub ServiceInfoLookup {}
        #[async_trait]
        impl GetServiceInfoUseCase for ServiceInfoLookup {
            async fn execute(&self, params: GetServiceInfoParams) -> Result<ServiceInfo, DocsError>;
        }
    }

    mock! {
        pub Concept {}
        #[async_trait]
        impl ExplainConceptUseCase for Concept {
            async fn execute(&self, params: ExplainConceptParams) -> Result<ConceptExplanation, DocsError>;
        }
    }

    mock! {
        pub Guide {}
        #[async_trait]
        impl GuideTaskUseCase for Guide {
            async fn execute(&self, params: GuideTaskParams) -> Result<TaskGuide, DocsError>;
        }
    }

    mock! {
        pub Search {}
        #[async_trait]
        impl SearchDocumentationUseCase for Search {
            async fn execute(&self, params: SearchDocumentationParams) -> Result<Vec<DocumentationHit>, DocsError>;
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

    struct Mocks {
        by_category: MockByCategory,
        service_info: MockServiceInfoLookup,
        concept: MockConcept,
        guide: MockGuide,
        search: MockSearch,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                by_category: MockByCategory::new(),
                service_info: MockServiceInfoLookup::new(),
                concept: MockConcept::new(),
                guide: MockGuide::new(),
                search: MockSearch::new(),
            }
        }

        fn into_plugin(self) -> AzureDocsPlugin {
            AzureDocsPlugin {
                get_services_by_category: Arc::new(self.by_category),
                get_service_info: Arc::new(self.service_info),
                explain_concept: Arc::new(self.concept),
                guide_task: Arc::new(self.guide),
                search_documentation: Arc::new(self.search),
                logger: mock_logger(),
            }
        }
    }

    fn kernel_with(plugin: AzureDocsPlugin) -> Kernel {
        let mut kernel = Kernel::new();
        kernel.add_plugin(PLUGIN_NAME, Arc::new(plugin)).unwrap();
        kernel
    }

    fn args(value: Value) -> KernelArguments {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn should_expose_five_functions_under_qualified_names() {
        let kernel = kernel_with(Mocks::new().into_plugin());

        let names: Vec<String> = kernel.functions().iter().map(|f| f.qualified_name()).collect();

        assert_eq!(
            names,
            vec![
                "AzureDocs-get_services_by_category",
                "AzureDocs-get_service_info",
                "AzureDocs-explain_concept",
                "AzureDocs-guide_task",
                "AzureDocs-search_documentation",
            ]
        );
    }

    #[tokio::test]
    async fn should_list_categories_when_category_argument_omitted() {
        let mut mocks = Mocks::new();
        mocks
            .by_category
            .expect_execute()
            .withf(|params| params.category.is_empty())
            .returning(|_| {
                Ok(CategoryLookup::Categories {
                    categories: vec!["Compute".to_string(), "Storage".to_string()],
                })
            });
        let kernel = kernel_with(mocks.into_plugin());

        let result = kernel
            .invoke("AzureDocs-get_services_by_category", KernelArguments::new())
            .await
            .unwrap();

        assert_eq!(result, json!({"categories": ["Compute", "Storage"]}));
    }

    #[tokio::test]
    async fn should_return_service_info_with_category() {
        let mut mocks = Mocks::new();
        mocks.service_info.expect_execute().returning(|params| {
            Ok(ServiceInfo {
                service: AzureService::new(
                    params.service_name,
                    "Managed, intelligent SQL in the cloud",
                    "https://docs.microsoft.com/azure/azure-sql/database/",
                ),
                category: "Databases".to_string(),
            })
        });
        let kernel = kernel_with(mocks.into_plugin());

        let result = kernel
            .invoke(
                "AzureDocs-get_service_info",
                args(json!({"service_name": "Azure SQL Database"})),
            )
            .await
            .unwrap();

        assert_eq!(result["name"], "Azure SQL Database");
        assert_eq!(result["category"], "Databases");
        assert_eq!(
            result["doc_url"],
            "https://docs.microsoft.com/azure/azure-sql/database/"
        );
    }

    #[tokio::test]
    async fn should_return_category_error_message_listing_available_categories() {
        let mut mocks = Mocks::new();
        mocks.by_category.expect_execute().returning(|params| {
            Err(DocsError::CategoryNotFound {
                category: params.category,
                available: vec!["Compute".to_string(), "Storage".to_string()],
            })
        });
        let kernel = kernel_with(mocks.into_plugin());

        let result = kernel
            .invoke(
                "AzureDocs-get_services_by_category",
                args(json!({"category": "Networking"})),
            )
            .await
            .unwrap();

        assert_eq!(
            result,
            json!({"error": "Category 'Networking' not found. Available categories: Compute, Storage"})
        );
    }

    #[tokio::test]
    async fn should_wrap_search_hits_in_results_object() {
        let mut mocks = Mocks::new();
        mocks.search.expect_execute().returning(|_| {
            Ok(vec![DocumentationHit {
                service: "Logic Apps".to_string(),
                category: "Integration".to_string(),
                description: "Automate the access and use of data across clouds".to_string(),
                documentation: "https://docs.microsoft.com/azure/logic-apps/".to_string(),
            }])
        });
        let kernel = kernel_with(mocks.into_plugin());

        let result = kernel
            .invoke(
                "AzureDocs-search_documentation",
                args(json!({"query": "logic"})),
            )
            .await
            .unwrap();

        assert_eq!(result["results"][0]["service"], "Logic Apps");
        assert_eq!(
            result["results"][0]["documentation"],
            "https://docs.microsoft.com/azure/logic-apps/"
        );
    }

    #[tokio::test]
    async fn should_return_guidance_error_message_when_task_unknown() {
        let mut mocks = Mocks::new();
        mocks
            .guide
            .expect_execute()
            .returning(|params| Err(DocsError::TaskNotFound(params.task)));
        let kernel = kernel_with(mocks.into_plugin());

        let result = kernel
            .invoke("AzureDocs-guide_task", args(json!({"task": "scale AKS"})))
            .await
            .unwrap();

        assert_eq!(
            result["error"],
            "No guidance found for task 'scale AKS'. Try asking about deploying VMs, creating storage accounts, or setting up Azure Functions."
        );
    }

    #[tokio::test]
    async fn should_fail_invocation_when_knowledge_base_unavailable() {
        let mut mocks = Mocks::new();
        mocks
            .concept
            .expect_execute()
            .returning(|_| Err(DocsError::Repository(RepositoryError::Unavailable)));
        let kernel = kernel_with(mocks.into_plugin());

        let result = kernel
            .invoke(
                "AzureDocs-explain_concept",
                args(json!({"concept": "Azure CLI"})),
            )
            .await;

        assert!(matches!(
            result,
            Err(KernelError::InvocationFailed { function, .. }) if function == "AzureDocs-explain_concept"
        ));
    }

    #[test]
    fn should_format_not_found_messages() {
        assert_eq!(
            docs_error_message(&DocsError::ServiceNotFound("Foo".to_string())),
            "Service 'Foo' not found."
        );
        assert_eq!(
            docs_error_message(&DocsError::ConceptNotFound("Bar".to_string())),
            "Concept 'Bar' not found in the knowledge base."
        );
        assert_eq!(
            docs_error_message(&DocsError::NoDocumentation("baz".to_string())),
            "No documentation found for query 'baz'."
        );
    }
}
