use std::sync::Arc;

use anyhow::Context;

use knowledge_base::{InMemoryDocsRepository, JsonFileDocsRepository};
use logger::TracingLogger;
use openai::chat_completion::AzureChatCompletion;
use openai::client::AzureOpenAIClient;

use business::application::chat::send_message::SendMessageUseCaseImpl;
use business::application::docs::explain_concept::ExplainConceptUseCaseImpl;
use business::application::docs::get_service_info::GetServiceInfoUseCaseImpl;
use business::application::docs::get_services_by_category::GetServicesByCategoryUseCaseImpl;
use business::application::docs::guide_task::GuideTaskUseCaseImpl;
use business::application::docs::search_documentation::SearchDocumentationUseCaseImpl;
use business::application::plugins::azure_docs::{AzureDocsPlugin, PLUGIN_NAME};
use business::domain::chat::services::ExecutionSettings;
use business::domain::chat::use_cases::send_message::SendMessageUseCase;
use business::domain::docs::repository::DocsRepository;
use business::domain::kernel::registry::Kernel;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub send_message_use_case: Arc<dyn SendMessageUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Knowledge base
        let repository: Arc<dyn DocsRepository> = match &config.catalog_path {
            Some(path) => Arc::new(
                JsonFileDocsRepository::open(path)
                    .context("failed to load documentation catalog")?,
            ),
            None => Arc::new(InMemoryDocsRepository::builtin()),
        };

        // Docs use cases
        let plugin = AzureDocsPlugin {
            get_services_by_category: Arc::new(GetServicesByCategoryUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            get_service_info: Arc::new(GetServiceInfoUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            explain_concept: Arc::new(ExplainConceptUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            guide_task: Arc::new(GuideTaskUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            search_documentation: Arc::new(SearchDocumentationUseCaseImpl {
                repository,
                logger: logger.clone(),
            }),
            logger: logger.clone(),
        };

        // Kernel
        let mut kernel = Kernel::new();
        kernel
            .add_plugin(PLUGIN_NAME, Arc::new(plugin))
            .context("failed to register AzureDocs plugin")?;

        // Chat completion
        let client = AzureOpenAIClient::new(config.azure_openai.client_options());
        let completion = Arc::new(AzureChatCompletion::new(client));

        let send_message_use_case = Arc::new(SendMessageUseCaseImpl {
            kernel: Arc::new(kernel),
            completion,
            settings: ExecutionSettings::default(),
            logger,
        });

        Ok(Self {
            send_message_use_case,
        })
    }
}
