pub mod app_config;
pub mod azure_openai_config;
