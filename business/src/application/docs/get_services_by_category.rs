use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::docs::errors::DocsError;
use crate::domain::docs::model::{CategoryLookup, same_name};
use crate::domain::docs::repository::DocsRepository;
use crate::domain::docs::use_cases::get_services_by_category::{
    GetServicesByCategoryParams, GetServicesByCategoryUseCase,
};
use crate::domain::logger::Logger;

pub struct GetServicesByCategoryUseCaseImpl {
    pub repository: Arc<dyn DocsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetServicesByCategoryUseCase for GetServicesByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetServicesByCategoryParams,
    ) -> Result<CategoryLookup, DocsError> {
        let categories = self.repository.get_categories().await?;
        let requested = params.category.as_str();

        if requested.trim().is_empty() {
            self.logger.debug("Listing all service categories");
            return Ok(CategoryLookup::Categories {
                categories: categories.into_iter().map(|c| c.name).collect(),
            });
        }

        self.logger
            .debug(&format!("Looking up services in category: {}", requested));

        let available: Vec<String> = categories.iter().map(|c| c.name.clone()).collect();

        categories
            .into_iter()
            .find(|c| same_name(&c.name, requested))
            .map(|c| CategoryLookup::Category {
                category: c.name,
                services: c.services,
            })
            .ok_or(DocsError::CategoryNotFound {
                category: requested.to_string(),
                available,
            })
    }
}
