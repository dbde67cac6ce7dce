use business::domain::docs::model::{
    AzureConcept, AzureService, DocsCatalog, ServiceCategory, TaskGuide,
};

fn category(name: &str, services: Vec<AzureService>) -> ServiceCategory {
    ServiceCategory {
        name: name.to_string(),
        services,
    }
}

fn concept(name: &str, explanation: &str) -> AzureConcept {
    AzureConcept {
        name: name.to_string(),
        explanation: explanation.to_string(),
    }
}

fn task(task: &str, steps: &[&str]) -> TaskGuide {
    TaskGuide {
        task: task.to_string(),
        steps: steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// The knowledge base shipped with the assistant.
pub fn builtin_catalog() -> DocsCatalog {
    DocsCatalog {
        categories: vec![
            category(
                "Compute",
                vec![
                    AzureService::new(
                        "Virtual Machines",
                        "Provision Windows and Linux virtual machines in seconds",
                        "https://docs.microsoft.com/azure/virtual-machines/",
                    ),
                    AzureService::new(
                        "App Service",
                        "Quickly create powerful cloud apps for web and mobile",
                        "https://docs.microsoft.com/azure/app-service/",
                    ),
                    AzureService::new(
                        "Azure Functions",
                        "Process events with serverless code",
                        "https://docs.microsoft.com/azure/azure-functions/",
                    ),
                    AzureService::new(
                        "Container Instances",
                        "Easily run containers on Azure without managing servers",
                        "https://docs.microsoft.com/azure/container-instances/",
                    ),
                ],
            ),
            category(
                "Storage",
                vec![
                    AzureService::new(
                        "Blob Storage",
                        "REST-based object storage for unstructured data",
                        "https://docs.microsoft.com/azure/storage/blobs/",
                    ),
                    AzureService::new(
                        "Disk Storage",
                        "Persistent, secured disk options for Azure VMs",
                        "https://docs.microsoft.com/azure/virtual-machines/disks-types",
                    ),
                    AzureService::new(
                        "File Storage",
                        "File shares that use the standard SMB protocol",
                        "https://docs.microsoft.com/azure/storage/files/",
                    ),
                ],
            ),
            category(
                "Databases",
                vec![
                    AzureService::new(
                        "Azure SQL Database",
                        "Managed, intelligent SQL in the cloud",
                        "https://docs.microsoft.com/azure/azure-sql/database/",
                    ),
                    AzureService::new(
                        "Azure Cosmos DB",
                        "Globally distributed, multi-model database",
                        "https://docs.microsoft.com/azure/cosmos-db/",
                    ),
                ],
            ),
            category(
                "AI + Machine Learning",
                vec![
                    AzureService::new(
                        "Azure OpenAI Service",
                        "Apply advanced language models to variety of use cases",
                        "https://docs.microsoft.com/azure/cognitive-services/openai/",
                    ),
                    AzureService::new(
                        "Azure Machine Learning",
                        "Build, train, and deploy machine learning models",
                        "https://docs.microsoft.com/azure/machine-learning/",
                    ),
                    AzureService::new(
                        "Cognitive Services",
                        "Add cognitive capabilities to apps with APIs",
                        "https://docs.microsoft.com/azure/cognitive-services/",
                    ),
                ],
            ),
            category(
                "Integration",
                vec![
                    AzureService::new(
                        "Logic Apps",
                        "Automate the access and use of data across clouds",
                        "https://docs.microsoft.com/azure/logic-apps/",
                    ),
                    AzureService::new(
                        "API Management",
                        "Publish APIs to developers, partners, and employees securely",
                        "https://docs.microsoft.com/azure/api-management/",
                    ),
                ],
            ),
        ],
        concepts: vec![
            concept(
                "Resource Group",
                "A container that holds related resources for an Azure solution. A resource group includes resources that you want to manage as a group.",
            ),
            concept(
                "Azure Resource Manager",
                "Deployment and management service for Azure. Provides a management layer that enables you to create, update, and delete resources in your Azure account.",
            ),
            concept(
                "Azure Portal",
                "Web-based, unified console that provides an alternative to command-line tools. You can manage your Azure subscription using the Azure portal.",
            ),
            concept(
                "Azure CLI",
                "Command-line tool designed to get you working quickly with Azure, with an emphasis on automation.",
            ),
            concept(
                "Azure PowerShell",
                "A set of cmdlets for managing Azure resources directly from the PowerShell command line.",
            ),
            concept(
                "Subscription",
                "An agreement with Microsoft to use Azure services, and how you're billed for Azure services.",
            ),
            concept(
                "Availability Set",
                "A logical grouping of VMs that allows Azure to understand how your application is built to provide redundancy and availability.",
            ),
            concept(
                "Availability Zone",
                "Physically separate locations within an Azure region protected from data center failures.",
            ),
        ],
        tasks: vec![
            task(
                "deploy virtual machine",
                &[
                    "Sign in to the Azure portal",
                    "Select 'Create a resource'",
                    "Search for and select 'Virtual Machine'",
                    "Fill in the basic details (name, region, image, size)",
                    "Configure networking, management, and advanced options",
                    "Review and create",
                ],
            ),
            task(
                "create storage account",
                &[
                    "Sign in to the Azure portal",
                    "Select 'Create a resource'",
                    "Search for and select 'Storage account'",
                    "Fill in the basics (subscription, resource group, name, region)",
                    "Configure performance, redundancy, and advanced options",
                    "Review and create",
                ],
            ),
            task(
                "set up azure functions",
                &[
                    "Sign in to the Azure portal",
                    "Select 'Create a resource'",
                    "Search for and select 'Function App'",
                    "Fill in the basics (subscription, resource group, name)",
                    "Select runtime stack and version",
                    "Choose region and hosting options",
                    "Review and create",
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_ship_five_categories_in_order() {
        let catalog = builtin_catalog();

        let names: Vec<&str> = catalog.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Compute",
                "Storage",
                "Databases",
                "AI + Machine Learning",
                "Integration"
            ]
        );
        let services: usize = catalog.categories.iter().map(|c| c.services.len()).sum();
        assert_eq!(services, 14);
    }

    #[test]
    fn should_ship_concepts_and_task_guides() {
        let catalog = builtin_catalog();

        assert_eq!(catalog.concepts.len(), 8);
        assert_eq!(catalog.tasks.len(), 3);
    }

    #[test]
    fn should_number_task_steps() {
        let catalog = builtin_catalog();
        let guide = &catalog.tasks[2];

        assert_eq!(guide.task, "set up azure functions");
        assert!(guide.steps.starts_with("1. Sign in to the Azure portal\n2. "));
        assert!(guide.steps.ends_with("7. Review and create"));
    }
}
