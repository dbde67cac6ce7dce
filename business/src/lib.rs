pub mod application {
    pub mod chat {
        pub mod send_message;
    }
    pub mod docs {
        pub mod explain_concept;
        pub mod get_service_info;
        pub mod get_services_by_category;
        pub mod guide_task;
        pub mod search_documentation;
    }
    pub mod plugins {
        pub mod azure_docs;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod chat {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod send_message;
        }
    }
    pub mod docs {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod explain_concept;
            pub mod get_service_info;
            pub mod get_services_by_category;
            pub mod guide_task;
            pub mod search_documentation;
        }
    }
    pub mod kernel {
        pub mod errors;
        pub mod model;
        pub mod plugin;
        pub mod registry;
    }
}
