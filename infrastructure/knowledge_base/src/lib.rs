pub mod file_repository;
pub mod loader;
pub mod repository;
pub mod seed;

pub use file_repository::JsonFileDocsRepository;
pub use repository::InMemoryDocsRepository;
