use std::path::{Path, PathBuf};

use business::domain::docs::model::{DocsCatalog, same_name};

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("cannot read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("catalog file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("catalog is invalid: {0}")]
    Invalid(String),
}

/// Reads a catalog from a JSON file shaped like [`DocsCatalog`].
pub fn load_catalog(path: &Path) -> Result<DocsCatalog, CatalogLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: DocsCatalog =
        serde_json::from_str(&raw).map_err(|source| CatalogLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    validate(&catalog)?;

    tracing::debug!(
        path = %path.display(),
        categories = catalog.categories.len(),
        concepts = catalog.concepts.len(),
        tasks = catalog.tasks.len(),
        "Loaded documentation catalog"
    );

    Ok(catalog)
}

fn validate(catalog: &DocsCatalog) -> Result<(), CatalogLoadError> {
    if catalog.categories.is_empty() {
        return Err(CatalogLoadError::Invalid(
            "at least one category is required".to_string(),
        ));
    }

    for (i, category) in catalog.categories.iter().enumerate() {
        if category.name.trim().is_empty() {
            return Err(CatalogLoadError::Invalid(format!(
                "category #{} has an empty name",
                i + 1
            )));
        }
        if catalog.categories[..i]
            .iter()
            .any(|earlier| same_name(&earlier.name, &category.name))
        {
            return Err(CatalogLoadError::Invalid(format!(
                "category '{}' is defined twice",
                category.name
            )));
        }
        if let Some(service) = category.services.iter().find(|s| s.name.trim().is_empty()) {
            return Err(CatalogLoadError::Invalid(format!(
                "category '{}' has a service with an empty name ({})",
                category.name, service.doc_url
            )));
        }
    }

    if catalog.tasks.iter().any(|t| t.task.trim().is_empty()) {
        return Err(CatalogLoadError::Invalid(
            "task guides need a non-empty task".to_string(),
        ));
    }

    Ok(())
}
