use crate::core::data::ProductCollection;
use crate::core::traits::ProductStorage;
use crate::utils::error::{AppError, AppResult};
use std::path::PathBuf;
use tracing::{debug, info};

/// Document store keeping products as a `[[products]]` array of tables
pub struct TomlStorage {
    path: PathBuf,
}

impl TomlStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_storage_exists(&self) -> AppResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Persistence(format!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        info!(path = %self.path.display(), "creating new product file");
        self.write(&ProductCollection::default())
    }

    fn write(&self, collection: &ProductCollection) -> AppResult<()> {
        let content = toml::to_string_pretty(collection).map_err(|e| {
            AppError::Persistence(format!("Failed to serialize product collection: {}", e))
        })?;

        std::fs::write(&self.path, content).map_err(|e| {
            AppError::Persistence(format!(
                "Failed to write data file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl ProductStorage for TomlStorage {
    fn load(&mut self) -> AppResult<ProductCollection> {
        self.ensure_storage_exists()?;

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            AppError::Persistence(format!(
                "Failed to read data file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(ProductCollection::default());
        }

        let collection: ProductCollection = toml::from_str(&content)
            .map_err(|e| AppError::Persistence(format!("Failed to parse data file: {}", e)))?;

        debug!(path = %self.path.display(), count = collection.len(), "loaded products");
        Ok(collection)
    }

    fn save(&mut self, collection: &ProductCollection) -> AppResult<()> {
        self.write(collection)?;
        debug!(path = %self.path.display(), count = collection.len(), "saved products");
        Ok(())
    }

    fn close(&mut self) -> AppResult<()> {
        Ok(())
    }
}
