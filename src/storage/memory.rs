use crate::core::data::{Product, ProductCollection};
use crate::core::traits::ProductStorage;
use crate::utils::error::{AppError, AppResult};

/// In-process store, mainly for embedding and tests
///
/// Load and save failures can be injected to exercise the facade's
/// recovery paths.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    collection: ProductCollection,
    load_error: Option<String>,
    save_error: Option<String>,
    saves: usize,
    closed: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            collection: ProductCollection::from(products),
            ..Self::default()
        }
    }

    /// Make every subsequent `load` fail with the given message
    pub fn failing_load(mut self, message: &str) -> Self {
        self.load_error = Some(message.to_string());
        self
    }

    /// Make every subsequent `save` fail with the given message
    pub fn failing_save(mut self, message: &str) -> Self {
        self.save_error = Some(message.to_string());
        self
    }

    pub fn set_save_error(&mut self, message: Option<&str>) {
        self.save_error = message.map(str::to_string);
    }

    /// What the last successful `save` wrote
    pub fn stored(&self) -> &ProductCollection {
        &self.collection
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl ProductStorage for MemoryStorage {
    fn load(&mut self) -> AppResult<ProductCollection> {
        match &self.load_error {
            Some(message) => Err(AppError::Persistence(message.clone())),
            None => Ok(self.collection.clone()),
        }
    }

    fn save(&mut self, collection: &ProductCollection) -> AppResult<()> {
        if let Some(message) = &self.save_error {
            return Err(AppError::Persistence(message.clone()));
        }
        self.collection = collection.clone();
        self.saves += 1;
        Ok(())
    }

    fn close(&mut self) -> AppResult<()> {
        self.closed = true;
        Ok(())
    }
}
