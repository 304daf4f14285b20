//! Core trait definitions for product persistence
//!
//! The facade only talks to storage through this trait, so any durable
//! store can sit behind it.

use crate::core::data::ProductCollection;
use crate::utils::error::AppResult;

/// Storage operations for products
///
/// Stores always deal in whole collections: `save` replaces everything
/// previously stored with exactly the given products.
pub trait ProductStorage {
    /// Load every stored product, initializing an empty store if none exists yet
    fn load(&mut self) -> AppResult<ProductCollection>;

    /// Overwrite the store with the given collection
    fn save(&mut self, collection: &ProductCollection) -> AppResult<()>;

    /// Release any resources held by the store
    fn close(&mut self) -> AppResult<()>;
}

impl<S: ProductStorage + ?Sized> ProductStorage for Box<S> {
    fn load(&mut self) -> AppResult<ProductCollection> {
        (**self).load()
    }

    fn save(&mut self, collection: &ProductCollection) -> AppResult<()> {
        (**self).save(collection)
    }

    fn close(&mut self) -> AppResult<()> {
        (**self).close()
    }
}
