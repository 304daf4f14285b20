// Command handlers behind the CLI
pub mod config; // Configuration management
pub mod crud; // Add, edit, delete, show
pub mod query; // List, search, calc
pub mod serve; // JSON-lines bridge

use crate::config::Config;
use crate::core::operations::ProductOperations;
use crate::core::traits::ProductStorage;
use crate::storage;

pub type Operations = ProductOperations<Box<dyn ProductStorage>>;

/// Open the configured store and load the product collection
pub fn open_operations(config: &Config) -> Operations {
    ProductOperations::new(storage::open(config))
}

/// Close the store, logging instead of failing: the command's work is already done
pub fn close_operations(mut operations: Operations) {
    if let Err(e) = operations.close() {
        tracing::warn!(error = %e, "failed to close product storage");
    }
}
