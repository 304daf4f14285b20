//! proddb - product processing-time registry
//!
//! This library provides the product collection, the time formula evaluator
//! and the facade that keeps the collection in sync with a backing store.

pub mod cli;
pub mod config;
pub mod core;
pub mod manager;
pub mod storage;
pub mod telemetry;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    api::{Request, Response},
    data::{Product, ProductCollection},
    formula::evaluate,
    operations::ProductOperations,
    traits::ProductStorage,
};
pub use utils::error::{AppError, AppResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
