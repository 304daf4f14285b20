//! Core operations implementation
//!
//! [`ProductOperations`] owns the in-memory product collection and the store
//! behind it. Reads are served from memory; every mutation is applied in
//! memory first and then the whole collection is written back.

use crate::core::{
    api::{Request, Response},
    data::{Product, ProductCollection},
    formula,
    traits::ProductStorage,
};
use crate::utils::error::{AppError, AppResult};
use tracing::{debug, error, info, warn};

/// Main operations hub for product management
///
/// A failed save does not roll back the in-memory change: the collection
/// stays ahead of the store until the next successful save.
pub struct ProductOperations<S: ProductStorage> {
    storage: S,
    products: ProductCollection,
}

impl<S: ProductStorage> ProductOperations<S> {
    /// Load the collection from storage
    ///
    /// A load failure is logged and leaves the collection empty.
    pub fn new(mut storage: S) -> Self {
        let products = match storage.load() {
            Ok(products) => {
                info!(count = products.len(), "product collection loaded");
                products
            }
            Err(e) => {
                error!(error = %e, "failed to load products, starting with an empty collection");
                ProductCollection::default()
            }
        };

        Self { storage, products }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn get_all(&self) -> &[Product] {
        self.products.as_slice()
    }

    pub fn search(&self, query: &str) -> Vec<Product> {
        self.products.search(query)
    }

    pub fn find(&self, id: u64) -> Option<&Product> {
        self.products.find(id)
    }

    /// Add a product under the next free ID and persist
    pub fn add(&mut self, name: &str, time_calculation: &str) -> AppResult<Product> {
        let id = self
            .products
            .next_id()
            .ok_or_else(|| AppError::System("No product IDs left to assign".to_string()))?;
        let product = Product::new(
            id,
            name.to_string(),
            formula::evaluate(time_calculation),
            time_calculation.to_string(),
        );
        debug!(id = product.id, "adding product");

        self.products.add(product.clone());
        self.persist()?;
        Ok(product)
    }

    /// Replace the product with `id`; an unknown ID changes nothing but is still persisted
    pub fn update(&mut self, id: u64, name: &str, time_calculation: &str) -> AppResult<()> {
        let product = Product::new(
            id,
            name.to_string(),
            formula::evaluate(time_calculation),
            time_calculation.to_string(),
        );

        if !self.products.update(product) {
            debug!(id, "update target not found");
        }
        self.persist()
    }

    pub fn delete(&mut self, id: u64) -> AppResult<()> {
        if self.products.delete(id).is_none() {
            debug!(id, "delete target not found");
        }
        self.persist()
    }

    pub fn delete_multiple(&mut self, ids: &[u64]) -> AppResult<()> {
        let before = self.products.len();
        self.products.delete_multiple(ids);
        debug!(removed = before - self.products.len(), "deleted products");
        self.persist()
    }

    /// Release the underlying store
    pub fn close(&mut self) -> AppResult<()> {
        self.storage.close()
    }

    /// Dispatch a typed request
    ///
    /// Persistence failures are reported as [`Response::Error`]; the
    /// in-memory change they follow is kept.
    pub fn handle(&mut self, request: Request) -> Response {
        let result = match request {
            Request::GetAll => Ok(Response::Products {
                products: self.get_all().to_vec(),
            }),
            Request::Search { query } => Ok(Response::Products {
                products: self.search(&query),
            }),
            Request::Add {
                name,
                time_calculation,
            } => self
                .add(&name, &time_calculation)
                .map(|product| Response::Product { product }),
            Request::Update {
                id,
                name,
                time_calculation,
            } => self
                .update(id, &name, &time_calculation)
                .map(|_| Response::Ok),
            Request::Delete { id } => self.delete(id).map(|_| Response::Ok),
            Request::DeleteMultiple { ids } => self.delete_multiple(&ids).map(|_| Response::Ok),
            Request::Evaluate { formula } => Ok(Response::Value {
                value: formula::evaluate(&formula),
            }),
        };

        result.unwrap_or_else(|e| Response::error(e.to_string()))
    }

    fn persist(&mut self) -> AppResult<()> {
        self.storage.save(&self.products).inspect_err(|e| {
            warn!(error = %e, "failed to persist products; in-memory changes kept");
        })
    }
}
