//! Typed request/response surface for front-ends
//!
//! One request variant per facade operation. Requests and responses are
//! plain serde data so any transport (the JSON-lines bridge, a GUI host)
//! can carry them.

use crate::core::data::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "camelCase")]
pub enum Request {
    GetAll,
    Search {
        query: String,
    },
    #[serde(rename_all = "camelCase")]
    Add {
        name: String,
        time_calculation: String,
    },
    #[serde(rename_all = "camelCase")]
    Update {
        id: u64,
        name: String,
        time_calculation: String,
    },
    Delete {
        id: u64,
    },
    DeleteMultiple {
        ids: Vec<u64>,
    },
    Evaluate {
        formula: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Response {
    Products { products: Vec<Product> },
    Product { product: Product },
    Value { value: f64 },
    Ok,
    Error { message: String },
}

impl Response {
    pub fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}
