//! Product catalog records.

mod service;

pub use service::ProductService;

use chrono::{DateTime, Utc};
use common::RecordId;
use record_store::{Record, RecordStoreError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error)]
pub enum ProductError {
    /// No product is stored under the given id.
    #[error("Product not found: {0}")]
    NotFound(RecordId),

    /// The underlying record store failed.
    #[error("Record store error: {0}")]
    Store(#[from] RecordStoreError),
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i64,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Product {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

impl Product {
    /// Returns true if the product is filed under `category`, ignoring case.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

/// Command to add a product to the catalog.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i64,
    pub category: String,
}

/// Command to change a product. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
    pub category: Option<String>,
}

impl UpdateProduct {
    fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
    }
}

/// The products every fresh catalog starts with.
pub fn seed_catalog(now: DateTime<Utc>) -> Vec<Product> {
    let entry = |id: &str, name: &str, description: &str, price: Decimal, stock: i64| Product {
        id: RecordId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price,
        stock,
        category: "Electronics".to_string(),
        created_at: now,
        updated_at: now,
    };

    vec![
        entry(
            "prod-001",
            "Laptop",
            "High-performance laptop",
            Decimal::new(99999, 2),
            50,
        ),
        entry(
            "prod-002",
            "Wireless Mouse",
            "Ergonomic wireless mouse",
            Decimal::new(2999, 2),
            200,
        ),
    ]
}
