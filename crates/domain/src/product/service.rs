//! Product catalog service.

use chrono::Utc;
use common::RecordId;
use record_store::{RecordStore, RecordStoreExt};

use super::{CreateProduct, Product, ProductError, UpdateProduct, seed_catalog};

/// Service for managing the product catalog.
pub struct ProductService<S: RecordStore<Product>> {
    store: S,
}

impl<S: RecordStore<Product>> ProductService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Inserts the seed products into the catalog.
    ///
    /// Returns the number of products added.
    pub async fn seed(&self) -> Result<usize, ProductError> {
        let inserted = self.store.insert_all(seed_catalog(Utc::now())).await?;
        tracing::info!(inserted, "seeded product catalog");
        Ok(inserted)
    }

    /// Adds a product to the catalog.
    #[tracing::instrument(skip(self))]
    pub async fn create_product(&self, cmd: CreateProduct) -> Result<Product, ProductError> {
        let now = Utc::now();
        let product = self
            .store
            .insert(Product {
                id: RecordId::generate(),
                name: cmd.name,
                description: cmd.description,
                price: cmd.price,
                stock: cmd.stock,
                category: cmd.category,
                created_at: now,
                updated_at: now,
            })
            .await?;

        metrics::counter!("products_created_total").increment(1);
        tracing::info!(product_id = %product.id, "created product");
        Ok(product)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, product_id: &RecordId) -> Result<Product, ProductError> {
        self.store
            .get(product_id)
            .await?
            .ok_or_else(|| ProductError::NotFound(product_id.clone()))
    }

    /// Lists products in insertion order, optionally narrowed to one
    /// category (case-insensitive).
    #[tracing::instrument(skip(self))]
    pub async fn list_products(&self, category: Option<&str>) -> Result<Vec<Product>, ProductError> {
        let products = match category {
            Some(category) => {
                let category = category.to_string();
                self.store
                    .list_where(move |product: &Product| product.in_category(&category))
                    .await?
            }
            None => self.store.list().await?,
        };
        Ok(products)
    }

    /// Overwrites the provided fields and refreshes `updated_at`.
    #[tracing::instrument(skip(self))]
    pub async fn update_product(
        &self,
        product_id: &RecordId,
        changes: UpdateProduct,
    ) -> Result<Product, ProductError> {
        let product = self
            .store
            .update(product_id, move |product: &mut Product| {
                changes.apply(product);
                product.updated_at = Utc::now().max(product.updated_at);
                Ok::<_, ProductError>(())
            })
            .await?
            .ok_or_else(|| ProductError::NotFound(product_id.clone()))?;

        metrics::counter!("products_updated_total").increment(1);
        tracing::info!(product_id = %product.id, "updated product");
        Ok(product)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, product_id: &RecordId) -> Result<(), ProductError> {
        self.store
            .remove(product_id)
            .await?
            .ok_or_else(|| ProductError::NotFound(product_id.clone()))?;

        metrics::counter!("products_deleted_total").increment(1);
        tracing::info!(%product_id, "deleted product");
        Ok(())
    }

    pub async fn count_products(&self) -> Result<usize, ProductError> {
        Ok(self.store.count().await?)
    }
}
