//! Product catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use common::RecordId;
use domain::{CreateProduct, Product, ProductError, ProductService, UpdateProduct};
use record_store::{InMemoryRecordStore, RecordStore};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::routes::metrics::count_body;

pub struct ProductsState<S: RecordStore<Product>> {
    pub service_name: &'static str,
    pub product_service: ProductService<S>,
}

impl ProductsState<InMemoryRecordStore<Product>> {
    /// Creates state backed by an in-memory store holding the seed catalog.
    pub async fn seeded(service_name: &'static str) -> Result<Arc<Self>, ProductError> {
        let product_service = ProductService::new(InMemoryRecordStore::new());
        product_service.seed().await?;
        Ok(Arc::new(Self {
            service_name,
            product_service,
        }))
    }
}

#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i64,
    pub category: String,
}

#[derive(Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total: usize,
}

/// POST /api/v1/products
#[tracing::instrument(skip(state, req))]
pub async fn create<S: RecordStore<Product> + 'static>(
    State(state): State<Arc<ProductsState<S>>>,
    ApiJson(req): ApiJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let cmd = CreateProduct {
        name: req.name,
        description: req.description,
        price: req.price,
        stock: req.stock,
        category: req.category,
    };
    let product = state.product_service.create_product(cmd).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/v1/products/{id}
#[tracing::instrument(skip(state))]
pub async fn get<S: RecordStore<Product> + 'static>(
    State(state): State<Arc<ProductsState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(
        state.product_service.get_product(&RecordId::from(id)).await?,
    ))
}

/// GET /api/v1/products: optionally filtered by `category`, ignoring case.
#[tracing::instrument(skip(state, query))]
pub async fn list<S: RecordStore<Product> + 'static>(
    State(state): State<Arc<ProductsState<S>>>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let category = query.category.filter(|c| !c.is_empty());
    let products = state
        .product_service
        .list_products(category.as_deref())
        .await?;
    let total = products.len();
    Ok(Json(ProductListResponse { products, total }))
}

/// PUT /api/v1/products/{id}: partial update.
#[tracing::instrument(skip(state, req))]
pub async fn update<S: RecordStore<Product> + 'static>(
    State(state): State<Arc<ProductsState<S>>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let changes = UpdateProduct {
        name: req.name,
        description: req.description,
        price: req.price,
        stock: req.stock,
        category: req.category,
    };
    let product = state
        .product_service
        .update_product(&RecordId::from(id), changes)
        .await?;
    Ok(Json(product))
}

/// DELETE /api/v1/products/{id}
#[tracing::instrument(skip(state))]
pub async fn delete<S: RecordStore<Product> + 'static>(
    State(state): State<Arc<ProductsState<S>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .product_service
        .delete_product(&RecordId::from(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /metrics: number of catalog entries.
pub async fn metrics<S: RecordStore<Product> + 'static>(
    State(state): State<Arc<ProductsState<S>>>,
) -> Result<Json<Value>, ApiError> {
    let total = state.product_service.count_products().await?;
    Ok(Json(count_body("products", total, state.service_name)))
}
