//! User CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use common::RecordId;
use domain::{CreateUser, UpdateUser, User, UserService};
use record_store::{InMemoryRecordStore, RecordStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::routes::metrics::count_body;

pub struct UsersState<S: RecordStore<User>> {
    pub service_name: &'static str,
    pub user_service: UserService<S>,
}

impl UsersState<InMemoryRecordStore<User>> {
    pub fn in_memory(service_name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            service_name,
            user_service: UserService::new(InMemoryRecordStore::new()),
        })
    }
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: usize,
}

/// POST /api/v1/users
#[tracing::instrument(skip(state, req))]
pub async fn create<S: RecordStore<User> + 'static>(
    State(state): State<Arc<UsersState<S>>>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state
        .user_service
        .create_user(CreateUser::new(req.name, req.email))
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users/{id}
#[tracing::instrument(skip(state))]
pub async fn get<S: RecordStore<User> + 'static>(
    State(state): State<Arc<UsersState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.user_service.get_user(&RecordId::from(id)).await?))
}

/// GET /api/v1/users
#[tracing::instrument(skip(state))]
pub async fn list<S: RecordStore<User> + 'static>(
    State(state): State<Arc<UsersState<S>>>,
) -> Result<Json<UserListResponse>, ApiError> {
    let users = state.user_service.list_users().await?;
    let total = users.len();
    Ok(Json(UserListResponse { users, total }))
}

/// PUT /api/v1/users/{id}: partial update of name and email.
#[tracing::instrument(skip(state, req))]
pub async fn update<S: RecordStore<User> + 'static>(
    State(state): State<Arc<UsersState<S>>>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let cmd = UpdateUser {
        user_id: RecordId::from(id),
        name: req.name,
        email: req.email,
    };
    Ok(Json(state.user_service.update_user(cmd).await?))
}

/// DELETE /api/v1/users/{id}
#[tracing::instrument(skip(state))]
pub async fn delete<S: RecordStore<User> + 'static>(
    State(state): State<Arc<UsersState<S>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.user_service.delete_user(&RecordId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /metrics: number of stored users.
pub async fn metrics<S: RecordStore<User> + 'static>(
    State(state): State<Arc<UsersState<S>>>,
) -> Result<Json<Value>, ApiError> {
    let total = state.user_service.count_users().await?;
    Ok(Json(count_body("users", total, state.service_name)))
}
