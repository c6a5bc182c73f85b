//! User records.

mod service;

pub use service::UserService;

use chrono::{DateTime, Utc};
use common::RecordId;
use record_store::{Record, RecordStoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Error)]
pub enum UserError {
    /// No user is stored under the given id.
    #[error("User not found: {0}")]
    NotFound(RecordId),

    /// The email address is malformed.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The underlying record store failed.
    #[error("Record store error: {0}")]
    Store(#[from] RecordStoreError),
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for User {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

impl CreateUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Command to change a user's details. Absent fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub user_id: RecordId,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Checks that `email` has the shape `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<(), UserError> {
    let invalid = || UserError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }

    Ok(())
}
