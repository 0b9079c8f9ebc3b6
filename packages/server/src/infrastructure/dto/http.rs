//! HTTP API request/response DTOs for the association store.
//!
//! These are shared with the client crate, which deserializes the same shapes.

use serde::{Deserialize, Serialize};

use crate::domain::{Association, CatalogEntry, User};

/// Catalog entry for the payment method list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntryDto {
    pub id: String,
    pub label: String,
    pub address_hint: String,
}

impl From<&CatalogEntry> for CatalogEntryDto {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.as_str().to_string(),
            label: entry.label.clone(),
            address_hint: entry.address_hint.clone(),
        }
    }
}

/// Association as seen on the wire. `method_id` and `address` are both null or both set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationDto {
    pub user_id: String,
    pub method_id: Option<String>,
    pub address: Option<String>,
}

impl From<&Association> for AssociationDto {
    fn from(association: &Association) -> Self {
        Self {
            user_id: association.user_id.as_str().to_string(),
            method_id: association.method_id().map(|m| m.as_str().to_string()),
            address: association.address().map(|a| a.as_str().to_string()),
        }
    }
}

/// Query for `GET /api/payment`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssociationQuery {
    pub user_id: String,
}

/// Body for `POST /api/payment`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectRequest {
    pub user_id: String,
    #[serde(default)]
    pub method_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Body for `DELETE /api/payment`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisconnectRequest {
    pub user_id: String,
}

/// Body for `POST /api/users`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// User detail with current association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub user_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub registered_at: String, // ISO 8601
    pub method_id: Option<String>,
    pub address: Option<String>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        let association = AssociationDto::from(&user.association());
        Self {
            user_id: association.user_id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            registered_at: paylink_shared::time::timestamp_to_jst_rfc3339(
                user.registered_at.value(),
            ),
            method_id: association.method_id,
            address: association.address,
        }
    }
}

/// Error body returned with every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
