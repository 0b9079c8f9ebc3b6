//! HTTP implementation of [`AssociationStore`] on top of `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use paylink_server::{
    domain::{
        Association, Catalog, CatalogEntry, MethodId, PaymentAddress, PaymentBinding, UserId,
    },
    infrastructure::dto::http::{
        AssociationDto, CatalogEntryDto, ConnectRequest, DisconnectRequest, ErrorResponse,
        RegisterUserRequest, UserDto,
    },
};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{AssociationStore, StoreError};

/// Store client talking to a paylink server
#[derive(Debug, Clone)]
pub struct HttpAssociationStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAssociationStore {
    /// Create a store client for `base_url` (e.g. `http://127.0.0.1:8080`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Transient(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Load the payment method catalog offered by the server
    pub async fn fetch_catalog(&self) -> Result<Catalog, StoreError> {
        let response = self
            .client
            .get(self.url("/api/payment-methods"))
            .send()
            .await
            .map_err(transport_error)?;
        let entries: Vec<CatalogEntryDto> = decode(response).await?;

        let entries = entries
            .into_iter()
            .map(|dto| {
                let id = MethodId::try_from(dto.id)
                    .map_err(|e| StoreError::Validation(e.to_string()))?;
                Ok(CatalogEntry::new(id, dto.label, dto.address_hint))
            })
            .collect::<Result<Vec<_>, StoreError>>()?;
        Ok(Catalog::new(entries))
    }

    /// Make sure the user exists on the server
    pub async fn register_user(&self, user_id: &UserId) -> Result<UserDto, StoreError> {
        let request = RegisterUserRequest {
            user_id: user_id.as_str().to_string(),
            ..Default::default()
        };
        let response = self
            .client
            .post(self.url("/api/users"))
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }
}

#[async_trait]
impl AssociationStore for HttpAssociationStore {
    async fn fetch(&self, user_id: &UserId) -> Result<Association, StoreError> {
        let response = self
            .client
            .get(self.url("/api/payment"))
            .query(&[("user_id", user_id.as_str())])
            .send()
            .await
            .map_err(transport_error)?;
        association_from_dto(decode(response).await?)
    }

    async fn upsert(
        &self,
        user_id: &UserId,
        method_id: &MethodId,
        address: &PaymentAddress,
    ) -> Result<Association, StoreError> {
        let request = ConnectRequest {
            user_id: user_id.as_str().to_string(),
            method_id: Some(method_id.as_str().to_string()),
            address: Some(address.as_str().to_string()),
        };
        let response = self
            .client
            .post(self.url("/api/payment"))
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        association_from_dto(decode(response).await?)
    }

    async fn clear(&self, user_id: &UserId) -> Result<Association, StoreError> {
        let request = DisconnectRequest {
            user_id: user_id.as_str().to_string(),
        };
        let response = self
            .client
            .delete(self.url("/api/payment"))
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;
        association_from_dto(decode(response).await?)
    }
}

fn transport_error(err: reqwest::Error) -> StoreError {
    tracing::warn!("Store request failed: {}", err);
    StoreError::Transient(err.to_string())
}

/// Decode a successful body or map the status to a [`StoreError`]
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Transient(format!("invalid response body: {e}")));
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    };
    tracing::warn!("Store responded {}: {}", status, message);

    Err(match status {
        StatusCode::NOT_FOUND => StoreError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            StoreError::Validation(message)
        }
        _ => StoreError::Transient(message),
    })
}

/// Rebuild the domain association, refusing half-populated records
pub(crate) fn association_from_dto(dto: AssociationDto) -> Result<Association, StoreError> {
    let invalid = |e: paylink_server::domain::ValueObjectError| StoreError::Validation(e.to_string());
    let user_id = UserId::try_from(dto.user_id).map_err(invalid)?;

    match (dto.method_id, dto.address) {
        (Some(method_id), Some(address)) => {
            let binding = PaymentBinding::new(
                MethodId::try_from(method_id).map_err(invalid)?,
                PaymentAddress::try_from(address).map_err(invalid)?,
            );
            Ok(Association::bound(user_id, binding))
        }
        (None, None) => Ok(Association::empty(user_id)),
        _ => Err(StoreError::Validation(format!(
            "association for '{user_id}' has a method without an address or an address without a method"
        ))),
    }
}
