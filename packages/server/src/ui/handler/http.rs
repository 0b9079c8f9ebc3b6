//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

use crate::{
    domain::{MethodId, PaymentAddress, UserId, ValueObjectError},
    infrastructure::dto::http::{
        AssociationDto, AssociationQuery, CatalogEntryDto, ConnectRequest, DisconnectRequest,
        RegisterUserRequest, UserDto,
    },
    ui::{error::ApiError, state::AppState},
    usecase::{
        ConnectPaymentMethodUseCase, DisconnectPaymentMethodUseCase, FetchAssociationUseCase,
        RegisterUserUseCase, UserProfile,
    },
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// List the payment method catalog
pub async fn list_payment_methods(State(state): State<Arc<AppState>>) -> Json<Vec<CatalogEntryDto>> {
    Json(
        state
            .catalog
            .entries()
            .iter()
            .map(CatalogEntryDto::from)
            .collect(),
    )
}

/// Get the current association of a user
pub async fn get_association(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AssociationQuery>, QueryRejection>,
) -> Result<Json<AssociationDto>, ApiError> {
    let Query(query) = query?;
    let user_id = UserId::try_from(query.user_id)?;

    let association = FetchAssociationUseCase::new(state.repository.clone())
        .execute(user_id)
        .await?;
    Ok(Json(AssociationDto::from(&association)))
}

/// Connect a payment method (method and address are stored together)
pub async fn connect_payment_method(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ConnectRequest>, JsonRejection>,
) -> Result<Json<AssociationDto>, ApiError> {
    let Json(request) = payload?;

    // Convert String -> Domain Models
    let user_id = UserId::try_from(request.user_id)?;
    let method_id = MethodId::try_from(
        request
            .method_id
            .ok_or(ValueObjectError::MethodIdEmpty)?,
    )?;
    let address =
        PaymentAddress::try_from(request.address.ok_or(ValueObjectError::AddressEmpty)?)?;

    let association =
        ConnectPaymentMethodUseCase::new(state.repository.clone(), state.catalog.clone())
            .execute(user_id, method_id, address)
            .await?;
    Ok(Json(AssociationDto::from(&association)))
}

/// Disconnect the payment method (clears method and address together)
pub async fn disconnect_payment_method(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DisconnectRequest>, JsonRejection>,
) -> Result<Json<AssociationDto>, ApiError> {
    let Json(request) = payload?;
    let user_id = UserId::try_from(request.user_id)?;

    let association = DisconnectPaymentMethodUseCase::new(state.repository.clone())
        .execute(user_id)
        .await?;
    Ok(Json(AssociationDto::from(&association)))
}

/// Register a user if absent
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<Json<UserDto>, ApiError> {
    let Json(request) = payload?;
    let user_id = UserId::try_from(request.user_id)?;
    let profile = UserProfile {
        username: request.username.unwrap_or_default(),
        first_name: request.first_name.unwrap_or_default(),
        last_name: request.last_name.unwrap_or_default(),
    };

    let user = RegisterUserUseCase::new(state.repository.clone())
        .execute(user_id, profile)
        .await?;
    Ok(Json(UserDto::from(&user)))
}

/// Get user detail by ID
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let user_id = UserId::try_from(user_id)?;
    let user = RegisterUserUseCase::new(state.repository.clone())
        .find(user_id)
        .await?;
    Ok(Json(UserDto::from(&user)))
}
