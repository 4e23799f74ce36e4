use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use models::{Item, Store};
use service::store::CreateStoreInput;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[derive(Debug, Serialize, Deserialize)]
pub struct StoresResponse {
    pub stores: Vec<Store>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreResponse {
    pub store: Store,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

#[utoipa::path(
    get, path = "/stores", tag = "stores",
    responses((status = 200, description = "All stores with their items", body = crate::openapi::StoresResponseDoc))
)]
pub async fn list_stores(State(state): State<ServerState>) -> Json<StoresResponse> {
    Json(StoresResponse { stores: state.stores.list_stores().await })
}

#[utoipa::path(
    post, path = "/stores", tag = "stores",
    request_body = crate::openapi::CreateStoreRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::StoreDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_store(
    State(state): State<ServerState>,
    payload: Result<Json<CreateStoreInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Store>), JsonApiError> {
    let Json(input) = payload?;
    let store = state.stores.create_store(input).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

#[utoipa::path(
    post, path = "/stores/{name}/item", tag = "stores",
    params(("name" = String, Path, description = "Store name, matched exactly")),
    request_body = crate::openapi::CreateItemRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ItemDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::MessageDoc),
        (status = 404, description = "Store not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_item(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), JsonApiError> {
    // Only JSON syntax is checked here; fields are read once the store matched.
    let Json(body) = payload?;
    let item = state.stores.create_item(&name, body).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    get, path = "/stores/{name}", tag = "stores",
    params(("name" = String, Path, description = "Store name, matched exactly")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::StoreResponseDoc),
        (status = 404, description = "Store not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_store(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<StoreResponse>, JsonApiError> {
    let store = state.stores.get_store(&name).await?;
    Ok(Json(StoreResponse { store }))
}

#[utoipa::path(
    get, path = "/stores/{name}/item", tag = "stores",
    params(("name" = String, Path, description = "Store name, matched exactly")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ItemsResponseDoc),
        (status = 404, description = "Store not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list_items(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Result<Json<ItemsResponse>, JsonApiError> {
    let items = state.stores.list_items(&name).await?;
    Ok(Json(ItemsResponse { items }))
}
