use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ItemDoc { pub name: String, pub price: f64 }

#[derive(ToSchema)]
pub struct StoreDoc { pub name: String, pub items: Vec<ItemDoc> }

#[derive(ToSchema)]
pub struct StoresResponseDoc { pub stores: Vec<StoreDoc> }

#[derive(ToSchema)]
pub struct StoreResponseDoc { pub store: StoreDoc }

#[derive(ToSchema)]
pub struct ItemsResponseDoc { pub items: Vec<ItemDoc> }

#[derive(ToSchema)]
pub struct CreateStoreRequest { pub name: String }

#[derive(ToSchema)]
pub struct CreateItemRequest { pub name: String, pub price: f64 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::stores::list_stores,
        crate::routes::stores::create_store,
        crate::routes::stores::create_item,
        crate::routes::stores::get_store,
        crate::routes::stores::list_items,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            ItemDoc,
            StoreDoc,
            StoresResponseDoc,
            StoreResponseDoc,
            ItemsResponseDoc,
            CreateStoreRequest,
            CreateItemRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "stores")
    )
)]
pub struct ApiDoc;
