use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::{Item, Store};

use crate::errors::ServiceError;
use crate::store::domain::{CreateItemInput, CreateStoreInput};
use crate::store::repository::StoreRepository;

/// Store registry operations with the not-found policy on top of a
/// [`StoreRepository`].
#[derive(Clone)]
pub struct StoreService {
    repo: Arc<dyn StoreRepository>,
}

impl StoreService {
    pub fn new(repo: Arc<dyn StoreRepository>) -> Self { Self { repo } }

    pub async fn list_stores(&self) -> Vec<Store> {
        self.repo.list().await
    }

    /// Duplicate names are accepted.
    #[instrument(skip(self, input), fields(store = %input.name))]
    pub async fn create_store(&self, input: CreateStoreInput) -> Result<Store, ServiceError> {
        let store = self.repo.append_store(input.into_store()).await;
        info!(event = "store_created", "store created");
        Ok(store)
    }

    /// The store is resolved before `body` is decoded, so a missing store is
    /// reported as not found whatever the body holds.
    #[instrument(skip(self, body), fields(store = %store_name))]
    pub async fn create_item(&self, store_name: &str, body: serde_json::Value) -> Result<Item, ServiceError> {
        let build = Box::new(move || CreateItemInput::from_json(body).map(CreateItemInput::into_item));
        match self.repo.append_item(store_name, build).await {
            Ok(item) => {
                info!(event = "item_created", item = %item.name, price = item.price, "item created");
                Ok(item)
            }
            Err(ServiceError::NotFound(msg)) => {
                warn!(event = "store_not_found", "cannot add item");
                Err(ServiceError::NotFound(msg))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn get_store(&self, name: &str) -> Result<Store, ServiceError> {
        self.repo.find(name).await.ok_or_else(|| ServiceError::not_found("Store"))
    }

    pub async fn list_items(&self, store_name: &str) -> Result<Vec<Item>, ServiceError> {
        self.get_store(store_name).await.map(|s| s.items)
    }
}
