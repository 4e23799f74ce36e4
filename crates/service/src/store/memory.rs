use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use models::{Item, Store};

use crate::errors::ServiceError;
use crate::store::repository::{ItemBuilder, StoreRepository};

/// Process-lifetime registry held in memory.
///
/// Reads share the lock; each append holds the write lock across the name scan
/// and the push, so an item always lands in the store that was matched.
#[derive(Clone, Default)]
pub struct InMemoryStoreRepository {
    inner: Arc<RwLock<Vec<Store>>>,
}

impl InMemoryStoreRepository {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the example store.
    pub fn seeded() -> Self {
        Self::with_stores(vec![Store::example()])
    }

    pub fn with_stores(stores: Vec<Store>) -> Self {
        Self { inner: Arc::new(RwLock::new(stores)) }
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn list(&self) -> Vec<Store> {
        self.inner.read().await.clone()
    }

    async fn find(&self, name: &str) -> Option<Store> {
        let stores = self.inner.read().await;
        stores.iter().find(|s| s.is_named(name)).cloned()
    }

    async fn append_store(&self, store: Store) -> Store {
        let mut stores = self.inner.write().await;
        stores.push(store.clone());
        store
    }

    async fn append_item(&self, store_name: &str, build: ItemBuilder) -> Result<Item, ServiceError> {
        let mut stores = self.inner.write().await;
        let store = stores
            .iter_mut()
            .find(|s| s.is_named(store_name))
            .ok_or_else(|| ServiceError::not_found("Store"))?;
        let item = build()?;
        store.items.push(item.clone());
        Ok(item)
    }
}
