use async_trait::async_trait;

use models::{Item, Store};

use crate::errors::ServiceError;

/// Produces the item to append once a store has matched.
pub type ItemBuilder = Box<dyn FnOnce() -> Result<Item, ServiceError> + Send>;

/// Ordered collection of stores. Lookups are by exact name and resolve to the
/// first store in insertion order; duplicate names are allowed.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// All stores in insertion order, with their items.
    async fn list(&self) -> Vec<Store>;
    /// First store named `name`.
    async fn find(&self, name: &str) -> Option<Store>;
    /// Append `store` after every existing store and return it.
    async fn append_store(&self, store: Store) -> Store;
    /// Append the item produced by `build` to the first store named
    /// `store_name`. `build` runs only after a store matched; a missing store
    /// is `NotFound` and any error from `build` leaves the collection unchanged.
    async fn append_item(&self, store_name: &str, build: ItemBuilder) -> Result<Item, ServiceError>;
}
