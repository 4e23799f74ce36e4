pub mod domain;
pub mod memory;
pub mod repository;
pub mod service;

pub use domain::{CreateItemInput, CreateStoreInput};
pub use memory::InMemoryStoreRepository;
pub use repository::StoreRepository;
pub use service::StoreService;
