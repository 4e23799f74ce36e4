use serde::{Deserialize, Serialize};

use models::{Item, Store};

use crate::errors::ServiceError;

/// Body of `POST /stores`. Only `name` is read.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateStoreInput {
    pub name: String,
}

impl CreateStoreInput {
    pub fn into_store(self) -> Store {
        Store::new(self.name)
    }
}

/// Body of `POST /stores/{name}/item`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateItemInput {
    pub name: String,
    pub price: f64,
}

impl CreateItemInput {
    /// Decode a raw body. Missing or mistyped fields are a validation error.
    pub fn from_json(body: serde_json::Value) -> Result<Self, ServiceError> {
        Ok(serde_json::from_value(body)?)
    }

    pub fn into_item(self) -> Item {
        Item::new(self.name, self.price)
    }
}
