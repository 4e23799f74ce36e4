use serde::{Deserialize, Serialize};

use crate::item::Item;

/// A named container of items. `name` is the only lookup key and is not
/// required to be unique.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Store {
    /// New store with no items.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), items: Vec::new() }
    }

    pub fn with_items(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self { name: name.into(), items }
    }

    /// Exact, case-sensitive comparison; no trimming.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    /// The store present at startup: "My Store" with a chair and a bed.
    pub fn example() -> Self {
        Self::with_items(
            "My Store",
            vec![Item::new("Chair", 15.99), Item::new("Bed", 120.23)],
        )
    }
}
