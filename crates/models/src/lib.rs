pub mod item;
pub mod store;

pub use item::Item;
pub use store::Store;

#[cfg(test)]
mod tests;
