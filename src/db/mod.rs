use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Product, ProductFilter};

#[cfg(test)]
pub mod memory;
mod postgres;

pub use postgres::PgProductStore;

/// Authoritative storage for products. Implementations assign ids and must
/// never hand out the same id twice.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Inserts the product's fields (its `id` is ignored) and returns the new id.
    async fn insert(&self, product: &Product) -> AppResult<i32>;

    /// Overwrites the row with `id`. Returns `false` when no such row exists.
    async fn update(&self, id: i32, product: &Product) -> AppResult<bool>;

    /// Removes the row with `id`; absent rows are not an error.
    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn find(&self, id: i32) -> AppResult<Option<Product>>;

    /// Matching products ordered by id.
    async fn list(&self, filter: &ProductFilter) -> AppResult<Vec<Product>>;
}
