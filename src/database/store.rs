use async_trait::async_trait;

use crate::{
    error::Result,
    models::{NewProduct, Product},
};

/// Persistence boundary for products.
///
/// Absence is not an error: `find_by_id` returns `None` and
/// `find_by_name_containing` may return an empty list. Every store failure
/// surfaces as an `Err` and is left to the caller to classify.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;

    async fn exists_by_name(&self, name: &str) -> Result<bool>;

    /// Case-sensitive substring match on `name`, ordered by id.
    async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Product>>;

    /// Persists a new record and returns it with its assigned id.
    async fn insert(&self, product: NewProduct) -> Result<Product>;

    /// Writes every field of an existing record back to the store.
    async fn save(&self, product: Product) -> Result<Product>;

    async fn delete(&self, product: &Product) -> Result<()>;

    async fn delete_all(&self) -> Result<()>;

    async fn count(&self) -> Result<i64>;

    async fn check_health(&self) -> Result<()> {
        Ok(())
    }
}
