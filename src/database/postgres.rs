use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    database::{self, ProductStore},
    error::Result,
    models::{NewProduct, Product},
    queries::product_queries,
};

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        product_queries::find_by_id(&self.pool, id).await
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        product_queries::exists_by_name(&self.pool, name).await
    }

    async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Product>> {
        product_queries::find_by_name_containing(&self.pool, name).await
    }

    async fn insert(&self, product: NewProduct) -> Result<Product> {
        product_queries::insert(&self.pool, &product).await
    }

    async fn save(&self, product: Product) -> Result<Product> {
        product_queries::update(&self.pool, &product).await
    }

    async fn delete(&self, product: &Product) -> Result<()> {
        product_queries::delete(&self.pool, product.id).await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        product_queries::delete_all(&self.pool).await?;
        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        product_queries::count(&self.pool).await
    }

    async fn check_health(&self) -> Result<()> {
        database::check_health(&self.pool).await
    }
}
