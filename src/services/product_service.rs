use std::sync::Arc;

use crate::{
    database::ProductStore,
    error::{AppError, Result},
    models::{NewProduct, Product, ProductDraft, ProductResponse, StockUpdate},
};

/// Business rules for the product catalog.
///
/// Only `bulk_create` and `delete_all` reclassify failures: anything that goes
/// wrong inside them becomes `AppError::Internal`. Every other operation
/// returns `Duplicate`/`NotFound` for rule violations and passes store
/// failures through untouched.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn check_health(&self) -> Result<()> {
        self.store.check_health().await
    }

    pub async fn create(&self, draft: ProductDraft) -> Result<ProductResponse> {
        let product = self.insert_unique(draft).await?;
        tracing::info!("Product created: {}", product.id);
        Ok(product.into())
    }

    pub async fn bulk_create(&self, draft: ProductDraft) -> Result<ProductResponse> {
        match self.insert_unique(draft).await {
            Ok(product) => {
                tracing::info!("Bulk product created: {}", product.id);
                Ok(product.into())
            }
            Err(e) => {
                tracing::error!("Bulk product creation failed: {}", e);
                Err(AppError::Internal(
                    "Failed to create product in bulk operation".to_string(),
                ))
            }
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ProductResponse> {
        Ok(self.find_existing(id).await?.into())
    }

    pub async fn search_by_name(&self, name: &str) -> Result<Vec<ProductResponse>> {
        let products = self.store.find_by_name_containing(name).await?;
        if products.is_empty() {
            return Err(AppError::NotFound(format!(
                "No products found with name containing: {}",
                name
            )));
        }

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// Replaces every mutable field. The new name is not checked against
    /// other products.
    pub async fn update(&self, id: i64, draft: ProductDraft) -> Result<ProductResponse> {
        let mut product = self.find_existing(id).await?;
        product.apply_update(draft);

        let product = self.store.save(product).await?;
        tracing::info!("Product updated: {}", product.id);
        Ok(product.into())
    }

    pub async fn update_stock(&self, id: i64, update: StockUpdate) -> Result<ProductResponse> {
        let mut product = self.find_existing(id).await?;
        product.set_stock(update.stock);

        let product = self.store.save(product).await?;
        tracing::info!("Product stock updated: {}", product.id);
        Ok(product.into())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let product = self.find_existing(id).await?;
        self.store.delete(&product).await?;
        tracing::info!("Product deleted: {}", id);
        Ok(())
    }

    pub async fn delete_all(&self) -> Result<()> {
        let result = async {
            let count = self.store.count().await?;
            self.store.delete_all().await?;
            Ok::<_, AppError>(count)
        }
        .await;

        match result {
            Ok(count) => {
                tracing::info!("All products deleted. Count: {}", count);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Deleting all products failed: {}", e);
                Err(AppError::Internal("Failed to delete all products".to_string()))
            }
        }
    }

    async fn insert_unique(&self, draft: ProductDraft) -> Result<Product> {
        if self.store.exists_by_name(&draft.name).await? {
            return Err(AppError::Duplicate(format!(
                "Product with name '{}' already exists",
                draft.name
            )));
        }

        self.store.insert(NewProduct::from_draft(draft)).await
    }

    async fn find_existing(&self, id: i64) -> Result<Product> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product not found with id: {}", id)))
    }
}
