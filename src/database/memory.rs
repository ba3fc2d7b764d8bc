use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    database::ProductStore,
    error::{AppError, Result},
    models::{NewProduct, Product},
};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Product>,
}

/// In-process store keyed by id. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: Mutex<Inner>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        Ok(self.inner.lock().await.rows.get(&id).cloned())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.values().any(|p| p.name == name))
    }

    async fn find_by_name_containing(&self, name: &str) -> Result<Vec<Product>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .rows
            .values()
            .filter(|p| p.name.contains(name))
            .cloned()
            .collect())
    }

    async fn insert(&self, product: NewProduct) -> Result<Product> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let product = product.with_id(inner.next_id);
        inner.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn save(&self, product: Product) -> Result<Product> {
        let mut inner = self.inner.lock().await;
        match inner.rows.get_mut(&product.id) {
            Some(row) => {
                *row = product.clone();
                Ok(product)
            }
            None => Err(AppError::DatabaseError(sqlx::Error::RowNotFound)),
        }
    }

    async fn delete(&self, product: &Product) -> Result<()> {
        self.inner.lock().await.rows.remove(&product.id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.inner.lock().await.rows.clear();
        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.inner.lock().await.rows.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductDraft;

    fn new_product(name: &str) -> NewProduct {
        NewProduct::from_draft(ProductDraft {
            name: name.to_string(),
            price: 100,
            description: None,
            stock: 1,
        })
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = MemoryProductStore::new();
        let first = store.insert(new_product("a")).await.unwrap();
        let second = store.insert(new_product("b")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete_all() {
        let store = MemoryProductStore::new();
        store.insert(new_product("a")).await.unwrap();
        store.delete_all().await.unwrap();

        let next = store.insert(new_product("b")).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn name_search_is_case_sensitive_substring() {
        let store = MemoryProductStore::new();
        store.insert(new_product("Gaming Laptop")).await.unwrap();
        store.insert(new_product("laptop stand")).await.unwrap();
        store.insert(new_product("Mouse")).await.unwrap();

        let found = store.find_by_name_containing("aptop").await.unwrap();
        assert_eq!(found.len(), 2);

        let found = store.find_by_name_containing("Laptop").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Gaming Laptop");
    }

    #[tokio::test]
    async fn saving_unknown_record_fails() {
        let store = MemoryProductStore::new();
        let ghost = new_product("ghost").with_id(42);

        let err = store.save(ghost).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(sqlx::Error::RowNotFound)));
    }
}
