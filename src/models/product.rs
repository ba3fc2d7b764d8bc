use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i32,
    pub description: Option<String>,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product that has not been persisted yet. The store assigns its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: i32,
    pub description: Option<String>,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated set of mutable product fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: i32,
    pub description: Option<String>,
    pub stock: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockUpdate {
    pub stock: i32,
}

impl NewProduct {
    pub fn from_draft(draft: ProductDraft) -> Self {
        let now = Utc::now();
        Self {
            name: draft.name,
            price: draft.price,
            description: draft.description,
            stock: draft.stock,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            stock: self.stock,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Product {
    pub fn apply_update(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.description = draft.description;
        self.stock = draft.stock;
        self.touch();
    }

    pub fn set_stock(&mut self, stock: i32) {
        self.stock = stock;
        self.touch();
    }

    // Postgres keeps microseconds, so a clock reading inside the same
    // microsecond as the stored value is bumped forward.
    fn touch(&mut self) {
        let now = Utc::now();
        let floor = self.updated_at.max(self.created_at) + Duration::microseconds(1);
        self.updated_at = now.max(floor);
    }
}
