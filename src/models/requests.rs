use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    models::{ProductDraft, StockUpdate},
};

/// Matches the `products.name` column width.
pub const MAX_NAME_CHARS: usize = 255;

/// Shape checks applied to a request body before it reaches the service.
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output>;
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductCreateRequest {
    pub name: Option<String>,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub stock: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductUpdateRequest {
    pub name: Option<String>,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub stock: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductStockUpdateRequest {
    pub stock: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: String,
}

impl Validate for ProductCreateRequest {
    type Output = ProductDraft;

    fn validate(self) -> Result<ProductDraft> {
        draft(self.name, self.price, self.description, self.stock)
    }
}

impl Validate for ProductUpdateRequest {
    type Output = ProductDraft;

    fn validate(self) -> Result<ProductDraft> {
        draft(self.name, self.price, self.description, self.stock)
    }
}

impl Validate for ProductStockUpdateRequest {
    type Output = StockUpdate;

    fn validate(self) -> Result<StockUpdate> {
        Ok(StockUpdate {
            stock: non_negative(self.stock, "Stock")?,
        })
    }
}

fn draft(
    name: Option<String>,
    price: Option<i32>,
    description: Option<String>,
    stock: Option<i32>,
) -> Result<ProductDraft> {
    let name = name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Product name is required".to_string()))?;

    if name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::BadRequest(format!(
            "Product name must be at most {} characters",
            MAX_NAME_CHARS
        )));
    }

    Ok(ProductDraft {
        name,
        price: non_negative(price, "Price")?,
        description,
        stock: non_negative(stock, "Stock")?,
    })
}

fn non_negative(value: Option<i32>, field: &str) -> Result<i32> {
    match value {
        None => Err(AppError::BadRequest(format!("{} is required", field))),
        Some(v) if v < 0 => Err(AppError::BadRequest(format!(
            "{} must be greater than or equal to 0",
            field
        ))),
        Some(v) => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: AppError) -> String {
        match err {
            AppError::BadRequest(msg) => msg,
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn valid_create_request_becomes_draft() {
        let draft = ProductCreateRequest {
            name: Some("노트북".to_string()),
            price: Some(1_500_000),
            description: None,
            stock: Some(10),
        }
        .validate()
        .unwrap();

        assert_eq!(draft.name, "노트북");
        assert_eq!(draft.price, 1_500_000);
        assert_eq!(draft.description, None);
        assert_eq!(draft.stock, 10);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = ProductCreateRequest {
            name: Some("   ".to_string()),
            price: Some(1),
            stock: Some(1),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        assert_eq!(message(err), "Product name is required");
    }

    #[test]
    fn name_longer_than_column_is_rejected() {
        let at_limit = ProductUpdateRequest {
            name: Some("가".repeat(MAX_NAME_CHARS)),
            price: Some(1),
            stock: Some(1),
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        let err = ProductCreateRequest {
            name: Some("a".repeat(MAX_NAME_CHARS + 1)),
            price: Some(1),
            stock: Some(1),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        assert_eq!(message(err), "Product name must be at most 255 characters");
    }

    #[test]
    fn missing_and_negative_numbers_are_rejected() {
        let err = ProductUpdateRequest {
            name: Some("pen".to_string()),
            stock: Some(1),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(message(err), "Price is required");

        let err = ProductUpdateRequest {
            name: Some("pen".to_string()),
            price: Some(0),
            stock: Some(-1),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(message(err), "Stock must be greater than or equal to 0");
    }

    #[test]
    fn stock_update_requires_non_negative_stock() {
        let err = ProductStockUpdateRequest { stock: None }.validate().unwrap_err();
        assert_eq!(message(err), "Stock is required");

        let update = ProductStockUpdateRequest { stock: Some(0) }.validate().unwrap();
        assert_eq!(update.stock, 0);
    }
}
