use sqlx::PgPool;

use crate::{
    error::Result,
    models::{NewProduct, Product},
};

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn exists_by_name(pool: &PgPool, name: &str) -> Result<bool> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE name = $1)")
            .bind(name)
            .fetch_one(pool)
            .await?;

    Ok(exists)
}

pub async fn find_by_name_containing(pool: &PgPool, name: &str) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        r#"SELECT * FROM products WHERE name LIKE $1 ESCAPE '\' ORDER BY id ASC"#,
    )
    .bind(format!("%{}%", escape_like(name)))
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn insert(pool: &PgPool, product: &NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (name, price, description, stock, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&product.name)
    .bind(product.price)
    .bind(&product.description)
    .bind(product.stock)
    .bind(product.created_at)
    .bind(product.updated_at)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

pub async fn update(pool: &PgPool, product: &Product) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET
            name = $1,
            price = $2,
            description = $3,
            stock = $4,
            updated_at = $5
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(&product.name)
    .bind(product.price)
    .bind(&product.description)
    .bind(product.stock)
    .bind(product.updated_at)
    .bind(product.id)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete_all(pool: &PgPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products").execute(pool).await?;

    Ok(result.rows_affected())
}

pub async fn count(pool: &PgPool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Escapes `LIKE` wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
