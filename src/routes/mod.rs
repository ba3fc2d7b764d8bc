mod health;
mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest("/api/products", product_routes())
}

fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(products::create_product).delete(products::delete_all_products),
        )
        .route("/bulk", post(products::bulk_create_product))
        .route("/search", get(products::search_products))
        .route(
            "/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/{id}/stock", put(products::update_product_stock))
}
