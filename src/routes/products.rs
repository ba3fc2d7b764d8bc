use axum::{Json, extract::State};
use http::StatusCode;

use crate::{
    AppState,
    error::Result,
    models::{
        ApiResponse, ProductCreateRequest, ProductResponse, ProductStockUpdateRequest,
        ProductUpdateRequest, SearchQuery, Validate,
    },
    utils::extractors::{AppJson, AppPath, AppQuery},
};

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProductCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponse>>)> {
    let product = state.products.create(payload.validate()?).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(product, "Product created successfully")),
    ))
}

pub async fn bulk_create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProductCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponse>>)> {
    let product = state.products.bulk_create(payload.validate()?).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            product,
            "Product created in bulk successfully",
        )),
    ))
}

pub async fn get_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<ProductResponse>>> {
    let product = state.products.get_by_id(id).await?;

    Ok(Json(ApiResponse::success(product)))
}

pub async fn search_products(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<ProductResponse>>>> {
    let products = state.products.search_by_name(&params.name).await?;

    Ok(Json(ApiResponse::with_message(products, "Products found")))
}

pub async fn update_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<ProductUpdateRequest>,
) -> Result<Json<ApiResponse<ProductResponse>>> {
    let product = state.products.update(id, payload.validate()?).await?;

    Ok(Json(ApiResponse::with_message(
        product,
        "Product updated successfully",
    )))
}

pub async fn update_product_stock(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<ProductStockUpdateRequest>,
) -> Result<Json<ApiResponse<ProductResponse>>> {
    let product = state.products.update_stock(id, payload.validate()?).await?;

    Ok(Json(ApiResponse::with_message(
        product,
        "Product stock updated successfully",
    )))
}

pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode> {
    state.products.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all_products(State(state): State<AppState>) -> Result<StatusCode> {
    state.products.delete_all().await?;

    Ok(StatusCode::NO_CONTENT)
}
