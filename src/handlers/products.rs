use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    handlers::{
        extract::{ApiPath, ApiQuery},
        guard::{check_content_type, JSON_MEDIA_TYPE},
    },
    models::{Product, ProductFilter, ProductQuery},
    AppState,
};

fn parse_body(body: &Bytes) -> AppResult<Value> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
}

/// Absolute URL of a product when the request named its host, else the path.
fn product_location(headers: &HeaderMap, id: i32) -> String {
    let path = format!("/products/{id}");
    match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) if !host.is_empty() => format!("http://{host}{path}"),
        _ => path,
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product with id {id} was not found"))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Value>)> {
    info!("Request to create a product");
    check_content_type(&headers, JSON_MEDIA_TYPE)?;

    let data = parse_body(&body)?;
    debug!(payload = %data, "Processing");

    let mut product = Product::new();
    product.deserialize(&data)?;
    product.create(state.store.as_ref()).await?;

    let id = product
        .id
        .ok_or_else(|| AppError::Internal("store did not assign an id".to_string()))?;
    info!(id, name = %product.name, category = %product.category, "Created product");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, product_location(&headers, id))],
        Json(product.serialize()),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<(StatusCode, Json<Value>)> {
    info!(id, "Request to read a product");

    let product = Product::find(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok((StatusCode::OK, Json(product.serialize())))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Value>)> {
    info!(id, "Request to update a product");
    check_content_type(&headers, JSON_MEDIA_TYPE)?;

    let store = state.store.as_ref();
    let mut product = Product::find(store, id).await?.ok_or_else(|| not_found(id))?;

    let data = parse_body(&body)?;
    debug!(payload = %data, "Processing");
    product.deserialize(&data)?;
    product.update(store).await?;

    info!(id, category = %product.category, "Updated product");
    Ok((StatusCode::OK, Json(product.serialize())))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    info!(id, "Request to delete a product");

    let store = state.store.as_ref();
    match Product::find(store, id).await? {
        Some(product) => {
            product.delete(store).await?;
            info!(id, "Deleted product");
        }
        None => debug!(id, "Product already absent"),
    }

    Ok(StatusCode::NO_CONTENT)
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProductQuery>,
) -> AppResult<(StatusCode, Json<Vec<Value>>)> {
    let filter = query.to_filter()?;
    info!(?filter, "Request to list products");

    let store = state.store.as_ref();
    let products = match &filter {
        ProductFilter::All => Product::all(store).await?,
        ProductFilter::Name(name) => Product::find_by_name(store, name).await?,
        ProductFilter::Category(category) => Product::find_by_category(store, *category).await?,
        ProductFilter::Available(flag) => Product::find_by_availability(store, *flag).await?,
    };

    info!(count = products.len(), "Listed products");

    Ok((
        StatusCode::OK,
        Json(products.iter().map(Product::serialize).collect()),
    ))
}
