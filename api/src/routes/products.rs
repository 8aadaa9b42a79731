//! Product routes.
//!
//! Every handler validates its raw inputs through the core validators
//! before touching the repository, and returns `Result` so the translator
//! renders all failures. An empty result page is a 404, matching the
//! list-or-nothing contract of the read endpoints.

use actix_web::{web, HttpResponse};

use ct_core::domain::NewProduct;
use ct_core::errors::AppError;
use ct_core::pagination::resolve_page_params;
use ct_core::validation;

use crate::dto::products::{
    ProductListResponse, ProductNamePayload, ProductPayload, ProductStockPayload,
};
use crate::dto::{PageQuery, SearchQuery};
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/search", web::get().to(search))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete))
            .route("/{id}/name", web::patch().to(update_name))
            .route("/{id}/stock_quantity", web::patch().to(update_stock)),
    );
}

async fn list(state: web::Data<AppState>, query: web::Query<PageQuery>) -> Result<HttpResponse> {
    let params = resolve_page_params(query.page.as_deref(), query.limit.as_deref())?;
    let result = state.products.list(params).await?;

    if result.is_empty() {
        return Err(AppError::not_found("No products found").into());
    }
    Ok(HttpResponse::Ok().json(ProductListResponse::new(params.page, result)))
}

async fn search(state: web::Data<AppState>, query: web::Query<SearchQuery>) -> Result<HttpResponse> {
    let name = validation::validate_name(query.name.as_deref(), "name")?;
    let params = resolve_page_params(query.page.as_deref(), query.limit.as_deref())?;
    let result = state.products.search_by_name(&name, params).await?;

    if result.is_empty() {
        return Err(AppError::not_found(format!("No products found with name: {name}")).into());
    }
    Ok(HttpResponse::Ok().json(ProductListResponse::new(params.page, result)))
}

async fn get_by_id(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    let product = state
        .products
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No product found with id: {id}")))?;

    Ok(HttpResponse::Ok().json(product))
}

async fn create(
    state: web::Data<AppState>,
    body: web::Json<ProductPayload>,
) -> Result<HttpResponse> {
    let new = validate_payload(&body)?;
    let product = state.products.create(new).await?;
    Ok(HttpResponse::Created().json(product))
}

async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ProductPayload>,
) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    let new = validate_payload(&body)?;
    let product = state
        .products
        .update(id, new)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No product found with id: {id}")))?;

    Ok(HttpResponse::Ok().json(product))
}

async fn update_name(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ProductNamePayload>,
) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    let name = validation::validate_name(body.name.as_deref(), "name")?;
    let product = state
        .products
        .update_name(id, &name)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No product found with id: {id}")))?;

    Ok(HttpResponse::Ok().json(product))
}

async fn update_stock(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ProductStockPayload>,
) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    // 0 is a legal stock level; only absence is rejected.
    let stock_quantity = validation::require_integer(body.stock_quantity, "stock_quantity")?;
    let product = state
        .products
        .update_stock_quantity(id, stock_quantity)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No product found with id: {id}")))?;

    Ok(HttpResponse::Ok().json(product))
}

async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    state
        .products
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No product found with id: {id}")))?;

    Ok(HttpResponse::NoContent().finish())
}

fn validate_payload(body: &ProductPayload) -> Result<NewProduct> {
    Ok(NewProduct {
        name: validation::validate_name(body.name.as_deref(), "name")?,
        stock_quantity: validation::require_integer(body.stock_quantity, "stock_quantity")?,
        price: validation::require_integer(body.price, "price")?,
        category_id: validation::require_integer(body.category_id, "category_id")?,
        supplier_id: validation::require_integer(body.supplier_id, "supplier_id")?,
    })
}
