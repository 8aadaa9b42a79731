//! Category routes.

use actix_web::{web, HttpResponse};

use ct_core::domain::NewCategory;
use ct_core::errors::AppError;
use ct_core::pagination::resolve_page_params;
use ct_core::validation;

use crate::dto::categories::{CategoryListResponse, CategoryPayload};
use crate::dto::{PageQuery, SearchQuery};
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/search", web::get().to(search))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete))
            .route("/{id}/name", web::patch().to(update_name)),
    );
}

async fn list(state: web::Data<AppState>, query: web::Query<PageQuery>) -> Result<HttpResponse> {
    let params = resolve_page_params(query.page.as_deref(), query.limit.as_deref())?;
    let result = state.categories.list(params).await?;

    if result.is_empty() {
        return Err(AppError::not_found("No categories found").into());
    }
    Ok(HttpResponse::Ok().json(CategoryListResponse::new(params.page, result)))
}

async fn search(state: web::Data<AppState>, query: web::Query<SearchQuery>) -> Result<HttpResponse> {
    let name = validation::validate_name(query.name.as_deref(), "name")?;
    let params = resolve_page_params(query.page.as_deref(), query.limit.as_deref())?;
    let result = state.categories.search_by_name(&name, params).await?;

    if result.is_empty() {
        return Err(AppError::not_found(format!("No categories found with name: {name}")).into());
    }
    Ok(HttpResponse::Ok().json(CategoryListResponse::new(params.page, result)))
}

async fn get_by_id(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    let category = state
        .categories
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No category found with id: {id}")))?;

    Ok(HttpResponse::Ok().json(category))
}

async fn create(
    state: web::Data<AppState>,
    body: web::Json<CategoryPayload>,
) -> Result<HttpResponse> {
    let name = validation::validate_name(body.name.as_deref(), "name")?;
    let category = state.categories.create(NewCategory { name }).await?;
    Ok(HttpResponse::Created().json(category))
}

async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CategoryPayload>,
) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    let name = validation::validate_name(body.name.as_deref(), "name")?;
    let category = state
        .categories
        .update(id, NewCategory { name })
        .await?
        .ok_or_else(|| AppError::not_found(format!("No category found with id: {id}")))?;

    Ok(HttpResponse::Ok().json(category))
}

async fn update_name(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CategoryPayload>,
) -> Result<HttpResponse> {
    // A category is just a named row, so the single-field patch and the
    // full update coincide.
    update(state, path, body).await
}

async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    state
        .categories
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No category found with id: {id}")))?;

    Ok(HttpResponse::NoContent().finish())
}
