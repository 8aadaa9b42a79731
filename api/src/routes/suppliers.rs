//! Supplier routes, including the nested per-supplier product listing.

use actix_web::{web, HttpResponse};

use ct_core::domain::NewSupplier;
use ct_core::errors::AppError;
use ct_core::pagination::resolve_page_params;
use ct_core::validation;

use crate::dto::suppliers::{
    SupplierCountryPayload, SupplierListResponse, SupplierNamePayload, SupplierPayload,
    SupplierProductsResponse,
};
use crate::dto::{PageQuery, SearchQuery};
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/suppliers")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/search", web::get().to(search))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete))
            .route("/{id}/name", web::patch().to(update_name))
            .route("/{id}/country", web::patch().to(update_country))
            .route("/{id}/products", web::get().to(products)),
    );
}

async fn list(state: web::Data<AppState>, query: web::Query<PageQuery>) -> Result<HttpResponse> {
    let params = resolve_page_params(query.page.as_deref(), query.limit.as_deref())?;
    let result = state.suppliers.list(params).await?;

    if result.is_empty() {
        return Err(AppError::not_found("No suppliers found").into());
    }
    Ok(HttpResponse::Ok().json(SupplierListResponse::new(params.page, result)))
}

async fn search(state: web::Data<AppState>, query: web::Query<SearchQuery>) -> Result<HttpResponse> {
    let name = validation::validate_name(query.name.as_deref(), "name")?;
    let params = resolve_page_params(query.page.as_deref(), query.limit.as_deref())?;
    let result = state.suppliers.search_by_name(&name, params).await?;

    if result.is_empty() {
        return Err(AppError::not_found(format!("No suppliers found with name: {name}")).into());
    }
    Ok(HttpResponse::Ok().json(SupplierListResponse::new(params.page, result)))
}

async fn get_by_id(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    let details = state
        .suppliers
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No supplier found with id: {id}")))?;

    Ok(HttpResponse::Ok().json(details))
}

async fn create(
    state: web::Data<AppState>,
    body: web::Json<SupplierPayload>,
) -> Result<HttpResponse> {
    let new = validate_payload(&body)?;
    let supplier = state.suppliers.create(new).await?;
    Ok(HttpResponse::Created().json(supplier))
}

async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<SupplierPayload>,
) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    let new = validate_payload(&body)?;
    let supplier = state
        .suppliers
        .update(id, new)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No supplier found with id: {id}")))?;

    Ok(HttpResponse::Ok().json(supplier))
}

async fn update_name(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<SupplierNamePayload>,
) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    let name = validation::validate_name(body.name.as_deref(), "name")?;
    let supplier = state
        .suppliers
        .update_name(id, &name)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No supplier found with id: {id}")))?;

    Ok(HttpResponse::Ok().json(supplier))
}

async fn update_country(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<SupplierCountryPayload>,
) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    let country = validation::validate_name(body.country.as_deref(), "country")?;
    let supplier = state
        .suppliers
        .update_country(id, &country)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No supplier found with id: {id}")))?;

    Ok(HttpResponse::Ok().json(supplier))
}

async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    state
        .suppliers
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No supplier found with id: {id}")))?;

    Ok(HttpResponse::NoContent().finish())
}

async fn products(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse> {
    let id = validation::parse_integer(Some(path.as_str()), "id")?;
    let params = resolve_page_params(query.page.as_deref(), query.limit.as_deref())?;
    let result = state.suppliers.products(id, params).await?;

    if result.products.is_empty() {
        return Err(AppError::not_found("No products found for the supplier").into());
    }
    Ok(HttpResponse::Ok().json(SupplierProductsResponse::new(params.page, result)))
}

fn validate_payload(body: &SupplierPayload) -> Result<NewSupplier> {
    Ok(NewSupplier {
        name: validation::validate_name(body.name.as_deref(), "name")?,
        contact_person_firstname: validation::validate_name(
            body.contact_person_firstname.as_deref(),
            "contact_person_firstname",
        )?,
        contact_person_secondname: validation::validate_name(
            body.contact_person_secondname.as_deref(),
            "contact_person_secondname",
        )?,
        email: validation::validate_email(body.email.as_deref(), "email")?,
        phonenumber: validation::validate_phone(body.phonenumber.as_deref(), "phonenumber")?,
        country: validation::validate_name(body.country.as_deref(), "country")?,
    })
}
