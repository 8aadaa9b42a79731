//! End-to-end tests for the supplier endpoints.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use common::{product, spawn, supplier, TestRepos};

fn valid_payload(name: &str) -> Value {
    json!({
        "name": name,
        "contact_person_firstname": "Anna",
        "contact_person_secondname": "Berg",
        "email": "anna@example.se",
        "phonenumber": "+46701234567",
        "country": "Sweden",
    })
}

#[actix_web::test]
async fn listing_uses_the_supplier_envelope() {
    let repos = TestRepos::new();
    repos
        .suppliers
        .seed(vec![supplier(1, "Norrland AB"), supplier(2, "Skåne HB")])
        .await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get().uri("/suppliers").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalSuppliers"], 2);
    assert_eq!(body["suppliersShown"], 2);
    assert_eq!(body["page"], 1);
    assert_eq!(body["suppliers"][0]["name"], "Norrland AB");
}

#[actix_web::test]
async fn empty_supplier_list_is_404() {
    let repos = TestRepos::new();
    let app = spawn(&repos).await;

    let req = test::TestRequest::get().uri("/suppliers").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn get_by_id_includes_the_product_count() {
    let repos = TestRepos::new();
    repos.suppliers.seed(vec![supplier(1, "Norrland AB")]).await;
    repos
        .suppliers
        .seed_products(vec![product(1, "Grönt te"), product(2, "Svart te")])
        .await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get().uri("/suppliers/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Norrland AB");
    assert_eq!(body["product_count"], 2);
}

#[actix_web::test]
async fn duplicate_name_surfaces_as_a_unique_violation() {
    let repos = TestRepos::new();
    let app = spawn(&repos).await;

    let req = test::TestRequest::post()
        .uri("/suppliers")
        .set_json(valid_payload("Norrland AB"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/suppliers")
        .set_json(valid_payload("Norrland AB"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["statusCode"], 500);
    assert_eq!(body["errorCode"], "23505");
    assert_eq!(body["message"], "duplicate key value violates unique constraint");
}

#[actix_web::test]
async fn create_rejects_bad_email_and_phone() {
    let repos = TestRepos::new();
    let app = spawn(&repos).await;

    let mut payload = valid_payload("Norrland AB");
    payload["email"] = json!("not-an-email");
    let req = test::TestRequest::post()
        .uri("/suppliers")
        .set_json(&payload)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Invalid email format");

    let mut payload = valid_payload("Norrland AB");
    payload["phonenumber"] = json!("0701234567");
    let req = test::TestRequest::post()
        .uri("/suppliers")
        .set_json(&payload)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Invalid phone number format");
}

#[actix_web::test]
async fn patch_country_updates_a_single_field() {
    let repos = TestRepos::new();
    repos.suppliers.seed(vec![supplier(1, "Norrland AB")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::patch()
        .uri("/suppliers/1/country")
        .set_json(json!({ "country": "Norway" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["country"], "Norway");
    assert_eq!(body["name"], "Norrland AB");
}

#[actix_web::test]
async fn supplier_products_returns_the_headed_envelope() {
    let repos = TestRepos::new();
    repos.suppliers.seed(vec![supplier(1, "Norrland AB")]).await;
    repos
        .suppliers
        .seed_products(vec![
            product(1, "Grönt te"),
            product(2, "Svart te"),
            product(3, "Kaffe"),
        ])
        .await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get()
        .uri("/suppliers/1/products?page=1&limit=2")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["supplier"], "Norrland AB");
    assert_eq!(body["totalProducts"], 3);
    assert_eq!(body["productsShown"], 2);
    assert_eq!(body["page"], 1);
}

#[actix_web::test]
async fn supplier_without_products_is_404_on_the_nested_listing() {
    let repos = TestRepos::new();
    repos.suppliers.seed(vec![supplier(1, "Norrland AB")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get()
        .uri("/suppliers/1/products")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "No products found for the supplier");
}

#[actix_web::test]
async fn delete_supplier_is_204() {
    let repos = TestRepos::new();
    repos.suppliers.seed(vec![supplier(1, "Norrland AB")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::delete().uri("/suppliers/1").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri("/suppliers/1").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
