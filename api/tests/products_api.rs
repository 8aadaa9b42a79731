//! End-to-end tests for the product endpoints.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use common::{product, spawn, TestRepos};

#[actix_web::test]
async fn listing_pages_and_counts_independently() {
    let repos = TestRepos::new();
    repos
        .products
        .seed((1..=5).map(|i| product(i, &format!("Produkt {i}"))).collect())
        .await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get()
        .uri("/products?page=1&limit=2")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["totalProducts"], 5);
    assert_eq!(body["productsShown"], 2);
    assert_eq!(body["page"], 1);
    assert_eq!(body["products"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn listing_uses_defaults_when_query_is_absent() {
    let repos = TestRepos::new();
    repos
        .products
        .seed((1..=5).map(|i| product(i, &format!("Produkt {i}"))).collect())
        .await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get().uri("/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["productsShown"], 3);
}

#[actix_web::test]
async fn empty_catalog_is_404() {
    let repos = TestRepos::new();
    let app = spawn(&repos).await;

    let req = test::TestRequest::get().uri("/products").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["message"], "No products found");
}

#[actix_web::test]
async fn page_past_the_end_is_404() {
    let repos = TestRepos::new();
    repos.products.seed(vec![product(1, "Te")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get()
        .uri("/products?page=99&limit=5")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_page_is_400() {
    let repos = TestRepos::new();
    repos.products.seed(vec![product(1, "Te")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get().uri("/products?page=abc").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["details"]["parameter"], "page");
    assert!(body["details"]["reason"]
        .as_str()
        .unwrap()
        .contains("not a number"));
}

#[actix_web::test]
async fn zero_and_negative_page_are_rejected() {
    let repos = TestRepos::new();
    repos.products.seed(vec![product(1, "Te")]).await;
    let app = spawn(&repos).await;

    for uri in ["/products?page=0", "/products?limit=-1"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_web::test]
async fn astronomically_large_page_and_limit_are_400_not_500() {
    let repos = TestRepos::new();
    repos.products.seed(vec![product(1, "Te")]).await;
    let app = spawn(&repos).await;

    let uri = format!("/products?page={max}&limit={max}", max = i64::MAX);
    let req = test::TestRequest::get().uri(&uri).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["parameter"], "page");
}

#[actix_web::test]
async fn get_by_id_returns_the_joined_projection() {
    let repos = TestRepos::new();
    repos.products.seed(vec![product(1, "Grönt te")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get().uri("/products/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Grönt te");
    assert_eq!(body["category"], "Tea");
    assert_eq!(body["supplier"], "Norrland AB");
}

#[actix_web::test]
async fn missing_id_is_404_and_malformed_id_is_400() {
    let repos = TestRepos::new();
    repos.products.seed(vec![product(1, "Te")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get().uri("/products/9999").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/products/abc").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn create_returns_201_with_joined_names() {
    let repos = TestRepos::new();
    repos.products.add_category(1, "Tea").await;
    repos.products.add_supplier(1, "Norrland AB").await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({
            "name": "Grönt te",
            "stock_quantity": 12,
            "price": 59,
            "category_id": 1,
            "supplier_id": 1,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["name"], "Grönt te");
    assert_eq!(body["category"], "Tea");
    assert_eq!(body["supplier"], "Norrland AB");
}

#[actix_web::test]
async fn create_with_zero_stock_is_valid() {
    let repos = TestRepos::new();
    repos.products.add_category(1, "Tea").await;
    repos.products.add_supplier(1, "Norrland AB").await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({
            "name": "Slut te",
            "stock_quantity": 0,
            "price": 10,
            "category_id": 1,
            "supplier_id": 1,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn create_without_stock_quantity_is_400() {
    let repos = TestRepos::new();
    let app = spawn(&repos).await;

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({
            "name": "Te",
            "price": 10,
            "category_id": 1,
            "supplier_id": 1,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["parameter"], "stock_quantity");
}

#[actix_web::test]
async fn create_with_missing_category_is_a_foreign_key_violation() {
    let repos = TestRepos::new();
    repos.products.add_supplier(1, "Norrland AB").await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({
            "name": "Te",
            "stock_quantity": 1,
            "price": 10,
            "category_id": 42,
            "supplier_id": 1,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["errorCode"], "23503");
    assert_eq!(
        body["message"],
        "Insert or update on table violates foreign key constraint"
    );
}

#[actix_web::test]
async fn patch_stock_to_zero_succeeds() {
    let repos = TestRepos::new();
    repos.products.seed(vec![product(1, "Te")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::patch()
        .uri("/products/1/stock_quantity")
        .set_json(json!({ "stock_quantity": 0 }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["stock_quantity"], 0);
}

#[actix_web::test]
async fn patch_name_validates_the_new_name() {
    let repos = TestRepos::new();
    repos.products.seed(vec![product(1, "Te")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::patch()
        .uri("/products/1/name")
        .set_json(json!({ "name": "Te 2000" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Invalid string");
}

#[actix_web::test]
async fn delete_is_204_and_idempotent_miss_is_404() {
    let repos = TestRepos::new();
    repos.products.seed(vec![product(1, "Te")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::delete().uri("/products/1").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri("/products/1").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn search_matches_substrings_case_insensitively() {
    let repos = TestRepos::new();
    repos
        .products
        .seed(vec![
            product(1, "Grönt te"),
            product(2, "Svart te"),
            product(3, "Kaffe"),
        ])
        .await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get()
        .uri("/products/search?name=TE")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalProducts"], 2);
}

#[actix_web::test]
async fn search_with_no_hits_is_404_and_bad_name_is_400() {
    let repos = TestRepos::new();
    repos.products.seed(vec![product(1, "Te")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get()
        .uri("/products/search?name=saffran")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/products/search?name=abc123")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn unknown_route_gets_the_fallback_envelope() {
    let repos = TestRepos::new();
    let app = spawn(&repos).await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "The requested resource was not found");
}
