//! End-to-end tests for the category endpoints.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use common::{category, spawn, TestRepos};

#[actix_web::test]
async fn listing_uses_the_category_envelope() {
    let repos = TestRepos::new();
    repos
        .categories
        .seed(vec![category(1, "Tea"), category(2, "Coffee")])
        .await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get().uri("/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalCategories"], 2);
    assert_eq!(body["categoriesShown"], 2);
    assert_eq!(body["categories"][1]["name"], "Coffee");
}

#[actix_web::test]
async fn create_and_duplicate_name() {
    let repos = TestRepos::new();
    let app = spawn(&repos).await;

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Tea" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Tea" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["errorCode"], "23505");
}

#[actix_web::test]
async fn patch_name_renames_the_category() {
    let repos = TestRepos::new();
    repos.categories.seed(vec![category(1, "Tea")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::patch()
        .uri("/categories/1/name")
        .set_json(json!({ "name": "Herbal tea" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Herbal tea");
}

#[actix_web::test]
async fn search_without_hits_is_404() {
    let repos = TestRepos::new();
    repos.categories.seed(vec![category(1, "Tea")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::get()
        .uri("/categories/search?name=fisk")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_category_is_204_and_missing_is_404() {
    let repos = TestRepos::new();
    repos.categories.seed(vec![category(1, "Tea")]).await;
    let app = spawn(&repos).await;

    let req = test::TestRequest::delete().uri("/categories/1").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri("/categories/1").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_body_is_rendered_through_the_translator() {
    let repos = TestRepos::new();
    let app = spawn(&repos).await;

    let req = test::TestRequest::post()
        .uri("/categories")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["message"], "Invalid request body");
}
