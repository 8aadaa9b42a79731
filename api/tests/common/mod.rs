//! Shared helpers for the HTTP integration tests.
//!
//! Tests run the real routing table and translator over the in-memory
//! mock repositories, so the full request pipeline is exercised without a
//! database.

#![allow(dead_code)]

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};

use ct_api::{app, AppState};
use ct_core::domain::{Category, Product, Supplier};
use ct_core::repositories::mock::{
    MockCategoryRepository, MockProductRepository, MockSupplierRepository,
};

pub struct TestRepos {
    pub products: Arc<MockProductRepository>,
    pub suppliers: Arc<MockSupplierRepository>,
    pub categories: Arc<MockCategoryRepository>,
}

impl TestRepos {
    pub fn new() -> Self {
        Self {
            products: Arc::new(MockProductRepository::new()),
            suppliers: Arc::new(MockSupplierRepository::new()),
            categories: Arc::new(MockCategoryRepository::new()),
        }
    }

    pub fn state(&self) -> AppState {
        AppState::new(
            self.products.clone(),
            self.suppliers.clone(),
            self.categories.clone(),
        )
    }
}

pub async fn spawn(
    repos: &TestRepos,
) -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(repos.state()))
            .app_data(app::json_config())
            .configure(app::configure_routes)
            .default_service(web::route().to(app::not_found)),
    )
    .await
}

pub fn product(id: i64, name: &str) -> Product {
    Product {
        product_id: id,
        name: name.to_string(),
        stock_quantity: 10,
        price: 100,
        category: Some("Tea".to_string()),
        supplier: "Norrland AB".to_string(),
    }
}

pub fn supplier(id: i64, name: &str) -> Supplier {
    Supplier {
        supplier_id: id,
        name: name.to_string(),
        contact_person_firstname: "Anna".to_string(),
        contact_person_secondname: "Berg".to_string(),
        email: "anna@example.se".to_string(),
        phonenumber: "+46701234567".to_string(),
        country: "Sweden".to_string(),
    }
}

pub fn category(id: i64, name: &str) -> Category {
    Category {
        category_id: id,
        name: name.to_string(),
    }
}
