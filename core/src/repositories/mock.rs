//! In-memory mock repositories for testing.
//!
//! The mocks honor the same contract as the PostgreSQL implementations,
//! including the store-shaped failures: creating a supplier or category
//! with a taken name yields a unique violation, and referencing a missing
//! category or supplier from a product yields a foreign-key violation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ct_shared::types::pagination::{Page, PageParams};

use crate::domain::{
    Category, NewCategory, NewProduct, NewSupplier, Product, Supplier, SupplierDetails,
    SupplierProducts,
};
use crate::errors::{
    AppError, AppResult, DatabaseError, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION,
};

use super::{CategoryRepository, ProductRepository, SupplierRepository};

fn page_of<T: Clone>(rows: Vec<T>, params: PageParams) -> Page<T> {
    let total = rows.len() as i64;
    let items = rows
        .into_iter()
        .skip(params.offset() as usize)
        .take(params.limit as usize)
        .collect();
    Page::new(total, items)
}

fn unique_violation(constraint: &str) -> AppError {
    AppError::Database(DatabaseError {
        code: Some(UNIQUE_VIOLATION.to_string()),
        message: format!("duplicate key value violates unique constraint \"{constraint}\""),
        constraint: Some(constraint.to_string()),
    })
}

fn foreign_key_violation(constraint: &str) -> AppError {
    AppError::Database(DatabaseError {
        code: Some(FOREIGN_KEY_VIOLATION.to_string()),
        message: format!("insert or update violates foreign key constraint \"{constraint}\""),
        constraint: Some(constraint.to_string()),
    })
}

fn next_id<T>(rows: &BTreeMap<i64, T>) -> i64 {
    rows.keys().next_back().copied().unwrap_or(0) + 1
}

/// Mock product repository backed by a sorted in-memory map.
///
/// Category and supplier names are looked up in seeded reference maps so
/// that created products carry joined names the way the SQL projection
/// does.
#[derive(Default)]
pub struct MockProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
    categories: Arc<RwLock<HashMap<i64, String>>>,
    suppliers: Arc<RwLock<HashMap<i64, String>>>,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing products
    pub async fn seed(&self, rows: Vec<Product>) {
        let mut products = self.products.write().await;
        for row in rows {
            products.insert(row.product_id, row);
        }
    }

    /// Register a category id/name pair for join lookups
    pub async fn add_category(&self, id: i64, name: impl Into<String>) {
        self.categories.write().await.insert(id, name.into());
    }

    /// Register a supplier id/name pair for join lookups
    pub async fn add_supplier(&self, id: i64, name: impl Into<String>) {
        self.suppliers.write().await.insert(id, name.into());
    }

    async fn joined_names(&self, new: &NewProduct) -> AppResult<(Option<String>, String)> {
        let category = self.categories.read().await.get(&new.category_id).cloned();
        if category.is_none() {
            return Err(foreign_key_violation("products_category_id_fkey"));
        }
        let supplier = match self.suppliers.read().await.get(&new.supplier_id).cloned() {
            Some(name) => name,
            None => return Err(foreign_key_violation("products_supplier_id_fkey")),
        };
        Ok((category, supplier))
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn list(&self, params: PageParams) -> AppResult<Page<Product>> {
        let products = self.products.read().await;
        Ok(page_of(products.values().cloned().collect(), params))
    }

    async fn search_by_name(&self, needle: &str, params: PageParams) -> AppResult<Page<Product>> {
        let needle = needle.to_lowercase();
        let products = self.products.read().await;
        let rows = products
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(page_of(rows, params))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn create(&self, new: NewProduct) -> AppResult<Product> {
        let (category, supplier) = self.joined_names(&new).await?;
        let mut products = self.products.write().await;
        let product = Product {
            product_id: next_id(&products),
            name: new.name,
            stock_quantity: new.stock_quantity,
            price: new.price,
            category,
            supplier,
        };
        products.insert(product.product_id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, update: NewProduct) -> AppResult<Option<Product>> {
        if self.products.read().await.get(&id).is_none() {
            return Ok(None);
        }
        let (category, supplier) = self.joined_names(&update).await?;
        let mut products = self.products.write().await;
        let product = Product {
            product_id: id,
            name: update.name,
            stock_quantity: update.stock_quantity,
            price: update.price,
            category,
            supplier,
        };
        products.insert(id, product.clone());
        Ok(Some(product))
    }

    async fn update_name(&self, id: i64, name: &str) -> AppResult<Option<Product>> {
        let mut products = self.products.write().await;
        Ok(products.get_mut(&id).map(|p| {
            p.name = name.to_string();
            p.clone()
        }))
    }

    async fn update_stock_quantity(
        &self,
        id: i64,
        stock_quantity: i64,
    ) -> AppResult<Option<Product>> {
        let mut products = self.products.write().await;
        Ok(products.get_mut(&id).map(|p| {
            p.stock_quantity = stock_quantity;
            p.clone()
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<Option<Product>> {
        Ok(self.products.write().await.remove(&id))
    }
}

/// Mock supplier repository; names are unique as in the schema.
#[derive(Default)]
pub struct MockSupplierRepository {
    suppliers: Arc<RwLock<BTreeMap<i64, Supplier>>>,
    products: Arc<RwLock<Vec<Product>>>,
}

impl MockSupplierRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing suppliers
    pub async fn seed(&self, rows: Vec<Supplier>) {
        let mut suppliers = self.suppliers.write().await;
        for row in rows {
            suppliers.insert(row.supplier_id, row);
        }
    }

    /// Seed products used by `find_by_id` counts and `products` pages.
    /// Products are linked to suppliers by the joined supplier name.
    pub async fn seed_products(&self, rows: Vec<Product>) {
        self.products.write().await.extend(rows);
    }
}

#[async_trait]
impl SupplierRepository for MockSupplierRepository {
    async fn list(&self, params: PageParams) -> AppResult<Page<Supplier>> {
        let suppliers = self.suppliers.read().await;
        Ok(page_of(suppliers.values().cloned().collect(), params))
    }

    async fn search_by_name(
        &self,
        needle: &str,
        params: PageParams,
    ) -> AppResult<Page<Supplier>> {
        let needle = needle.to_lowercase();
        let suppliers = self.suppliers.read().await;
        let rows = suppliers
            .values()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(page_of(rows, params))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<SupplierDetails>> {
        let supplier = match self.suppliers.read().await.get(&id).cloned() {
            Some(supplier) => supplier,
            None => return Ok(None),
        };
        let product_count = self
            .products
            .read()
            .await
            .iter()
            .filter(|p| p.supplier == supplier.name)
            .count() as i64;
        Ok(Some(SupplierDetails {
            supplier,
            product_count,
        }))
    }

    async fn create(&self, new: NewSupplier) -> AppResult<Supplier> {
        let mut suppliers = self.suppliers.write().await;
        if suppliers.values().any(|s| s.name == new.name) {
            return Err(unique_violation("suppliers_name_key"));
        }
        let supplier = Supplier {
            supplier_id: next_id(&suppliers),
            name: new.name,
            contact_person_firstname: new.contact_person_firstname,
            contact_person_secondname: new.contact_person_secondname,
            email: new.email,
            phonenumber: new.phonenumber,
            country: new.country,
        };
        suppliers.insert(supplier.supplier_id, supplier.clone());
        Ok(supplier)
    }

    async fn update(&self, id: i64, update: NewSupplier) -> AppResult<Option<Supplier>> {
        let mut suppliers = self.suppliers.write().await;
        if !suppliers.contains_key(&id) {
            return Ok(None);
        }
        if suppliers
            .iter()
            .any(|(other_id, s)| *other_id != id && s.name == update.name)
        {
            return Err(unique_violation("suppliers_name_key"));
        }
        let supplier = Supplier {
            supplier_id: id,
            name: update.name,
            contact_person_firstname: update.contact_person_firstname,
            contact_person_secondname: update.contact_person_secondname,
            email: update.email,
            phonenumber: update.phonenumber,
            country: update.country,
        };
        suppliers.insert(id, supplier.clone());
        Ok(Some(supplier))
    }

    async fn update_name(&self, id: i64, name: &str) -> AppResult<Option<Supplier>> {
        let mut suppliers = self.suppliers.write().await;
        // An UPDATE that matches no row never trips a constraint.
        if !suppliers.contains_key(&id) {
            return Ok(None);
        }
        if suppliers
            .iter()
            .any(|(other_id, s)| *other_id != id && s.name == name)
        {
            return Err(unique_violation("suppliers_name_key"));
        }
        Ok(suppliers.get_mut(&id).map(|s| {
            s.name = name.to_string();
            s.clone()
        }))
    }

    async fn update_country(&self, id: i64, country: &str) -> AppResult<Option<Supplier>> {
        let mut suppliers = self.suppliers.write().await;
        Ok(suppliers.get_mut(&id).map(|s| {
            s.country = country.to_string();
            s.clone()
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<Option<Supplier>> {
        Ok(self.suppliers.write().await.remove(&id))
    }

    async fn products(&self, id: i64, params: PageParams) -> AppResult<SupplierProducts> {
        let supplier = self.suppliers.read().await.get(&id).map(|s| s.name.clone());
        let rows: Vec<Product> = match &supplier {
            Some(name) => self
                .products
                .read()
                .await
                .iter()
                .filter(|p| &p.supplier == name)
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        Ok(SupplierProducts {
            supplier,
            products: page_of(rows, params),
        })
    }
}

/// Mock category repository; names are unique as in the schema.
#[derive(Default)]
pub struct MockCategoryRepository {
    categories: Arc<RwLock<BTreeMap<i64, Category>>>,
}

impl MockCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing categories
    pub async fn seed(&self, rows: Vec<Category>) {
        let mut categories = self.categories.write().await;
        for row in rows {
            categories.insert(row.category_id, row);
        }
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn list(&self, params: PageParams) -> AppResult<Page<Category>> {
        let categories = self.categories.read().await;
        Ok(page_of(categories.values().cloned().collect(), params))
    }

    async fn search_by_name(
        &self,
        needle: &str,
        params: PageParams,
    ) -> AppResult<Page<Category>> {
        let needle = needle.to_lowercase();
        let categories = self.categories.read().await;
        let rows = categories
            .values()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(page_of(rows, params))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        Ok(self.categories.read().await.get(&id).cloned())
    }

    async fn create(&self, new: NewCategory) -> AppResult<Category> {
        let mut categories = self.categories.write().await;
        if categories.values().any(|c| c.name == new.name) {
            return Err(unique_violation("categories_name_key"));
        }
        let category = Category {
            category_id: next_id(&categories),
            name: new.name,
        };
        categories.insert(category.category_id, category.clone());
        Ok(category)
    }

    async fn update(&self, id: i64, update: NewCategory) -> AppResult<Option<Category>> {
        let mut categories = self.categories.write().await;
        // An UPDATE that matches no row never trips a constraint.
        if !categories.contains_key(&id) {
            return Ok(None);
        }
        if categories
            .iter()
            .any(|(other_id, c)| *other_id != id && c.name == update.name)
        {
            return Err(unique_violation("categories_name_key"));
        }
        Ok(categories.get_mut(&id).map(|c| {
            c.name = update.name.clone();
            c.clone()
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<Option<Category>> {
        Ok(self.categories.write().await.remove(&id))
    }
}
