//! PostgreSQL implementation of the SupplierRepository trait.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use ct_core::domain::{NewSupplier, Product, Supplier, SupplierDetails, SupplierProducts};
use ct_core::errors::{AppError, AppResult};
use ct_core::repositories::SupplierRepository;
use ct_shared::types::pagination::{Page, PageParams};

use crate::database::error::map_db_error;

/// PostgreSQL implementation of SupplierRepository
pub struct PgSupplierRepository {
    pool: PgPool,
}

impl PgSupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_supplier(row: &PgRow) -> AppResult<Supplier> {
    Ok(Supplier {
        supplier_id: row
            .try_get("supplier_id")
            .map_err(|e| AppError::internal(format!("failed to read supplier_id: {e}")))?,
        name: row
            .try_get("name")
            .map_err(|e| AppError::internal(format!("failed to read name: {e}")))?,
        contact_person_firstname: row.try_get("contact_person_firstname").map_err(|e| {
            AppError::internal(format!("failed to read contact_person_firstname: {e}"))
        })?,
        contact_person_secondname: row.try_get("contact_person_secondname").map_err(|e| {
            AppError::internal(format!("failed to read contact_person_secondname: {e}"))
        })?,
        email: row
            .try_get("email")
            .map_err(|e| AppError::internal(format!("failed to read email: {e}")))?,
        phonenumber: row
            .try_get("phonenumber")
            .map_err(|e| AppError::internal(format!("failed to read phonenumber: {e}")))?,
        country: row
            .try_get("country")
            .map_err(|e| AppError::internal(format!("failed to read country: {e}")))?,
    })
}

fn row_to_product(row: &PgRow) -> AppResult<Product> {
    Ok(Product {
        product_id: row
            .try_get("product_id")
            .map_err(|e| AppError::internal(format!("failed to read product_id: {e}")))?,
        name: row
            .try_get("name")
            .map_err(|e| AppError::internal(format!("failed to read name: {e}")))?,
        stock_quantity: row
            .try_get("stock_quantity")
            .map_err(|e| AppError::internal(format!("failed to read stock_quantity: {e}")))?,
        price: row
            .try_get("price")
            .map_err(|e| AppError::internal(format!("failed to read price: {e}")))?,
        category: row
            .try_get("category")
            .map_err(|e| AppError::internal(format!("failed to read category: {e}")))?,
        supplier: row
            .try_get("supplier")
            .map_err(|e| AppError::internal(format!("failed to read supplier: {e}")))?,
    })
}

fn page_from_rows(rows: Vec<PgRow>) -> AppResult<Page<Supplier>> {
    let total = match rows.first() {
        Some(row) => row
            .try_get("full_count")
            .map_err(|e| AppError::internal(format!("failed to read full_count: {e}")))?,
        None => 0,
    };

    let items = rows
        .iter()
        .map(row_to_supplier)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Page::new(total, items))
}

#[async_trait]
impl SupplierRepository for PgSupplierRepository {
    async fn list(&self, params: PageParams) -> AppResult<Page<Supplier>> {
        let query = r#"
            SELECT *, COUNT(*) OVER () AS full_count
            FROM suppliers
            ORDER BY supplier_id
            LIMIT $1 OFFSET $2
        "#;

        let rows = sqlx::query(query)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        page_from_rows(rows)
    }

    async fn search_by_name(
        &self,
        needle: &str,
        params: PageParams,
    ) -> AppResult<Page<Supplier>> {
        let query = r#"
            SELECT *, COUNT(*) OVER () AS full_count
            FROM suppliers
            WHERE LOWER(name) LIKE $1
            ORDER BY supplier_id
            LIMIT $2 OFFSET $3
        "#;

        let pattern = format!("%{}%", needle.to_lowercase());
        let rows = sqlx::query(query)
            .bind(pattern)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        page_from_rows(rows)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<SupplierDetails>> {
        // LEFT JOIN so a supplier without products still resolves, with a
        // zero count; COUNT(product_id) ignores the null rows the join
        // produces for them.
        let query = r#"
            SELECT suppliers.*,
                   COUNT(products.product_id) AS product_count
            FROM suppliers
            LEFT JOIN products ON suppliers.supplier_id = products.supplier_id
            WHERE suppliers.supplier_id = $1
            GROUP BY suppliers.supplier_id
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let supplier = row_to_supplier(&row)?;
        let product_count = row
            .try_get("product_count")
            .map_err(|e| AppError::internal(format!("failed to read product_count: {e}")))?;

        Ok(Some(SupplierDetails {
            supplier,
            product_count,
        }))
    }

    async fn create(&self, new: NewSupplier) -> AppResult<Supplier> {
        let query = r#"
            INSERT INTO suppliers
                (name, contact_person_firstname, contact_person_secondname,
                 email, phonenumber, country)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
        "#;

        let row = sqlx::query(query)
            .bind(&new.name)
            .bind(&new.contact_person_firstname)
            .bind(&new.contact_person_secondname)
            .bind(&new.email)
            .bind(&new.phonenumber)
            .bind(&new.country)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        row_to_supplier(&row)
    }

    async fn update(&self, id: i64, update: NewSupplier) -> AppResult<Option<Supplier>> {
        let query = r#"
            UPDATE suppliers
            SET name = $1,
                contact_person_firstname = $2,
                contact_person_secondname = $3,
                email = $4,
                phonenumber = $5,
                country = $6
            WHERE supplier_id = $7
            RETURNING *
        "#;

        let row = sqlx::query(query)
            .bind(&update.name)
            .bind(&update.contact_person_firstname)
            .bind(&update.contact_person_secondname)
            .bind(&update.email)
            .bind(&update.phonenumber)
            .bind(&update.country)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.as_ref().map(row_to_supplier).transpose()
    }

    async fn update_name(&self, id: i64, name: &str) -> AppResult<Option<Supplier>> {
        let query = r#"
            UPDATE suppliers
            SET name = $1
            WHERE supplier_id = $2
            RETURNING *
        "#;

        let row = sqlx::query(query)
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.as_ref().map(row_to_supplier).transpose()
    }

    async fn update_country(&self, id: i64, country: &str) -> AppResult<Option<Supplier>> {
        let query = r#"
            UPDATE suppliers
            SET country = $1
            WHERE supplier_id = $2
            RETURNING *
        "#;

        let row = sqlx::query(query)
            .bind(country)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.as_ref().map(row_to_supplier).transpose()
    }

    async fn delete(&self, id: i64) -> AppResult<Option<Supplier>> {
        let row = sqlx::query("DELETE FROM suppliers WHERE supplier_id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.as_ref().map(row_to_supplier).transpose()
    }

    async fn products(&self, id: i64, params: PageParams) -> AppResult<SupplierProducts> {
        let query = r#"
            SELECT products.product_id,
                   products.name,
                   products.stock_quantity,
                   products.price,
                   categories.name AS category,
                   suppliers.name AS supplier,
                   COUNT(*) OVER () AS full_count
            FROM products
            INNER JOIN suppliers ON products.supplier_id = suppliers.supplier_id
            LEFT JOIN categories ON products.category_id = categories.category_id
            WHERE suppliers.supplier_id = $1
            ORDER BY products.product_id
            LIMIT $2 OFFSET $3
        "#;

        let rows = sqlx::query(query)
            .bind(id)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let total = match rows.first() {
            Some(row) => row
                .try_get("full_count")
                .map_err(|e| AppError::internal(format!("failed to read full_count: {e}")))?,
            None => 0,
        };

        let items = rows
            .iter()
            .map(row_to_product)
            .collect::<AppResult<Vec<_>>>()?;

        let supplier = match items.first() {
            Some(product) => Some(product.supplier.clone()),
            // No product rows on this page: resolve the name separately so
            // an existing supplier is still reported.
            None => sqlx::query("SELECT name FROM suppliers WHERE supplier_id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?
                .map(|row| {
                    row.try_get("name")
                        .map_err(|e| AppError::internal(format!("failed to read name: {e}")))
                })
                .transpose()?,
        };

        Ok(SupplierProducts {
            supplier,
            products: Page::new(total, items),
        })
    }
}
