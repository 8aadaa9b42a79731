//! PostgreSQL implementation of the ProductRepository trait.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use ct_core::domain::{NewProduct, Product};
use ct_core::errors::{AppError, AppResult};
use ct_core::repositories::ProductRepository;
use ct_shared::types::pagination::{Page, PageParams};

use crate::database::error::map_db_error;

/// PostgreSQL implementation of ProductRepository
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Projection shared by every product read: joined category and supplier
// names instead of the foreign keys. A product may lack a category but
// never a supplier, hence the LEFT vs INNER join.
const PRODUCT_SELECT: &str = r#"
    SELECT products.product_id,
           products.name,
           products.stock_quantity,
           products.price,
           categories.name AS category,
           suppliers.name AS supplier
    FROM products
    LEFT JOIN categories ON products.category_id = categories.category_id
    INNER JOIN suppliers ON products.supplier_id = suppliers.supplier_id
"#;

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

// COUNT(*) OVER () is evaluated before LIMIT/OFFSET, so every returned row
// carries the full filtered count.
fn page_from_rows(rows: Vec<PgRow>) -> AppResult<Page<Product>> {
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

    Ok(Page::new(total, items))
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self, params: PageParams) -> AppResult<Page<Product>> {
        let query = r#"
            SELECT products.product_id,
                   products.name,
                   products.stock_quantity,
                   products.price,
                   categories.name AS category,
                   suppliers.name AS supplier,
                   COUNT(*) OVER () AS full_count
            FROM products
            LEFT JOIN categories ON products.category_id = categories.category_id
            INNER JOIN suppliers ON products.supplier_id = suppliers.supplier_id
            ORDER BY products.product_id ASC
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

    async fn search_by_name(&self, needle: &str, params: PageParams) -> AppResult<Page<Product>> {
        let query = r#"
            SELECT products.product_id,
                   products.name,
                   products.stock_quantity,
                   products.price,
                   categories.name AS category,
                   suppliers.name AS supplier,
                   COUNT(*) OVER () AS full_count
            FROM products
            LEFT JOIN categories ON products.category_id = categories.category_id
            INNER JOIN suppliers ON products.supplier_id = suppliers.supplier_id
            WHERE LOWER(products.name) LIKE $1
            ORDER BY products.product_id ASC
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

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let query = format!("{PRODUCT_SELECT} WHERE products.product_id = $1");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.as_ref().map(row_to_product).transpose()
    }

    async fn create(&self, new: NewProduct) -> AppResult<Product> {
        let query = r#"
            INSERT INTO products (name, stock_quantity, price, category_id, supplier_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING product_id
        "#;

        let row = sqlx::query(query)
            .bind(&new.name)
            .bind(new.stock_quantity)
            .bind(new.price)
            .bind(new.category_id)
            .bind(new.supplier_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let id: i64 = row
            .try_get("product_id")
            .map_err(|e| AppError::internal(format!("failed to read product_id: {e}")))?;

        // Re-read through the joined projection so the caller gets the
        // category and supplier names.
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal("created product vanished before read-back"))
    }

    async fn update(&self, id: i64, update: NewProduct) -> AppResult<Option<Product>> {
        let query = r#"
            UPDATE products
            SET name = $1,
                stock_quantity = $2,
                price = $3,
                category_id = $4,
                supplier_id = $5
            WHERE product_id = $6
            RETURNING product_id
        "#;

        let row = sqlx::query(query)
            .bind(&update.name)
            .bind(update.stock_quantity)
            .bind(update.price)
            .bind(update.category_id)
            .bind(update.supplier_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        match row {
            Some(_) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    async fn update_name(&self, id: i64, name: &str) -> AppResult<Option<Product>> {
        let query = r#"
            UPDATE products
            SET name = $1
            WHERE product_id = $2
            RETURNING product_id
        "#;

        let row = sqlx::query(query)
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        match row {
            Some(_) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    async fn update_stock_quantity(
        &self,
        id: i64,
        stock_quantity: i64,
    ) -> AppResult<Option<Product>> {
        let query = r#"
            UPDATE products
            SET stock_quantity = $1
            WHERE product_id = $2
            RETURNING product_id
        "#;

        let row = sqlx::query(query)
            .bind(stock_quantity)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        match row {
            Some(_) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<Option<Product>> {
        // Fetch the joined projection first; DELETE .. RETURNING cannot
        // produce the joined names.
        let existing = match self.find_by_id(id).await? {
            Some(product) => product,
            None => return Ok(None),
        };

        sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Some(existing))
    }
}
