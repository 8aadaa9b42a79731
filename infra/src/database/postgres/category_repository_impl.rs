//! PostgreSQL implementation of the CategoryRepository trait.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use ct_core::domain::{Category, NewCategory};
use ct_core::errors::{AppError, AppResult};
use ct_core::repositories::CategoryRepository;
use ct_shared::types::pagination::{Page, PageParams};

use crate::database::error::map_db_error;

/// PostgreSQL implementation of CategoryRepository
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_category(row: &PgRow) -> AppResult<Category> {
    Ok(Category {
        category_id: row
            .try_get("category_id")
            .map_err(|e| AppError::internal(format!("failed to read category_id: {e}")))?,
        name: row
            .try_get("name")
            .map_err(|e| AppError::internal(format!("failed to read name: {e}")))?,
    })
}

fn page_from_rows(rows: Vec<PgRow>) -> AppResult<Page<Category>> {
    let total = match rows.first() {
        Some(row) => row
            .try_get("full_count")
            .map_err(|e| AppError::internal(format!("failed to read full_count: {e}")))?,
        None => 0,
    };

    let items = rows
        .iter()
        .map(row_to_category)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Page::new(total, items))
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self, params: PageParams) -> AppResult<Page<Category>> {
        let query = r#"
            SELECT *, COUNT(*) OVER () AS full_count
            FROM categories
            ORDER BY category_id
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
    ) -> AppResult<Page<Category>> {
        let query = r#"
            SELECT *, COUNT(*) OVER () AS full_count
            FROM categories
            WHERE LOWER(name) LIKE $1
            ORDER BY category_id
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

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        let row = sqlx::query("SELECT * FROM categories WHERE category_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.as_ref().map(row_to_category).transpose()
    }

    async fn create(&self, new: NewCategory) -> AppResult<Category> {
        let row = sqlx::query("INSERT INTO categories (name) VALUES ($1) RETURNING *")
            .bind(&new.name)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        row_to_category(&row)
    }

    async fn update(&self, id: i64, update: NewCategory) -> AppResult<Option<Category>> {
        let query = r#"
            UPDATE categories
            SET name = $1
            WHERE category_id = $2
            RETURNING *
        "#;

        let row = sqlx::query(query)
            .bind(&update.name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.as_ref().map(row_to_category).transpose()
    }

    async fn delete(&self, id: i64) -> AppResult<Option<Category>> {
        let row = sqlx::query("DELETE FROM categories WHERE category_id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.as_ref().map(row_to_category).transpose()
    }
}
