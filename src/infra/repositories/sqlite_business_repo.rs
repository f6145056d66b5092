use crate::domain::{
    models::business::{Business, ServiceCategory},
    ports::{BusinessRepository, CategoryRepository},
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteBusinessRepo {
    pool: SqlitePool,
}

impl SqliteBusinessRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessRepository for SqliteBusinessRepo {
    async fn create(&self, business: &Business) -> Result<Business, AppError> {
        sqlx::query_as::<_, Business>(
            "INSERT INTO businesses (id, name, slug, active_schedule_id, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&business.id)
        .bind(&business.name)
        .bind(&business.slug)
        .bind(&business.active_schedule_id)
        .bind(business.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Business>, AppError> {
        sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Business>, AppError> {
        sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, business: &Business) -> Result<Business, AppError> {
        sqlx::query_as::<_, Business>(
            "UPDATE businesses SET name = ?, slug = ?, active_schedule_id = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(&business.name)
        .bind(&business.slug)
        .bind(&business.active_schedule_id)
        .bind(&business.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}

pub struct SqliteCategoryRepo {
    pool: SqlitePool,
}

impl SqliteCategoryRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepo {
    async fn create(&self, category: &ServiceCategory) -> Result<ServiceCategory, AppError> {
        sqlx::query_as::<_, ServiceCategory>(
            "INSERT INTO service_categories (id, business_id, name, sort_order, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&category.id)
        .bind(&category.business_id)
        .bind(&category.name)
        .bind(category.sort_order)
        .bind(category.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list(&self, business_id: &str) -> Result<Vec<ServiceCategory>, AppError> {
        sqlx::query_as::<_, ServiceCategory>(
            "SELECT * FROM service_categories WHERE business_id = ? ORDER BY sort_order ASC",
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, business_id: &str, id: &str) -> Result<(), AppError> {
        let result =
            sqlx::query("DELETE FROM service_categories WHERE id = ? AND business_id = ?")
                .bind(id)
                .bind(business_id)
                .execute(&self.pool)
                .await
                .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Category not found".into()));
        }
        Ok(())
    }
}
