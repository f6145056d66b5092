use crate::domain::{models::schedule::ScheduleSet, ports::ScheduleRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteScheduleRepo {
    pool: SqlitePool,
}

impl SqliteScheduleRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for SqliteScheduleRepo {
    async fn create(&self, schedule: &ScheduleSet) -> Result<ScheduleSet, AppError> {
        sqlx::query_as::<_, ScheduleSet>(
            "INSERT INTO schedule_sets (id, business_id, name, week_json, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&schedule.id)
        .bind(&schedule.business_id)
        .bind(&schedule.name)
        .bind(&schedule.week_json)
        .bind(schedule.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(
        &self,
        business_id: &str,
        id: &str,
    ) -> Result<Option<ScheduleSet>, AppError> {
        sqlx::query_as::<_, ScheduleSet>(
            "SELECT * FROM schedule_sets WHERE business_id = ? AND id = ?",
        )
        .bind(business_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list(&self, business_id: &str) -> Result<Vec<ScheduleSet>, AppError> {
        sqlx::query_as::<_, ScheduleSet>(
            "SELECT * FROM schedule_sets WHERE business_id = ? ORDER BY created_at ASC",
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update(&self, schedule: &ScheduleSet) -> Result<ScheduleSet, AppError> {
        sqlx::query_as::<_, ScheduleSet>(
            "UPDATE schedule_sets SET name = ?, week_json = ?
             WHERE id = ? AND business_id = ?
             RETURNING *",
        )
        .bind(&schedule.name)
        .bind(&schedule.week_json)
        .bind(&schedule.id)
        .bind(&schedule.business_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, business_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM schedule_sets WHERE id = ? AND business_id = ?")
            .bind(id)
            .bind(business_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Schedule not found".into()));
        }
        Ok(())
    }
}
