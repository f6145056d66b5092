use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking, capacity: i32) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Re-check inside the transaction; the unique index on
        // (business_id, date, time, slot_seq) catches whatever this count
        // cannot see.
        let row = sqlx::query(
            "SELECT COUNT(*) as count FROM bookings
             WHERE business_id = ? AND start_time < ? AND end_time > ? AND status != 'cancelled'",
        )
        .bind(&booking.business_id)
        .bind(booking.end_time)
        .bind(booking.start_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        if row.get::<i64, _>("count") >= capacity.max(1) as i64 {
            return Err(AppError::SlotUnavailable);
        }

        // Seat number within the slot. Racing writers compute the same
        // value and the unique index rejects the second one.
        let seat = sqlx::query(
            "SELECT COALESCE(MAX(slot_seq) + 1, 0) as seat FROM bookings
             WHERE business_id = ? AND date = ? AND time = ? AND status != 'cancelled'",
        )
        .bind(&booking.business_id)
        .bind(booking.date)
        .bind(&booking.time)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?
        .get::<i64, _>("seat");

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, business_id, service_id, service_name, date, time,
                start_time, end_time, duration_min, first_name, last_name, email, phone,
                notes, status, slot_seq, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&booking.id)
        .bind(&booking.business_id)
        .bind(&booking.service_id)
        .bind(&booking.service_name)
        .bind(booking.date)
        .bind(&booking.time)
        .bind(booking.start_time)
        .bind(booking.end_time)
        .bind(booking.duration_min)
        .bind(&booking.first_name)
        .bind(&booking.last_name)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(&booking.notes)
        .bind(&booking.status)
        .bind(seat)
        .bind(booking.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::from_insert)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, business_id: &str, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE business_id = ? AND id = ?")
            .bind(business_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_business(&self, business_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE business_id = ? ORDER BY start_time ASC",
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_by_range(
        &self,
        business_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings
             WHERE business_id = ? AND start_time < ? AND end_time > ? AND status != 'cancelled'",
        )
        .bind(business_id)
        .bind(end)
        .bind(start)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn count_overlap(
        &self,
        business_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let row = sqlx::query(
            "SELECT COUNT(*) as count FROM bookings
             WHERE business_id = ? AND start_time < ? AND end_time > ? AND status != 'cancelled'",
        )
        .bind(business_id)
        .bind(end)
        .bind(start)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }

    async fn update_status(
        &self,
        business_id: &str,
        id: &str,
        status: &str,
    ) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = ? WHERE id = ? AND business_id = ? RETURNING *",
        )
        .bind(status)
        .bind(id)
        .bind(business_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound("Booking not found".into()))
    }

    async fn delete(&self, business_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ? AND business_id = ?")
            .bind(id)
            .bind(business_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Booking not found".into()));
        }
        Ok(())
    }
}
