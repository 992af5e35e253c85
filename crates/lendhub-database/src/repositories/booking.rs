//! Booking repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use lendhub_core::error::{AppError, ErrorKind};
use lendhub_core::result::AppResult;
use lendhub_core::types::{BookingId, ItemId, PageRequest, UserId};
use lendhub_entity::booking::{Booking, BookingQuery, BookingStatus, BookingStore, CreateBooking};

/// PostgreSQL-backed booking storage.
///
/// Temporal and status filters are pushed into SQL so listing queries
/// never load more than one page of rows.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a paged listing query scoped by `scope_column` (booker_id or
    /// owner_id) with the filter predicate appended.
    async fn find_scoped(
        &self,
        scope_column: &str,
        scope_id: UserId,
        query: &BookingQuery,
        page: &PageRequest,
    ) -> AppResult<Vec<Booking>> {
        let base = format!("SELECT * FROM bookings WHERE {scope_column} = $1");
        let tail = "ORDER BY start_at DESC LIMIT $2 OFFSET $3";

        let result = match query {
            BookingQuery::All => {
                sqlx::query_as::<_, Booking>(&format!("{base} {tail}"))
                    .bind(scope_id)
                    .bind(page.limit())
                    .bind(page.offset())
                    .fetch_all(&self.pool)
                    .await
            }
            BookingQuery::Current(now) => {
                sqlx::query_as::<_, Booking>(&format!(
                    "{base} AND start_at <= $4 AND end_at >= $4 {tail}"
                ))
                .bind(scope_id)
                .bind(page.limit())
                .bind(page.offset())
                .bind(now)
                .fetch_all(&self.pool)
                .await
            }
            BookingQuery::Past(now) => {
                sqlx::query_as::<_, Booking>(&format!("{base} AND end_at < $4 {tail}"))
                    .bind(scope_id)
                    .bind(page.limit())
                    .bind(page.offset())
                    .bind(now)
                    .fetch_all(&self.pool)
                    .await
            }
            BookingQuery::Future(now) => {
                sqlx::query_as::<_, Booking>(&format!("{base} AND start_at > $4 {tail}"))
                    .bind(scope_id)
                    .bind(page.limit())
                    .bind(page.offset())
                    .bind(now)
                    .fetch_all(&self.pool)
                    .await
            }
            BookingQuery::Status(status) => {
                sqlx::query_as::<_, Booking>(&format!("{base} AND status = $4 {tail}"))
                    .bind(scope_id)
                    .bind(page.limit())
                    .bind(page.offset())
                    .bind(status)
                    .fetch_all(&self.pool)
                    .await
            }
        };

        result.map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (start_at, end_at, status, item_id, owner_id, booker_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.start_at)
        .bind(data.end_at)
        .bind(data.status)
        .bind(data.item_id)
        .bind(data.owner_id)
        .bind(data.booker_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))
    }

    async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))
    }

    async fn exists(&self, id: BookingId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM bookings WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check booking existence", e)
            })
    }

    async fn delete(&self, id: BookingId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete booking", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_status_if(
        &self,
        id: BookingId,
        expected: BookingStatus,
        new_status: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        // Single conditional UPDATE: the row predicate is the compare half
        // of the compare-and-swap, so concurrent deciders cannot both win.
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $3 WHERE id = $1 AND status = $2 RETURNING *",
        )
        .bind(id)
        .bind(expected)
        .bind(new_status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update booking status", e)
        })
    }

    async fn find_by_booker(
        &self,
        booker: UserId,
        query: &BookingQuery,
        page: &PageRequest,
    ) -> AppResult<Vec<Booking>> {
        self.find_scoped("booker_id", booker, query, page).await
    }

    async fn find_by_owner(
        &self,
        owner: UserId,
        query: &BookingQuery,
        page: &PageRequest,
    ) -> AppResult<Vec<Booking>> {
        self.find_scoped("owner_id", owner, query, page).await
    }

    async fn find_last_for_item(
        &self,
        item: ItemId,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE item_id = $1 AND end_at < $2 \
             ORDER BY end_at DESC, id DESC LIMIT 1",
        )
        .bind(item)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find last booking", e))
    }

    async fn find_next_for_item(
        &self,
        item: ItemId,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE item_id = $1 AND start_at > $2 \
             ORDER BY start_at ASC, id ASC LIMIT 1",
        )
        .bind(item)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find next booking", e))
    }

    async fn has_completed_booking(
        &self,
        booker: UserId,
        item: ItemId,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM bookings \
             WHERE booker_id = $1 AND item_id = $2 AND status = $3 AND end_at < $4)",
        )
        .bind(booker)
        .bind(item)
        .bind(BookingStatus::Approved)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check completed bookings", e)
        })
    }
}
