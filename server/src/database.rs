//! # Postgres
//!
//! Appointments live in one relational table; this service only ever reads
//! the meeting-window columns, keyed by slug.
//!
//! ## Schema (relevant columns)
//! - `id` (**int**), `slug` (**text**, unique)
//! - `video_enabled` (**bool**)
//! - `start_time`, `end_time` (**timestamp** without time zone — civil
//!   values, interpreted in the configured meeting zone at read time)

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use meeting::{ReservationWindow, StoreError, WindowStore};
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};

pub async fn init_postgres(database_url: &str) -> PgPool {
    PgPoolOptions::new()
        .max_connections(8)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await
        .unwrap()
}

#[derive(FromRow)]
struct AppointmentRow {
    id: i32,
    slug: String,
    video_enabled: bool,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
}

impl From<AppointmentRow> for ReservationWindow {
    fn from(row: AppointmentRow) -> Self {
        Self {
            id: row.id,
            slug: row.slug,
            video_enabled: row.video_enabled,
            start_local: row.start_time,
            end_local: row.end_time,
        }
    }
}

pub struct PgWindowStore {
    pool: PgPool,
}

impl PgWindowStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WindowStore for PgWindowStore {
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<ReservationWindow>, StoreError> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            "SELECT id, slug, video_enabled, start_time, end_time \
             FROM appointments WHERE slug = $1",
        )
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }
}
