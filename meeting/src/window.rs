use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

/// Stored appointment window, read fresh from the store on every
/// evaluation. The timestamps are civil values with no offset attached;
/// they only become instants once reinterpreted in the clinic zone.
#[derive(Debug, Clone)]
pub struct ReservationWindow {
    pub id: i32,
    pub slug: String,
    pub video_enabled: bool,
    pub start_local: NaiveDateTime,
    pub end_local: NaiveDateTime,
}

/// Parameters the session-launch side needs once a join is permitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionGrant {
    pub session_id: i32,
    /// The room label exactly as the caller sent it, not the slug.
    pub display_name: String,
    pub owner_contact: String,
    pub start_instant_utc: DateTime<Utc>,
    pub duration_seconds: i64,
}

/// Whole-second span of the window, clamped so a malformed row with the
/// end before the start never yields a negative duration.
pub fn grant_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_seconds().max(0)
}
