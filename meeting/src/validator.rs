//! The window validator itself.
//!
//! A pure decision function parameterized by wall-clock time: canonicalize
//! the label, fetch the window, reinterpret its civil bounds in the clinic
//! zone, compare against "now". Safe to call from any number of concurrent
//! requests; repeated calls at the same instant give the same answer.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::clock::Clock;
use crate::error::MeetingError;
use crate::slug::canonicalize;
use crate::store::WindowStore;
use crate::window::{grant_duration, ReservationWindow, SessionGrant};

/// Substituted into the grant when the caller supplies no owner contact.
pub const DEFAULT_OWNER_CONTACT: &str = "clinic@vetcal.app";

const CIVIL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const VIDEO_DISABLED: &str = "Video calls are not enabled for this appointment";
const NOT_ACTIVE: &str = "The appointment meeting window is not currently active";

pub struct MeetingWindowValidator<S, C> {
    store: S,
    clock: C,
    zone: Tz,
    default_owner_contact: String,
}

impl<S: WindowStore, C: Clock> MeetingWindowValidator<S, C> {
    pub fn new(store: S, clock: C, zone: Tz, default_owner_contact: impl Into<String>) -> Self {
        Self {
            store,
            clock,
            zone,
            default_owner_contact: default_owner_contact.into(),
        }
    }

    /// Decides whether the session for `room_label` may start right now.
    ///
    /// Outcomes in evaluation order: unknown slug is [`MeetingError::NotFound`],
    /// a window with video disabled or with "now" outside `[start, end]`
    /// (boundaries inclusive) is [`MeetingError::NotJoinable`], anything else
    /// is a [`SessionGrant`].
    pub async fn evaluate(
        &self,
        room_label: &str,
        owner_contact: Option<&str>,
    ) -> Result<SessionGrant, MeetingError> {
        let slug = canonicalize(room_label);

        let window = self
            .store
            .find_by_identifier(&slug)
            .await?
            .ok_or(MeetingError::NotFound(slug))?;

        if !window.video_enabled {
            return Err(MeetingError::NotJoinable(VIDEO_DISABLED));
        }

        let start = reinterpret_civil(window.start_local, self.zone)?;
        let end = reinterpret_civil(window.end_local, self.zone)?;

        let now = self.clock.now_utc();
        if now < start || now > end {
            return Err(MeetingError::NotJoinable(NOT_ACTIVE));
        }

        Ok(self.grant(&window, room_label, owner_contact, start, end))
    }

    fn grant(
        &self,
        window: &ReservationWindow,
        room_label: &str,
        owner_contact: Option<&str>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> SessionGrant {
        SessionGrant {
            session_id: window.id,
            display_name: room_label.to_owned(),
            owner_contact: owner_contact
                .unwrap_or(&self.default_owner_contact)
                .to_owned(),
            start_instant_utc: start,
            duration_seconds: grant_duration(start, end),
        }
    }
}

/// Turns a stored civil timestamp into the UTC instant it denotes in `zone`.
///
/// The value is formatted as a plain date+time string and that string is
/// reinterpreted as wall-clock time in the zone. The round trip is the
/// contract: whatever offset or sub-second precision the value picked up
/// upstream is discarded, and only the civil fields count. In zones with
/// DST, a wall time that occurs twice resolves to its earlier mapping and a
/// wall time that never occurs is reported as a lookup failure.
fn reinterpret_civil(naive: NaiveDateTime, zone: Tz) -> Result<DateTime<Utc>, MeetingError> {
    let civil = naive.format(CIVIL_FORMAT).to_string();
    let wall = NaiveDateTime::parse_from_str(&civil, CIVIL_FORMAT)
        .map_err(|e| MeetingError::Lookup(e.into()))?;

    match zone.from_local_datetime(&wall) {
        LocalResult::Single(instant) => Ok(instant.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(MeetingError::Lookup(
            format!("wall-clock time {civil} does not exist in {zone}").into(),
        )),
    }
}
