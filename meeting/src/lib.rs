//! # Meeting Window Validation
//!
//! Decides whether a live video session for a vet appointment may start
//! right now.
//!
//! Appointments are stored with civil (offset-free) start/end timestamps
//! that are wall-clock times in a fixed clinic zone. A room label typed by
//! the user is canonicalized into the slug the appointment was stored
//! under, the matching window is fetched, and the current instant is
//! checked against the window after reinterpreting its bounds in that zone.
//!
//! The validator is stateless: one read through [`WindowStore`] per call,
//! no caching, no mutation. "Now" comes from an injected [`Clock`] and the
//! zone is a constructor parameter, so tests can pin both.

pub mod clock;
pub mod error;
pub mod slug;
pub mod store;
pub mod validator;
pub mod window;

pub use clock::{Clock, SystemClock};
pub use error::MeetingError;
pub use slug::canonicalize;
pub use store::{StoreError, WindowStore};
pub use validator::{MeetingWindowValidator, DEFAULT_OWNER_CONTACT};
pub use window::{grant_duration, ReservationWindow, SessionGrant};
