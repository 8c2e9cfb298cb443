use thiserror::Error;

use crate::store::StoreError;

/// Validation outcomes that are not a grant. The caller maps these to its
/// own transport (HTTP statuses, user-facing text); this crate knows
/// nothing about HTTP.
#[derive(Error, Debug)]
pub enum MeetingError {
    /// No appointment matches the canonicalized room label.
    #[error("No meeting room named \"{0}\"")]
    NotFound(String),

    /// The appointment exists but cannot be joined right now, either
    /// because video is disabled for it or because the current instant is
    /// outside the meeting window. Both causes share one kind on purpose,
    /// distinguished only by message.
    #[error("{0}")]
    NotJoinable(&'static str),

    /// The window lookup itself failed. Not retried here.
    #[error("Meeting lookup failed: {0}")]
    Lookup(#[from] StoreError),
}
