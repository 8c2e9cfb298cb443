use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meeting::MeetingError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Meeting(#[from] MeetingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Meeting(err) = self;

        match err {
            MeetingError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
            MeetingError::NotJoinable(_) => (StatusCode::FORBIDDEN, err.to_string()),
            MeetingError::Lookup(e) => {
                error!("Meeting lookup failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
        .into_response()
    }
}
