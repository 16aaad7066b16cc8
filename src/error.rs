use crate::{dto::output, repository};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    ///
    /// Request is malformed.
    /// Message is sent to the user when present
    ///
    #[error("invalid argument: {}", .0.unwrap_or("malformed request"))]
    InvalidArgument(Option<&'static str>),

    #[error("validation error: {0}")]
    Validation(output::ValidationErrors),

    #[error("payload too large")]
    PayloadTooLarge,

    ///
    /// Message is sent to the user when present
    ///
    #[error("ticket not exist")]
    TicketNotExist(Option<&'static str>),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    ///
    /// Same as [Error::Database] but responds with problem details
    ///
    #[error("{title} {source}")]
    DatabaseProblem {
        title: &'static str,
        source: repository::Error,
    },
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::InvalidArgument(Some(message)) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            Error::InvalidArgument(None) => StatusCode::BAD_REQUEST.into_response(),
            Error::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE.into_response(),
            Error::TicketNotExist(Some(message)) => {
                (StatusCode::NOT_FOUND, message).into_response()
            }
            Error::TicketNotExist(None) => StatusCode::NOT_FOUND.into_response(),
            Error::Database(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("database error: {err}"),
            )
                .into_response(),
            Error::DatabaseProblem { title, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(output::ProblemDetails {
                    status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    title: title.to_string(),
                    detail: source.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
