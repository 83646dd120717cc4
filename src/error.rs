//! Defines the app level error type and its conversion to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// The errors that may occur in the application.
///
/// The `IntoResponse` impl maps each variant to the fixed status code and
/// client message the API promises. Server-side detail is logged where the
/// error is raised and never sent to the client.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One or more of the database connection settings are not set in the
    /// process environment.
    #[error("database connection settings are incomplete")]
    DatabaseSettingsIncomplete,

    /// One or more of the blob storage settings are not set in the process
    /// environment.
    #[error("blob storage settings are incomplete")]
    BlobSettingsIncomplete,

    /// The database connection could not be opened.
    ///
    /// The underlying error is logged by the connection factory. Callers
    /// must treat this as terminal for the request.
    #[error("could not open a database connection")]
    DatabaseConnection,

    /// The request body was empty where a JSON body was required.
    #[error("request body is empty")]
    EmptyRequestBody,

    /// The request body could not be parsed as JSON of the expected shape.
    #[error("could not parse request body: {0}")]
    InvalidRequestBody(String),

    /// A required field was absent or null in the request body.
    #[error("request body is missing required fields")]
    MissingRequiredFields,

    /// `oldExpenseIDs` and `newExpenses` had different lengths in a bulk
    /// update request.
    #[error("oldExpenseIDs and newExpenses have different lengths")]
    ExpenseListLengthMismatch,

    /// A read returned no rows. Holds the plural entity name, e.g.
    /// "expenses".
    #[error("no {0} found")]
    NothingFound(&'static str),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// The blob upload failed.
    ///
    /// The string should only be logged for debugging on the server.
    #[error("blob upload failed: {0}")]
    UploadFailed(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::DatabaseSettingsIncomplete => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database connection settings are incomplete.".to_owned(),
            ),
            Error::BlobSettingsIncomplete => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Blob storage settings are incomplete.".to_owned(),
            ),
            Error::DatabaseConnection => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database connection error.".to_owned(),
            ),
            Error::EmptyRequestBody => {
                (StatusCode::BAD_REQUEST, "Request body is empty.".to_owned())
            }
            Error::InvalidRequestBody(detail) => {
                tracing::error!("could not parse request body: {detail}");
                (
                    StatusCode::BAD_REQUEST,
                    "Request body is not valid JSON.".to_owned(),
                )
            }
            Error::MissingRequiredFields => (
                StatusCode::BAD_REQUEST,
                "Request body is missing required fields.".to_owned(),
            ),
            Error::ExpenseListLengthMismatch => (
                StatusCode::BAD_REQUEST,
                "oldExpenseIDs and newExpenses must have the same length.".to_owned(),
            ),
            Error::NothingFound(entity) => {
                (StatusCode::NOT_FOUND, format!("No {entity} found."))
            }
            Error::SqlError(error) => {
                tracing::error!("an unexpected SQL error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred.".to_owned(),
                )
            }
            Error::UploadFailed(detail) => {
                tracing::error!("blob upload failed: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred.".to_owned(),
                )
            }
        };

        (status, message).into_response()
    }
}
