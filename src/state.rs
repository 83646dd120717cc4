//! Defines the shared state for the application and the substate for
//! handlers that only touch the database.

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{DbConfig, Error, db, receipt::BlobStore};

/// The state shared between the route handlers.
#[derive(Debug, Clone)]
pub struct AppState<B> {
    /// The settings used to open a database connection for each request.
    pub db_config: DbConfig,
    /// The blob storage client, if blob storage is configured.
    pub blob_store: Option<B>,
}

impl<B: BlobStore> AppState<B> {
    /// Creates the application state.
    ///
    /// `blob_store` should be `None` when the blob storage settings are not
    /// available, in which case the receipt upload endpoint will report an
    /// error instead of uploading.
    pub fn new(db_config: DbConfig, blob_store: Option<B>) -> Self {
        Self {
            db_config,
            blob_store,
        }
    }
}

/// The state needed by handlers that only use the database.
#[derive(Debug, Clone)]
pub struct DatabaseState {
    db_config: DbConfig,
}

impl DatabaseState {
    /// Opens a database connection for the current request.
    ///
    /// # Errors
    /// Returns [`Error::DatabaseConnection`] if the connection cannot be
    /// opened.
    pub fn connect(&self) -> Result<Connection, Error> {
        db::connect(&self.db_config)
    }
}

impl<B: BlobStore> FromRef<AppState<B>> for DatabaseState {
    fn from_ref(state: &AppState<B>) -> Self {
        Self {
            db_config: state.db_config.clone(),
        }
    }
}
