//! Database connection and schema management.

use rusqlite::{Connection, TransactionBehavior};

use crate::{
    DbConfig, Error, category::create_category_table, expense::create_expense_table,
};

/// Opens a new database connection from the application settings.
///
/// Each request gets its own connection, which is dropped when the request
/// ends.
///
/// # Errors
/// Returns [`Error::DatabaseConnection`] if the connection cannot be opened.
/// The underlying error is logged here and not exposed to the client.
pub fn connect(config: &DbConfig) -> Result<Connection, Error> {
    Connection::open(&config.database).map_err(|error| {
        tracing::error!("could not open database {:?}: {error}", config.database);
        Error::DatabaseConnection
    })
}

/// Creates the application tables if they do not exist.
///
/// Runs in a single exclusive transaction so that concurrent start-ups do
/// not race on table creation.
///
/// # Errors
/// Returns an error if the tables could not be created.
pub fn initialize(connection: &mut Connection) -> Result<(), Error> {
    let transaction = connection.transaction_with_behavior(TransactionBehavior::Exclusive)?;

    create_expense_table(&transaction)?;
    create_category_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
