//! Defines the endpoint for listing all categories.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    Error,
    category::core::{Category, map_row_to_category},
    state::DatabaseState,
};

/// A route handler for listing all categories as a JSON array.
///
/// Responds with 404 when the table is empty, matching the behaviour the
/// clients were built against.
pub async fn get_categories_endpoint(
    State(state): State<DatabaseState>,
) -> Result<Response, Error> {
    let connection = state.connect()?;
    let categories = get_categories(&connection)?;

    Ok((StatusCode::OK, Json(categories)).into_response())
}

fn get_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    let mut statement = connection.prepare("SELECT id, name FROM Categories")?;

    let categories = statement
        .query_map([], map_row_to_category)?
        .collect::<Result<Vec<_>, _>>()?;

    if categories.is_empty() {
        return Err(Error::NothingFound("categories"));
    }

    Ok(categories)
}
