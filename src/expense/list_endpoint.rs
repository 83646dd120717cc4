//! Defines the endpoint for listing all expenses.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    Error,
    expense::core::{Expense, map_row_to_expense},
    state::DatabaseState,
};

/// A route handler for listing all expenses as a JSON array.
///
/// Responds with 404 when the table is empty, matching the behaviour the
/// clients were built against.
pub async fn get_expenses_endpoint(
    State(state): State<DatabaseState>,
) -> Result<Response, Error> {
    let connection = state.connect()?;
    let expenses = get_expenses(&connection)?;

    Ok((StatusCode::OK, Json(expenses)).into_response())
}

fn get_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    let mut statement = connection.prepare(
        "SELECT id, userId, amount, categoryId, description, receiptUrl, date, createdAt
         FROM Expenses",
    )?;

    let expenses = statement
        .query_map([], map_row_to_expense)?
        .collect::<Result<Vec<_>, _>>()?;

    if expenses.is_empty() {
        return Err(Error::NothingFound("expenses"));
    }

    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;
    use tempfile::TempDir;

    use crate::{
        AppState, DbConfig, build_router, db, endpoints,
        expense::core::{create_expense, sample_expense},
        initialize_db,
        receipt::MemoryBlobStore,
    };

    fn get_test_server() -> (TestServer, DbConfig, TempDir) {
        let temp_dir = TempDir::new().expect("could not create temp directory");
        let config = DbConfig {
            host: "localhost".to_owned(),
            user: "tester".to_owned(),
            password: "hunter2".to_owned(),
            database: temp_dir
                .path()
                .join("expenses.db")
                .to_string_lossy()
                .into_owned(),
        };

        let mut connection = db::connect(&config).unwrap();
        initialize_db(&mut connection).unwrap();

        let state = AppState::new(config.clone(), None::<MemoryBlobStore>);
        let server = TestServer::new(build_router(state));

        (server, config, temp_dir)
    }

    #[tokio::test]
    async fn empty_table_returns_not_found() {
        let (server, _, _temp_dir) = get_test_server();

        let response = server.get(endpoints::GET_EXPENSES).await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.text(), "No expenses found.");
    }

    #[tokio::test]
    async fn returns_all_expenses_as_json() {
        let (server, config, _temp_dir) = get_test_server();
        let connection = db::connect(&config).unwrap();
        let first = create_expense(&sample_expense(), &connection).unwrap();
        let second = create_expense(&sample_expense(), &connection).unwrap();

        let response = server.get(endpoints::GET_EXPENSES).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let rows: Vec<Value> = response.json();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], first.id);
        assert_eq!(rows[1]["id"], second.id);
        assert_eq!(rows[0]["userId"], 1);
        assert_eq!(rows[0]["amount"], 12.5);
        assert_eq!(rows[0]["receiptUrl"], Value::Null);
        assert_eq!(rows[0]["date"], "2024-03-01");
    }
}
