//! Defines the endpoint for attaching a receipt URL to an expense.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{Error, body::parse_json_body, expense::ExpenseId, state::DatabaseState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttachReceiptForm {
    expense_id: Option<ExpenseId>,
    receipt_url: Option<String>,
}

/// A route handler for stamping an expense with the URL of its receipt.
///
/// An id that matches no expense is not reported as an error. Clients
/// upload the blob first and attach its URL second, so by the time this
/// runs the expense is expected to exist.
pub async fn add_receipt_endpoint(
    State(state): State<DatabaseState>,
    body: Bytes,
) -> Result<Response, Error> {
    let form: AttachReceiptForm = parse_json_body(&body)?;

    let (expense_id, receipt_url) = match (form.expense_id, form.receipt_url) {
        (Some(expense_id), Some(receipt_url)) => (expense_id, receipt_url),
        _ => return Err(Error::MissingRequiredFields),
    };

    let connection = state.connect()?;
    set_receipt_url(expense_id, &receipt_url, &connection)?;

    Ok((StatusCode::CREATED, "Receipt added successfully.").into_response())
}

type RowsAffected = usize;

fn set_receipt_url(
    id: ExpenseId,
    receipt_url: &str,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE Expenses SET receiptUrl = ?1 WHERE id = ?2",
            (receipt_url, id),
        )
        .map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use tempfile::TempDir;

    use crate::{
        AppState, DbConfig, build_router, db, endpoints,
        expense::{create_expense, get_expense, sample_expense},
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
    async fn stamps_expense_with_receipt_url() {
        let (server, config, _temp_dir) = get_test_server();
        let connection = db::connect(&config).unwrap();
        let expense = create_expense(&sample_expense(), &connection).unwrap();

        let response = server
            .post(endpoints::ADD_RECEIPT)
            .json(&json!({
                "expenseId": expense.id,
                "receiptUrl": "https://expensinator.blob.core.windows.net/receipts/receipt-1.png"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        assert_eq!(response.text(), "Receipt added successfully.");

        let expense = get_expense(expense.id, &connection).unwrap();
        assert_eq!(
            expense.receipt_url.as_deref(),
            Some("https://expensinator.blob.core.windows.net/receipts/receipt-1.png")
        );
    }

    #[tokio::test]
    async fn missing_field_returns_bad_request() {
        let (server, _, _temp_dir) = get_test_server();

        let response = server
            .post(endpoints::ADD_RECEIPT)
            .json(&json!({ "expenseId": 1 }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.text(), "Request body is missing required fields.");
    }

    #[tokio::test]
    async fn unknown_expense_still_reports_success() {
        let (server, _, _temp_dir) = get_test_server();

        let response = server
            .post(endpoints::ADD_RECEIPT)
            .json(&json!({
                "expenseId": 999,
                "receiptUrl": "https://example.com/receipt.png"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
    }
}
