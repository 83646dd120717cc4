//! Defines the endpoint for deleting expenses.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{Error, body::parse_json_body, expense::core::ExpenseId, state::DatabaseState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteExpenseForm {
    expense_id: Option<ExpenseId>,
}

/// The delete routes accept either one `{expenseId}` object or an array of
/// them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeleteExpensesBody {
    Batch(Vec<DeleteExpenseForm>),
    Single(DeleteExpenseForm),
}

/// A route handler for deleting one or more expenses by id.
///
/// Every item is checked for an `expenseId` before any row is deleted and
/// the deletes run in a single transaction. Ids that match no row are
/// silently skipped.
pub async fn delete_expenses_endpoint(
    State(state): State<DatabaseState>,
    body: Bytes,
) -> Result<Response, Error> {
    let body: DeleteExpensesBody = parse_json_body(&body)?;

    let (forms, message) = match body {
        DeleteExpensesBody::Single(form) => (vec![form], "Expense deleted successfully."),
        DeleteExpensesBody::Batch(forms) => (forms, "Expenses deleted successfully."),
    };

    let ids = forms
        .into_iter()
        .map(|form| form.expense_id.ok_or(Error::MissingRequiredFields))
        .collect::<Result<Vec<_>, _>>()?;

    let mut connection = state.connect()?;
    delete_expenses(&ids, &mut connection)?;

    Ok((StatusCode::OK, message).into_response())
}

fn delete_expenses(ids: &[ExpenseId], connection: &mut Connection) -> Result<(), Error> {
    let transaction = connection.transaction()?;

    for id in ids {
        transaction.execute("DELETE FROM Expenses WHERE id = ?1", rusqlite::params![id])?;
    }

    transaction.commit()?;

    Ok(())
}
