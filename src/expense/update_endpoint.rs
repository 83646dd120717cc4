//! Defines the endpoint for updating a batch of expenses.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    Error,
    body::parse_json_body,
    expense::core::{ExpenseForm, ExpenseId, NewExpense},
    state::DatabaseState,
};

#[derive(Debug, Deserialize)]
struct UpdateExpensesForm {
    #[serde(rename = "oldExpenseIDs")]
    old_expense_ids: Option<Vec<ExpenseId>>,
    #[serde(rename = "newExpenses")]
    new_expenses: Option<Vec<ExpenseForm>>,
}

/// A route handler for replacing a batch of expenses by id.
///
/// The body pairs `oldExpenseIDs[i]` with `newExpenses[i]`. Every item is
/// validated before any row is touched and the updates run in a single
/// transaction, so a bad item leaves the table unchanged. An id that
/// matches no row is a no-op.
pub async fn update_expenses_endpoint(
    State(state): State<DatabaseState>,
    body: Bytes,
) -> Result<Response, Error> {
    let form: UpdateExpensesForm = parse_json_body(&body)?;

    let (ids, forms) = match (form.old_expense_ids, form.new_expenses) {
        (Some(ids), Some(forms)) => (ids, forms),
        _ => return Err(Error::MissingRequiredFields),
    };

    if ids.len() != forms.len() {
        return Err(Error::ExpenseListLengthMismatch);
    }

    let expenses = forms
        .into_iter()
        .map(ExpenseForm::validate)
        .collect::<Result<Vec<_>, _>>()?;

    let mut connection = state.connect()?;
    update_expenses(&ids, &expenses, &mut connection)?;

    Ok((StatusCode::OK, "Expenses updated successfully.").into_response())
}

fn update_expenses(
    ids: &[ExpenseId],
    expenses: &[NewExpense],
    connection: &mut Connection,
) -> Result<(), Error> {
    let transaction = connection.transaction()?;

    for (id, expense) in ids.iter().zip(expenses) {
        transaction.execute(
            "UPDATE Expenses
             SET userId = ?1, amount = ?2, categoryId = ?3, description = ?4,
                 receiptUrl = ?5, date = ?6, createdAt = ?7
             WHERE id = ?8",
            (
                expense.user_id,
                expense.amount,
                expense.category_id,
                &expense.description,
                &expense.receipt_url,
                &expense.date,
                &expense.created_at,
                id,
            ),
        )?;
    }

    transaction.commit()?;

    Ok(())
}
