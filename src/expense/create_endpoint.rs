//! Defines the endpoint for creating an expense.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    body::parse_json_body,
    expense::core::{ExpenseForm, create_expense},
    state::DatabaseState,
};

/// A route handler for creating a single expense from a JSON body.
///
/// All fields except `receiptUrl` are required, but any present value is
/// accepted as-is, including zero amounts and empty strings.
pub async fn add_expense_endpoint(
    State(state): State<DatabaseState>,
    body: Bytes,
) -> Result<Response, Error> {
    let form: ExpenseForm = parse_json_body(&body)?;
    let expense = form.validate()?;

    let connection = state.connect()?;
    create_expense(&expense, &connection)?;

    Ok((StatusCode::CREATED, "Expense added successfully.").into_response())
}
