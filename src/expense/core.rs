use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::Error;

pub type ExpenseId = i64;
pub type UserId = i64;

/// An expense row as returned to the client.
///
/// Dates are stored and served as strings, `date` as `yyyy-MM-dd` and
/// `createdAt` as a date-time. The API passes them through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The id for the expense.
    pub id: ExpenseId,
    /// The id of the user the expense belongs to.
    pub user_id: UserId,
    /// The amount of money spent.
    pub amount: f64,
    /// The id of the category the expense is filed under.
    pub category_id: i64,
    /// A free-form description of the expense.
    pub description: String,
    /// The URL of the uploaded receipt image, if one was attached.
    pub receipt_url: Option<String>,
    /// The date the expense was incurred.
    pub date: String,
    /// When the expense record was created.
    pub created_at: String,
}

/// The fields of an expense as they arrive in a request body.
///
/// Every field is optional at the parsing stage so that an absent field and
/// an explicit null can be reported as missing fields rather than as a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseForm {
    pub user_id: Option<UserId>,
    pub amount: Option<f64>,
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub receipt_url: Option<String>,
    pub date: Option<String>,
    pub created_at: Option<String>,
}

/// A validated expense ready to be written to the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub user_id: UserId,
    pub amount: f64,
    pub category_id: i64,
    pub description: String,
    pub receipt_url: Option<String>,
    pub date: String,
    pub created_at: String,
}

impl ExpenseForm {
    /// Checks that every required field is present and non-null.
    ///
    /// Only presence is checked. Zero amounts and empty strings are valid
    /// values. `receiptUrl` is the one optional field.
    ///
    /// # Errors
    /// Returns [`Error::MissingRequiredFields`] if a required field is
    /// absent.
    pub fn validate(self) -> Result<NewExpense, Error> {
        match (
            self.user_id,
            self.amount,
            self.category_id,
            self.description,
            self.date,
            self.created_at,
        ) {
            (
                Some(user_id),
                Some(amount),
                Some(category_id),
                Some(description),
                Some(date),
                Some(created_at),
            ) => Ok(NewExpense {
                user_id,
                amount,
                category_id,
                description,
                receipt_url: self.receipt_url,
                date,
                created_at,
            }),
            _ => Err(Error::MissingRequiredFields),
        }
    }
}

pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS Expenses (
            id INTEGER PRIMARY KEY,
            userId INTEGER NOT NULL,
            amount REAL NOT NULL,
            categoryId INTEGER NOT NULL,
            description TEXT NOT NULL,
            receiptUrl TEXT,
            date TEXT NOT NULL,
            createdAt TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

pub fn map_row_to_expense(row: &rusqlite::Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let user_id = row.get(1)?;
    let amount = row.get(2)?;
    let category_id = row.get(3)?;
    let description = row.get(4)?;
    let receipt_url = row.get(5)?;
    let date = row.get(6)?;
    let created_at = row.get(7)?;

    Ok(Expense {
        id,
        user_id,
        amount,
        category_id,
        description,
        receipt_url,
        date,
        created_at,
    })
}

/// Inserts `expense` and returns the stored row.
///
/// # Errors
/// Returns [`Error::SqlError`] if the insert fails.
pub fn create_expense(expense: &NewExpense, connection: &Connection) -> Result<Expense, Error> {
    connection.execute(
        "INSERT INTO Expenses (userId, amount, categoryId, description, receiptUrl, date, createdAt)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        (
            expense.user_id,
            expense.amount,
            expense.category_id,
            &expense.description,
            &expense.receipt_url,
            &expense.date,
            &expense.created_at,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Expense {
        id,
        user_id: expense.user_id,
        amount: expense.amount,
        category_id: expense.category_id,
        description: expense.description.clone(),
        receipt_url: expense.receipt_url.clone(),
        date: expense.date.clone(),
        created_at: expense.created_at.clone(),
    })
}

#[cfg(test)]
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    connection
        .query_one(
            "SELECT id, userId, amount, categoryId, description, receiptUrl, date, createdAt
             FROM Expenses WHERE id = ?1",
            rusqlite::params![id],
            map_row_to_expense,
        )
        .map_err(Error::from)
}

#[cfg(test)]
pub fn sample_expense() -> NewExpense {
    NewExpense {
        user_id: 1,
        amount: 12.5,
        category_id: 2,
        description: "lunch".to_owned(),
        receipt_url: None,
        date: "2024-03-01".to_owned(),
        created_at: "2024-03-01T12:00:00".to_owned(),
    }
}
