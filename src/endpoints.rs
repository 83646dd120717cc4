//! Defines the URIs for the API routes.
//!
//! The route names mirror the function names of the original cloud app so
//! that existing clients keep working unchanged.

/// Lists all expenses.
pub const GET_EXPENSES: &str = "/api/get_expenses";
/// Creates a single expense.
pub const ADD_EXPENSE: &str = "/api/add_expense";
/// Updates a batch of expenses.
pub const UPDATE_EXPENSES: &str = "/api/update_expenses";
/// Deletes a single expense.
pub const DELETE_EXPENSE: &str = "/api/delete_expense";
/// Deletes a batch of expenses.
pub const DELETE_EXPENSES: &str = "/api/delete_expenses";
/// Lists all categories.
pub const GET_CATEGORIES: &str = "/api/get_categories";
/// Attaches a receipt URL to an expense.
pub const ADD_RECEIPT: &str = "/api/add_receipt";
/// Uploads a receipt image to blob storage.
pub const UPLOAD_RECEIPT: &str = "/api/upload_receipt_to_blob";
