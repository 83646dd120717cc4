//! Defines the expense model and the route handlers that read and write it.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod update_endpoint;

pub use core::{ExpenseId, create_expense_table};
#[cfg(test)]
pub use core::{create_expense, get_expense, sample_expense};
pub use create_endpoint::add_expense_endpoint;
pub use delete_endpoint::delete_expenses_endpoint;
pub use list_endpoint::get_expenses_endpoint;
pub use update_endpoint::update_expenses_endpoint;
