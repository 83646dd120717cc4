//! Defines the category model and the route handler that reads it.

mod core;
mod list_endpoint;

pub use core::create_category_table;
pub use list_endpoint::get_categories_endpoint;
