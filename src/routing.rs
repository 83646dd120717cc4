//! Defines the routes of the application and what middleware to apply.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::{
    AppState,
    category::get_categories_endpoint,
    endpoints,
    expense::{
        add_expense_endpoint, delete_expenses_endpoint, get_expenses_endpoint,
        update_expenses_endpoint,
    },
    receipt::{BlobStore, add_receipt_endpoint, upload_receipt_endpoint},
};

/// Creates the router for the application.
///
/// The single-delete and batch-delete routes share a handler since the
/// batch body shape accepts a single object as well.
pub fn build_router<B: BlobStore>(state: AppState<B>) -> Router {
    Router::new()
        .route(endpoints::GET_EXPENSES, get(get_expenses_endpoint))
        .route(endpoints::ADD_EXPENSE, post(add_expense_endpoint))
        .route(endpoints::UPDATE_EXPENSES, put(update_expenses_endpoint))
        .route(endpoints::DELETE_EXPENSE, delete(delete_expenses_endpoint))
        .route(endpoints::DELETE_EXPENSES, delete(delete_expenses_endpoint))
        .route(endpoints::GET_CATEGORIES, get(get_categories_endpoint))
        .route(endpoints::ADD_RECEIPT, post(add_receipt_endpoint))
        .route(
            endpoints::UPLOAD_RECEIPT,
            post(upload_receipt_endpoint::<B>),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{AppState, DbConfig, endpoints, receipt::MemoryBlobStore};

    use super::build_router;

    #[tokio::test]
    async fn unknown_route_returns_not_found() {
        let state = AppState::new(
            DbConfig {
                host: "localhost".to_owned(),
                user: "tester".to_owned(),
                password: "hunter2".to_owned(),
                database: ":memory:".to_owned(),
            },
            None::<MemoryBlobStore>,
        );
        let server = TestServer::new(build_router(state));

        let response = server.get("/api/no_such_function").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_is_rejected() {
        let state = AppState::new(
            DbConfig {
                host: "localhost".to_owned(),
                user: "tester".to_owned(),
                password: "hunter2".to_owned(),
                database: ":memory:".to_owned(),
            },
            None::<MemoryBlobStore>,
        );
        let server = TestServer::new(build_router(state));

        let response = server.post(endpoints::GET_EXPENSES).await;

        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
