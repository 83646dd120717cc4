//! The server binary for the Expensinator API.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use expensinator_api::{
    AppState, BlobClient, BlobConfig, DbConfig, build_router, graceful_shutdown, initialize_db,
};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The port to serve the API on.
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logging();

    let db_config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("could not load database settings: {error}");
            std::process::exit(1);
        }
    };

    // Fail fast if the database cannot be opened, rather than on the first
    // request.
    let mut connection =
        Connection::open(&db_config.database).expect("could not open the database");
    initialize_db(&mut connection).expect("could not create the database tables");
    drop(connection);

    let blob_store = match BlobConfig::from_env() {
        Some(blob_config) => Some(BlobClient::new(blob_config).await),
        None => {
            tracing::warn!(
                "Blob storage settings are not set, receipt uploads will be unavailable."
            );
            None
        }
    };

    let state = AppState::new(db_config, blob_store);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), args.port);
    tracing::info!("HTTP server listening on {addr}");
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .unwrap();
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // 5xx responses carry deliberately vague client messages, the
        // detailed server-side logging happens where the error is raised.
        .on_failure(());

    router.layer(tracing_layer)
}
