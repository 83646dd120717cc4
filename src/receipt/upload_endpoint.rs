//! Defines the endpoint for uploading a receipt image to blob storage.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, Error, receipt::blob::BlobStore};

/// The state needed to upload a receipt blob.
#[derive(Debug, Clone)]
pub struct UploadReceiptState<B> {
    blob_store: Option<B>,
}

impl<B: BlobStore> FromRef<AppState<B>> for UploadReceiptState<B> {
    fn from_ref(state: &AppState<B>) -> Self {
        Self {
            blob_store: state.blob_store.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadParams {
    filename: Option<String>,
}

/// A route handler for uploading the raw request body to blob storage.
///
/// The blob name comes from the `filename` query parameter, or is generated
/// from the current time when the parameter is absent. An existing blob of
/// the same name is overwritten.
pub async fn upload_receipt_endpoint<B: BlobStore>(
    State(state): State<UploadReceiptState<B>>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<Response, Error> {
    let blob_store = state.blob_store.ok_or(Error::BlobSettingsIncomplete)?;

    if body.is_empty() {
        return Err(Error::EmptyRequestBody);
    }

    let blob_name = params
        .filename
        .filter(|filename| !filename.is_empty())
        .unwrap_or_else(default_blob_name);

    let blob_url = blob_store.put_blob(&blob_name, body.to_vec()).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Receipt uploaded successfully.",
            "blobUrl": blob_url,
        })),
    )
        .into_response())
}

fn default_blob_name() -> String {
    format!(
        "receipt-{}.png",
        Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
    )
}
