//! Defines receipt handling, both the blob upload and attaching the
//! uploaded URL to an expense.

mod attach_endpoint;
mod blob;
mod upload_endpoint;

pub use attach_endpoint::add_receipt_endpoint;
pub use blob::{BlobClient, BlobStore, MemoryBlobStore};
pub use upload_endpoint::upload_receipt_endpoint;
