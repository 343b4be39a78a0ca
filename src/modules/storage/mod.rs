//! Storage module for user uploads
//!
//! Provides an S3-compatible object store client and the gateway that
//! turns uploads into stable URLs and deletes them again.

mod gateway;
mod object_store;

pub use gateway::{StorageGateway, UploadFile};
pub use object_store::{ObjectStore, S3ObjectStore, StorageError};
