//! Document store gateway.

use mongodb::bson::{Bson, Document};
use mongodb::{Client, Database};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Storage error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No store client was configured at startup.
    #[error("document store is not initialized")]
    Unavailable,
    /// The record could not be encoded as a document.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] mongodb::bson::ser::Error),
    /// The driver reported an error (unreachable store, rejected write).
    #[error("document store error: {0}")]
    Backend(#[from] mongodb::error::Error),
}

/// Handle to one logical database in the document store.
///
/// The client connects lazily, so construction succeeds even when the store
/// is unreachable; connectivity problems surface on the first operation.
#[derive(Clone)]
pub struct DocumentStore {
    database: Database,
}

impl DocumentStore {
    /// Creates a store handle from a connection string and database name.
    ///
    /// # Errors
    /// Returns error if the connection string cannot be parsed.
    pub async fn connect(url: &str, database_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await?;

        info!("Document store client initialized for database {database_name}");

        Ok(Self {
            database: client.database(database_name),
        })
    }

    /// Returns the logical database name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.database.name()
    }

    /// Inserts one validated record into the named collection and returns the
    /// store-assigned identifier as an opaque string.
    ///
    /// No idempotency: resubmitting an identical record creates a second
    /// document with a new identifier.
    ///
    /// # Errors
    /// Returns error if serialization fails or the store rejects the write.
    pub async fn insert<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<String, StoreError> {
        let document = mongodb::bson::to_document(record)?;
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;

        let id = match result.inserted_id {
            Bson::ObjectId(object_id) => object_id.to_hex(),
            other => other.to_string(),
        };

        Ok(id)
    }

    /// Lists the collection names visible in the database.
    ///
    /// # Errors
    /// Returns error if the store is unreachable.
    pub async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.database.list_collection_names().await?)
    }
}
