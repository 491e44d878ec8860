//! Document store abstraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! Persistence is delegated to a managed document database. This module
//! defines the capability set the rest of the server relies on (query,
//! create, update, delete, change notification) and the backends that
//! provide it: Firestore over REST, Postgres JSONB, and an in-process map.
//!
//! DESIGN
//! ======
//! Documents are schemaless JSON objects keyed by an opaque string id.
//! `query` always returns newest first by the `createdAt` field. Change
//! notification is a broadcast of the collection that was touched; readers
//! re-query on each announcement instead of applying deltas.

pub mod firestore;
pub mod firestore_value;
pub mod memory;
pub mod postgres;

use std::fmt;

use serde_json::{Map, Value};
use tokio::sync::broadcast;

/// Capacity of every backend's change broadcast. Lagging receivers reload.
pub const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Field every document is ordered by, newest first.
pub const CREATED_AT_FIELD: &str = "createdAt";
/// Field stamped on every update.
pub const UPDATED_AT_FIELD: &str = "updatedAt";

// =============================================================================
// COLLECTION
// =============================================================================

/// The two collections the site reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Blogs,
}

impl Collection {
    pub const ALL: [Self; 2] = [Self::Projects, Self::Blogs];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Blogs => "blogs",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "projects" => Some(Self::Projects),
            "blogs" => Some(Self::Blogs),
            _ => None,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// A stored document: identifier plus its top-level fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    /// Flatten into a single JSON object with the id under `"id"`.
    #[must_use]
    pub fn into_value(self) -> Value {
        let mut fields = self.fields;
        fields.insert("id".to_owned(), Value::String(self.id));
        Value::Object(fields)
    }
}

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by document store operations. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("store request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("store rejected request ({status}): {message}")]
    Response { status: u16, message: String },

    /// The store's response or a stored document could not be decoded.
    #[error("store response decode failed: {0}")]
    Decode(String),

    /// Outgoing fields could not be turned into a document.
    #[error("document encode failed: {0}")]
    Encode(String),

    /// The addressed document does not exist.
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: Collection, id: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// TRAIT
// =============================================================================

/// Capability set of a managed document store.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of a collection, ordered by `createdAt` descending.
    async fn query(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    /// Create a document with a store-assigned id and return that id.
    async fn create(&self, collection: Collection, fields: Map<String, Value>) -> Result<String, StoreError>;

    /// Merge the given top-level fields into an existing document.
    async fn update(&self, collection: Collection, id: &str, fields: Map<String, Value>) -> Result<(), StoreError>;

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError>;

    /// Subscribe to change announcements. Each message names a collection
    /// whose contents may have changed.
    fn changes(&self) -> broadcast::Receiver<Collection>;
}

/// Order documents newest first by their `createdAt` field.
///
/// Timestamps are RFC 3339 strings; unparseable or missing stamps sort last.
pub(crate) fn sort_newest_first(docs: &mut [Document]) {
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    let stamp = |doc: &Document| {
        doc.fields
            .get(CREATED_AT_FIELD)
            .and_then(Value::as_str)
            .and_then(|raw| OffsetDateTime::parse(raw, &Rfc3339).ok())
    };
    docs.sort_by(|a, b| stamp(b).cmp(&stamp(a)));
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
