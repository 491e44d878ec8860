//! Typed repositories over the document store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and API handlers never talk to the store directly. Each collection
//! has one `Repository<T>` that keeps a locally held snapshot in sync with the
//! store and writes through on add, update and delete.
//!
//! DESIGN
//! ======
//! The snapshot lives in a `watch` channel so handlers read it without
//! locking and the SSE endpoint can stream every new value. `spawn_sync`
//! loads once, then reloads whenever the store announces a change on the
//! repository's collection. Writes do not touch `items`; readers converge
//! only through the change feed. Failures land in the snapshot's `error`
//! slot and are returned to the caller.

use std::sync::Arc;

use client::model::{BlogDraft, BlogPatch, BlogPost, Project, ProjectDraft, ProjectPatch};
use client::state::snapshot::Snapshot;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::store::{CREATED_AT_FIELD, Collection, Document, DocumentStore, StoreError, UPDATED_AT_FIELD};

// =============================================================================
// RECORD
// =============================================================================

/// A typed record stored in one collection.
pub trait Record: Clone + DeserializeOwned + Serialize + Send + Sync + 'static {
    const COLLECTION: Collection;
    /// Also stamp `updatedAt` when a draft is first written.
    const STAMPS_UPDATED_ON_CREATE: bool = false;

    type Draft: Serialize + Send + Sync;
    type Patch: Serialize + Send + Sync;

    /// Map a stored document into the record type.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or has the wrong type.
    fn from_document(doc: Document) -> Result<Self, StoreError> {
        serde_json::from_value(doc.into_value()).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

impl Record for Project {
    const COLLECTION: Collection = Collection::Projects;
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;
}

impl Record for BlogPost {
    const COLLECTION: Collection = Collection::Blogs;
    const STAMPS_UPDATED_ON_CREATE: bool = true;
    type Draft = BlogDraft;
    type Patch = BlogPatch;
}

// =============================================================================
// REPOSITORY
// =============================================================================

pub struct Repository<T: Record> {
    store: Arc<dyn DocumentStore>,
    snapshot: Arc<watch::Sender<Snapshot<T>>>,
}

impl<T: Record> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone(), snapshot: self.snapshot.clone() }
    }
}

impl<T: Record> Repository<T> {
    /// A repository in the loading state. Nothing is read until
    /// [`Repository::spawn_sync`] or [`Repository::reload`] runs.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let (snapshot, _) = watch::channel(Snapshot::loading());
        Self { store, snapshot: Arc::new(snapshot) }
    }

    #[must_use]
    pub fn collection(&self) -> Collection {
        T::COLLECTION
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<T> {
        self.snapshot.borrow().clone()
    }

    /// Receiver that observes every snapshot published after this call.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.snapshot.subscribe()
    }

    /// Load the collection now, then reload on every change announced for it.
    pub fn spawn_sync(&self) -> JoinHandle<()> {
        let repo = self.clone();
        // Subscribe before the first load so no announcement falls in between.
        let mut changes = self.store.changes();
        tokio::spawn(async move {
            info!(collection = %T::COLLECTION, "repository sync started");
            let _ = repo.reload().await;
            loop {
                match changes.recv().await {
                    Ok(collection) if collection == T::COLLECTION => {
                        let _ = repo.reload().await;
                    }
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        debug!(collection = %T::COLLECTION, skipped, "change feed lagged; reloading");
                        let _ = repo.reload().await;
                    }
                    Err(RecvError::Closed) => {
                        info!(collection = %T::COLLECTION, "change feed closed; repository sync stopped");
                        break;
                    }
                }
            }
        })
    }

    /// Query the store and publish the result as the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns the store error; the previous items are kept.
    pub async fn reload(&self) -> Result<(), StoreError> {
        match self.store.query(T::COLLECTION).await {
            Ok(docs) => {
                let items = map_documents::<T>(docs);
                debug!(collection = %T::COLLECTION, count = items.len(), "snapshot loaded");
                self.snapshot.send_replace(Snapshot::loaded(items));
                Ok(())
            }
            Err(e) => {
                error!(collection = %T::COLLECTION, error = %e, "snapshot load failed");
                self.snapshot.send_modify(|snapshot| {
                    snapshot.loading = false;
                    snapshot.error = Some(e.to_string());
                });
                Err(e)
            }
        }
    }

    /// Write a new record, stamping `createdAt`, and return its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft cannot be encoded or the store rejects it.
    pub async fn add(&self, draft: T::Draft) -> Result<String, StoreError> {
        let result = self.try_add(&draft).await;
        self.record(result)
    }

    /// Merge the patch's present fields into a record, stamping `updatedAt`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id, or the store's error.
    pub async fn update(&self, id: &str, patch: T::Patch) -> Result<(), StoreError> {
        let result = self.try_update(id, &patch).await;
        self.record(result)
    }

    /// # Errors
    ///
    /// Returns the store's error.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let result = self.store.delete(T::COLLECTION, id).await;
        self.record(result)
    }

    async fn try_add(&self, draft: &T::Draft) -> Result<String, StoreError> {
        let now = timestamp(OffsetDateTime::now_utc())?;
        let mut fields = to_fields(draft)?;
        fields.insert(CREATED_AT_FIELD.to_owned(), now.clone());
        if T::STAMPS_UPDATED_ON_CREATE {
            fields.insert(UPDATED_AT_FIELD.to_owned(), now);
        }
        let id = self.store.create(T::COLLECTION, fields).await?;
        info!(collection = %T::COLLECTION, %id, "document created");
        Ok(id)
    }

    async fn try_update(&self, id: &str, patch: &T::Patch) -> Result<(), StoreError> {
        let mut fields = to_fields(patch)?;
        fields.insert(UPDATED_AT_FIELD.to_owned(), timestamp(OffsetDateTime::now_utc())?);
        self.store.update(T::COLLECTION, id, fields).await
    }

    fn record<R>(&self, result: Result<R, StoreError>) -> Result<R, StoreError> {
        if let Err(e) = &result {
            self.snapshot.send_modify(|snapshot| snapshot.error = Some(e.to_string()));
        }
        result
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Unmappable documents are skipped so one bad row cannot hide the rest.
fn map_documents<T: Record>(docs: Vec<Document>) -> Vec<T> {
    docs.into_iter()
        .filter_map(|doc| {
            let id = doc.id.clone();
            match T::from_document(doc) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(collection = %T::COLLECTION, %id, error = %e, "skipping unmappable document");
                    None
                }
            }
        })
        .collect()
}

fn to_fields<S: Serialize>(value: &S) -> Result<Map<String, Value>, StoreError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(StoreError::Encode(format!("expected object, got {other}"))),
        Err(e) => Err(StoreError::Encode(e.to_string())),
    }
}

fn timestamp(at: OffsetDateTime) -> Result<Value, StoreError> {
    at.format(&Rfc3339)
        .map(Value::String)
        .map_err(|e| StoreError::Encode(e.to_string()))
}

#[cfg(test)]
#[path = "repo_test.rs"]
mod tests;
