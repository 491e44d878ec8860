//! In-process document store for local development and tests.
//!
//! Holds every collection in a `RwLock`ed map and announces each write on
//! the change broadcast, matching what a managed store's listener would do.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tokio::sync::{RwLock, broadcast};
use uuid::Uuid;

use super::{CHANGE_CHANNEL_CAPACITY, Collection, Document, DocumentStore, StoreError, sort_newest_first};

pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
    changes: broadcast::Sender<Collection>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self { collections: RwLock::new(HashMap::new()), changes }
    }

    /// Insert a document with a known id, bypassing change notification.
    #[cfg(test)]
    pub async fn seed(&self, collection: Collection, doc: Document) {
        let mut collections = self.collections.write().await;
        collections.entry(collection).or_default().push(doc);
    }

    /// Number of documents currently stored in a collection.
    #[cfg(test)]
    pub async fn len(&self, collection: Collection) -> usize {
        let collections = self.collections.read().await;
        collections.get(&collection).map_or(0, Vec::len)
    }

    fn announce(&self, collection: Collection) {
        // No subscribers is fine; nothing is waiting for the change.
        let _ = self.changes.send(collection);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn query(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let mut docs = collections.get(&collection).cloned().unwrap_or_default();
        sort_newest_first(&mut docs);
        Ok(docs)
    }

    async fn create(&self, collection: Collection, fields: Map<String, Value>) -> Result<String, StoreError> {
        let id = Uuid::new_v4().simple().to_string();
        {
            let mut collections = self.collections.write().await;
            collections
                .entry(collection)
                .or_default()
                .push(Document { id: id.clone(), fields });
        }
        self.announce(collection);
        Ok(id)
    }

    async fn update(&self, collection: Collection, id: &str, fields: Map<String, Value>) -> Result<(), StoreError> {
        {
            let mut collections = self.collections.write().await;
            let doc = collections
                .get_mut(&collection)
                .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
                .ok_or_else(|| StoreError::NotFound { collection, id: id.to_owned() })?;
            doc.fields.extend(fields);
        }
        self.announce(collection);
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        {
            let mut collections = self.collections.write().await;
            if let Some(docs) = collections.get_mut(&collection) {
                docs.retain(|d| d.id != id);
            }
        }
        self.announce(collection);
        Ok(())
    }

    fn changes(&self) -> broadcast::Receiver<Collection> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
