//! Cloud Firestore backend over the REST API.
//!
//! DESIGN
//! ======
//! Every operation is one HTTP request against
//! `{base}/projects/{project}/databases/(default)/documents`. Reads use
//! `:runQuery` with `orderBy createdAt DESCENDING`; updates use `PATCH` with
//! an update mask so only the supplied fields change, plus
//! `currentDocument.exists=true` so a missing document is reported instead of
//! created.
//!
//! The REST API has no push channel, so changes are announced after each
//! local write and on a fixed refresh tick that makes readers re-query and
//! pick up edits made from elsewhere.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::firestore_value::{decode_fields, encode_fields};
use super::{CHANGE_CHANNEL_CAPACITY, CREATED_AT_FIELD, Collection, Document, DocumentStore, StoreError};
use crate::config::{FirestoreConfig, HttpTimeouts};

pub struct FirestoreStore {
    http: reqwest::Client,
    documents_url: String,
    api_key: Option<String>,
    refresh: Duration,
    changes: broadcast::Sender<Collection>,
}

impl FirestoreStore {
    /// Build a client for one Firestore project.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: FirestoreConfig, timeouts: HttpTimeouts) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| StoreError::Request(e.to_string()))?;
        let documents_url = format!(
            "{}/projects/{}/databases/(default)/documents",
            config.base_url.trim_end_matches('/'),
            config.project_id
        );
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Ok(Self {
            http,
            documents_url,
            api_key: config.api_key,
            refresh: Duration::from_secs(config.refresh_secs.max(1)),
            changes,
        })
    }

    fn document_url(&self, collection: Collection, id: &str) -> String {
        format!("{}/{}/{}", self.documents_url, collection.as_str(), id)
    }

    fn with_key(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(StatusCode, String), StoreError> {
        let response = self
            .with_key(request)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        Ok((status, text))
    }

    fn announce(&self, collection: Collection) {
        let _ = self.changes.send(collection);
    }
}

/// Announce every collection on a fixed tick so readers re-query.
pub fn spawn_refresh_task(store: Arc<FirestoreStore>) -> JoinHandle<()> {
    let period = store.refresh;
    info!(refresh_secs = period.as_secs(), "firestore refresh tick configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; readers already do an initial load.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            for collection in Collection::ALL {
                store.announce(collection);
            }
        }
    })
}

#[async_trait::async_trait]
impl DocumentStore for FirestoreStore {
    async fn query(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let body = json!({
            "structuredQuery": {
                "from": [{ "collectionId": collection.as_str() }],
                "orderBy": [{ "field": { "fieldPath": CREATED_AT_FIELD }, "direction": "DESCENDING" }]
            }
        });
        let url = format!("{}:runQuery", self.documents_url);
        let (status, text) = self.send(self.http.post(url).json(&body)).await?;
        if !status.is_success() {
            return Err(response_error(status, &text));
        }
        let rows: Vec<RunQueryRow> = serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))?;
        let docs = rows
            .into_iter()
            .filter_map(|row| row.document)
            .filter_map(|doc| {
                let name = doc.name.clone();
                doc.into_document()
                    .inspect_err(|e| warn!(%collection, %name, error = %e, "skipping undecodable document"))
                    .ok()
            })
            .collect::<Vec<_>>();
        debug!(%collection, count = docs.len(), "firestore query");
        Ok(docs)
    }

    async fn create(&self, collection: Collection, fields: Map<String, Value>) -> Result<String, StoreError> {
        let url = format!("{}/{}", self.documents_url, collection.as_str());
        let body = json!({ "fields": encode_fields(&fields) });
        let (status, text) = self.send(self.http.post(url).json(&body)).await?;
        if !status.is_success() {
            return Err(response_error(status, &text));
        }
        let created: FirestoreDocument = serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))?;
        let id = created.id()?;
        self.announce(collection);
        Ok(id)
    }

    async fn update(&self, collection: Collection, id: &str, fields: Map<String, Value>) -> Result<(), StoreError> {
        let mut params: Vec<(&str, &str)> = fields
            .keys()
            .map(|name| ("updateMask.fieldPaths", name.as_str()))
            .collect();
        params.push(("currentDocument.exists", "true"));
        let body = json!({ "fields": encode_fields(&fields) });
        let request = self
            .http
            .patch(self.document_url(collection, id))
            .query(&params)
            .json(&body);
        let (status, text) = self.send(request).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound { collection, id: id.to_owned() });
        }
        if !status.is_success() {
            return Err(response_error(status, &text));
        }
        self.announce(collection);
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StoreError> {
        let (status, text) = self.send(self.http.delete(self.document_url(collection, id))).await?;
        if !status.is_success() {
            return Err(response_error(status, &text));
        }
        self.announce(collection);
        Ok(())
    }

    fn changes(&self) -> broadcast::Receiver<Collection> {
        self.changes.subscribe()
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct RunQueryRow {
    document: Option<FirestoreDocument>,
}

#[derive(Deserialize)]
struct FirestoreDocument {
    /// Full resource name ending in `/{collection}/{id}`.
    name: String,
    fields: Option<Value>,
}

impl FirestoreDocument {
    fn id(&self) -> Result<String, StoreError> {
        self.name
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| StoreError::Decode(format!("bad document name: {}", self.name)))
    }

    fn into_document(self) -> Result<Document, StoreError> {
        let id = self.id()?;
        let fields = decode_fields(self.fields.as_ref())?;
        Ok(Document { id, fields })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

fn response_error(status: StatusCode, body: &str) -> StoreError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_owned());
    StoreError::Response { status: status.as_u16(), message }
}

#[cfg(test)]
#[path = "firestore_test.rs"]
mod tests;
